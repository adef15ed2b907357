use super::payload::SubmissionPayload;

/// Outbound hook receiving the assembled lead (e.g., an HTTP POST adapter).
pub trait LeadTransport: Send + Sync {
    fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError>;
}

/// Lead dispatch error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("lead transport unavailable: {0}")]
    Unavailable(String),
    #[error("lead rejected by receiver: {0}")]
    Rejected(String),
}
