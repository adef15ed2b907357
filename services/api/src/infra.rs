use metrics_exporter_prometheus::PrometheusHandle;
use pkv_check::workflows::eligibility::{LeadTransport, SubmissionPayload, TransportError};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps delivered leads in memory and logs a redacted line per lead.
///
/// Names, phone numbers, email addresses and health answers never reach the log.
#[derive(Default, Clone)]
pub(crate) struct LoggingLeadTransport {
    delivered: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl LeadTransport for LoggingLeadTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        let mut guard = self
            .delivered
            .lock()
            .map_err(|_| TransportError::Unavailable("lead store poisoned".to_string()))?;
        guard.push(payload.clone());

        info!(
            lead = guard.len(),
            age = payload.demographics.age,
            occupation = payload.demographics.occupation.label(),
            income_band = payload.demographics.income_band.label(),
            priorities = payload.priorities.len(),
            health_shared = payload.carries_health_data(),
            source = %payload.source_url,
            submitted_at = %payload.timestamp_iso8601,
            "lead delivered"
        );
        Ok(())
    }
}

impl LoggingLeadTransport {
    pub(crate) fn delivered(&self) -> Vec<SubmissionPayload> {
        self.delivered
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}
