//! Five-step wizard sequencing the answer groups and gating submission on classification.

mod controller;
pub mod payload;
pub mod result;
pub mod state;
pub mod transport;

pub use controller::{EligibilityWizard, SubmissionStart, WizardError};
pub use payload::{ScoringSummary, SubmissionPayload};
pub use result::{ResultActions, ResultView};
pub use state::{ResetPolicy, WizardConfig, WizardState, WizardStep};
pub use transport::{LeadTransport, TransportError};
