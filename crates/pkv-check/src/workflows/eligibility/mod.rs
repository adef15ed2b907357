//! PKV pre-qualification: answer model, eligibility rubric, and the step-flow wizard.

pub mod answers;
pub mod evaluation;
pub mod flow;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::{
    Answers, ContactInfo, ContactInput, Demographics, DemographicsInput, HealthHistory,
    HealthInput, IncomeBand, Occupation, Priorities, PrioritiesInput, StepInput, ValidationError,
};
pub use evaluation::{
    compute_classification, compute_score, Classification, EligibilityConfig, EligibilityEngine,
    EligibilityOutcome, OverrideReason, ScoreComponent, ScoreResult, ScoreRule,
};
pub use flow::{
    EligibilityWizard, LeadTransport, ResetPolicy, ResultActions, ResultView, ScoringSummary,
    SubmissionPayload, SubmissionStart, TransportError, WizardConfig, WizardError, WizardState,
    WizardStep,
};
pub use router::eligibility_router;
pub use service::{
    CheckRequest, CheckResponse, EligibilityService, ScreeningError, ScreeningRequest,
    ScreeningResponse,
};
