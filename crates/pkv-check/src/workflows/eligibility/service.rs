use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::answers::{
    validate_demographics, validate_health, ContactInput, DemographicsInput, HealthInput,
    PrioritiesInput, StepInput, ValidationError,
};
use super::evaluation::{Classification, EligibilityEngine, ScoreComponent, ScoreResult};
use super::flow::{
    EligibilityWizard, LeadTransport, ResultView, WizardConfig, WizardError, WizardState,
    WizardStep,
};

/// Service composing the rubric, the wizard, and the outbound lead transport.
///
/// Holds no per-respondent state: every call runs against a fresh wizard.
pub struct EligibilityService<T> {
    transport: Arc<T>,
    config: WizardConfig,
    engine: EligibilityEngine,
}

/// Quick eligibility estimate from the first and third step answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub demographics: DemographicsInput,
    pub health: HealthInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub result: ScoreResult,
    pub components: Vec<ScoreComponent>,
    pub may_proceed_to_contact: bool,
    pub view: ResultView,
}

/// Complete answer bundle replayed through the wizard in step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRequest {
    pub demographics: DemographicsInput,
    pub priorities: PrioritiesInput,
    pub health: HealthInput,
    #[serde(default)]
    pub contact: Option<ContactInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResponse {
    pub state: WizardState,
    pub classification: Classification,
    pub contact_requested: bool,
    pub view: ResultView,
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("Kontaktdaten werden für die Terminbuchung benötigt (Einschätzung: {}).", .0.label())]
    MissingContact(Classification),
}

impl<T> EligibilityService<T>
where
    T: LeadTransport + 'static,
{
    pub fn new(transport: Arc<T>, config: WizardConfig) -> Self {
        Self::with_engine(transport, config, EligibilityEngine::default())
    }

    pub fn with_engine(transport: Arc<T>, config: WizardConfig, engine: EligibilityEngine) -> Self {
        Self {
            transport,
            config,
            engine,
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Validate and score without touching navigation or the transport.
    pub fn check(&self, request: CheckRequest) -> Result<CheckResponse, ScreeningError> {
        let demographics = validate_demographics(&request.demographics)?;
        let health = validate_health(&request.health)?;

        let outcome = self.engine.evaluate(&demographics, &health);
        let view = ResultView::from_result(&outcome.result, &self.config.booking_url);

        Ok(CheckResponse {
            may_proceed_to_contact: outcome.result.classification != Classification::Red,
            result: outcome.result,
            components: outcome.components,
            view,
        })
    }

    /// Run a full answer bundle through the wizard and deliver the lead when eligible.
    pub fn screen(&self, request: ScreeningRequest) -> Result<ScreeningResponse, ScreeningError> {
        let ScreeningRequest {
            demographics,
            priorities,
            health,
            contact,
        } = request;

        let mut wizard = EligibilityWizard::with_engine(self.config.clone(), self.engine.clone());
        wizard.advance(StepInput::Demographics(demographics))?;
        wizard.advance(StepInput::Priorities(priorities))?;
        let after_health = wizard.advance(StepInput::Health(health))?;

        let contact_requested = after_health == WizardStep::ContactInfo;
        if contact_requested {
            let classification = wizard.score_result().classification;
            let contact = contact.ok_or(ScreeningError::MissingContact(classification))?;
            wizard.submit(&contact, self.transport.as_ref())?;
        }

        let classification = wizard.score_result().classification;
        info!(
            classification = classification.label(),
            contact_requested, "screening completed"
        );

        Ok(ScreeningResponse {
            state: wizard.state().clone(),
            classification,
            contact_requested,
            view: wizard.result_view(),
        })
    }
}
