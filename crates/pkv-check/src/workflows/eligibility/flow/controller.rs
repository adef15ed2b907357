use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::super::answers::{
    validate_contact, validate_demographics, validate_health, validate_priorities, Answers,
    ContactInput, StepInput, ValidationError,
};
use super::super::evaluation::{
    Classification, EligibilityEngine, EligibilityOutcome, ScoreResult,
};
use super::payload::SubmissionPayload;
use super::result::ResultView;
use super::state::{ResetPolicy, WizardConfig, WizardState, WizardStep};
use super::transport::{LeadTransport, TransportError};

/// Single owner of the answers and navigation state for one respondent.
///
/// Every mutation goes through `advance`, `retreat`, the submission methods, or `reset`.
#[derive(Debug, Clone)]
pub struct EligibilityWizard {
    config: WizardConfig,
    engine: EligibilityEngine,
    answers: Answers,
    state: WizardState,
}

/// Result of starting a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStart {
    /// The payload must now be delivered and the outcome reported back.
    Dispatched(SubmissionPayload),
    /// A submission is already in flight; nothing was assembled.
    AlreadyInFlight,
}

/// Errors surfaced by wizard transitions. The display text is what the respondent sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Terminbuchung ist bei roter Einschätzung nicht möglich.")]
    SubmissionForbidden,
    #[error("Die Anfrage konnte nicht gesendet werden. Bitte versuchen Sie es später erneut.")]
    Transport(#[from] TransportError),
    #[error("action '{action}' is not available on {current}")]
    InvalidTransition {
        current: WizardStep,
        action: &'static str,
    },
}

impl EligibilityWizard {
    pub fn new(config: WizardConfig) -> Self {
        Self::with_engine(config, EligibilityEngine::default())
    }

    pub fn with_engine(config: WizardConfig, engine: EligibilityEngine) -> Self {
        Self {
            config,
            engine,
            answers: Answers::default(),
            state: WizardState::default(),
        }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn progress_percent(&self) -> u8 {
        self.state.current_step.progress_percent()
    }

    /// Recomputed from the committed answers on every call.
    pub fn score_result(&self) -> ScoreResult {
        self.evaluation().result
    }

    pub fn evaluation(&self) -> EligibilityOutcome {
        self.engine.evaluate(&self.answers.demographics, &self.answers.health)
    }

    pub fn may_proceed_to_contact(&self) -> bool {
        self.score_result().classification != Classification::Red
    }

    pub fn result_view(&self) -> ResultView {
        ResultView::from_result(&self.score_result(), &self.config.booking_url)
    }

    /// Validate the candidate for the current step, commit it, and move on.
    pub fn advance(&mut self, input: StepInput) -> Result<WizardStep, WizardError> {
        if self.state.loading {
            debug!(
                step = %self.state.current_step,
                "ignoring advance while submission is in flight"
            );
            return Ok(self.state.current_step);
        }

        let current = self.state.current_step;
        match (current, input) {
            (WizardStep::Demographics, StepInput::Demographics(candidate)) => {
                let demographics = validate_demographics(&candidate)
                    .map_err(|err| self.record(err.into()))?;
                self.answers.demographics = demographics;
            }
            (WizardStep::Priorities, StepInput::Priorities(candidate)) => {
                let priorities =
                    validate_priorities(&candidate).map_err(|err| self.record(err.into()))?;
                self.answers.priorities = priorities;
            }
            (WizardStep::HealthHistory, StepInput::Health(candidate)) => {
                let health = validate_health(&candidate).map_err(|err| self.record(err.into()))?;
                self.answers.health = health;
                self.state.last_error = None;
                return Ok(self.leave_health_step());
            }
            _ => {
                return Err(self.record(WizardError::InvalidTransition {
                    current,
                    action: "advance",
                }));
            }
        }

        self.state.last_error = None;
        let next = current.next().unwrap_or(current);
        self.state.current_step = next;
        debug!(from = %current, to = %next, "wizard advanced");
        Ok(next)
    }

    fn leave_health_step(&mut self) -> WizardStep {
        let result = self.score_result();
        if result.classification == Classification::Red {
            info!(
                score = result.score,
                overridden = result.override_reason.is_some(),
                "red classification after health step, skipping contact collection"
            );
            self.state.current_step = WizardStep::Result;
            self.state.submitted = true;
        } else {
            self.state.current_step = WizardStep::ContactInfo;
            debug!(
                classification = result.classification.label(),
                "health step committed"
            );
        }
        self.state.current_step
    }

    /// Step back once; the result step is never left this way.
    pub fn retreat(&mut self) -> WizardStep {
        if self.state.loading {
            debug!("ignoring retreat while submission is in flight");
            return self.state.current_step;
        }

        let current = self.state.current_step;
        if !current.is_terminal() {
            self.state.current_step = current.previous().unwrap_or(current);
        }
        self.state.last_error = None;
        self.state.current_step
    }

    /// Validate contact data and hand back the payload to deliver.
    ///
    /// Callers must report the delivery outcome through [`Self::complete_submission`].
    pub fn begin_submission(
        &mut self,
        contact: &ContactInput,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmissionStart, WizardError> {
        if self.state.loading {
            debug!("submission already in flight, ignoring repeated submit");
            return Ok(SubmissionStart::AlreadyInFlight);
        }

        let result = self.score_result();
        if result.classification == Classification::Red {
            warn!(step = %self.state.current_step, "submission rejected for red classification");
            return Err(self.record(WizardError::SubmissionForbidden));
        }

        let current = self.state.current_step;
        if current != WizardStep::ContactInfo {
            return Err(self.record(WizardError::InvalidTransition {
                current,
                action: "submit",
            }));
        }

        let contact = validate_contact(contact).map_err(|err| self.record(err.into()))?;
        self.answers.contact = Some(contact.clone());
        self.state.last_error = None;
        self.state.loading = true;

        let payload = SubmissionPayload::assemble(
            &self.answers,
            contact,
            &result,
            self.config.privacy_mode,
            &self.config.source_url,
            submitted_at,
        );
        info!(
            classification = result.classification.label(),
            privacy_mode = self.config.privacy_mode,
            "lead submission dispatched"
        );

        Ok(SubmissionStart::Dispatched(payload))
    }

    /// Resolve the in-flight submission with the transport's outcome.
    pub fn complete_submission(
        &mut self,
        outcome: Result<(), TransportError>,
    ) -> Result<WizardStep, WizardError> {
        if !self.state.loading {
            return Err(self.record(WizardError::InvalidTransition {
                current: self.state.current_step,
                action: "complete_submission",
            }));
        }

        self.state.loading = false;
        match outcome {
            Ok(()) => {
                self.state.submitted = true;
                self.state.current_step = WizardStep::Result;
                info!("lead submission delivered");
                Ok(WizardStep::Result)
            }
            Err(err) => {
                warn!(error = %err, "lead submission failed");
                Err(self.record(err.into()))
            }
        }
    }

    /// Convenience wrapper running both submission phases against a transport.
    pub fn submit<T>(
        &mut self,
        contact: &ContactInput,
        transport: &T,
    ) -> Result<WizardStep, WizardError>
    where
        T: LeadTransport + ?Sized,
    {
        match self.begin_submission(contact, Utc::now())? {
            SubmissionStart::Dispatched(payload) => {
                let outcome = transport.send(&payload);
                self.complete_submission(outcome)
            }
            SubmissionStart::AlreadyInFlight => Ok(self.state.current_step),
        }
    }

    /// Return to the first step. Answers survive unless the policy clears them.
    pub fn reset(&mut self) -> WizardStep {
        if self.state.loading {
            debug!("ignoring reset while submission is in flight");
            return self.state.current_step;
        }

        self.state.current_step = WizardStep::Demographics;
        self.state.submitted = false;
        self.state.last_error = None;
        if self.config.reset_policy == ResetPolicy::ClearAnswers {
            self.answers = Answers::default();
        }
        self.state.current_step
    }

    fn record(&mut self, error: WizardError) -> WizardError {
        self.state.last_error = Some(error.to_string());
        error
    }
}

impl Default for EligibilityWizard {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}
