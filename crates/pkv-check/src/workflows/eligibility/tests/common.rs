use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::eligibility::answers::{
    ContactInput, Demographics, DemographicsInput, HealthHistory, HealthInput, IncomeBand,
    Occupation, PrioritiesInput, StepInput,
};
use crate::workflows::eligibility::flow::{
    EligibilityWizard, LeadTransport, SubmissionPayload, TransportError, WizardConfig,
};
use crate::workflows::eligibility::service::{EligibilityService, ScreeningRequest};

pub(super) fn demographics(
    age: u8,
    occupation: Occupation,
    income_band: IncomeBand,
) -> Demographics {
    Demographics {
        age,
        occupation,
        income_band,
    }
}

pub(super) fn healthy() -> HealthHistory {
    HealthHistory::default()
}

pub(super) fn demographics_input(
    age: i64,
    occupation: Occupation,
    income_band: IncomeBand,
) -> DemographicsInput {
    DemographicsInput {
        age,
        occupation: occupation.label().to_string(),
        income_band: income_band.label().to_string(),
    }
}

pub(super) fn priorities_input() -> PrioritiesInput {
    PrioritiesInput {
        priorities: vec![
            "Beitragsstabilität".to_string(),
            "Einbettzimmer".to_string(),
        ],
    }
}

pub(super) fn health_input(
    chronic: bool,
    hospital: bool,
    medication: bool,
    findings: bool,
) -> HealthInput {
    HealthInput {
        chronic_condition: Some(chronic),
        hospitalization_last_5_years: Some(hospital),
        ongoing_medication: Some(medication),
        open_findings: Some(findings),
        notes: None,
    }
}

pub(super) fn healthy_input() -> HealthInput {
    health_input(false, false, false, false)
}

pub(super) fn contact_input() -> ContactInput {
    ContactInput {
        first_name: "Lena".to_string(),
        last_name: "Hoffmann".to_string(),
        phone: "+49 30 1234567".to_string(),
        email: "lena.hoffmann@example.de".to_string(),
        consent: true,
    }
}

pub(super) fn privacy_off() -> WizardConfig {
    WizardConfig {
        privacy_mode: false,
        ..WizardConfig::default()
    }
}

/// Wizard parked on the contact step with a green profile.
pub(super) fn wizard_at_contact(config: WizardConfig) -> EligibilityWizard {
    let mut wizard = EligibilityWizard::new(config);
    wizard
        .advance(StepInput::Demographics(demographics_input(
            34,
            Occupation::SelfEmployed,
            IncomeBand::From5000To5999,
        )))
        .expect("demographics accepted");
    wizard
        .advance(StepInput::Priorities(priorities_input()))
        .expect("priorities accepted");
    wizard
        .advance(StepInput::Health(healthy_input()))
        .expect("health accepted");
    wizard
}

pub(super) fn green_screening() -> ScreeningRequest {
    ScreeningRequest {
        demographics: demographics_input(38, Occupation::CivilServant, IncomeBand::Under3000),
        priorities: priorities_input(),
        health: healthy_input(),
        contact: Some(contact_input()),
    }
}

pub(super) fn red_screening() -> ScreeningRequest {
    ScreeningRequest {
        demographics: demographics_input(61, Occupation::SelfEmployed, IncomeBand::From8000),
        priorities: priorities_input(),
        health: healthy_input(),
        contact: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryTransport {
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl LeadTransport for MemoryTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        self.sent
            .lock()
            .expect("transport mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}

impl MemoryTransport {
    pub(super) fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().expect("transport mutex poisoned").clone()
    }
}

pub(super) struct FailingTransport;

impl LeadTransport for FailingTransport {
    fn send(&self, _payload: &SubmissionPayload) -> Result<(), TransportError> {
        Err(TransportError::Unavailable("connection refused".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<EligibilityService<MemoryTransport>>, Arc<MemoryTransport>) {
    let transport = Arc::new(MemoryTransport::default());
    let service = Arc::new(EligibilityService::new(
        transport.clone(),
        WizardConfig::default(),
    ));
    (service, transport)
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}
