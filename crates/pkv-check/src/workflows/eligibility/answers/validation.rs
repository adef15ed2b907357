use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{
    ContactInfo, ContactInput, Demographics, DemographicsInput, HealthHistory, HealthInput,
    IncomeBand, Occupation, Priorities, PrioritiesInput,
};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 80;
pub const MAX_NOTES_CHARS: usize = 600;
const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 6;

/// First failing field of a step's candidate data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_demographics(input: &DemographicsInput) -> Result<Demographics, ValidationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
        return Err(ValidationError::new(
            "age",
            format!("Bitte ein Alter zwischen {MIN_AGE} und {MAX_AGE} Jahren angeben."),
        ));
    }

    let occupation = Occupation::parse(&input.occupation).ok_or_else(|| {
        ValidationError::new("occupation", "Bitte eine gültige berufliche Situation wählen.")
    })?;

    let income_band = IncomeBand::parse(&input.income_band).ok_or_else(|| {
        ValidationError::new("incomeBand", "Bitte eine Einkommensspanne wählen.")
    })?;

    Ok(Demographics {
        age: input.age as u8,
        occupation,
        income_band,
    })
}

/// Trims tags, drops blanks and duplicates, keeps first-seen order.
pub fn validate_priorities(input: &PrioritiesInput) -> Result<Priorities, ValidationError> {
    let mut tags: Vec<String> = Vec::with_capacity(input.priorities.len());
    for raw in &input.priorities {
        let tag = raw.trim();
        if tag.is_empty() || tags.iter().any(|existing| existing == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }

    if tags.is_empty() {
        return Err(ValidationError::new(
            "priorities",
            "Bitte mindestens eine Priorität auswählen.",
        ));
    }

    Ok(Priorities(tags))
}

pub fn validate_health(input: &HealthInput) -> Result<HealthHistory, ValidationError> {
    let chronic_condition = required_answer("chronicCondition", input.chronic_condition)?;
    let hospitalization_last_5_years = required_answer(
        "hospitalizationLast5Years",
        input.hospitalization_last_5_years,
    )?;
    let ongoing_medication = required_answer("ongoingMedication", input.ongoing_medication)?;
    let open_findings = required_answer("openFindings", input.open_findings)?;

    let notes = match input.notes.as_deref().map(str::trim) {
        Some(notes) if notes.chars().count() > MAX_NOTES_CHARS => {
            return Err(ValidationError::new(
                "notes",
                format!("Anmerkungen dürfen höchstens {MAX_NOTES_CHARS} Zeichen lang sein."),
            ));
        }
        Some("") | None => None,
        Some(notes) => Some(notes.to_string()),
    };

    Ok(HealthHistory {
        chronic_condition,
        hospitalization_last_5_years,
        ongoing_medication,
        open_findings,
        notes,
    })
}

fn required_answer(field: &'static str, answer: Option<bool>) -> Result<bool, ValidationError> {
    answer.ok_or_else(|| ValidationError::new(field, "Bitte alle Gesundheitsfragen beantworten."))
}

pub fn validate_contact(input: &ContactInput) -> Result<ContactInfo, ValidationError> {
    let first_name = input.first_name.trim();
    if first_name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::new(
            "firstName",
            "Bitte einen Vornamen mit mindestens 2 Zeichen angeben.",
        ));
    }

    let last_name = input.last_name.trim();
    if last_name.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::new(
            "lastName",
            "Bitte einen Nachnamen mit mindestens 2 Zeichen angeben.",
        ));
    }

    let phone = input.phone.trim();
    if phone.chars().count() < MIN_PHONE_CHARS {
        return Err(ValidationError::new(
            "phone",
            "Bitte eine Telefonnummer mit mindestens 6 Zeichen angeben.",
        ));
    }

    let email = input.email.trim();
    if !email_pattern().is_match(email) {
        return Err(ValidationError::new(
            "email",
            "Bitte eine gültige E-Mail-Adresse angeben.",
        ));
    }

    if !input.consent {
        return Err(ValidationError::new(
            "consent",
            "Bitte der Kontaktaufnahme zustimmen.",
        ));
    }

    Ok(ContactInfo {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        consent: true,
    })
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactInput {
        ContactInput {
            first_name: "Jana".to_string(),
            last_name: "Krüger".to_string(),
            phone: "0171 2345678".to_string(),
            email: "jana.krueger@example.de".to_string(),
            consent: true,
        }
    }

    #[test]
    fn demographics_accept_labels_and_keys() {
        let parsed = validate_demographics(&DemographicsInput {
            age: 42,
            occupation: "Beamter/Beamtin".to_string(),
            income_band: "from_8000".to_string(),
        })
        .expect("valid demographics");

        assert_eq!(parsed.occupation, Occupation::CivilServant);
        assert_eq!(parsed.income_band, IncomeBand::From8000);
    }

    #[test]
    fn demographics_reject_age_outside_range() {
        for age in [17, 81, -3] {
            let error = validate_demographics(&DemographicsInput {
                age,
                occupation: "Angestellt".to_string(),
                income_band: IncomeBand::Under3000.label().to_string(),
            })
            .expect_err("age out of range");
            assert_eq!(error.field, "age");
        }
    }

    #[test]
    fn demographics_report_first_failure_only() {
        let error = validate_demographics(&DemographicsInput {
            age: 30,
            occupation: "Pirat".to_string(),
            income_band: "viel".to_string(),
        })
        .expect_err("invalid occupation");
        assert_eq!(error.field, "occupation");
    }

    #[test]
    fn priorities_are_normalized() {
        let priorities = validate_priorities(&PrioritiesInput {
            priorities: vec![
                " Beitragsstabilität ".to_string(),
                "".to_string(),
                "Chefarztbehandlung".to_string(),
                "Beitragsstabilität".to_string(),
            ],
        })
        .expect("valid priorities");

        assert_eq!(
            priorities.tags(),
            ["Beitragsstabilität".to_string(), "Chefarztbehandlung".to_string()]
        );
    }

    #[test]
    fn priorities_require_one_tag() {
        let error = validate_priorities(&PrioritiesInput {
            priorities: vec!["   ".to_string()],
        })
        .expect_err("blank priorities");
        assert_eq!(error.field, "priorities");
    }

    #[test]
    fn health_requires_every_flag() {
        let error = validate_health(&HealthInput {
            chronic_condition: Some(false),
            hospitalization_last_5_years: Some(false),
            ongoing_medication: None,
            open_findings: Some(false),
            notes: None,
        })
        .expect_err("missing answer");
        assert_eq!(error.field, "ongoingMedication");
    }

    #[test]
    fn health_notes_are_capped() {
        let mut input = HealthInput {
            chronic_condition: Some(false),
            hospitalization_last_5_years: Some(false),
            ongoing_medication: Some(false),
            open_findings: Some(false),
            notes: Some("ä".repeat(MAX_NOTES_CHARS)),
        };
        assert!(validate_health(&input).is_ok());

        input.notes = Some("ä".repeat(MAX_NOTES_CHARS + 1));
        let error = validate_health(&input).expect_err("notes too long");
        assert_eq!(error.field, "notes");
    }

    #[test]
    fn contact_requires_consent() {
        let mut input = contact();
        input.consent = false;
        let error = validate_contact(&input).expect_err("consent missing");
        assert_eq!(error.field, "consent");
    }

    #[test]
    fn contact_rejects_malformed_email() {
        let mut input = contact();
        input.email = "jana@localhost".to_string();
        let error = validate_contact(&input).expect_err("invalid email");
        assert_eq!(error.field, "email");
    }

    #[test]
    fn contact_rejects_empty_domain_labels() {
        for email in ["jana@example..de", "jana@.example.de", "jana@example.de."] {
            let mut input = contact();
            input.email = email.to_string();
            let error = validate_contact(&input).expect_err(email);
            assert_eq!(error.field, "email", "{email}");
        }

        let mut input = contact();
        input.email = "jana.krueger@mail.example.de".to_string();
        assert!(validate_contact(&input).is_ok());
    }

    #[test]
    fn contact_checks_fields_in_form_order() {
        let input = ContactInput {
            first_name: "J".to_string(),
            last_name: "K".to_string(),
            phone: "1".to_string(),
            email: "nope".to_string(),
            consent: false,
        };
        let error = validate_contact(&input).expect_err("invalid contact");
        assert_eq!(error.field, "firstName");
    }
}
