//! Answer groups collected by the wizard and their per-step validation.

pub mod domain;
pub mod validation;

pub use domain::{
    Answers, ContactInfo, ContactInput, Demographics, DemographicsInput, HealthHistory,
    HealthInput, IncomeBand, Occupation, Priorities, PrioritiesInput, StepInput,
};
pub use validation::{
    validate_contact, validate_demographics, validate_health, validate_priorities,
    ValidationError,
};
