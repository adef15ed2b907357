use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::answers::ValidationError;
use super::flow::{LeadTransport, WizardError};
use super::service::{CheckRequest, EligibilityService, ScreeningError, ScreeningRequest};

/// Router builder exposing the stateless eligibility endpoints.
pub fn eligibility_router<T>(service: Arc<EligibilityService<T>>) -> Router
where
    T: LeadTransport + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler::<T>))
        .route("/api/v1/eligibility/screenings", post(screening_handler::<T>))
        .with_state(service)
}

pub(crate) async fn check_handler<T>(
    State(service): State<Arc<EligibilityService<T>>>,
    axum::Json(request): axum::Json<CheckRequest>,
) -> Response
where
    T: LeadTransport + 'static,
{
    match service.check(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn screening_handler<T>(
    State(service): State<Arc<EligibilityService<T>>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Response
where
    T: LeadTransport + 'static,
{
    match service.screen(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScreeningError) -> Response {
    match error {
        ScreeningError::Validation(validation)
        | ScreeningError::Wizard(WizardError::Validation(validation)) => {
            validation_response(validation)
        }
        ScreeningError::Wizard(WizardError::SubmissionForbidden) => {
            let payload = json!({ "error": WizardError::SubmissionForbidden.to_string() });
            (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
        }
        ScreeningError::Wizard(error @ WizardError::Transport(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        ScreeningError::Wizard(error @ WizardError::InvalidTransition { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        error @ ScreeningError::MissingContact(_) => {
            let payload = json!({
                "error": error.to_string(),
                "field": "contact",
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

fn validation_response(error: ValidationError) -> Response {
    let payload = json!({
        "error": error.message,
        "field": error.field,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
