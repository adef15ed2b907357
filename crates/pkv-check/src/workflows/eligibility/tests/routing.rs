use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::eligibility::answers::{IncomeBand, Occupation};
use crate::workflows::eligibility::flow::WizardConfig;
use crate::workflows::eligibility::router::{check_handler, screening_handler};
use crate::workflows::eligibility::service::{CheckRequest, EligibilityService};
use crate::workflows::eligibility::eligibility_router;

#[tokio::test]
async fn check_handler_returns_result_view() {
    let (service, _) = build_service();

    let response = check_handler::<MemoryTransport>(
        State(service),
        axum::Json(CheckRequest {
            demographics: demographics_input(40, Occupation::CivilServant, IncomeBand::Under3000),
            health: healthy_input(),
        }),
    )
    .await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], 4);
    assert_eq!(body["result"]["classification"], "green");
    assert_eq!(body["mayProceedToContact"], true);
    assert_eq!(body["view"]["actions"]["kind"], "booking");
}

#[tokio::test]
async fn check_handler_reports_override_reason() {
    let (service, _) = build_service();

    let response = check_handler::<MemoryTransport>(
        State(service),
        axum::Json(CheckRequest {
            demographics: demographics_input(30, Occupation::Employed, IncomeBand::From4000To4999),
            health: healthy_input(),
        }),
    )
    .await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["classification"], "red");
    assert_eq!(
        body["result"]["overrideReason"],
        json!("compulsory_public_insurance")
    );
    assert_eq!(body["mayProceedToContact"], false);
    assert_eq!(body["view"]["actions"]["kind"], "alternatives");
}

#[tokio::test]
async fn check_handler_returns_unprocessable_for_invalid_age() {
    let (service, _) = build_service();

    let response = check_handler::<MemoryTransport>(
        State(service),
        axum::Json(CheckRequest {
            demographics: demographics_input(81, Occupation::Other, IncomeBand::Under3000),
            health: healthy_input(),
        }),
    )
    .await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "age");
}

#[tokio::test]
async fn screening_handler_returns_bad_gateway_on_transport_failure() {
    let service = Arc::new(EligibilityService::new(
        Arc::new(FailingTransport),
        WizardConfig::default(),
    ));

    let response =
        screening_handler::<FailingTransport>(State(service), axum::Json(green_screening())).await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("später erneut")));
}

#[tokio::test]
async fn screening_handler_requires_contact_for_eligible_respondents() {
    let (service, _) = build_service();
    let mut request = green_screening();
    request.contact = None;

    let response = screening_handler::<MemoryTransport>(State(service), axum::Json(request)).await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "contact");
}

#[tokio::test]
async fn screening_route_accepts_payloads() {
    let (service, transport) = build_service();
    let router = eligibility_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/eligibility/screenings")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&red_screening()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("router responds");

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"], "red");
    assert_eq!(body["contactRequested"], false);
    assert_eq!(body["state"]["currentStep"], "result");
    assert_eq!(body["state"]["submitted"], true);
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn check_route_speaks_camel_case_both_ways() {
    let (service, _) = build_service();
    let router = eligibility_router(service);
    let request = json!({
        "demographics": {
            "age": 52,
            "occupation": "Selbstständig",
            "incomeBand": "7.000–7.999 €"
        },
        "health": {
            "chronicCondition": false,
            "hospitalizationLast5Years": true,
            "ongoingMedication": false,
            "openFindings": false
        }
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/eligibility/check")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(request.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["score"], -2);
    assert_eq!(body["result"]["classification"], "yellow");
    assert_eq!(body["mayProceedToContact"], true);
    assert!(body.get("may_proceed_to_contact").is_none());
    assert!(body["view"].get("override_notice").is_none());
}

#[tokio::test]
async fn validation_errors_name_the_wire_field() {
    let (service, _) = build_service();
    let mut request = green_screening();
    request.health.hospitalization_last_5_years = None;

    let response = screening_handler::<MemoryTransport>(State(service), axum::Json(request)).await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "hospitalizationLast5Years");
}

#[tokio::test]
async fn age_override_reports_limit_in_camel_case() {
    let (service, _) = build_service();

    let response = check_handler::<MemoryTransport>(
        State(service),
        axum::Json(CheckRequest {
            demographics: demographics_input(60, Occupation::CivilServant, IncomeBand::From8000),
            health: healthy_input(),
        }),
    )
    .await;

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["result"]["overrideReason"],
        json!({ "age_limit_exceeded": { "age": 60, "maxAge": 55 } })
    );
}
