use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use pkv_check::workflows::eligibility::{eligibility_router, EligibilityService, LeadTransport};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_eligibility_routes<T>(service: Arc<EligibilityService<T>>) -> axum::Router
where
    T: LeadTransport + 'static,
{
    eligibility_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::LoggingLeadTransport;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use pkv_check::workflows::eligibility::WizardConfig;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> (axum::Router, Arc<LoggingLeadTransport>) {
        let transport = Arc::new(LoggingLeadTransport::default());
        let service = Arc::new(EligibilityService::new(
            transport.clone(),
            WizardConfig::default(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let router = with_eligibility_routes(service).layer(Extension(state));
        (router, transport)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let (router, _) = app(false);

        let response = router
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "initializing");
    }

    #[tokio::test]
    async fn healthcheck_is_always_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn screening_route_delivers_lead_through_transport() {
        let (router, transport) = app(true);
        let request = json!({
            "demographics": {
                "age": 42,
                "occupation": "Beamter/Beamtin",
                "incomeBand": "unter 3.000 €"
            },
            "priorities": { "priorities": ["Chefarztbehandlung"] },
            "health": {
                "chronicCondition": false,
                "hospitalizationLast5Years": false,
                "ongoingMedication": false,
                "openFindings": false
            },
            "contact": {
                "firstName": "Jonas",
                "lastName": "Krüger",
                "phone": "040 5551234",
                "email": "jonas.krueger@example.de",
                "consent": true
            }
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/eligibility/screenings")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(request.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["classification"], "green");
        assert_eq!(body["state"]["submitted"], true);
        let delivered = transport.delivered();
        assert_eq!(delivered.len(), 1);
        assert!(!delivered[0].carries_health_data());
    }
}
