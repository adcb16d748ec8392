// rest_api/src/lib.rs

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use anyhow::{Context, Error as AnyhowError};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use triage_lib::classifier::MAX_IMAGE_BYTES;
use triage_lib::{build_engine, TriageConfig, TriageEngine, TriageError};
use triage_models::{PainPolicy, ValidationError};

pub mod handlers;
pub mod payloads;

use crate::handlers::*;

pub const API_LEVEL: u32 = 1;

/// Request body cap: a `MAX_IMAGE_BYTES` image once base64-encoded, plus
/// room for a data-URL prefix and the other JSON fields.
pub const MAX_BODY_BYTES: usize = MAX_IMAGE_BYTES.div_ceil(3) * 4 + 64 * 1024;

#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("Invalid request body: {0}")]
    JsonBody(#[from] JsonRejection),
    #[error(transparent)]
    Triage(#[from] TriageError),
}

impl RestApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestApiError::InvalidInput(_)
            | RestApiError::Validation(_)
            | RestApiError::JsonBody(_) => StatusCode::BAD_REQUEST,
            RestApiError::Triage(e) if e.is_input_error() => StatusCode::BAD_REQUEST,
            RestApiError::Triage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            RestApiError::JsonBody(rejection) => format!("Invalid request body: {}", rejection.body_text()),
            other => other.to_string(),
        };
        if status.is_server_error() {
            error!("Request failed: {}", message);
        }

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TriageEngine>,
    pub pain_policy: PainPolicy,
}

impl AppState {
    pub fn new(engine: TriageEngine, pain_policy: PainPolicy) -> Self {
        Self { engine: Arc::new(engine), pain_policy }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/calculate-severity", post(calculate_severity_handler))
        .route("/api/v1/find-facilities", post(find_facilities_handler))
        .route("/api/v1/classify-wound", post(classify_wound_handler))
        .route("/api/v1/triage", post(triage_handler))
        .route("/api/v1/facilities", get(list_facilities_handler))
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/version", get(version_handler))
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves the API on an already bound listener until `shutdown_rx` fires.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let app = build_router(state);
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("REST API server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
            info!("Received shutdown signal.");
        })
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}

// Main function to start the REST API server
pub async fn start_server(
    config: &TriageConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let engine = build_engine(config).context("Failed to build triage engine")?;
    info!(
        "Engine ready: {} facilities, classifier '{}', pain policy {:?}",
        engine.registry().len(),
        engine.classifier().name(),
        config.engine.pain_policy
    );
    let state = AppState::new(engine, config.engine.pain_policy);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address: {}", addr))?;

    serve(listener, state, shutdown_rx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::{ClassifyRequest, FacilitiesRequest, SeverityRequest, TriageBody};
    use axum::body::Body;
    use axum::extract::{FromRequest, State};
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use triage_lib::{FacilityRegistry, FixedLabelClassifier};
    use triage_models::SeverityTier;

    fn state(policy: PainPolicy) -> AppState {
        let classifier = FixedLabelClassifier::new("Laceration", 0.83).unwrap();
        AppState::new(TriageEngine::new(FacilityRegistry::builtin(), Arc::new(classifier)), policy)
    }

    fn severity_body(label: &str, pain: f64, bleeding: &str) -> SeverityRequest {
        SeverityRequest { wound_label: label.to_string(), pain, bleeding: bleeding.to_string(), swelling: false }
    }

    fn triage_body() -> TriageBody {
        TriageBody {
            image: Some("aGVsbG8=".to_string()),
            wound_label: None,
            pain: 2.0,
            bleeding: "heavy".to_string(),
            swelling: false,
            lat: Some(39.9522),
            lng: Some(-75.1652),
        }
    }

    async fn error_parts(err: RestApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // Runs the same JSON extraction the router performs.
    async fn extract<T: DeserializeOwned>(raw: &str) -> Result<Json<T>, JsonRejection> {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        Json::<T>::from_request(request, &()).await
    }

    async fn assert_bad_request(err: RestApiError) {
        let (status, body) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn calculate_severity_requires_every_field() {
        for raw in [
            r#"{"woundLabel":"bruise","pain":1,"bleeding":"none"}"#,
            r#"{"woundLabel":"bruise","bleeding":"none","swelling":true}"#,
            r#"{"pain":1,"bleeding":"none","swelling":true}"#,
        ] {
            let err = calculate_severity_handler(State(state(PainPolicy::Clamp)), extract(raw).await)
                .await
                .unwrap_err();
            assert_bad_request(err).await;
        }

        let Json(assessment) = calculate_severity_handler(
            State(state(PainPolicy::Clamp)),
            extract(r#"{"woundLabel":"bruise","pain":1,"bleeding":"none","swelling":true}"#).await,
        )
        .await
        .unwrap();
        assert_eq!(assessment.severity, SeverityTier::UrgentCare);
    }

    #[tokio::test]
    async fn find_facilities_requires_coordinates() {
        let err = find_facilities_handler(
            State(state(PainPolicy::Clamp)),
            extract(r#"{"type":"ER","lng":-75.1652}"#).await,
        )
        .await
        .unwrap_err();
        assert_bad_request(err).await;
    }

    #[tokio::test]
    async fn triage_requires_swelling() {
        let err = triage_handler(
            State(state(PainPolicy::Clamp)),
            extract(r#"{"woundLabel":"bruise","pain":1,"bleeding":"none"}"#).await,
        )
        .await
        .unwrap_err();
        assert_bad_request(err).await;
    }

    #[test]
    fn body_limit_fits_a_full_size_encoded_image() {
        let encoded_len = (MAX_IMAGE_BYTES + 2) / 3 * 4;
        let prefix = "{\"image\":\"data:image/jpeg;base64,\"}".len();
        assert!(MAX_BODY_BYTES >= encoded_len + prefix);
        assert!(MAX_BODY_BYTES > MAX_IMAGE_BYTES);
    }

    #[tokio::test]
    async fn calculate_severity_returns_tier_and_copy() {
        let Json(assessment) = calculate_severity_handler(
            State(state(PainPolicy::Clamp)),
            Ok(Json(severity_body("Stab Wound", 0.0, "none"))),
        )
        .await
        .unwrap();
        assert_eq!(assessment.severity, SeverityTier::TraumaCenter);
        assert!(assessment.recommendation.starts_with("Stab wounds require immediate"));
    }

    #[tokio::test]
    async fn pain_policy_controls_out_of_range_values() {
        let Json(clamped) = calculate_severity_handler(
            State(state(PainPolicy::Clamp)),
            Ok(Json(severity_body("graze", 15.0, "none"))),
        )
        .await
        .unwrap();
        assert_eq!(clamped.severity, SeverityTier::EmergencyRoom);

        let err = calculate_severity_handler(
            State(state(PainPolicy::Reject)),
            Ok(Json(severity_body("graze", 15.0, "none"))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn fractional_pain_and_unknown_bleeding_use_error_envelope() {
        let err = calculate_severity_handler(
            State(state(PainPolicy::Clamp)),
            Ok(Json(severity_body("cut", 3.5, "none"))),
        )
        .await
        .unwrap_err();
        let (status, body) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("3.5"));

        let err = calculate_severity_handler(
            State(state(PainPolicy::Clamp)),
            Ok(Json(severity_body("cut", 3.0, "gushing"))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn find_facilities_ranks_urgent_care_first() {
        let request = FacilitiesRequest { tier: "UrgentCare".to_string(), lat: 39.9522, lng: -75.1652 };
        let Json(body) = find_facilities_handler(State(state(PainPolicy::Clamp)), Ok(Json(request)))
            .await
            .unwrap();
        let facilities = body["facilities"].as_array().unwrap();
        assert_eq!(facilities.len(), 3);
        assert_eq!(facilities[0]["name"], "Jefferson Urgent Care Center City");
        assert_eq!(facilities[0]["type"], "UrgentCare");
        assert!(facilities[0]["distance"].as_f64().unwrap() < 0.2);
    }

    #[tokio::test]
    async fn find_facilities_with_unknown_tier_is_unfiltered() {
        let request = FacilitiesRequest { tier: "Spa".to_string(), lat: 39.9522, lng: -75.1652 };
        let Json(body) = find_facilities_handler(State(state(PainPolicy::Clamp)), Ok(Json(request)))
            .await
            .unwrap();
        assert_eq!(body["facilities"][1]["name"], "CVS MinuteClinic");
    }

    #[tokio::test]
    async fn padded_tier_name_is_not_a_tier() {
        let request = FacilitiesRequest { tier: " ER ".to_string(), lat: 39.9522, lng: -75.1652 };
        let Json(body) = find_facilities_handler(State(state(PainPolicy::Clamp)), Ok(Json(request)))
            .await
            .unwrap();
        let types: Vec<&str> = body["facilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["UrgentCare", "SelfCare", "UrgentCare"]);
    }

    #[tokio::test]
    async fn find_facilities_rejects_bad_coordinates() {
        let request = FacilitiesRequest { tier: "ER".to_string(), lat: 91.0, lng: 0.0 };
        let err = find_facilities_handler(State(state(PainPolicy::Clamp)), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn classify_wound_decodes_and_classifies() {
        let request = ClassifyRequest { image: Some("data:image/png;base64,aGVsbG8=".to_string()) };
        let Json(result) = classify_wound_handler(State(state(PainPolicy::Clamp)), Ok(Json(request)))
            .await
            .unwrap();
        assert_eq!(result.label, "Laceration");
        assert_eq!(result.confidence, 0.83);

        let err = classify_wound_handler(
            State(state(PainPolicy::Clamp)),
            Ok(Json(ClassifyRequest { image: None })),
        )
        .await
        .unwrap_err();
        let (status, body) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid input: Image data is required");
    }

    #[tokio::test]
    async fn triage_runs_the_whole_pipeline() {
        let Json(outcome) = triage_handler(State(state(PainPolicy::Clamp)), Ok(Json(triage_body())))
            .await
            .unwrap();
        // Laceration with heavy bleeding.
        assert_eq!(outcome.severity, SeverityTier::EmergencyRoom);
        assert_eq!(outcome.classification.as_ref().unwrap().label, "Laceration");
        assert_eq!(outcome.facilities[0].facility.name, "Jefferson University Hospital");

        let value = serde_json::to_value(&outcome).unwrap();
        assert!(value.get("assessedAt").is_some());
        assert_eq!(value["woundLabel"], "Laceration");
    }

    #[tokio::test]
    async fn triage_requires_both_coordinates() {
        let mut body = triage_body();
        body.lng = None;
        let err = triage_handler(State(state(PainPolicy::Clamp)), Ok(Json(body))).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn triage_label_wins_over_broken_image() {
        let mut body = triage_body();
        body.image = Some("%%%".to_string());
        body.wound_label = Some("Abrasion".to_string());
        body.bleeding = "none".to_string();
        let Json(outcome) = triage_handler(State(state(PainPolicy::Clamp)), Ok(Json(body)))
            .await
            .unwrap();
        assert!(outcome.classification.is_none());
        assert_eq!(outcome.severity, SeverityTier::SelfCare);
        assert!(outcome.facilities.is_empty());
    }

    #[tokio::test]
    async fn health_and_version_describe_the_service() {
        let Json(health) = health_check_handler(State(state(PainPolicy::Clamp))).await;
        assert_eq!(health["status"], "ok");
        assert_eq!(health["classifier"], "fixed-label");
        assert_eq!(health["facilities"], 8);

        let Json(version) = version_handler().await;
        assert_eq!(version["api_level"], API_LEVEL);

        let Json(listing) = list_facilities_handler(State(state(PainPolicy::Clamp))).await;
        assert_eq!(listing["facilities"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn server_reports_malformed_json_and_shuts_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        let server = tokio::spawn(serve(listener, state(PainPolicy::Clamp), rx));

        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{}/api/v1/calculate-severity", addr))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");

        let preflight = client
            .request(reqwest::Method::OPTIONS, format!("http://{}/api/v1/triage", addr))
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "apikey, content-type")
            .send()
            .await
            .unwrap();
        assert!(preflight.status().is_success());
        assert_eq!(
            preflight.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
