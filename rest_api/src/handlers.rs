// rest_api/src/handlers.rs

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use triage_models::{ClassificationResult, SeverityAssessment, TriageOutcome};

use crate::payloads::{ClassifyRequest, FacilitiesRequest, SeverityRequest, TriageBody};
use crate::{AppState, RestApiError, API_LEVEL};

// Handler for /api/v1/calculate-severity
pub async fn calculate_severity_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeverityRequest>, JsonRejection>,
) -> Result<Json<SeverityAssessment>, RestApiError> {
    let Json(payload) = payload?;
    let symptoms = payload.symptoms(state.pain_policy)?;
    let assessment = state.engine.assess(&payload.wound_label, &symptoms);
    debug!(label = %payload.wound_label, severity = %assessment.severity, "calculated severity");
    Ok(Json(assessment))
}

// Handler for /api/v1/find-facilities
pub async fn find_facilities_handler(
    State(state): State<AppState>,
    payload: Result<Json<FacilitiesRequest>, JsonRejection>,
) -> Result<Json<Value>, RestApiError> {
    let Json(payload) = payload?;
    let origin = payload.origin()?;
    let requested = payload.requested_tier();
    if requested.is_none() {
        warn!(tier = %payload.tier, "unknown tier, ranking all facilities");
    }
    let facilities = state.engine.find_facilities(requested, origin);
    Ok(Json(json!({ "facilities": facilities })))
}

// Handler for /api/v1/classify-wound
pub async fn classify_wound_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, RestApiError> {
    let Json(payload) = payload?;
    let image = payload.image_bytes()?;
    let result = state.engine.classify(&image)?;
    info!(label = %result.label, confidence = result.confidence, "classified wound image");
    Ok(Json(result))
}

// Handler for /api/v1/triage
pub async fn triage_handler(
    State(state): State<AppState>,
    payload: Result<Json<TriageBody>, JsonRejection>,
) -> Result<Json<TriageOutcome>, RestApiError> {
    let Json(payload) = payload?;
    let request = payload.into_request(state.pain_policy)?;
    Ok(Json(state.engine.run(request)?))
}

// Handler for /api/v1/facilities
pub async fn list_facilities_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "facilities": state.engine.registry().facilities() }))
}

// Handler for /api/v1/health
pub async fn health_check_handler(State(state): State<AppState>) -> Json<Value> {
    let classifier = state.engine.classifier();
    Json(json!({
        "status": "ok",
        "classifier": classifier.name(),
        "labels": classifier.labels(),
        "facilities": state.engine.registry().len(),
    }))
}

// Handler for /api/v1/version
pub async fn version_handler() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION"), "api_level": API_LEVEL }))
}
