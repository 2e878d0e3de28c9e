use crate::infra::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use symptom_triage::error::AppError;
use symptom_triage::interview::{standard_questions, SymptomQuestion};
use symptom_triage::{InferenceEngine, InferenceResult, KnowledgeCatalog, Symptom};
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    #[serde(default)]
    pub(crate) symptoms: Vec<Symptom>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) analyzed_at: DateTime<Utc>,
    pub(crate) result: InferenceResult,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogSummary {
    pub(crate) rules: usize,
    pub(crate) red_flags: usize,
}

/// Router exposing the engine plus the operational endpoints.
pub(crate) fn with_triage_routes(engine: Arc<InferenceEngine>) -> Router {
    Router::new()
        .route("/api/v1/triage/analyze", post(analyze_endpoint))
        .route("/api/v1/triage/symptoms", get(symptoms_endpoint))
        .route("/api/v1/triage/catalog/validate", post(validate_catalog_endpoint))
        .with_state(engine)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
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

pub(crate) async fn symptoms_endpoint() -> Json<&'static [SymptomQuestion]> {
    Json(standard_questions())
}

pub(crate) async fn analyze_endpoint(
    State(engine): State<Arc<InferenceEngine>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let result = engine.analyze(payload.symptoms);

    info!(
        reported = result.reported_symptoms.len(),
        suggestions = result.suggestions.len(),
        urgency = result.urgency_level.label(),
        "triage analysis served"
    );

    Json(AnalyzeResponse {
        analyzed_at: Utc::now(),
        result,
    })
}

/// Checks a catalog document without loading it into the running engine.
pub(crate) async fn validate_catalog_endpoint(
    body: Bytes,
) -> Result<Json<CatalogSummary>, AppError> {
    let catalog = KnowledgeCatalog::from_reader(body.as_ref())?;

    Ok(Json(CatalogSummary {
        rules: catalog.rules().len(),
        red_flags: catalog.red_flags().len(),
    }))
}
