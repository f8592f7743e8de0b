// Request handlers and wire types for the API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::AppState;
use crate::dragons::{EvalError, FeedbackRecord};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePitchRequest {
    #[serde(default)]
    pub pitch: String,
    #[serde(default)]
    pub dragon_ids: Vec<String>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluatePitchResponse {
    pub evaluations: Vec<FeedbackRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CheckPasswordRequest {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovePitchRequest {
    #[serde(default)]
    pub original_pitch: String,
    #[serde(default)]
    pub feedback: Vec<FeedbackRecord>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovePitchResponse {
    pub improved_pitch: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/check-password", post(check_password))
        .route("/api/evaluate-pitch", post(evaluate_pitch))
        .route("/api/improve-pitch", post(improve_pitch))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Password probe for the frontend gate. Never fails: an empty or wrong
/// password is a 401 with `valid: false`, not an error.
async fn check_password(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckPasswordRequest>,
) -> (StatusCode, Json<Value>) {
    if state.evaluator().check_password(&request.password) {
        (StatusCode::OK, Json(json!({ "valid": true })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "valid": false })))
    }
}

async fn evaluate_pitch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluatePitchRequest>,
) -> Result<Json<EvaluatePitchResponse>, (StatusCode, Json<Value>)> {
    let evaluations = state
        .evaluator()
        .evaluate(&request.pitch, &request.dragon_ids, &request.password)
        .await
        .map_err(|e| {
            error_response(
                e,
                "Invalid password. Please contact your instructor.",
                "Failed to get dragon feedback",
            )
        })?;

    Ok(Json(EvaluatePitchResponse { evaluations }))
}

async fn improve_pitch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ImprovePitchRequest>,
) -> Result<Json<ImprovePitchResponse>, (StatusCode, Json<Value>)> {
    let improved_pitch = state
        .evaluator()
        .improve(&request.original_pitch, &request.feedback, &request.password)
        .await
        .map_err(|e| error_response(e, "Invalid password", "Failed to improve pitch"))?;

    Ok(Json(ImprovePitchResponse { improved_pitch }))
}

/// Map an evaluation error onto the wire contract: authorization and
/// validation failures keep specific messages, everything downstream
/// collapses to one generic message.
fn error_response(
    error: EvalError,
    unauthorized_msg: &str,
    generic_msg: &str,
) -> (StatusCode, Json<Value>) {
    match error {
        EvalError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": unauthorized_msg })),
        ),
        EvalError::InvalidRequest(reason) => {
            tracing::warn!("Rejected request: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request" })),
            )
        }
        other => {
            tracing::error!("Evaluation failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": generic_msg })),
            )
        }
    }
}
