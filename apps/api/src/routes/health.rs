//! Liveness probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mock_mode: bool,
    pub message: &'static str,
}

/// GET /api/health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let mock_mode = state.config.mock_mode();
    Json(HealthResponse {
        status: "ok",
        mock_mode,
        message: if mock_mode {
            "Running in MOCK MODE - using sample data (set OPENAI_API_KEY for live AI)"
        } else {
            "Running with OpenAI integration"
        },
    })
}
