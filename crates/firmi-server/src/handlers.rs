//! HTTP Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{error::ServerError, state::AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub chat_upstream_configured: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        chat_upstream_configured: state.config.chat_upstream.is_some(),
    })
}

/// Forward a chat message to the configured chat service
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    if payload.message.trim().is_empty() {
        return Err(ServerError::EmptyMessage);
    }
    let upstream = state
        .config
        .chat_upstream
        .as_deref()
        .ok_or(ServerError::ChatUnavailable)?;

    tracing::debug!(chars = payload.message.len(), "Forwarding chat message");

    let response = state.http.post(upstream).json(&payload).send().await?;
    if !response.status().is_success() {
        return Err(ServerError::UpstreamStatus(response.status().as_u16()));
    }

    let reply: ChatResponse = response.json().await?;
    Ok(Json(reply))
}
