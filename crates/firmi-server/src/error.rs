//! Error Types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("Chat service is not configured")]
    ChatUnavailable,

    #[error("Chat service request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Chat service answered with status {0}")]
    UpstreamStatus(u16),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ServerError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::ChatUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::ChatUnavailable => "CHAT_UNAVAILABLE",
            Self::Upstream(_) | Self::UpstreamStatus(_) => "UPSTREAM_ERROR",
        }
    }

    /// Text safe to show in the chat window
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyMessage => "Please type a message first.".into(),
            Self::ChatUnavailable => "Chat is not available right now.".into(),
            Self::Upstream(_) | Self::UpstreamStatus(_) => {
                "The assistant could not be reached. Please try again.".into()
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::warn!("Chat request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.user_message(),
            code: self.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}
