//! API Client

use serde::{Deserialize, Serialize};

const CHAT_PATH: &str = "/api/chat";
const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Who wrote a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

impl ChatRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }
}

/// Chat message for display
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: usize,
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorReply {
    error: Option<String>,
}

/// Absolute endpoint URL; reqwest needs one even in the browser.
fn chat_url(origin: Option<String>) -> String {
    format!("{}{CHAT_PATH}", origin.as_deref().unwrap_or(FALLBACK_ORIGIN))
}

fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Send a chat message to the backend
pub async fn send_chat(message: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(chat_url(page_origin()))
        .json(&ChatRequest { message })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: ChatReply = response.json().await.map_err(|e| e.to_string())?;
        Ok(data.message.unwrap_or_else(|| "No response".into()))
    } else {
        let data: ErrorReply = response.json().await.unwrap_or_default();
        Err(data.error.unwrap_or_else(|| "Request failed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_uses_page_origin() {
        assert_eq!(
            chat_url(Some("https://firmi.ai".into())),
            "https://firmi.ai/api/chat"
        );
        assert_eq!(chat_url(None), "http://localhost:3000/api/chat");
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(ChatRequest { message: "hi" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi" }));
    }
}
