pub mod claude;
pub mod gemini;
pub mod openai;

use reqwest::StatusCode;
use serde_json::Value;

/// Failure modes shared by all provider adapters. Each adapter maps its
/// documented response shape to an internal type and fails loudly when the
/// shape is unrecognized instead of probing fields defensively.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {status}: {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("unexpected provider response shape: {0}")]
    UnexpectedShape(String),
    #[error("no image data in provider response")]
    NoImageData,
}

pub(crate) fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Pulls a human-readable message out of a provider error body, falling back
/// to a truncated dump of the body itself.
pub(crate) fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        if let Some(message) = message {
            return message;
        }
        return truncate_for_log(&value.to_string(), 2000);
    }

    truncate_for_log(trimmed, 2000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_prefers_nested_error_message() {
        let body = r#"{"error": {"message": "quota exceeded", "code": 429}}"#;
        assert_eq!(summarize_error_body(body), "quota exceeded");
    }

    #[test]
    fn summarize_falls_back_to_raw_body() {
        assert_eq!(summarize_error_body(""), "empty response body");
        assert_eq!(summarize_error_body("gateway blew up"), "gateway blew up");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(truncate_for_log(text, 50), text);
        assert_eq!(truncate_for_log(text, 5), "héllo... (truncated)");
    }
}
