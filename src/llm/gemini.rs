//! Adapter for the Gemini `generateContent` API, used for image generation.

use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::Config;
use crate::llm::{summarize_error_body, ProviderError};
use crate::utils::timing::log_llm_timing;

const MAX_RETRY_ATTEMPTS: usize = 2;
const RETRY_BASE_DELAY_MS: u64 = 900;

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        #[allow(dead_code)]
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}

fn retry_delay(attempt: usize) -> Duration {
    let attempt = attempt.max(1) as u64;
    Duration::from_millis(RETRY_BASE_DELAY_MS.saturating_mul(attempt))
}

fn extract_first_image(response: GeminiResponse) -> Option<Vec<u8>> {
    for candidate in response.candidates.unwrap_or_default() {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts.unwrap_or_default() {
            if let GeminiPart::InlineData { inline_data } = part {
                if inline_data.mime_type.starts_with("image/") {
                    if let Ok(bytes) = general_purpose::STANDARD.decode(inline_data.data) {
                        return Some(bytes);
                    }
                }
            }
        }
    }
    None
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(http: Client, config: &Config) -> Self {
        GeminiClient {
            http,
            api_key: config.gemini_api_key.clone(),
            image_model: config.gemini_image_model.clone(),
        }
    }

    fn redact_api_key(&self, text: &str) -> String {
        let key = self.api_key.trim();
        if key.is_empty() {
            return text.to_string();
        }
        text.replace(key, "[redacted]")
    }

    /// Generates one image for `prompt` and returns the raw decoded bytes.
    /// A response with no inline image part is `ProviderError::NoImageData`.
    pub async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        log_llm_timing("gemini", &self.image_model, "generate_image", || {
            self.call_image(prompt)
        })
        .await
    }

    async fn call_image(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        let payload = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] },
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.image_model, self.api_key
        );

        let mut attempt = 0usize;
        loop {
            attempt += 1;
            let response = match self.http.post(&url).json(&payload).send().await {
                Ok(response) => response,
                Err(err) => {
                    let should_retry = should_retry_error(&err) && attempt < MAX_RETRY_ATTEMPTS;
                    warn!(
                        "Gemini request failed to send: {} (timeout={}, connect={}, retrying={})",
                        self.redact_api_key(&err.to_string()),
                        err.is_timeout(),
                        err.is_connect(),
                        should_retry
                    );
                    if should_retry {
                        tokio::time::sleep(retry_delay(attempt)).await;
                        continue;
                    }
                    return Err(ProviderError::Request(err));
                }
            };

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                let detail = self.redact_api_key(&summarize_error_body(&body));
                let should_retry = should_retry_status(status) && attempt < MAX_RETRY_ATTEMPTS;
                warn!(
                    "Gemini API error: status={}, detail={}, retrying={}",
                    status, detail, should_retry
                );
                if should_retry {
                    tokio::time::sleep(retry_delay(attempt)).await;
                    continue;
                }
                return Err(ProviderError::Status { status, detail });
            }

            let parsed = response.json::<GeminiResponse>().await?;
            if tracing::enabled!(tracing::Level::DEBUG) {
                let candidates = parsed
                    .candidates
                    .as_ref()
                    .map(|candidates| candidates.len())
                    .unwrap_or(0);
                debug!(target: "llm.gemini", model = %self.image_model, candidates);
            }

            return extract_first_image(parsed).ok_or(ProviderError::NoImageData);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_inline_image_part() {
        let encoded = general_purpose::STANDARD.encode(b"png-bytes");
        let raw = format!(
            r#"{{"candidates":[{{"content":{{"parts":[
                {{"text":"here is your image"}},
                {{"inlineData":{{"mimeType":"image/png","data":"{encoded}"}}}}
            ]}}}}]}}"#
        );
        let response: GeminiResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(extract_first_image(response).unwrap(), b"png-bytes");
    }

    #[test]
    fn text_only_response_yields_no_image() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"sorry"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(raw).unwrap();
        assert!(extract_first_image(response).is_none());
    }

    #[test]
    fn non_image_mime_types_are_skipped() {
        let encoded = general_purpose::STANDARD.encode(b"pdf");
        let raw = format!(
            r#"{{"candidates":[{{"content":{{"parts":[
                {{"inlineData":{{"mimeType":"application/pdf","data":"{encoded}"}}}}
            ]}}}}]}}"#
        );
        let response: GeminiResponse = serde_json::from_str(&raw).unwrap();
        assert!(extract_first_image(response).is_none());
    }

    #[test]
    fn retry_statuses_cover_throttling_and_server_errors() {
        assert!(should_retry_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!should_retry_status(StatusCode::BAD_REQUEST));
    }
}
