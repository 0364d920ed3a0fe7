//! Adapter for the Anthropic Messages API.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::llm::{summarize_error_body, ProviderError};
use crate::utils::timing::log_llm_timing;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Clone)]
pub struct ClaudeClient {
    http: Client,
    api_key: String,
    model: String,
}

impl ClaudeClient {
    pub fn new(http: Client, config: &Config) -> Self {
        ClaudeClient {
            http,
            api_key: config.anthropic_api_key.clone(),
            model: config.claude_model.clone(),
        }
    }

    pub async fn generate_content(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        log_llm_timing("claude", &self.model, "generate_content", || {
            self.call(prompt, max_tokens, temperature)
        })
        .await
    }

    async fn call(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let payload = json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "temperature": temperature,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = summarize_error_body(&body);
            warn!("Claude API error: status={}, detail={}", status, detail);
            return Err(ProviderError::Status { status, detail });
        }

        let payload = response.json::<MessagesResponse>().await?;
        let text: Vec<String> = payload
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();

        if text.is_empty() {
            return Err(ProviderError::UnexpectedShape(
                "Claude response contained no text content blocks".to_string(),
            ));
        }

        Ok(text.join("\n"))
    }
}
