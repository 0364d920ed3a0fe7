//! Adapter for the OpenAI Chat Completions API.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::llm::{summarize_error_body, ProviderError};
use crate::utils::timing::log_llm_timing;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(http: Client, config: &Config) -> Self {
        OpenAiClient {
            http,
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }

    pub async fn generate_content(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        log_llm_timing("openai", &self.model, "generate_content", || {
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
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = summarize_error_body(&body);
            warn!("OpenAI API error: status={}, detail={}", status, detail);
            return Err(ProviderError::Status { status, detail });
        }

        let payload = response.json::<ChatResponse>().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ProviderError::UnexpectedShape(
                "OpenAI response contained no message content".to_string(),
            ));
        }

        Ok(content)
    }
}
