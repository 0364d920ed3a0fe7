//! Text-provider endpoints: image-prompt generation and platform ad copy.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::handlers::ApiFailure;
use crate::llm::ProviderError;
use crate::pipeline::ad_copy::{parse_ad_copy, AdCopy};
use crate::pipeline::prompts;
use crate::state::AppState;

fn default_provider() -> String {
    "claude".to_string()
}

/// Routes a text-completion request to the selected provider. Anything other
/// than "claude" goes to OpenAI, matching the existing contract.
async fn generate_text(
    state: &AppState,
    provider: &str,
    prompt: &str,
) -> Result<String, ProviderError> {
    let max_tokens = state.config.text_max_tokens;
    let temperature = state.config.text_temperature;
    if provider == "claude" {
        state.claude.generate_content(prompt, max_tokens, temperature).await
    } else {
        state.openai.generate_content(prompt, max_tokens, temperature).await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    #[serde(default)]
    campaign_text: String,
    #[serde(default)]
    platforms: Vec<String>,
    #[serde(default = "default_provider")]
    provider: String,
}

#[derive(Serialize)]
pub struct GeneratePromptResponse {
    success: bool,
    prompt: String,
    provider: String,
}

pub async fn generate_prompt_handler(
    State(state): State<AppState>,
    Json(request): Json<GeneratePromptRequest>,
) -> Result<Json<GeneratePromptResponse>, ApiFailure> {
    if request.campaign_text.trim().is_empty() {
        return Err(ApiFailure::bad_request("campaignText must not be empty"));
    }

    info!(
        "Generate prompt request: provider={}, platforms={:?}",
        request.provider, request.platforms
    );

    let context = prompts::image_prompt_context(&request.campaign_text, &request.platforms);
    let prompt = generate_text(&state, &request.provider, &context)
        .await
        .map_err(|err| {
            error!("Prompt generation failed (provider={}): {}", request.provider, err);
            ApiFailure::internal(err.to_string())
        })?;

    info!("Prompt generated successfully ({} chars)", prompt.len());

    Ok(Json(GeneratePromptResponse {
        success: true,
        prompt,
        provider: request.provider,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCopyRequest {
    #[serde(default)]
    platform: String,
    #[serde(default)]
    size_name: String,
    #[serde(default)]
    campaign_text: String,
    #[serde(default)]
    text_overlay: String,
    #[serde(default = "default_provider")]
    provider: String,
}

#[derive(Serialize)]
pub struct AdCopyResponse {
    success: bool,
    #[serde(rename = "adCopy")]
    ad_copy: AdCopy,
    provider: String,
}

pub async fn ad_copy_handler(
    State(state): State<AppState>,
    Json(request): Json<AdCopyRequest>,
) -> Result<Json<AdCopyResponse>, ApiFailure> {
    if request.campaign_text.trim().is_empty() {
        return Err(ApiFailure::bad_request("campaignText must not be empty"));
    }

    info!(
        "Generate ad copy request: platform={}, size={}, provider={}",
        request.platform, request.size_name, request.provider
    );

    let context = prompts::ad_copy_context(
        &request.platform,
        &request.size_name,
        &request.campaign_text,
        &request.text_overlay,
    );
    let raw = generate_text(&state, &request.provider, &context)
        .await
        .map_err(|err| {
            error!(
                "Ad copy generation failed (platform={}, provider={}): {}",
                request.platform, request.provider, err
            );
            ApiFailure::internal(err.to_string())
        })?;

    // Non-JSON output degrades to the fixed fallback copy, never an error.
    let ad_copy = parse_ad_copy(&raw);

    Ok(Json(AdCopyResponse {
        success: true,
        ad_copy,
        provider: request.provider,
    }))
}
