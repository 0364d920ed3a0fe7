//! Looping-animation endpoint.

use axum::extract::State;
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::handlers::ApiFailure;
use crate::pipeline::animation::{self, AnimationError};
use crate::state::AppState;

fn default_dimension() -> u32 {
    1080
}

fn default_duration() -> u64 {
    5
}

fn default_platform() -> String {
    "Meta".to_string()
}

fn default_size_name() -> String {
    "Square".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAnimationRequest {
    #[serde(default)]
    prompt: String,
    #[serde(default = "default_dimension")]
    width: u32,
    #[serde(default = "default_dimension")]
    height: u32,
    #[serde(default = "default_duration")]
    duration: u64,
    #[serde(default = "default_platform")]
    platform: String,
    #[serde(default = "default_size_name")]
    size_name: String,
}

#[derive(Serialize)]
pub struct GenerateAnimationResponse {
    success: bool,
    animation: String,
    frames: Vec<String>,
    frame_count: usize,
    duration: u64,
}

pub async fn generate_animation_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateAnimationRequest>,
) -> Result<Json<GenerateAnimationResponse>, ApiFailure> {
    if request.prompt.trim().is_empty() {
        return Err(ApiFailure::bad_request("prompt must not be empty"));
    }
    if request.width == 0 || request.height == 0 {
        return Err(ApiFailure::bad_request("width and height must be positive"));
    }
    if request.duration == 0 {
        return Err(ApiFailure::bad_request("duration must be at least 1 second"));
    }

    info!(
        "Generate animation request: platform={}, size={}, {}x{}, {}s",
        request.platform, request.size_name, request.width, request.height, request.duration
    );

    let gemini = state.gemini.clone();
    let generate = move |prompt: String| {
        let gemini = gemini.clone();
        async move { gemini.generate_image(&prompt).await }
    };

    let result = animation::generate_animation(
        generate,
        &request.prompt,
        request.width,
        request.height,
        request.duration,
        &request.platform,
        &request.size_name,
    )
    .await
    .map_err(|err| match err {
        AnimationError::NoFramesGenerated => ApiFailure::internal("No frames generated"),
        other => {
            error!(
                "Animation assembly failed for {} {}: {}",
                request.platform, request.size_name, other
            );
            ApiFailure::internal("Animation assembly failed")
        }
    })?;

    info!(
        "Animation created successfully ({} frames, {} bytes)",
        result.frame_count,
        result.gif.len()
    );

    let frames = result
        .frames
        .iter()
        .map(|frame| {
            format!(
                "data:image/png;base64,{}",
                general_purpose::STANDARD.encode(frame)
            )
        })
        .collect();

    Ok(Json(GenerateAnimationResponse {
        success: true,
        animation: format!(
            "data:image/gif;base64,{}",
            general_purpose::STANDARD.encode(&result.gif)
        ),
        frames,
        frame_count: result.frame_count,
        duration: result.duration_seconds,
    }))
}
