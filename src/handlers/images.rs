//! Batch image generation endpoint: one prompt fanned out across every
//! selected platform's size variants.

use axum::extract::State;
use axum::Json;
use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::handlers::ApiFailure;
use crate::pipeline::assets::generate_assets;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateImagesRequest {
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    platforms: Vec<String>,
}

#[derive(Serialize)]
pub struct ImageAsset {
    platform: String,
    size: String,
    width: u32,
    height: u32,
    url: String,
}

#[derive(Serialize)]
pub struct GenerateImagesResponse {
    success: bool,
    images: Vec<ImageAsset>,
    generated_at: String,
}

pub async fn generate_images_handler(
    State(state): State<AppState>,
    Json(request): Json<GenerateImagesRequest>,
) -> Result<Json<GenerateImagesResponse>, ApiFailure> {
    if request.prompt.trim().is_empty() {
        return Err(ApiFailure::bad_request("prompt must not be empty"));
    }
    if request.platforms.is_empty() {
        return Err(ApiFailure::bad_request("platforms must not be empty"));
    }

    info!("Generate images request: platforms={:?}", request.platforms);

    let gemini = state.gemini.clone();
    let generate = move |prompt: String| {
        let gemini = gemini.clone();
        async move { gemini.generate_image(&prompt).await }
    };

    let assets = generate_assets(generate, &request.prompt, &request.platforms).await;

    // An all-failed batch still reports success with an empty gallery; the
    // per-cell failures are already logged with their platform and size.
    let images = assets
        .into_iter()
        .map(|asset| ImageAsset {
            platform: asset.platform,
            size: asset.size_label,
            width: asset.width,
            height: asset.height,
            url: format!(
                "data:image/jpeg;base64,{}",
                general_purpose::STANDARD.encode(&asset.jpeg)
            ),
        })
        .collect();

    Ok(Json(GenerateImagesResponse {
        success: true,
        images,
        generated_at: Utc::now().to_rfc3339(),
    }))
}
