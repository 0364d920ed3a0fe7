//! Fans one approved prompt out into labeled, platform-sized ad images.

use std::future::Future;

use tracing::{info, warn};

use crate::imaging::fit;
use crate::llm::ProviderError;
use crate::pipeline::prompts;
use crate::platform::sizes_for_platform;

/// Candidate images generated per platform size. Product constant, not
/// derived from anything.
pub const VARIATIONS_PER_SIZE: u32 = 2;

#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub platform: String,
    pub size_label: String,
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

/// Generates every (platform, size, variation) asset for `prompt`, calling
/// `generate` once per cell, strictly in order. A failed call drops only its
/// own cell; a fitted image that cannot be produced falls back to the
/// provider's original bytes. The batch itself never fails.
///
/// `generate` is injected so tests can script outcomes; production passes the
/// Gemini image call.
pub async fn generate_assets<F, Fut>(
    generate: F,
    prompt: &str,
    platforms: &[String],
) -> Vec<GeneratedAsset>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<u8>, ProviderError>>,
{
    let mut assets = Vec::new();

    for platform in platforms {
        let sizes = sizes_for_platform(platform);
        for size in sizes {
            for variation in 1..=VARIATIONS_PER_SIZE {
                info!(
                    "Generating {} - {} - Variation {}",
                    platform, size.name, variation
                );
                let augmented = prompts::augment_for_target(prompt, size.width, size.height);

                let bytes = match generate(augmented).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!(
                            "Failed to generate {} {} - Variation {}: {}",
                            platform, size.name, variation, err
                        );
                        continue;
                    }
                };

                let jpeg = match fit::fit_cover(&bytes, size.width, size.height) {
                    Ok(jpeg) => jpeg,
                    Err(err) => {
                        warn!(
                            "Resize failed for {} {} - Variation {}, using original: {}",
                            platform, size.name, variation, err
                        );
                        bytes
                    }
                };

                assets.push(GeneratedAsset {
                    platform: platform.clone(),
                    size_label: format!("{} - Variation {}", size.name, variation),
                    width: size.width,
                    height: size.height,
                    jpeg,
                });
            }
        }
    }

    info!("Generated {} images total", assets.len());
    if assets.is_empty() && !platforms.is_empty() {
        warn!("Every image generation in this batch failed");
    }
    assets
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use image::DynamicImage;

    use super::*;

    fn sample_image_bytes() -> Vec<u8> {
        fit::encode_png(&DynamicImage::new_rgb8(64, 64)).unwrap()
    }

    #[tokio::test]
    async fn meta_batch_yields_six_assets_in_declared_order() {
        let generate = |_prompt: String| async move { Ok(sample_image_bytes()) };
        let assets = generate_assets(generate, "a couple", &["meta".to_string()]).await;

        let labels: Vec<&str> = assets.iter().map(|a| a.size_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Square Feed - Variation 1",
                "Square Feed - Variation 2",
                "Portrait Story - Variation 1",
                "Portrait Story - Variation 2",
                "Landscape - Variation 1",
                "Landscape - Variation 2",
            ]
        );
        assert!(assets.iter().all(|a| a.platform == "meta"));
    }

    #[tokio::test]
    async fn assets_are_fitted_to_their_declared_size() {
        let generate = |_prompt: String| async move { Ok(sample_image_bytes()) };
        let assets = generate_assets(generate, "a couple", &["reddit".to_string()]).await;

        assert_eq!(assets.len(), 4);
        let decoded = image::load_from_memory(&assets[0].jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1200, 628));
    }

    #[tokio::test]
    async fn one_failed_call_drops_only_its_own_cell() {
        // calls are sequential, so a call counter addresses cells
        // deterministically; fail the third call (Portrait Story V1)
        let calls = AtomicUsize::new(0);
        let generate = |_prompt: String| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 2 {
                    Err(ProviderError::NoImageData)
                } else {
                    Ok(sample_image_bytes())
                }
            }
        };

        let assets = generate_assets(generate, "a couple", &["meta".to_string()]).await;
        let labels: Vec<&str> = assets.iter().map(|a| a.size_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Square Feed - Variation 1",
                "Square Feed - Variation 2",
                "Portrait Story - Variation 2",
                "Landscape - Variation 1",
                "Landscape - Variation 2",
            ]
        );
    }

    #[tokio::test]
    async fn all_failures_yield_an_empty_batch_not_an_error() {
        let generate = |_prompt: String| async move { Err(ProviderError::NoImageData) };
        let assets = generate_assets(generate, "a couple", &["meta".to_string()]).await;
        assert!(assets.is_empty());
    }

    #[tokio::test]
    async fn undecodable_image_falls_back_to_original_bytes() {
        let generate = |_prompt: String| async move { Ok(b"not an image".to_vec()) };
        let assets = generate_assets(generate, "a couple", &["pinterest".to_string()]).await;

        assert_eq!(assets.len(), 4);
        assert!(assets.iter().all(|a| a.jpeg == b"not an image"));
    }

    #[tokio::test]
    async fn unknown_platform_uses_meta_table_under_its_own_name() {
        let generate = |_prompt: String| async move { Ok(sample_image_bytes()) };
        let assets = generate_assets(generate, "a couple", &["tiktok".to_string()]).await;

        assert_eq!(assets.len(), 6);
        assert!(assets.iter().all(|a| a.platform == "tiktok"));
        assert_eq!(assets[0].size_label, "Square Feed - Variation 1");
    }
}
