//! Builds a short looping animation from scripted camera-move variants of one
//! scene.

use std::future::Future;

use image::DynamicImage;
use tracing::{info, warn};

use crate::imaging::fit::{self, FitError};
use crate::imaging::gif;
use crate::llm::ProviderError;
use crate::pipeline::prompts::{self, FRAME_DIRECTIVES};

/// Animations are capped at this many frames; longer requested durations
/// stretch the per-frame delay instead of adding frames.
pub const MAX_FRAMES: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("No frames generated")]
    NoFramesGenerated,
    #[error("failed to encode frame: {0}")]
    FrameEncode(#[from] FitError),
    #[error("failed to assemble animation: {0}")]
    GifEncode(#[from] image::ImageError),
}

#[derive(Debug)]
pub struct AnimationResult {
    pub gif: Vec<u8>,
    pub frames: Vec<Vec<u8>>,
    pub frame_count: usize,
    pub duration_seconds: u64,
    pub frame_delay_ms: u32,
}

/// Per-frame delay so the loop spans the requested duration. Recomputed from
/// the count of frames that actually succeeded, so partial failure stretches
/// the surviving frames rather than shortening the loop.
pub fn frame_delay_ms(duration_seconds: u64, frame_count: usize) -> u32 {
    ((duration_seconds as f64 * 1000.0) / frame_count as f64).round() as u32
}

/// Generates up to `min(duration_seconds, 5)` frames via `generate`, fits
/// each to (width, height), and packs the survivors into an infinite-loop
/// GIF. A frame whose call or fit fails is skipped; zero surviving frames is
/// `AnimationError::NoFramesGenerated`.
pub async fn generate_animation<F, Fut>(
    generate: F,
    base_prompt: &str,
    width: u32,
    height: u32,
    duration_seconds: u64,
    platform: &str,
    size_name: &str,
) -> Result<AnimationResult, AnimationError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<u8>, ProviderError>>,
{
    let frame_count = duration_seconds.min(MAX_FRAMES) as usize;
    let mut frames: Vec<DynamicImage> = Vec::with_capacity(frame_count);

    for index in 0..frame_count {
        let directive = FRAME_DIRECTIVES.get(index).copied().unwrap_or("");
        let prompt = prompts::frame_prompt(base_prompt, directive, width, height);
        info!(
            "Generating frame {}/{} for {} {}",
            index + 1,
            frame_count,
            platform,
            size_name
        );

        let bytes = match generate(prompt).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(
                    "Failed to generate frame {} for {} {}: {}",
                    index + 1,
                    platform,
                    size_name,
                    err
                );
                continue;
            }
        };

        match fit::fit_raster(&bytes, width, height) {
            Ok(frame) => frames.push(frame),
            Err(err) => {
                warn!(
                    "Failed to fit frame {} for {} {}: {}",
                    index + 1,
                    platform,
                    size_name,
                    err
                );
            }
        }
    }

    if frames.is_empty() {
        return Err(AnimationError::NoFramesGenerated);
    }

    let delay_ms = frame_delay_ms(duration_seconds, frames.len());
    info!(
        "Creating GIF from {} frames ({}ms per frame)",
        frames.len(),
        delay_ms
    );

    let mut encoded_frames = Vec::with_capacity(frames.len());
    for frame in &frames {
        encoded_frames.push(fit::encode_png(frame)?);
    }
    let gif = gif::encode_looping_gif(&frames, delay_ms)?;

    Ok(AnimationResult {
        gif,
        frame_count: frames.len(),
        frames: encoded_frames,
        duration_seconds,
        frame_delay_ms: delay_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn sample_image_bytes() -> Vec<u8> {
        fit::encode_png(&DynamicImage::new_rgb8(48, 48)).unwrap()
    }

    #[tokio::test]
    async fn five_second_animation_has_five_even_frames() {
        let generate = |_prompt: String| async move { Ok(sample_image_bytes()) };
        let result = generate_animation(generate, "scene", 120, 120, 5, "Meta", "Square")
            .await
            .unwrap();

        assert_eq!(result.frame_count, 5);
        assert_eq!(result.frames.len(), 5);
        assert_eq!(result.frame_delay_ms, 1000);
        assert_eq!(&result.gif[0..4], b"GIF8");
        for frame in &result.frames {
            assert_eq!(&frame[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        }
    }

    #[tokio::test]
    async fn long_durations_cap_at_five_frames() {
        let calls = AtomicUsize::new(0);
        let generate = |_prompt: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(sample_image_bytes()) }
        };
        let result = generate_animation(generate, "scene", 120, 120, 8, "Meta", "Square")
            .await
            .unwrap();

        assert_eq!(result.frame_count, 5);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        // the loop still spans the requested eight seconds
        assert_eq!(result.frame_delay_ms, 1600);
        assert_eq!(result.duration_seconds, 8);
    }

    #[tokio::test]
    async fn partial_failure_recomputes_frame_timing() {
        let calls = AtomicUsize::new(0);
        let generate = |_prompt: String| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 1 || call == 3 {
                    Err(ProviderError::NoImageData)
                } else {
                    Ok(sample_image_bytes())
                }
            }
        };
        let result = generate_animation(generate, "scene", 120, 120, 5, "Meta", "Square")
            .await
            .unwrap();

        assert_eq!(result.frame_count, 3);
        assert_eq!(result.frame_delay_ms, 1667);
    }

    #[tokio::test]
    async fn undecodable_frame_is_skipped_not_substituted() {
        let calls = AtomicUsize::new(0);
        let generate = |_prompt: String| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 0 {
                    Ok(b"garbage".to_vec())
                } else {
                    Ok(sample_image_bytes())
                }
            }
        };
        let result = generate_animation(generate, "scene", 120, 120, 3, "Meta", "Square")
            .await
            .unwrap();

        assert_eq!(result.frame_count, 2);
    }

    #[tokio::test]
    async fn zero_successful_frames_is_an_error() {
        let generate = |_prompt: String| async move { Err(ProviderError::NoImageData) };
        let result = generate_animation(generate, "scene", 120, 120, 5, "Meta", "Square").await;
        assert!(matches!(result, Err(AnimationError::NoFramesGenerated)));
    }

    #[test]
    fn delay_rounds_to_nearest_millisecond() {
        assert_eq!(frame_delay_ms(5, 5), 1000);
        assert_eq!(frame_delay_ms(5, 3), 1667);
        assert_eq!(frame_delay_ms(1, 3), 333);
    }
}
