//! Prompt templates sent to the text and image providers. Wording is part of
//! the product: the aspect and branding clauses steer the generated
//! composition, so the strings stay exactly as deployed.

use crate::aspect::classify;
use crate::platform::{copy_specs_for_platform, BRAND_GUIDELINES, BRAND_VOICE};

/// Scripted camera moves used to build animation frames, in frame order. The
/// first entry is the unmodified base composition.
pub const FRAME_DIRECTIVES: [&str; 5] = [
    "",
    "Zoom in slightly to show more detail on the jewelry",
    "Pan slightly to the right to show the couple's connection",
    "Zoom out slightly for a wider view",
    "Return to original composition",
];

/// Context given to the text provider when asking it to write an image
/// generation prompt for a campaign.
pub fn image_prompt_context(campaign_text: &str, platforms: &[String]) -> String {
    format!(
        "You are an expert at creating image generation prompts for AI models.\n\n\
         Create an image generation prompt for BriteCo jewelry insurance ads for {}.\n\n\
         Campaign context: {}\n\n\
         {}\n\
         Generate ONE detailed, creative prompt (200 words max) for Nano Banana (Google Gemini) image generator. Make it specific, visual, and actionable.",
        platforms.join(", "),
        campaign_text,
        BRAND_GUIDELINES
    )
}

/// Appends the framing, composition, and negative-branding instructions for a
/// concrete target size. Branding is composited downstream, so the generator
/// is told to produce photography only.
pub fn augment_for_target(prompt: &str, width: u32, height: u32) -> String {
    let hints = classify(width, height);
    format!(
        "{prompt}\n\nIMPORTANT: Compose this image specifically for {}. Use {}. Frame: {width}x{height}px.\n\n\
         Do NOT include any company logos, brand marks, watermarks, or text overlays in the image. Generate photography only without any branding elements.",
        hints.framing, hints.composition
    )
}

/// Prompt for one animation frame: base prompt plus the camera-move
/// directive, then the same per-size augmentation as the still assets.
pub fn frame_prompt(base_prompt: &str, directive: &str, width: u32, height: u32) -> String {
    let combined = format!("{base_prompt}\n\n{directive}");
    augment_for_target(combined.trim(), width, height)
}

/// Context given to the text provider when asking for platform ad copy. Meta
/// gets the four-field shape with a description; other platforms get three.
pub fn ad_copy_context(
    platform: &str,
    size_name: &str,
    campaign_text: &str,
    text_overlay: &str,
) -> String {
    let platform_upper = platform.to_uppercase();
    let specs = copy_specs_for_platform(platform);

    let header = format!(
        "You are an expert social media copywriter for BriteCo jewelry insurance.\n\n\
         Generate ad copy for a {platform_upper} ad campaign.\n\n\
         Campaign context: {campaign_text}\n\
         Text overlay on image: \"{text_overlay}\"\n\
         Ad size: {size_name}\n\n\
         Platform specifications for {platform_upper}:\n{specs}\n\n\
         {BRAND_VOICE}\n"
    );

    if platform.to_lowercase() == "meta" {
        format!(
            "{header}\n\
             Generate:\n\
             1. Headline (stay within 27 characters)\n\
             2. Primary text (engaging, benefit-focused, first 125 chars are most visible)\n\
             3. Description (stay within 27 characters, appears below primary text)\n\
             4. Call-to-action suggestion\n\n\
             Return as JSON:\n\
             {{\n  \"headline\": \"...\",\n  \"body\": \"...\",\n  \"description\": \"...\",\n  \"cta\": \"...\"\n}}\n\n\
             Return ONLY the JSON, no other text."
        )
    } else {
        format!(
            "{header}\n\
             Generate:\n\
             1. Headline (stay within character limits)\n\
             2. Primary text/body copy (engaging, benefit-focused)\n\
             3. Call-to-action suggestion\n\n\
             Return as JSON:\n\
             {{\n  \"headline\": \"...\",\n  \"body\": \"...\",\n  \"cta\": \"...\"\n}}\n\n\
             Return ONLY the JSON, no other text."
        )
    }
}
