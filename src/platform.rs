//! Platform ad-size tables, copywriting specs, and brand constants.
//!
//! The size tables are part of the public contract with the UI and must stay
//! byte-for-byte compatible with the existing deployment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSizeSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

const META_SIZES: &[PlatformSizeSpec] = &[
    PlatformSizeSpec { name: "Square Feed", width: 1080, height: 1080 },
    PlatformSizeSpec { name: "Portrait Story", width: 1080, height: 1920 },
    PlatformSizeSpec { name: "Landscape", width: 1200, height: 1200 },
];

const REDDIT_SIZES: &[PlatformSizeSpec] = &[
    PlatformSizeSpec { name: "Feed", width: 1200, height: 628 },
    PlatformSizeSpec { name: "Square", width: 960, height: 960 },
];

const PINTEREST_SIZES: &[PlatformSizeSpec] = &[
    PlatformSizeSpec { name: "Standard Pin", width: 1000, height: 1500 },
    PlatformSizeSpec { name: "Square", width: 1000, height: 1000 },
];

/// Case-insensitive size-table lookup. Unknown platforms fall back to the
/// meta table, matching the existing behavior the UI depends on.
pub fn sizes_for_platform(platform: &str) -> &'static [PlatformSizeSpec] {
    match platform.to_lowercase().as_str() {
        "reddit" => REDDIT_SIZES,
        "pinterest" => PINTEREST_SIZES,
        _ => META_SIZES,
    }
}

/// Copywriting constraints quoted into the ad-copy prompt for a platform.
pub fn copy_specs_for_platform(platform: &str) -> &'static str {
    match platform.to_lowercase().as_str() {
        "reddit" => {
            "headline_limit: 300, body_limit: 500, best_practices: Be authentic and conversational. Redditors value transparency and community."
        }
        "pinterest" => {
            "title_limit: 100, title_visible: 40, description_limit: 500, best_practices: Focus on aspirational, visual language. Pinterest is about inspiration and discovery."
        }
        _ => {
            "headline_limit: 27, primary_text_visible: 125, description_limit: 27, best_practices: Front-load value proposition in first 30 characters. Use emojis sparingly."
        }
    }
}

pub const BRAND_GUIDELINES: &str = "\
BriteCo Brand Guidelines:
- Colors: Turquoise (#31D7CA), Navy (#272D3F), Orange (#FC883A)
- Style: Modern, clean, optimistic, trustworthy
- Target: Millennials and Gen Z engaged couples
- Photography: Warm lighting, diverse couples, genuine moments
- No gradients - solid colors only
- Gilroy font family

Requirements for ads:
- Show happy couple with engagement ring or jewelry
- Warm, natural lighting
- Modern, clean aesthetic
- Include turquoise color accent somewhere
- Professional photography quality
- Authentic, candid moment (not too posed)
- Diverse representation
";

pub const BRAND_VOICE: &str = "\
BriteCo Brand Voice:
- Modern, trustworthy, optimistic
- Target: Millennials and Gen Z engaged couples
- Focus on peace of mind and protecting what matters
- Turquoise (#31D7CA), Navy (#272D3F), Orange (#FC883A) brand colors";

pub const FALLBACK_AD_BODY: &str =
    "Protect what matters most with BriteCo jewelry insurance.";

pub const FALLBACK_AD_CTA: &str = "Get Protected";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_table_order_is_declared_order() {
        let sizes = sizes_for_platform("meta");
        let names: Vec<&str> = sizes.iter().map(|size| size.name).collect();
        assert_eq!(names, vec!["Square Feed", "Portrait Story", "Landscape"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(sizes_for_platform("Pinterest"), PINTEREST_SIZES);
        assert_eq!(sizes_for_platform("REDDIT"), REDDIT_SIZES);
    }

    #[test]
    fn unknown_platform_falls_back_to_meta() {
        assert_eq!(sizes_for_platform("tiktok"), META_SIZES);
        assert_eq!(sizes_for_platform(""), META_SIZES);
    }

    #[test]
    fn all_declared_sizes_are_positive() {
        for platform in ["meta", "reddit", "pinterest"] {
            for size in sizes_for_platform(platform) {
                assert!(size.width > 0 && size.height > 0, "{}", size.name);
            }
        }
    }
}
