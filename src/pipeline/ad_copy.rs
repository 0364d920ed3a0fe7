//! Parses the ad-copy JSON the text provider returns, with a fixed fallback
//! when the output is not usable JSON.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::platform::{FALLBACK_AD_BODY, FALLBACK_AD_CTA};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub headline: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cta: String,
}

/// Models routinely wrap "JSON only" answers in Markdown code fences.
fn strip_code_fences(raw: &str) -> String {
    let json_fence = Regex::new(r"```json\s*").unwrap();
    let fence = Regex::new(r"```\s*").unwrap();
    let cleaned = json_fence.replace_all(raw, "");
    let cleaned = fence.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

fn fallback(cleaned: &str) -> AdCopy {
    AdCopy {
        headline: cleaned.chars().take(100).collect(),
        body: FALLBACK_AD_BODY.to_string(),
        description: None,
        cta: FALLBACK_AD_CTA.to_string(),
    }
}

/// Turns raw provider output into an `AdCopy`. Output that is not valid JSON
/// for the expected shape becomes a default object built from the truncated
/// raw text, never an error.
pub fn parse_ad_copy(raw: &str) -> AdCopy {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str::<AdCopy>(&cleaned).unwrap_or_else(|_| fallback(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_parses() {
        let raw = r#"{"headline":"Protect Her Ring","body":"Coverage in minutes.","cta":"Get a Quote"}"#;
        let copy = parse_ad_copy(raw);
        assert_eq!(copy.headline, "Protect Her Ring");
        assert_eq!(copy.description, None);
        assert_eq!(copy.cta, "Get a Quote");
    }

    #[test]
    fn fenced_json_parses() {
        let raw = "```json\n{\"headline\":\"H\",\"body\":\"B\",\"description\":\"D\",\"cta\":\"C\"}\n```";
        let copy = parse_ad_copy(raw);
        assert_eq!(copy.headline, "H");
        assert_eq!(copy.description.as_deref(), Some("D"));
    }

    #[test]
    fn malformed_output_yields_fallback_object() {
        let raw = "Sure! Here is some great ad copy for your campaign.";
        let copy = parse_ad_copy(raw);
        assert_eq!(copy.headline, raw);
        assert_eq!(copy.body, FALLBACK_AD_BODY);
        assert_eq!(copy.cta, FALLBACK_AD_CTA);
    }

    #[test]
    fn fallback_headline_is_truncated_to_100_chars() {
        let raw = "x".repeat(250);
        let copy = parse_ad_copy(&raw);
        assert_eq!(copy.headline.chars().count(), 100);
    }

    #[test]
    fn json_missing_required_fields_falls_back() {
        let raw = r#"{"headline":"only a headline"}"#;
        let copy = parse_ad_copy(raw);
        assert_eq!(copy.body, FALLBACK_AD_BODY);
        assert!(copy.headline.contains("only a headline"));
    }
}
