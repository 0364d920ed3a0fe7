use std::env;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub anthropic_api_key: String,
    pub openai_api_key: String,
    pub gemini_api_key: String,
    pub claude_model: String,
    pub openai_model: String,
    pub gemini_image_model: String,
    pub text_max_tokens: u32,
    pub text_temperature: f32,
    pub request_timeout_seconds: u64,
    pub static_dir: String,
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn required_key(name: &str) -> Result<String> {
    let value = env::var(name).unwrap_or_default();
    if value.trim().is_empty() {
        return Err(anyhow::anyhow!("{name} is required"));
    }
    Ok(value)
}

impl Config {
    /// Loads configuration from the environment. A missing provider credential
    /// is a startup error; the server must not begin serving without it.
    pub fn load() -> Result<Self> {
        Ok(Config {
            host: env_string("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3000),
            anthropic_api_key: required_key("ANTHROPIC_API_KEY")?,
            openai_api_key: required_key("OPENAI_API_KEY")?,
            gemini_api_key: required_key("GEMINI_API_KEY")?,
            claude_model: env_string("CLAUDE_MODEL", "claude-sonnet-4-5-20250929"),
            openai_model: env_string("OPENAI_MODEL", "gpt-4o"),
            gemini_image_model: env_string("GEMINI_IMAGE_MODEL", "gemini-2.5-flash-image"),
            text_max_tokens: env_u32("TEXT_MAX_TOKENS", 500),
            text_temperature: env_f32("TEXT_TEMPERATURE", 0.7),
            request_timeout_seconds: env_u64("REQUEST_TIMEOUT_SECONDS", 90),
            static_dir: env_string("STATIC_DIR", "static"),
        })
    }
}
