use std::sync::Arc;

use crate::config::Config;
use crate::llm::claude::ClaudeClient;
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;

/// Shared per-request state. Provider clients are constructed once at startup
/// and passed in explicitly; there is no ambient global configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub claude: ClaudeClient,
    pub openai: OpenAiClient,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let claude = ClaudeClient::new(http.clone(), &config);
        let openai = OpenAiClient::new(http.clone(), &config);
        let gemini = GeminiClient::new(http, &config);
        AppState {
            config: Arc::new(config),
            claude,
            openai,
            gemini,
        }
    }
}
