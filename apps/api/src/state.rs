use reqwest::Client;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for CV downloads. Bounded timeout so a hung origin cannot
    /// pin a request forever.
    pub http: Client,
    pub llm: LlmClient,
    /// Retained for handlers that need runtime settings; currently only read
    /// at startup.
    #[allow(dead_code)]
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            llm: LlmClient::new(config.anthropic_api_key.clone()),
            config,
        }
    }
}
