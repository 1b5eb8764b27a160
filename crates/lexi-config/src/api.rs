use std::env;

use serde::{Deserialize, Serialize};

/// Dictionary service endpoint and credentials. The service fronts an
/// Oxford-style API: `lemmas/en/{word}` and `entries/en/{headword}`, both
/// replying with a `{success, message, payload}` envelope.
#[derive(Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
    /// Bound on each request, in seconds
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXI_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        let app_id = env::var("LEXI_API_APP_ID").unwrap_or_default();
        let app_key = env::var("LEXI_API_APP_KEY").unwrap_or_default();

        let timeout_seconds = env::var("LEXI_API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Self {
            base_url,
            app_id,
            app_key,
            timeout_seconds,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}
