mod client;

pub use client::DictApiClient;

use serde::Deserialize;

/// Remote dictionary service interface
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Canonical base form(s) of a surface word
    async fn lemmas(&self, word: &str) -> Result<ApiResponse, ApiError>;

    /// Definition entry for a headword
    async fn definition(&self, headword: &str) -> Result<ApiResponse, ApiError>;
}

/// Envelope every dictionary endpoint replies with. `payload` stays an
/// untyped tree; callers navigate it with defaults rather than deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ApiResponse {
    /// Service-reported failure message, empty when none was given
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Http(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(String),
}
