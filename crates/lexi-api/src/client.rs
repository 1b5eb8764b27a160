use std::time::Duration;

use crate::{ApiError, ApiResponse, Dictionary};

#[derive(Clone)]
pub struct DictApiClient {
    base_url: String,
    app_id: String,
    app_key: String,
    client: reqwest::Client,
}

impl DictApiClient {
    pub fn new(
        base_url: String,
        app_id: String,
        app_key: String,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            app_id,
            app_key,
            client,
        })
    }

    async fn fetch(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url.trim_end_matches('/'), path))
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(response.status()));
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Dictionary for DictApiClient {
    async fn lemmas(&self, word: &str) -> Result<ApiResponse, ApiError> {
        self.fetch(&format!("lemmas/en/{}", word.trim())).await
    }

    async fn definition(&self, headword: &str) -> Result<ApiResponse, ApiError> {
        self.fetch(&format!("entries/en/{}", headword.trim())).await
    }
}
