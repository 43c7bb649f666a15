/// YouTube Music catalog provider
///
/// Thin HTTP client over the catalog search service. Returns the provider's
/// hits unparsed; reshaping and per-hit validation happen in the search
/// adapter.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    services::providers::CatalogProvider,
};

/// Timeout for outbound catalog requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct YtMusicCatalog {
    http_client: HttpClient,
    api_url: String,
}

impl YtMusicCatalog {
    /// Creates a catalog provider against the given base URL
    pub fn new(api_url: String) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AppError::HttpClient)?;

        Ok(Self {
            http_client,
            api_url,
        })
    }

    /// Pull the hit array out of the provider payload.
    ///
    /// The service returns either a bare array of hits or a `{"results": [...]}`
    /// envelope depending on the deployment.
    fn hits_from_payload(payload: Value) -> AppResult<Vec<Value>> {
        match payload {
            Value::Array(hits) => Ok(hits),
            Value::Object(mut fields) => match fields.remove("results") {
                Some(Value::Array(hits)) => Ok(hits),
                _ => Err(AppError::ExternalApi(
                    "Invalid catalog response format".to_string(),
                )),
            },
            _ => Err(AppError::ExternalApi(
                "Invalid catalog response format".to_string(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for YtMusicCatalog {
    async fn search_songs(&self, query: &str, limit: usize) -> AppResult<Vec<Value>> {
        let url = format!("{}/search", self.api_url);
        let limit = limit.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", query),
                ("filter", "songs"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        Self::hits_from_payload(payload)
    }
}
