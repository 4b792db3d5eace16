//! Fetcher
//!
//! Single GET against the data endpoint, mapped to frameworks or one
//! undifferentiated error.

use thiserror::Error;

use crate::models::Framework;

/// Any failure while loading frameworks: transport, status or body
#[derive(Debug, Error)]
#[error("Failed to fetch frameworks: {0}")]
pub struct FetchError(String);

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError(format!("malformed response body: {}", e))
    }
}

/// Parse a response body as a JSON array of frameworks, order preserved
pub fn parse_frameworks(body: &str) -> Result<Vec<Framework>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub struct Fetcher {
    endpoint: String,
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// No timeout and no retry: a hung transport hangs this call.
    pub async fn fetch(&self) -> Result<Vec<Framework>, FetchError> {
        match self.request().await {
            Ok(frameworks) => {
                log::info!("[Fetcher] Fetched {} frameworks from the backend", frameworks.len());
                Ok(frameworks)
            }
            Err(e) => {
                log::error!("[Fetcher] {} (endpoint: {})", e, self.endpoint);
                Err(e)
            }
        }
    }

    async fn request(&self) -> Result<Vec<Framework>, FetchError> {
        // Non-2xx fails before the body is read
        let response = self.client.get(&self.endpoint).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_frameworks(&body)
    }
}
