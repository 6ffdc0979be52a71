//! Genius HTTP client
//!
//! Handles communication with the Genius web service.
//! See: https://docs.genius.com
//!
//! Authentication is a bearer access token supplied out-of-band; the client
//! never reads environment or files itself. Every request shares one
//! reqwest client with a 15-second timeout - exceeding it surfaces as a
//! transport failure, never a hang.

use std::time::Duration;

use super::{adapter, dto};
use crate::resolver::domain::{CandidateHit, ResolveError, ResolvedArtist};

/// Per-request timeout. Genius publishes no latency SLO; anything slower
/// than this is treated as a failed call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Genius API client
pub struct GeniusClient {
    access_token: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl GeniusClient {
    /// Create a new client with the given access token.
    ///
    /// The client accepts gzip-compressed responses and sends a User-Agent
    /// identifying the application.
    pub fn new(access_token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            access_token: access_token.into(),
            http_client,
            base_url: "https://api.genius.com".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for a free-text query and return the candidate artists.
    pub async fn search(&self, query: &str) -> Result<Vec<CandidateHit>, ResolveError> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));
        let response: dto::SearchResponse = self.get_json(&url).await?;
        Ok(adapter::to_candidates(response))
    }

    /// Fetch the full artist record by Genius artist ID.
    pub async fn fetch_artist(&self, id: u64) -> Result<ResolvedArtist, ResolveError> {
        let url = format!("{}/artists/{}", self.base_url, id);
        let response: dto::ArtistResponse = self.get_json(&url).await?;
        Ok(adapter::to_artist(response))
    }

    /// Send a GET request and parse the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ResolveError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ResolveError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse the error envelope for a useful message
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(ResolveError::Api(error.meta.message));
            }
            return Err(ResolveError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ResolveError::Parse(e.to_string()))
    }
}
