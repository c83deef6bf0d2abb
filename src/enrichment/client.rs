//! Song info HTTP client
//!
//! Handles communication with the external song info service. The contract
//! is a single endpoint: `GET {base}/info?group=&song=`.
//!
//! No retry, no caching, no timeout override beyond the transport default -
//! a failed enrichment call simply fails the add-song request.

use super::domain::{ProviderError, SongMetadata};
use super::{adapter, dto};

/// Song info API client
pub struct SongInfoClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SongInfoClient {
    /// Create a new client against the given base URL.
    ///
    /// The client sends a User-Agent header identifying the application.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true) // Accept gzip-compressed responses
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch song details for a group and title.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Unavailable`] if the request cannot be sent
    /// - [`ProviderError::Status`] if the response status is not success
    /// - [`ProviderError::Decode`] if the body is not the expected JSON shape
    pub async fn fetch(&self, group: &str, title: &str) -> Result<SongMetadata, ProviderError> {
        let detail = self.send_info_request(group, title).await?;
        Ok(adapter::to_metadata(detail))
    }

    /// Send the HTTP request and parse the response
    async fn send_info_request(
        &self,
        group: &str,
        title: &str,
    ) -> Result<dto::SongDetail, ProviderError> {
        let url = format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(title)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<dto::SongDetail>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
