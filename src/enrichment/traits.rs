//! Trait definitions for the external info API client.
//!
//! The trait enables dependency injection and mocking for tests.
//! Production code uses [`SongInfoClient`]; tests substitute mock
//! implementations.

use async_trait::async_trait;

use super::client::SongInfoClient;
use super::domain::{ProviderError, SongMetadata};

/// Trait for song detail lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Fetch song details for a group and title.
    async fn fetch(&self, group: &str, title: &str) -> Result<SongMetadata, ProviderError>;
}

#[async_trait]
impl SongInfoApi for SongInfoClient {
    async fn fetch(&self, group: &str, title: &str) -> Result<SongMetadata, ProviderError> {
        self.fetch(group, title).await
    }
}
