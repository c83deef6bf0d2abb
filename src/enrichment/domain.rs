//! Internal domain models for song enrichment.
//!
//! These types are OUR types - they don't change when the external API
//! changes. API responses get converted into them via the adapter.

/// Song details fetched from the external provider.
///
/// Ephemeral: never persisted on its own, always merged into a new
/// [`Song`](crate::model::Song) at creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongMetadata {
    /// Free-form display date (e.g. "16.07.2006")
    pub release_date: String,
    /// Full lyrics text, verses separated by blank lines
    pub text: String,
    /// Reference link
    pub link: String,
}

/// Errors that can occur while fetching song details.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The network call could not be completed
    #[error("metadata provider unreachable: {0}")]
    Unavailable(String),

    /// The provider answered with a non-success status
    #[error("metadata provider returned HTTP {0}")]
    Status(u16),

    /// The response body was not valid data of the expected shape
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}
