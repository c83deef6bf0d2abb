//! Song service - orchestrates the store and the metadata provider.
//!
//! This is the only place business rules live:
//! - page/limit defaulting for listing
//! - merging fetched metadata into a new song on add
//! - read-then-overwrite semantics on update
//!
//! Everything else is delegation to [`SongStore`] and [`SongInfoApi`].

use std::sync::Arc;

use crate::db::{SongFilter, SongStore};
use crate::enrichment::{ProviderError, SongInfoApi};
use crate::model::{Song, SongInput};

/// Page number used when the caller supplies zero/absent values.
const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller supplies zero/absent values.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Errors surfaced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No non-deleted song with this identifier
    #[error("song {0} not found")]
    NotFound(i64),

    /// Enrichment call failed; nothing was persisted
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Persistence failure
    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}

/// High-level API over the song library.
///
/// Cheap to clone; holds shared handles to the store and provider, both
/// constructed once at startup.
#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn SongStore>,
    provider: Arc<dyn SongInfoApi>,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, provider: Arc<dyn SongInfoApi>) -> Self {
        Self { store, provider }
    }

    /// List songs, unfiltered, with offset pagination.
    ///
    /// Zero values default to page 1 and page size 10. Filtering by field is
    /// part of the store contract but not exercised here.
    pub async fn list_songs(&self, page: u32, limit: u32) -> Result<Vec<Song>, ServiceError> {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = if limit == 0 { DEFAULT_PAGE_SIZE } else { limit };

        Ok(self.store.list(&SongFilter::default(), page, limit).await?)
    }

    /// Get a song by id.
    pub async fn get_song(&self, id: i64) -> Result<Song, ServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Soft-delete a song by id.
    pub async fn delete_song(&self, id: i64) -> Result<(), ServiceError> {
        if self.store.soft_delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound(id))
        }
    }

    /// Overwrite all mutable fields of an existing song.
    ///
    /// Reads the current record first so a missing id fails before any
    /// write. Identifier and timestamps never come from caller input.
    pub async fn update_song(&self, id: i64, input: SongInput) -> Result<(), ServiceError> {
        self.get_song(id).await?;

        if self.store.update(id, &input).await? {
            Ok(())
        } else {
            // Deleted between the read and the write
            Err(ServiceError::NotFound(id))
        }
    }

    /// Add a new song, enriching it with details from the provider.
    ///
    /// The provider is called first; if it fails, nothing is persisted.
    pub async fn add_song(&self, group: &str, title: &str) -> Result<Song, ServiceError> {
        let metadata = self.provider.fetch(group, title).await?;

        let input = SongInput {
            group_name: group.to_string(),
            title: title.to_string(),
            release_date: metadata.release_date,
            text: metadata.text,
            link: metadata.link,
        };

        let song = self.store.insert(&input).await?;
        tracing::info!(id = song.id, group, title, "added song");
        Ok(song)
    }
}
