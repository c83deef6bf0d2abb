//! Test utilities and fixtures for songshelf tests.
//!
//! Provides the temp-database helper, an in-memory [`SongStore`] fake for
//! service and handler tests, and canonical fixture values shared across
//! test modules.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;

use crate::db::{SongFilter, SongStore, SqliteSongStore, init_db};
use crate::enrichment::SongMetadata;
use crate::model::{Song, SongInput};

/// Creates a temporary database for testing.
///
/// The database lives in a temporary directory that is cleaned up when the
/// returned `TempDir` is dropped; keep it alive for the duration of the test.
/// Migrations are run automatically.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let pool = init_db(&db_url)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// A [`SqliteSongStore`] over a temporary database.
pub async fn temp_store() -> (SqliteSongStore, TempDir) {
    let (pool, dir) = temp_db().await;
    (SqliteSongStore::new(pool), dir)
}

/// A [`SongInput`] with sensible non-empty defaults.
pub fn sample_input(group: &str, title: &str) -> SongInput {
    SongInput {
        group_name: group.to_string(),
        title: title.to_string(),
        release_date: "01.01.2000".to_string(),
        text: "First verse\n\nSecond verse".to_string(),
        link: "https://example.com/song".to_string(),
    }
}

/// The canonical provider stub response.
pub fn stub_metadata() -> SongMetadata {
    SongMetadata {
        release_date: "16.07.2006".to_string(),
        text: "Ooh baby, don't you know I suffer?".to_string(),
        link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
    }
}

/// In-memory [`SongStore`] fake.
///
/// Implements the same contract as the SQLite store over a `Vec`, so the
/// service and handlers can be tested without touching disk.
pub struct MemorySongStore {
    songs: Mutex<Vec<Song>>,
    next_id: AtomicI64,
}

impl MemorySongStore {
    pub fn new() -> Self {
        Self {
            songs: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of non-deleted songs.
    pub fn len(&self) -> usize {
        self.songs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .count()
    }
}

impl Default for MemorySongStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn list(
        &self,
        filter: &SongFilter,
        page: u32,
        page_size: u32,
    ) -> sqlx::Result<Vec<Song>> {
        let offset = page.saturating_sub(1) as usize * page_size as usize;
        let songs = self.songs.lock().unwrap();

        Ok(songs
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .filter(|s| filter.group.as_ref().is_none_or(|g| &s.group_name == g))
            .filter(|s| filter.title.as_ref().is_none_or(|t| &s.title == t))
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> sqlx::Result<Option<Song>> {
        let songs = self.songs.lock().unwrap();
        Ok(songs
            .iter()
            .find(|s| s.id == id && s.deleted_at.is_none())
            .cloned())
    }

    async fn insert(&self, input: &SongInput) -> sqlx::Result<Song> {
        let now = Utc::now();
        let song = Song {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            group_name: input.group_name.clone(),
            title: input.title.clone(),
            release_date: input.release_date.clone(),
            text: input.text.clone(),
            link: input.link.clone(),
        };
        self.songs.lock().unwrap().push(song.clone());
        Ok(song)
    }

    async fn update(&self, id: i64, input: &SongInput) -> sqlx::Result<bool> {
        let mut songs = self.songs.lock().unwrap();
        match songs.iter_mut().find(|s| s.id == id && s.deleted_at.is_none()) {
            Some(song) => {
                song.group_name = input.group_name.clone();
                song.title = input.title.clone();
                song.release_date = input.release_date.clone();
                song.text = input.text.clone();
                song.link = input.link.clone();
                song.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn soft_delete(&self, id: i64) -> sqlx::Result<bool> {
        let mut songs = self.songs.lock().unwrap();
        match songs.iter_mut().find(|s| s.id == id && s.deleted_at.is_none()) {
            Some(song) => {
                song.deleted_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;
        let store = SqliteSongStore::new(pool);

        let songs = store.list(&SongFilter::default(), 1, 10).await.unwrap();
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_matches_contract() {
        let store = MemorySongStore::new();

        let song = store.insert(&sample_input("Muse", "Hysteria")).await.unwrap();
        assert_eq!(song.id, 1);
        assert_eq!(store.len(), 1);

        assert!(store.get_by_id(song.id).await.unwrap().is_some());
        assert!(store.soft_delete(song.id).await.unwrap());
        assert!(store.get_by_id(song.id).await.unwrap().is_none());
        assert_eq!(store.len(), 0);
        assert!(!store.soft_delete(song.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_memory_store_filters_and_paginates() {
        let store = MemorySongStore::new();
        for i in 0..5 {
            store
                .insert(&sample_input("Muse", &format!("Song {i}")))
                .await
                .unwrap();
        }
        store.insert(&sample_input("Queen", "Song Q")).await.unwrap();

        let filter = SongFilter {
            group: Some("Muse".to_string()),
            ..Default::default()
        };
        let page1 = store.list(&filter, 1, 3).await.unwrap();
        let page2 = store.list(&filter, 2, 3).await.unwrap();
        assert_eq!(page1.len(), 3);
        assert_eq!(page2.len(), 2);
        assert!(page1.iter().chain(&page2).all(|s| s.group_name == "Muse"));
    }
}
