//! Core data model for the song library.
//!
//! [`Song`] is the persisted entity; [`SongInput`] is the caller-writable
//! subset used for inserts and full-field updates. Both keep the wire names
//! of the public API (`group`, `song`, `releaseDate`) while using clearer
//! field names internally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song in the library.
///
/// Maps to the `songs` table. The soft-delete marker is never serialized:
/// deleted rows are invisible to API consumers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Song {
    /// Database ID (auto-generated, immutable)
    pub id: i64,
    /// Creation time, set by the store
    pub created_at: DateTime<Utc>,
    /// Last-update time, set by the store
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Performing group or artist
    #[serde(rename = "group")]
    pub group_name: String,
    /// Song title
    #[serde(rename = "song")]
    pub title: String,
    /// Free-form display date, not parsed or validated
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    /// Lyrics; verses are separated by a blank line
    pub text: String,
    /// Reference URL, not validated
    pub link: String,
}

/// The caller-writable fields of a [`Song`].
///
/// This is the PUT body shape and the insert payload. Fields absent from an
/// inbound body decode as empty strings; identifier and timestamps are never
/// taken from caller input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongInput {
    #[serde(rename = "group")]
    pub group_name: String,
    #[serde(rename = "song")]
    pub title: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub text: String,
    pub link: String,
}
