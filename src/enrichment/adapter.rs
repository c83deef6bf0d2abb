//! Adapter layer: Convert info API DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If the provider changes its response format, only this file and dto.rs
//! need to change.

use super::domain::SongMetadata;
use super::dto;

/// Convert an `/info` response to [`SongMetadata`].
pub fn to_metadata(detail: dto::SongDetail) -> SongMetadata {
    SongMetadata {
        release_date: detail.release_date,
        text: detail.text,
        link: detail.link,
    }
}
