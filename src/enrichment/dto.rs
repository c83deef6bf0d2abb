//! Song info API Data Transfer Objects
//!
//! These types match EXACTLY what the external info API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the enrichment module - convert to domain types.
//!
//! The API contract: `GET {base}/info?group=&song=` returns
//! `{"releaseDate": "...", "text": "...", "link": "..."}`.

use serde::{Deserialize, Serialize};

/// `/info` response body.
///
/// Absent keys decode as empty strings; only malformed JSON is a decode
/// failure. This mirrors how lenient the provider's consumers have to be.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SongDetail {
    /// Release date in free-form display format
    pub release_date: String,
    /// Full lyrics text
    pub text: String,
    /// Reference link
    pub link: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
