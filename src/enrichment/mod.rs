//! Song metadata enrichment - fetches song details from the external info API.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//! - **Client** (`client.rs`) - HTTP client for the external API
//! - **Traits** (`traits.rs`) - Seam for substituting mock providers in tests
//!
//! This decoupling means API changes don't ripple through the codebase, and
//! the service layer can be tested without a running provider.

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod traits;

pub use client::SongInfoClient;
pub use domain::{ProviderError, SongMetadata};
pub use traits::SongInfoApi;
