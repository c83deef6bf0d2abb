//! HTTP API endpoint handlers.
//!
//! Handlers are thin: parse and validate request parameters, call the
//! service, serialize the result. The only logic owned here is pagination
//! parameter defaulting at the HTTP edge and lyric-verse segmentation.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::{Song, SongInput};
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/library", get(get_library))
        .route("/song", post(add_song))
        .route("/song/{id}", get(get_song).put(update_song).delete(delete_song))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<u32>,
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct AddSongParams {
    group: Option<String>,
    song: Option<String>,
}

/// Lyrics of one song, split into verses.
#[derive(Debug, Serialize)]
struct SongVerses {
    verses: Vec<String>,
    total: usize,
}

/// `GET /library` - paginated, unfiltered song list.
async fn get_library(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Song>>, ApiError> {
    tracing::info!(page = ?params.page, limit = ?params.limit, "listing library");

    let songs = state
        .service
        .list_songs(params.page.unwrap_or(0), params.limit.unwrap_or(0))
        .await?;
    Ok(Json(songs))
}

/// `GET /song/{id}` - song lyrics split into verses.
async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SongVerses>, ApiError> {
    tracing::info!(id, "fetching song verses");

    let song = state.service.get_song(id).await?;
    let verses = split_verses(&song.text);
    let total = verses.len();
    Ok(Json(SongVerses { verses, total }))
}

/// `POST /song?group=&song=` - add a song, enriched via the external API.
async fn add_song(
    State(state): State<AppState>,
    Query(params): Query<AddSongParams>,
) -> Result<(StatusCode, Json<Song>), ApiError> {
    tracing::info!(group = ?params.group, song = ?params.song, "adding song");

    let group = params.group.unwrap_or_default();
    let title = params.song.unwrap_or_default();
    if group.is_empty() || title.is_empty() {
        return Err(ApiError::Validation(
            "group and song are required".to_string(),
        ));
    }

    let song = state.service.add_song(&group, &title).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// `PUT /song/{id}` - overwrite all mutable fields of a song.
async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<SongInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "updating song");

    let Json(input) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    state.service.update_song(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /song/{id}` - soft-delete a song.
async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(id, "deleting song");

    state.service.delete_song(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Split lyrics into verses on blank-line boundaries.
///
/// Empty text yields a single empty verse; a trailing blank line yields a
/// trailing empty verse. Callers get exactly what the delimiter implies.
fn split_verses(text: &str) -> Vec<String> {
    text.split("\n\n").map(str::to_owned).collect()
}
