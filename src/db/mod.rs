//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! The [`SongStore`] trait is the persistence contract; [`SqliteSongStore`]
//! is the production implementation. Keeping the contract abstract lets the
//! service layer run against an in-memory fake in tests.
//!
//! # Example
//!
//! ```ignore
//! use songshelf::db::{init_db, SqliteSongStore};
//!
//! let pool = init_db("sqlite:songshelf.db").await?;
//! let store = SqliteSongStore::new(pool);
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use crate::model::{Song, SongInput};

/// Columns selected for every [`Song`] read.
const SONG_COLUMNS: &str =
    "id, group_name, title, release_date, text, link, created_at, updated_at, deleted_at";

/// Equality filter for listing songs.
///
/// Only the recognized fields can be filtered on; there is no way to express
/// an unrecognized filter key, so unknown keys are ignored by construction.
#[derive(Debug, Clone, Default)]
pub struct SongFilter {
    /// Exact match on group name
    pub group: Option<String>,
    /// Exact match on song title
    pub title: Option<String>,
}

/// Persistence contract for song records.
///
/// All operations see only non-deleted rows; soft-deleted rows stay in the
/// table but are unreachable through this trait.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// List non-deleted songs matching `filter`, ordered by id.
    ///
    /// Pagination is offset-based: skips `(page - 1) * page_size` matching
    /// rows and returns up to `page_size`. Callers pass `page >= 1`.
    async fn list(
        &self,
        filter: &SongFilter,
        page: u32,
        page_size: u32,
    ) -> sqlx::Result<Vec<Song>>;

    /// Get a song by id, or `None` if no non-deleted row exists.
    async fn get_by_id(&self, id: i64) -> sqlx::Result<Option<Song>>;

    /// Insert a new song. Identifier and timestamps are assigned here.
    async fn insert(&self, input: &SongInput) -> sqlx::Result<Song>;

    /// Overwrite all mutable fields of the target row.
    ///
    /// Full-replace semantics: every field in `input` is written, including
    /// empty ones. Returns `false` when no non-deleted row matched.
    async fn update(&self, id: i64, input: &SongInput) -> sqlx::Result<bool>;

    /// Mark a song deleted. Returns `false` when no non-deleted row matched.
    async fn soft_delete(&self, id: i64) -> sqlx::Result<bool>;
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// SQLite-backed [`SongStore`].
#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn list(
        &self,
        filter: &SongFilter,
        page: u32,
        page_size: u32,
    ) -> sqlx::Result<Vec<Song>> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE deleted_at IS NULL"
        ));
        if let Some(ref group) = filter.group {
            query.push(" AND group_name = ").push_bind(group);
        }
        if let Some(ref title) = filter.title {
            query.push(" AND title = ").push_bind(title);
        }
        query.push(" ORDER BY id LIMIT ").push_bind(i64::from(page_size));
        query.push(" OFFSET ").push_bind(offset);

        query.build_query_as::<Song>().fetch_all(&self.pool).await
    }

    async fn get_by_id(&self, id: i64) -> sqlx::Result<Option<Song>> {
        sqlx::query_as::<_, Song>(&format!(
            "SELECT {SONG_COLUMNS} FROM songs WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, input: &SongInput) -> sqlx::Result<Song> {
        let now = Utc::now();

        sqlx::query_as::<_, Song>(&format!(
            r#"
            INSERT INTO songs (group_name, title, release_date, text, link, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {SONG_COLUMNS}
            "#
        ))
        .bind(&input.group_name)
        .bind(&input.title)
        .bind(&input.release_date)
        .bind(&input.text)
        .bind(&input.link)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i64, input: &SongInput) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE songs
            SET group_name = ?, title = ?, release_date = ?, text = ?, link = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&input.group_name)
        .bind(&input.title)
        .bind(&input.release_date)
        .bind(&input.text)
        .bind(&input.link)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("UPDATE songs SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
