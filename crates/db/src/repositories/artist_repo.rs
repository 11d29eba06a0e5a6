//! Repository for the `artists` table.

use fyyur_core::forms::DEFAULT_ARTIST_SEEKING_DESCRIPTION;
use fyyur_core::schedule::partition_by_time;
use fyyur_core::search::contains_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistDetail, ArtistForm};
use crate::models::listing::{ListingEntry, SearchHit, SearchResults};
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
    website, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &ArtistForm) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO artists
                (name, city, state, phone, genres, image_link, facebook_link, website,
                 seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue())
            .bind(
                input
                    .seeking_description
                    .as_deref()
                    .unwrap_or(DEFAULT_ARTIST_SEEKING_DESCRIPTION),
            )
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every artist in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Id and name of every artist, in insertion order.
    pub async fn list_entries(pool: &PgPool) -> Result<Vec<ListingEntry>, sqlx::Error> {
        sqlx::query_as::<_, ListingEntry>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Most recently listed artists, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ListingEntry>, sqlx::Error> {
        sqlx::query_as::<_, ListingEntry>(
            "SELECT id, name FROM artists ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<SearchResults, sqlx::Error> {
        let hits = sqlx::query_as::<_, SearchHit>(
            "SELECT a.id, a.name,
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
             FROM artists a
             LEFT JOIN shows s ON s.artist_id = a.id
             WHERE a.name ILIKE $1
             GROUP BY a.id
             ORDER BY a.name, a.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await?;
        Ok(SearchResults::from(hits))
    }

    /// Load an artist together with their shows split around `now`.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_artist(pool, artist.id).await?;
        let split = partition_by_time(shows, now);

        Ok(Some(ArtistDetail {
            artist,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        }))
    }

    /// Overwrite every mutable column of an artist with the submitted form.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistForm,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM artists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            tracing::debug!(artist_id = id, "Artist to update does not exist");
            return Ok(None);
        }

        let query = format!(
            "UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                seeking_venue = $10,
                seeking_description = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_venue())
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(artist))
    }

    /// Permanently delete an artist and, by cascade, their shows.
    ///
    /// Returns the deleted artist's name, or `None` if no row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM artists WHERE id = $1 RETURNING name")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(deleted.map(|(name,)| name))
    }
}
