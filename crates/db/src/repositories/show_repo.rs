//! Repository for the `shows` table.
//!
//! Shows only ever reach their artist and venue through explicit joins; the
//! listing and detail queries below are the only places that resolve names.

use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::ArtistShow;
use crate::models::show::{CreateShow, Show, ShowListing};
use crate::models::venue::VenueShow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, venue_id, start_time, created_at, updated_at";

/// Provides create and lookup operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// A missing artist or venue surfaces as a foreign key violation.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO shows (artist_id, venue_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let show = sqlx::query_as::<_, Show>(&query)
            .bind(input.artist_id)
            .bind(input.venue_id)
            .bind(input.start_time)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(show)
    }

    /// Find a show by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Show>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shows WHERE id = $1");
        sqlx::query_as::<_, Show>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every show with venue name, artist name and artist image.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows booked at a venue, with the performing artist resolved.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows an artist is booked for, with the venue resolved.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Number of shows starting strictly after `now`.
    pub async fn count_upcoming(pool: &PgPool, now: Timestamp) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE start_time > $1")
            .bind(now)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
