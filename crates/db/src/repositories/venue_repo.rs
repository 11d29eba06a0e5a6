//! Repository for the `venues` table.

use fyyur_core::forms::DEFAULT_VENUE_SEEKING_DESCRIPTION;
use fyyur_core::schedule::partition_by_time;
use fyyur_core::search::contains_pattern;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::listing::{ListingEntry, SearchHit, SearchResults};
use crate::models::venue::{Venue, VenueDetail, VenueForm, VenueLocation};
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
    facebook_link, website, seeking_talent, seeking_description, created_at, updated_at";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    ///
    /// `seeking_description` falls back to the default text when omitted.
    pub async fn create(pool: &PgPool, input: &VenueForm) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO venues
                (name, city, state, address, phone, genres, image_link, facebook_link,
                 website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent())
            .bind(
                input
                    .seeking_description
                    .as_deref()
                    .unwrap_or(DEFAULT_VENUE_SEEKING_DESCRIPTION),
            )
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues ORDER BY id");
        sqlx::query_as::<_, Venue>(&query).fetch_all(pool).await
    }

    /// Id and name of every venue, in insertion order.
    pub async fn list_entries(pool: &PgPool) -> Result<Vec<ListingEntry>, sqlx::Error> {
        sqlx::query_as::<_, ListingEntry>("SELECT id, name FROM venues ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Most recently listed venues, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ListingEntry>, sqlx::Error> {
        sqlx::query_as::<_, ListingEntry>(
            "SELECT id, name FROM venues ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Every venue with its city, state and number of shows after `now`.
    pub async fn list_with_upcoming(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueLocation>, sqlx::Error> {
        sqlx::query_as::<_, VenueLocation>(
            "SELECT v.id, v.name, v.city, v.state,
                    COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             GROUP BY v.id
             ORDER BY v.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<SearchResults, sqlx::Error> {
        let hits = sqlx::query_as::<_, SearchHit>(
            "SELECT v.id, v.name,
                    COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
             FROM venues v
             LEFT JOIN shows s ON s.venue_id = v.id
             WHERE v.name ILIKE $1
             GROUP BY v.id
             ORDER BY v.name, v.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await?;
        Ok(SearchResults::from(hits))
    }

    /// Load a venue together with its shows split around `now`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<VenueDetail>, sqlx::Error> {
        let Some(venue) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_venue(pool, venue.id).await?;
        let split = partition_by_time(shows, now);

        Ok(Some(VenueDetail {
            venue,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        }))
    }

    /// Overwrite every mutable column of a venue with the submitted form.
    ///
    /// The row is locked for the duration of the transaction. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueForm,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            tracing::debug!(venue_id = id, "Venue to update does not exist");
            return Ok(None);
        }

        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                image_link = $8,
                facebook_link = $9,
                website = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.genres)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(input.seeking_talent())
            .bind(&input.seeking_description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(venue))
    }

    /// Permanently delete a venue and, by cascade, its shows.
    ///
    /// Returns the deleted venue's name, or `None` if no row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(String,)> =
            sqlx::query_as("DELETE FROM venues WHERE id = $1 RETURNING name")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(deleted.map(|(name,)| name))
    }
}
