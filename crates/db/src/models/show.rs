//! Show entity model and DTOs.

use fyyur_core::error::CoreError;
use fyyur_core::schedule::parse_start_time;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::serialize_start_time;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for inserting a show.
#[derive(Debug, Clone)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// Show form submission. `start_time` is free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: Option<DbId>,
    pub venue_id: Option<DbId>,
    pub start_time: Option<String>,
}

impl ShowForm {
    /// Check that both references are present and parse the start time.
    ///
    /// Whether the referenced artist and venue exist is left to the
    /// foreign keys.
    pub fn validate(&self) -> Result<CreateShow, CoreError> {
        let artist_id = self
            .artist_id
            .ok_or_else(|| CoreError::Validation("Artist ID is required".to_string()))?;
        let venue_id = self
            .venue_id
            .ok_or_else(|| CoreError::Validation("Venue ID is required".to_string()))?;
        let start_time = parse_start_time(self.start_time.as_deref().unwrap_or_default())?;

        Ok(CreateShow {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

/// A row of the show listing, with both sides of the booking resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "serialize_start_time")]
    pub start_time: Timestamp,
}
