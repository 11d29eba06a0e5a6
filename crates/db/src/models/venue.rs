//! Venue entity model, form DTO and view models.

use fyyur_core::directory::{Area, Located};
use fyyur_core::forms::seeking_flag;
use fyyur_core::schedule::Scheduled;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::serialize_start_time;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Venue form submission, used for both create and edit.
///
/// Every field is optional at the wire level. An edit overwrites every
/// column with what was submitted, so omitted fields are cleared (or rejected
/// by the schema for the required ones).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    /// Raw checkbox value; only `"y"` means seeking.
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn seeking_talent(&self) -> bool {
        seeking_flag(self.seeking_talent.as_deref())
    }

    /// Name used in confirmation messages, empty when none was submitted.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A venue with its upcoming show count, as listed in the area directory.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueLocation {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub city: String,
    #[serde(skip_serializing)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl Located for VenueLocation {
    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// Venues grouped under one city and state.
pub type VenueArea = Area<VenueLocation>;

/// A show as seen from a venue page: who plays and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(serialize_with = "serialize_start_time")]
    pub start_time: Timestamp,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> Timestamp {
        self.start_time
    }
}

/// Venue detail page: the venue plus its shows split around "now".
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
