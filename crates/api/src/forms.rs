//! Form descriptors returned by the `GET .../create` and `GET .../edit` pages.
//!
//! A descriptor tells the client where to submit, which fields exist, which
//! values the choice fields accept, and (for edits) the current values.

use fyyur_core::forms::{GENRE_CHOICES, SEEKING_SENTINEL, STATE_CHOICES};
use fyyur_core::schedule::format_start_time;
use fyyur_core::types::Timestamp;
use fyyur_db::models::artist::Artist;
use fyyur_db::models::listing::ListingEntry;
use fyyur_db::models::venue::Venue;
use serde::Serialize;
use serde_json::{json, Value};

pub const VENUE_FIELDS: &[&str] = &[
    "name",
    "city",
    "state",
    "address",
    "phone",
    "genres",
    "image_link",
    "facebook_link",
    "website",
    "seeking_talent",
    "seeking_description",
];

pub const ARTIST_FIELDS: &[&str] = &[
    "name",
    "city",
    "state",
    "phone",
    "genres",
    "image_link",
    "facebook_link",
    "website",
    "seeking_venue",
    "seeking_description",
];

pub const SHOW_FIELDS: &[&str] = &["artist_id", "venue_id", "start_time"];

/// Describes a form the client should render and submit.
#[derive(Debug, Serialize)]
pub struct FormDescriptor<C: Serialize> {
    pub action: String,
    pub method: &'static str,
    pub fields: &'static [&'static str],
    pub choices: C,
    /// Pre-filled values; absent on blank create forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Value>,
}

impl<C: Serialize> FormDescriptor<C> {
    pub fn new(action: impl Into<String>, fields: &'static [&'static str], choices: C) -> Self {
        Self {
            action: action.into(),
            method: "POST",
            fields,
            choices,
            values: None,
        }
    }

    pub fn with_values(mut self, values: Value) -> Self {
        self.values = Some(values);
        self
    }
}

/// Choices shared by the venue and artist forms.
#[derive(Debug, Serialize)]
pub struct DirectoryChoices {
    pub genres: &'static [&'static str],
    pub state: &'static [&'static str],
    /// Value a checked "seeking" box submits.
    pub seeking: &'static str,
}

impl Default for DirectoryChoices {
    fn default() -> Self {
        Self {
            genres: GENRE_CHOICES,
            state: STATE_CHOICES,
            seeking: SEEKING_SENTINEL,
        }
    }
}

/// Choices for booking a show.
#[derive(Debug, Serialize)]
pub struct BookingChoices {
    pub artists: Vec<ListingEntry>,
    pub venues: Vec<ListingEntry>,
    pub default_start_time: String,
}

impl BookingChoices {
    pub fn new(artists: Vec<ListingEntry>, venues: Vec<ListingEntry>, now: Timestamp) -> Self {
        Self {
            artists,
            venues,
            default_start_time: format_start_time(now),
        }
    }
}

/// Encode a stored boolean the way the checkbox submits it.
fn seeking_value(flag: bool) -> Option<&'static str> {
    flag.then_some(SEEKING_SENTINEL)
}

/// Current values of a venue, shaped like a submission.
pub fn venue_values(venue: &Venue) -> Value {
    json!({
        "name": venue.name,
        "city": venue.city,
        "state": venue.state,
        "address": venue.address,
        "phone": venue.phone,
        "genres": venue.genres,
        "image_link": venue.image_link,
        "facebook_link": venue.facebook_link,
        "website": venue.website,
        "seeking_talent": seeking_value(venue.seeking_talent),
        "seeking_description": venue.seeking_description,
    })
}

/// Current values of an artist, shaped like a submission.
pub fn artist_values(artist: &Artist) -> Value {
    json!({
        "name": artist.name,
        "city": artist.city,
        "state": artist.state,
        "phone": artist.phone,
        "genres": artist.genres,
        "image_link": artist.image_link,
        "facebook_link": artist.facebook_link,
        "website": artist.website,
        "seeking_venue": seeking_value(artist.seeking_venue),
        "seeking_description": artist.seeking_description,
    })
}
