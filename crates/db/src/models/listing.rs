//! Compact listing shapes shared by venues and artists.

use fyyur_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Id and name only, as shown on the artist index and landing page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingEntry {
    pub id: DbId,
    pub name: String,
}

/// One name-search hit with its upcoming show count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Result of a name search: the number of matches plus the matches.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
