//! Handler for the landing page.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fyyur_db::models::listing::ListingEntry;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many recently listed venues and artists the landing page shows.
const RECENT_LIMIT: i64 = 10;

/// Landing page content.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub recent_venues: Vec<ListingEntry>,
    pub recent_artists: Vec<ListingEntry>,
    pub upcoming_shows: i64,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let recent_venues = VenueRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let recent_artists = ArtistRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let upcoming_shows = ShowRepo::count_upcoming(&state.pool, Utc::now()).await?;

    Ok(Json(DataResponse {
        data: HomePage {
            recent_venues,
            recent_artists,
            upcoming_shows,
        },
    }))
}
