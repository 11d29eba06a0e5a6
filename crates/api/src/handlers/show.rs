//! Handlers for the `/shows` pages.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use fyyur_db::models::show::{Show, ShowForm, ShowListing};
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{BookingChoices, FormDescriptor, SHOW_FIELDS};
use crate::response::{DataResponse, SubmissionResponse};
use crate::state::AppState;

/// GET /shows
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// GET /shows/create
///
/// Offers every artist and venue as a booking choice, with the start time
/// pre-filled to the current instant.
pub async fn create_form(
    State(state): State<AppState>,
) -> AppResult<Json<FormDescriptor<BookingChoices>>> {
    let artists = ArtistRepo::list_entries(&state.pool).await?;
    let venues = VenueRepo::list_entries(&state.pool).await?;
    Ok(Json(FormDescriptor::new(
        "/shows/create",
        SHOW_FIELDS,
        BookingChoices::new(artists, venues, Utc::now()),
    )))
}

/// POST /shows/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ShowForm>, JsonRejection>,
) -> Json<SubmissionResponse<Show>> {
    let input = payload
        .map_err(AppError::from)
        .and_then(|Json(form)| form.validate().map_err(AppError::from));
    let outcome = match input {
        Ok(input) => ShowRepo::create(&state.pool, &input)
            .await
            .map_err(AppError::from),
        Err(err) => Err(err),
    };

    let response = match outcome {
        Ok(show) => {
            tracing::info!(
                show_id = show.id,
                artist_id = show.artist_id,
                venue_id = show.venue_id,
                "Show listed"
            );
            SubmissionResponse::succeeded("Show was successfully listed!", Some(show))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Show listing rolled back");
            SubmissionResponse::failed("An error occurred. Show could not be listed.", &err)
        }
    };
    Json(response.redirect_to("/"))
}
