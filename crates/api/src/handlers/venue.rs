//! Handlers for the `/venues` pages.
//!
//! Submissions (create, edit, delete) always answer `200 OK` with a
//! [`SubmissionResponse`]; a failed write is rolled back and reported
//! through the flash. Only a missing venue on the edit and detail pages
//! is an HTTP 404.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::directory::group_by_area;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_db::models::venue::{Venue, VenueArea, VenueDetail, VenueForm};
use fyyur_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::forms::{venue_values, DirectoryChoices, FormDescriptor, VENUE_FIELDS};
use crate::query::SearchForm;
use crate::response::{DataResponse, SearchResponse, SubmissionResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Venue",
        id,
    })
}

/// GET /venues
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<VenueArea>>>> {
    let venues = VenueRepo::list_with_upcoming(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: group_by_area(venues),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Json<SearchResponse>> {
    let results = VenueRepo::search(&state.pool, &form.search_term, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = results.count, "Venue search");
    Ok(Json(SearchResponse {
        search_term: form.search_term,
        results,
    }))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let detail = VenueRepo::find_detail(&state.pool, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /venues/create
pub async fn create_form() -> Json<FormDescriptor<DirectoryChoices>> {
    Json(FormDescriptor::new(
        "/venues/create",
        VENUE_FIELDS,
        DirectoryChoices::default(),
    ))
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> Json<SubmissionResponse<Venue>> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let err = AppError::from(rejection);
            tracing::warn!(error = %err, "Venue submission rejected");
            return Json(
                SubmissionResponse::failed("An error occurred. Venue could not be listed.", &err)
                    .redirect_to("/"),
            );
        }
    };

    let response = match VenueRepo::create(&state.pool, &form).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "Venue listed");
            SubmissionResponse::succeeded(
                format!("Venue {} was successfully listed!", venue.name),
                Some(venue),
            )
        }
        Err(err) => {
            let err = AppError::from(err);
            tracing::warn!(error = %err, "Venue listing rolled back");
            SubmissionResponse::failed(
                format!(
                    "An error occurred. Venue {} could not be listed.",
                    form.display_name()
                ),
                &err,
            )
        }
    };
    Json(response.redirect_to("/"))
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FormDescriptor<DirectoryChoices>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(
        FormDescriptor::new(
            format!("/venues/{id}/edit"),
            VENUE_FIELDS,
            DirectoryChoices::default(),
        )
        .with_values(venue_values(&venue)),
    ))
}

/// POST /venues/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> AppResult<Json<SubmissionResponse<Venue>>> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let err = AppError::from(rejection);
            tracing::warn!(venue_id = id, error = %err, "Venue submission rejected");
            return Ok(Json(
                SubmissionResponse::failed(
                    format!("An error occurred. Venue {id} could not be updated."),
                    &err,
                )
                .redirect_to(format!("/venues/{id}")),
            ));
        }
    };

    let response = match VenueRepo::update(&state.pool, id, &form).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = id, "Venue updated");
            SubmissionResponse::succeeded(
                format!("Venue {} was successfully updated!", venue.name),
                Some(venue),
            )
        }
        Ok(None) => return Err(not_found(id)),
        Err(err) => {
            let err = AppError::from(err);
            tracing::warn!(venue_id = id, error = %err, "Venue update rolled back");
            SubmissionResponse::failed(
                format!(
                    "An error occurred. Venue {} could not be updated.",
                    form.display_name()
                ),
                &err,
            )
        }
    };
    Ok(Json(response.redirect_to(format!("/venues/{id}"))))
}

/// DELETE /venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Json<SubmissionResponse<()>> {
    let outcome = VenueRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::from)
        .and_then(|deleted| deleted.ok_or_else(|| not_found(id)));

    let response = match outcome {
        Ok(name) => {
            tracing::info!(venue_id = id, "Venue deleted");
            SubmissionResponse::succeeded(format!("Venue {name} was successfully deleted."), None)
        }
        Err(err) => {
            tracing::warn!(venue_id = id, error = %err, "Venue deletion rolled back");
            SubmissionResponse::failed(
                format!("An error occurred. Venue {id} could not be deleted."),
                &err,
            )
        }
    };
    Json(response.redirect_to("/"))
}
