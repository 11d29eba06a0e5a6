//! Handlers for the `/artists` pages.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Form, Json};
use chrono::Utc;
use fyyur_core::error::CoreError;
use fyyur_core::types::DbId;
use fyyur_db::models::artist::{Artist, ArtistDetail, ArtistForm};
use fyyur_db::models::listing::ListingEntry;
use fyyur_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::forms::{artist_values, DirectoryChoices, FormDescriptor, ARTIST_FIELDS};
use crate::query::SearchForm;
use crate::response::{DataResponse, SearchResponse, SubmissionResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ListingEntry>>>> {
    let artists = ArtistRepo::list_entries(&state.pool).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Json<SearchResponse>> {
    let results = ArtistRepo::search(&state.pool, &form.search_term, Utc::now()).await?;
    tracing::debug!(term = %form.search_term, count = results.count, "Artist search");
    Ok(Json(SearchResponse {
        search_term: form.search_term,
        results,
    }))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let detail = ArtistRepo::find_detail(&state.pool, id, Utc::now())
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /artists/create
pub async fn create_form() -> Json<FormDescriptor<DirectoryChoices>> {
    Json(FormDescriptor::new(
        "/artists/create",
        ARTIST_FIELDS,
        DirectoryChoices::default(),
    ))
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> Json<SubmissionResponse<Artist>> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let err = AppError::from(rejection);
            tracing::warn!(error = %err, "Artist submission rejected");
            return Json(
                SubmissionResponse::failed("An error occurred. Artist could not be listed.", &err)
                    .redirect_to("/"),
            );
        }
    };

    let response = match ArtistRepo::create(&state.pool, &form).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "Artist listed");
            SubmissionResponse::succeeded(
                format!("Artist {} was successfully listed!", artist.name),
                Some(artist),
            )
        }
        Err(err) => {
            let err = AppError::from(err);
            tracing::warn!(error = %err, "Artist listing rolled back");
            SubmissionResponse::failed(
                format!(
                    "An error occurred. Artist {} could not be listed.",
                    form.display_name()
                ),
                &err,
            )
        }
    };
    Json(response.redirect_to("/"))
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FormDescriptor<DirectoryChoices>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(
        FormDescriptor::new(
            format!("/artists/{id}/edit"),
            ARTIST_FIELDS,
            DirectoryChoices::default(),
        )
        .with_values(artist_values(&artist)),
    ))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> AppResult<Json<SubmissionResponse<Artist>>> {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            let err = AppError::from(rejection);
            tracing::warn!(artist_id = id, error = %err, "Artist submission rejected");
            return Ok(Json(
                SubmissionResponse::failed(
                    format!("An error occurred. Artist {id} could not be updated."),
                    &err,
                )
                .redirect_to(format!("/artists/{id}")),
            ));
        }
    };

    let response = match ArtistRepo::update(&state.pool, id, &form).await {
        Ok(Some(artist)) => {
            tracing::info!(artist_id = id, "Artist updated");
            SubmissionResponse::succeeded(
                format!("Artist {} was successfully updated!", artist.name),
                Some(artist),
            )
        }
        Ok(None) => return Err(not_found(id)),
        Err(err) => {
            let err = AppError::from(err);
            tracing::warn!(artist_id = id, error = %err, "Artist update rolled back");
            SubmissionResponse::failed(
                format!(
                    "An error occurred. Artist {} could not be updated.",
                    form.display_name()
                ),
                &err,
            )
        }
    };
    Ok(Json(response.redirect_to(format!("/artists/{id}"))))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Json<SubmissionResponse<()>> {
    let outcome = ArtistRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::from)
        .and_then(|deleted| deleted.ok_or_else(|| not_found(id)));

    let response = match outcome {
        Ok(name) => {
            tracing::info!(artist_id = id, "Artist deleted");
            SubmissionResponse::succeeded(format!("Artist {name} was successfully deleted."), None)
        }
        Err(err) => {
            tracing::warn!(artist_id = id, error = %err, "Artist deletion rolled back");
            SubmissionResponse::failed(
                format!("An error occurred. Artist {id} could not be deleted."),
                &err,
            )
        }
    };
    Json(response.redirect_to("/"))
}
