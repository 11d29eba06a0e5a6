pub mod artist;
pub mod health;
pub mod home;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                  landing page
///
/// /venues                            venues grouped by area
/// /venues/search                     name search (POST, form)
/// /venues/create                     form, submit
/// /venues/{id}                       detail, delete
/// /venues/{id}/edit                  form, submit
///
/// /artists                           artist index
/// /artists/search                    name search (POST, form)
/// /artists/create                    form, submit
/// /artists/{id}                      detail, delete
/// /artists/{id}/edit                 form, submit
///
/// /shows                             show listing
/// /shows/create                      form, submit
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(home::router())
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
