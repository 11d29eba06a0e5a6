use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// ```text
/// GET    /                         -> index
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home::index))
}
