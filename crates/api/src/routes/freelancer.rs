//! Route definitions for the `/freelancers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::freelancer;
use crate::state::AppState;

/// Routes mounted at `/freelancers`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(freelancer::list))
        .route("/{id}", get(freelancer::get_by_id))
}
