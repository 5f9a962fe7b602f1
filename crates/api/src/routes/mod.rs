pub mod client;
pub mod freelancer;
pub mod health;
pub mod index;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /freelancers                 list
/// /freelancers/{id}            get
///
/// /clients                     list
///
/// /projects                    list, create
/// /projects/{id}               get, update (PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/freelancers", freelancer::router())
        .nest("/clients", client::router())
        .nest("/projects", project::router())
}
