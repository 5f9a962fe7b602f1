use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- plain landing page.
async fn index() -> Html<&'static str> {
    Html("<h1>Freelancing Project Management</h1>")
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
