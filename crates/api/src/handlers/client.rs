//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::Json;
use gigboard_db::models::client::Client;
use gigboard_db::repositories::ClientRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}
