//! Handlers for the `/freelancers` resource.

use axum::extract::State;
use axum::Json;
use gigboard_core::error::CoreError;
use gigboard_db::models::freelancer::Freelancer;
use gigboard_db::repositories::FreelancerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::state::AppState;

/// GET /freelancers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Freelancer>>> {
    let freelancers = FreelancerRepo::list(&state.pool).await?;
    Ok(Json(freelancers))
}

/// GET /freelancers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Freelancer>> {
    let freelancer = FreelancerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "freelancer",
            id,
        }))?;
    Ok(Json(freelancer))
}
