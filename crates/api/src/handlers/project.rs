//! Handlers for the `/projects` resource.
//!
//! Create and update bodies are validated against the project field
//! allow-list before anything is written, and both referenced parties are
//! checked so a bad id produces a readable message rather than a raw
//! constraint failure.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gigboard_core::error::CoreError;
use gigboard_core::types::DbId;
use gigboard_db::models::project::{CreateProject, ProjectDetail, UpdateProject};
use gigboard_db::repositories::{ClientRepo, FreelancerRepo, ProjectRepo};
use gigboard_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{FieldInput, IdPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "project",
        id,
    })
}

/// Fail with one message per referenced freelancer/client that does not exist.
async fn ensure_parties_exist(
    pool: &DbPool,
    freelancer_id: Option<DbId>,
    client_id: Option<DbId>,
) -> AppResult<()> {
    let mut missing = Vec::new();

    if let Some(id) = freelancer_id {
        if !FreelancerRepo::exists(pool, id).await? {
            missing.push(format!("freelancer {id} does not exist"));
        }
    }
    if let Some(id) = client_id {
        if !ClientRepo::exists(pool, id).await? {
            missing.push(format!("client {id} does not exist"));
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(missing)))
    }
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectDetail>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    FieldInput(fields): FieldInput,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let input = CreateProject::from_fields(&fields)?;
    ensure_parties_exist(&state.pool, Some(input.freelancer_id), Some(input.client_id)).await?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = project.project.id,
        freelancer_id = project.freelancer.id,
        client_id = project.client.id,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PATCH /projects/{id}
///
/// Checks run in order: the project exists (404), the submitted fields are
/// valid (400), referenced parties exist (400). The row is only written once
/// all of them pass.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FieldInput(fields): FieldInput,
) -> AppResult<Json<ProjectDetail>> {
    if !ProjectRepo::exists(&state.pool, id).await? {
        return Err(not_found(id));
    }

    let input = UpdateProject::from_fields(&fields)?;
    ensure_parties_exist(&state.pool, input.freelancer_id, input.client_id).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(Json(MessageResponse::new("record successfully deleted")))
    } else {
        Err(not_found(id))
    }
}
