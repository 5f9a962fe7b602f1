//! Repository for the `projects` table.
//!
//! Reads always join the owning freelancer and client so callers get the
//! nested summaries in a single query.

use gigboard_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::project::{CreateProject, ProjectDetail, ProjectDetailRow, UpdateProject};

/// Joined select producing [`ProjectDetailRow`]s.
const SELECT_DETAIL: &str = "SELECT
        p.id AS id,
        p.title AS title,
        p.description AS description,
        p.rate AS rate,
        p.freelancer_id AS freelancer_id,
        p.client_id AS client_id,
        p.created_at AS created_at,
        p.updated_at AS updated_at,
        f.name AS freelancer_name,
        c.name AS client_name
     FROM projects p
     JOIN freelancers f ON f.id = p.freelancer_id
     JOIN clients c ON c.id = p.client_id";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning it with its relations.
    ///
    /// The insert and the read-back run in one transaction. A reference to a
    /// missing freelancer or client fails with a foreign key violation and
    /// leaves nothing behind.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateProject,
    ) -> Result<ProjectDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO projects (title, description, rate, freelancer_id, client_id)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.rate)
        .bind(input.freelancer_id)
        .bind(input.client_id)
        .fetch_one(&mut *tx)
        .await?;

        let project = Self::fetch_detail(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let query = format!("{SELECT_DETAIL} WHERE p.id = ?1");
        let row = sqlx::query_as::<_, ProjectDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectDetail::from))
    }

    /// List all projects in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let query = format!("{SELECT_DETAIL} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProjectDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectDetail::from).collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. An empty update
    /// returns the current row without touching `updated_at`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE projects SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                rate = COALESCE(?4, rate),
                freelancer_id = COALESCE(?5, freelancer_id),
                client_id = COALESCE(?6, client_id),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.rate)
        .bind(input.freelancer_id)
        .bind(input.client_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let project = Self::fetch_detail(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(project)
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Number of stored projects.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    async fn fetch_detail(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let query = format!("{SELECT_DETAIL} WHERE p.id = ?1");
        let row = sqlx::query_as::<_, ProjectDetailRow>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(row.map(ProjectDetail::from))
    }
}
