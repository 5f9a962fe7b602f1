//! Repository for the `freelancers` table.

use gigboard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::freelancer::{CreateFreelancer, Freelancer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, specialty, created_at, updated_at";

/// Provides read access to freelancers, plus inserts for seeding.
pub struct FreelancerRepo;

impl FreelancerRepo {
    /// Insert a new freelancer, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateFreelancer,
    ) -> Result<Freelancer, sqlx::Error> {
        let query = format!(
            "INSERT INTO freelancers (name, email, specialty)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Freelancer>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.specialty)
            .fetch_one(pool)
            .await
    }

    /// Find a freelancer by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Freelancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freelancers WHERE id = ?1");
        sqlx::query_as::<_, Freelancer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all freelancers in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Freelancer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM freelancers ORDER BY id");
        sqlx::query_as::<_, Freelancer>(&query).fetch_all(pool).await
    }

    /// Whether a freelancer with the given ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM freelancers WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }
}
