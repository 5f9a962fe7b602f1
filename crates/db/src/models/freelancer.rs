//! Freelancer entity model and DTOs.

use gigboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A freelancer row from the `freelancers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Freelancer {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a freelancer (seeding and tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFreelancer {
    pub name: String,
    pub email: Option<String>,
    pub specialty: Option<String>,
}
