//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - For projects, an update DTO (all `Option` fields) for patches and the
//!   joined detail view returned by the API

pub mod client;
pub mod freelancer;
pub mod project;

use gigboard_core::types::DbId;
use serde::Serialize;

/// `{id, name}` of a related record, embedded instead of the full row so
/// serialization never recurses through the relation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedSummary {
    pub id: DbId,
    pub name: String,
}
