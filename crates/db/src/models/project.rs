//! Project entity model and DTOs.

use gigboard_core::error::CoreError;
use gigboard_core::fields::{id_field, number_field, required, text_field, FieldErrors, FieldMap};
use gigboard_core::project::{
    disallowed_fields, validate_rate, validate_title, FIELD_CLIENT_ID, FIELD_DESCRIPTION,
    FIELD_FREELANCER_ID, FIELD_RATE, FIELD_TITLE,
};
use gigboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::RelatedSummary;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub rate: f64,
    pub freelancer_id: DbId,
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project joined with the names of its freelancer and client.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDetailRow {
    #[sqlx(flatten)]
    pub project: Project,
    pub freelancer_name: String,
    pub client_name: String,
}

/// API view of a project: its own columns plus nested `{id, name}`
/// summaries of the freelancer and client.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub freelancer: RelatedSummary,
    pub client: RelatedSummary,
}

impl From<ProjectDetailRow> for ProjectDetail {
    fn from(row: ProjectDetailRow) -> Self {
        let freelancer = RelatedSummary {
            id: row.project.freelancer_id,
            name: row.freelancer_name,
        };
        let client = RelatedSummary {
            id: row.project.client_id,
            name: row.client_name,
        };
        Self {
            project: row.project,
            freelancer,
            client,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub rate: f64,
    pub freelancer_id: DbId,
    pub client_id: DbId,
}

impl CreateProject {
    /// Build from raw request fields. All five fields are required and
    /// every problem is reported together.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, CoreError> {
        let mut errors = FieldErrors::new();
        for message in disallowed_fields(fields) {
            errors.push(message);
        }

        let title = errors.capture(
            required(text_field(fields, FIELD_TITLE), FIELD_TITLE)
                .and_then(|title| validate_title(&title).map(|()| title)),
        );
        let description =
            errors.capture(required(text_field(fields, FIELD_DESCRIPTION), FIELD_DESCRIPTION));
        let rate = errors.capture(
            required(number_field(fields, FIELD_RATE), FIELD_RATE)
                .and_then(|rate| validate_rate(rate).map(|()| rate)),
        );
        let freelancer_id = errors.capture(required(
            id_field(fields, FIELD_FREELANCER_ID),
            FIELD_FREELANCER_ID,
        ));
        let client_id =
            errors.capture(required(id_field(fields, FIELD_CLIENT_ID), FIELD_CLIENT_ID));

        errors.into_result()?;

        let (Some(title), Some(description), Some(rate), Some(freelancer_id), Some(client_id)) =
            (title, description, rate, freelancer_id, client_id)
        else {
            return Err(CoreError::Internal(
                "project fields passed validation but are incomplete".into(),
            ));
        };

        Ok(Self {
            title,
            description,
            rate,
            freelancer_id,
            client_id,
        })
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rate: Option<f64>,
    pub freelancer_id: Option<DbId>,
    pub client_id: Option<DbId>,
}

impl UpdateProject {
    /// Build from raw request fields. Keys outside the mutable allow-list
    /// are rejected; supplied values follow the same rules as on create.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, CoreError> {
        let mut errors = FieldErrors::new();
        for message in disallowed_fields(fields) {
            errors.push(message);
        }

        let title = errors
            .capture(text_field(fields, FIELD_TITLE).and_then(|title| match title {
                Some(t) => validate_title(&t).map(|()| Some(t)),
                None => Ok(None),
            }))
            .flatten();
        let description = errors
            .capture(text_field(fields, FIELD_DESCRIPTION))
            .flatten();
        let rate = errors
            .capture(number_field(fields, FIELD_RATE).and_then(|rate| match rate {
                Some(r) => validate_rate(r).map(|()| Some(r)),
                None => Ok(None),
            }))
            .flatten();
        let freelancer_id = errors
            .capture(id_field(fields, FIELD_FREELANCER_ID))
            .flatten();
        let client_id = errors.capture(id_field(fields, FIELD_CLIENT_ID)).flatten();

        errors.into_result()?;

        Ok(Self {
            title,
            description,
            rate,
            freelancer_id,
            client_id,
        })
    }

    /// True when the update would not change any column.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.rate.is_none()
            && self.freelancer_id.is_none()
            && self.client_id.is_none()
    }
}
