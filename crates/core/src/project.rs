//! Field names and value rules for projects.

use crate::fields::{unknown_fields, FieldMap};

/* --------------------------------------------------------------------------
Field names
-------------------------------------------------------------------------- */

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_RATE: &str = "rate";
pub const FIELD_FREELANCER_ID: &str = "freelancer_id";
pub const FIELD_CLIENT_ID: &str = "client_id";

/// Every field a request may set on a project, on create or update.
///
/// Anything else in a request body (including `id` and the timestamps) is
/// rejected rather than ignored.
pub const MUTABLE_FIELDS: &[&str] = &[
    FIELD_TITLE,
    FIELD_DESCRIPTION,
    FIELD_RATE,
    FIELD_FREELANCER_ID,
    FIELD_CLIENT_ID,
];

/* --------------------------------------------------------------------------
Rules
-------------------------------------------------------------------------- */

/// Messages for every key in `fields` outside [`MUTABLE_FIELDS`].
pub fn disallowed_fields(fields: &FieldMap) -> Vec<String> {
    unknown_fields(fields, MUTABLE_FIELDS)
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err(format!("{FIELD_TITLE} must not be blank"));
    }
    Ok(())
}

/// Rates are finite and never negative.
pub fn validate_rate(rate: f64) -> Result<(), String> {
    if !rate.is_finite() {
        return Err(format!("{FIELD_RATE} must be a number"));
    }
    if rate < 0.0 {
        return Err(format!("{FIELD_RATE} must not be negative"));
    }
    Ok(())
}
