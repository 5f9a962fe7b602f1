//! Shared response payload types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgment body.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::new("record successfully deleted")))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
