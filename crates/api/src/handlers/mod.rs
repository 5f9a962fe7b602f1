//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in `gigboard_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod client;
pub mod freelancer;
pub mod project;
