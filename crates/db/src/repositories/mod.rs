//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod client_repo;
pub mod freelancer_repo;
pub mod project_repo;

pub use client_repo::ClientRepo;
pub use freelancer_repo::FreelancerRepo;
pub use project_repo::ProjectRepo;
