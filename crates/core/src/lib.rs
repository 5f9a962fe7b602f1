//! Domain logic shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! primitive id/timestamp types, and the pure validation rules applied to
//! request fields before they reach the store.

pub mod error;
pub mod fields;
pub mod project;
pub mod types;
