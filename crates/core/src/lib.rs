//! Pure domain logic for the stratbook taxonomy and admin workflows.
//!
//! Everything in this crate is synchronous and free of I/O. The database
//! layer (`stratbook-db`) and HTTP surface (`stratbook-api`) depend on it,
//! never the other way around, so all of it is testable without a running
//! server or database.

pub mod editor;
pub mod error;
pub mod forms;
pub mod moves;
pub mod tree;
pub mod types;
