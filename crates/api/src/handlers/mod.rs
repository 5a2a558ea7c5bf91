//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input with `stratbook_core`, delegate persistence to
//! the matching repository in `stratbook_db`, and map errors via
//! [`crate::error::AppError`].

pub mod events;
pub mod guides;
pub mod moves;
pub mod operators;
pub mod stages;
pub mod tags;
