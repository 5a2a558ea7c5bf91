//! Database entity models and request DTOs.

pub mod event;
pub mod guide;
pub mod operator;
pub mod stage;
pub mod tag;
