//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod event_repo;
pub mod guide_repo;
pub mod operator_repo;
pub mod stage_repo;
pub mod tag_repo;

pub use event_repo::EventRepo;
pub use guide_repo::GuideRepo;
pub use operator_repo::OperatorRepo;
pub use stage_repo::StageRepo;
pub use tag_repo::TagRepo;
