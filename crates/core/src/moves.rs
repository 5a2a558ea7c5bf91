//! Move validation for taxonomy edits.
//!
//! An event may be re-parented and a stage may change its owning event (or
//! be detached to the root container). The rules below gate both the picker
//! UI (via the dry-run endpoint) and the move endpoints themselves; they
//! uphold the structural policy that a container owns either child events
//! or stages, never both.

use serde::Serialize;
use ts_rs::TS;

use crate::types::DbId;

/// The entity being moved, with the location it currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSubject {
    Event { id: DbId, parent_id: Option<DbId> },
    Stage { id: DbId, event_id: Option<DbId> },
}

/// The candidate destination as the validator needs to see it.
///
/// `id == None` denotes the root container. For the root, `has_child_events`
/// reports whether any root-level event exists and `has_stages` whether any
/// unowned stage exists, so the container policy applies to the root exactly
/// as it does to a named event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationInfo {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub has_child_events: bool,
    pub has_stages: bool,
}

impl DestinationInfo {
    pub fn root(has_child_events: bool, has_stages: bool) -> Self {
        Self {
            id: None,
            name: None,
            has_child_events,
            has_stages,
        }
    }

    pub fn event(
        id: DbId,
        name: impl Into<String>,
        has_child_events: bool,
        has_stages: bool,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            has_child_events,
            has_stages,
        }
    }
}

/// Verdict of a move validation.
///
/// A rejection is ordinary data, not an error: the picker shows the reason
/// inline and keeps the dialog open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "verdict", rename_all = "snake_case")]
#[ts(export)]
pub enum MoveCheck {
    Allowed { message: String },
    Rejected { reason: String },
}

impl MoveCheck {
    pub fn is_allowed(&self) -> bool {
        matches!(self, MoveCheck::Allowed { .. })
    }

    fn rejected(reason: impl Into<String>) -> Self {
        MoveCheck::Rejected {
            reason: reason.into(),
        }
    }
}

/// Decide whether moving `subject` into `destination` is legal.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. stage subject: already owned by the destination; destination owns
///    child events
/// 2. event subject: already parented by the destination; destination owns
///    stages; destination is the subject itself
/// 3. otherwise allowed
///
/// Messages name the destination, using `root` / `Root` for the root
/// container.
pub fn validate_move(subject: MoveSubject, destination: &DestinationInfo) -> MoveCheck {
    // Lowercase when the destination is part of a sentence, capitalized
    // when it opens one.
    let label = destination.name.as_deref().unwrap_or("root");
    let title = destination.name.as_deref().unwrap_or("Root");

    match subject {
        MoveSubject::Stage { event_id, .. } => {
            if event_id == destination.id {
                return MoveCheck::rejected(format!("already in {label}"));
            }
            if destination.has_child_events {
                return MoveCheck::rejected(format!("{title} already has child event"));
            }
        }
        MoveSubject::Event { id, parent_id } => {
            if parent_id == destination.id {
                return MoveCheck::rejected(format!("already in {label}"));
            }
            if destination.has_stages {
                return MoveCheck::rejected(format!("{title} already has stage"));
            }
            if destination.id == Some(id) {
                return MoveCheck::rejected("Cannot move event to itself");
            }
        }
    }

    MoveCheck::Allowed {
        message: format!("Move to {label}"),
    }
}
