//! State machine behind the admin editor.
//!
//! The editor opens one workflow at a time: adding an event, batching new
//! stages under an event, editing or deleting a single entity, or picking a
//! move destination. Holding the whole context in one tagged state means
//! there is never a half-open modal or a submit without a target.
//!
//! Events the current state does not understand are ignored, so stray UI
//! actions (a second click after a modal switch) cannot corrupt the
//! workflow.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::forms::FieldError;
use crate::moves::MoveSubject;
use crate::types::DbId;

/// Which kind of entity an edit or delete workflow targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EntityKind {
    Event,
    Stage,
}

/// A stage queued client-side before the batch is submitted.
///
/// Names are stored trimmed and codes normalized (blank becomes absent), so
/// uniqueness checks inside the batch are plain equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingStage {
    pub name: String,
    pub code: Option<String>,
}

impl PendingStage {
    /// Build a normalized entry: trimmed name, blank code dropped.
    pub fn new(name: &str, code: Option<&str>) -> Self {
        Self {
            name: name.trim().to_owned(),
            code: normalize_code(code),
        }
    }
}

/// The single active editor workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    /// Creating an event under `parent_event_id`, or at the root for `None`.
    AddingEvent { parent_event_id: Option<DbId> },
    /// Collecting a batch of stages for one event. The target is part of
    /// the state, so a submit can never lack one.
    AddingStages {
        target_event_id: DbId,
        pending: Vec<PendingStage>,
    },
    Editing { kind: EntityKind, id: DbId },
    /// Picking a destination for `subject`. The stack records picker
    /// depth: empty means the root level is shown.
    Moving {
        subject: MoveSubject,
        stack: Vec<DbId>,
    },
    ConfirmingDelete { kind: EntityKind, id: DbId },
}

impl EditorState {
    /// Abandon whatever workflow is open.
    pub fn cancel(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn open_add_event(&mut self, parent_event_id: Option<DbId>) {
        *self = EditorState::AddingEvent { parent_event_id };
    }

    pub fn open_add_stages(&mut self, target_event_id: DbId) {
        *self = EditorState::AddingStages {
            target_event_id,
            pending: Vec::new(),
        };
    }

    pub fn open_edit(&mut self, kind: EntityKind, id: DbId) {
        *self = EditorState::Editing { kind, id };
    }

    pub fn open_move(&mut self, subject: MoveSubject) {
        *self = EditorState::Moving {
            subject,
            stack: Vec::new(),
        };
    }

    pub fn open_confirm_delete(&mut self, kind: EntityKind, id: DbId) {
        *self = EditorState::ConfirmingDelete { kind, id };
    }

    // --- stage batching ---

    /// Validate and queue one stage while `AddingStages` is open.
    ///
    /// Rejections leave the batch untouched. Outside `AddingStages` the
    /// action is ignored.
    pub fn append_pending_stage(
        &mut self,
        name: &str,
        code: Option<&str>,
    ) -> Result<(), FieldError> {
        if let EditorState::AddingStages { pending, .. } = self {
            if let Some(error) = pending_stage_error(pending, name, code) {
                return Err(error);
            }
            pending.push(PendingStage::new(name, code));
        }
        Ok(())
    }

    /// Drop a queued stage by position. Out-of-range indexes are ignored.
    pub fn remove_pending_stage(&mut self, index: usize) {
        if let EditorState::AddingStages { pending, .. } = self {
            if index < pending.len() {
                pending.remove(index);
            }
        }
    }

    /// The batch waiting to be submitted, with its target event.
    ///
    /// Submitting does not leave `AddingStages`; the caller cancels once
    /// the server acknowledges, so a failed request keeps the batch intact.
    pub fn pending_batch(&self) -> Option<(DbId, &[PendingStage])> {
        match self {
            EditorState::AddingStages {
                target_event_id,
                pending,
            } => Some((*target_event_id, pending)),
            _ => None,
        }
    }

    // --- move picker navigation ---

    /// Step into a child event while picking a move destination.
    pub fn descend(&mut self, event_id: DbId) {
        if let EditorState::Moving { stack, .. } = self {
            stack.push(event_id);
        }
    }

    /// Step back up one picker level. Returns `false` when already at the
    /// root (or no move is in progress).
    pub fn back(&mut self) -> bool {
        match self {
            EditorState::Moving { stack, .. } => stack.pop().is_some(),
            _ => false,
        }
    }

    /// The event whose contents the picker currently shows; `None` at the
    /// root level.
    pub fn current_destination(&self) -> Option<DbId> {
        match self {
            EditorState::Moving { stack, .. } => stack.last().copied(),
            _ => None,
        }
    }
}

/// Why `(name, code)` cannot join `pending`, if it cannot.
///
/// Names must be non-blank and unique within the batch; codes only collide
/// when both sides actually carry one.
pub fn pending_stage_error(
    pending: &[PendingStage],
    name: &str,
    code: Option<&str>,
) -> Option<FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Some(FieldError::new("name", "Name is required"));
    }
    if pending.iter().any(|stage| stage.name == name) {
        return Some(FieldError::new("name", "Stage name already exists"));
    }
    if let Some(code) = normalize_code(code) {
        if pending
            .iter()
            .any(|stage| stage.code.as_deref() == Some(code.as_str()))
        {
            return Some(FieldError::new("code", "Stage code already exists"));
        }
    }
    None
}

fn normalize_code(code: Option<&str>) -> Option<String> {
    code.map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_cancels_from_anywhere() {
        let mut editor = EditorState::default();
        assert_eq!(editor, EditorState::Closed);

        editor.open_add_event(Some(3));
        assert_eq!(
            editor,
            EditorState::AddingEvent {
                parent_event_id: Some(3)
            }
        );

        editor.cancel();
        assert_eq!(editor, EditorState::Closed);
    }

    #[test]
    fn opening_a_workflow_replaces_the_current_one() {
        let mut editor = EditorState::default();
        editor.open_add_stages(7);
        editor.open_confirm_delete(EntityKind::Stage, 12);
        assert_eq!(
            editor,
            EditorState::ConfirmingDelete {
                kind: EntityKind::Stage,
                id: 12
            }
        );
    }

    #[test]
    fn appends_trim_and_queue_stages() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("  Alpha  ", None).unwrap();
        editor.append_pending_stage("Bravo", Some("BR-1")).unwrap();

        let (target, batch) = editor.pending_batch().unwrap();
        assert_eq!(target, 5);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name, "Alpha");
        assert_eq!(batch[0].code, None);
        assert_eq!(batch[1].code.as_deref(), Some("BR-1"));
    }

    #[test]
    fn duplicate_name_in_batch_is_rejected() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("A", None).unwrap();

        let error = editor.append_pending_stage("A", None).unwrap_err();
        assert_eq!(error.message, "Stage name already exists");

        // The rejected entry must not have joined the batch.
        let (_, batch) = editor.pending_batch().unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn duplicate_check_compares_trimmed_names() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("Alpha", None).unwrap();

        let error = editor.append_pending_stage("  Alpha ", None).unwrap_err();
        assert_eq!(error.message, "Stage name already exists");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);

        let error = editor.append_pending_stage("   ", None).unwrap_err();
        assert_eq!(error.field, "name");
        assert_eq!(error.message, "Name is required");
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("Alpha", Some("X1")).unwrap();

        let error = editor.append_pending_stage("Bravo", Some("X1")).unwrap_err();
        assert_eq!(error.field, "code");
        assert_eq!(error.message, "Stage code already exists");
    }

    #[test]
    fn absent_codes_never_collide() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("Alpha", None).unwrap();
        editor.append_pending_stage("Bravo", None).unwrap();
        editor.append_pending_stage("Charlie", Some("")).unwrap();

        let (_, batch) = editor.pending_batch().unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|stage| stage.code.is_none()));
    }

    #[test]
    fn remove_ignores_out_of_range_indexes() {
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("Alpha", None).unwrap();
        editor.append_pending_stage("Bravo", None).unwrap();

        editor.remove_pending_stage(9);
        editor.remove_pending_stage(0);

        let (_, batch) = editor.pending_batch().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].name, "Bravo");
    }

    #[test]
    fn batch_survives_until_cancelled() {
        // A failed submit must find the batch where it was.
        let mut editor = EditorState::default();
        editor.open_add_stages(5);
        editor.append_pending_stage("Alpha", None).unwrap();

        assert!(editor.pending_batch().is_some());
        assert!(editor.pending_batch().is_some());

        editor.cancel();
        assert_eq!(editor.pending_batch(), None);
    }

    #[test]
    fn append_outside_adding_stages_is_ignored() {
        let mut editor = EditorState::default();
        assert!(editor.append_pending_stage("Alpha", None).is_ok());
        assert_eq!(editor, EditorState::Closed);
    }

    #[test]
    fn move_picker_stack_descends_and_backs_out() {
        let subject = MoveSubject::Stage {
            id: 4,
            event_id: Some(1),
        };
        let mut editor = EditorState::default();
        editor.open_move(subject);
        assert_eq!(editor.current_destination(), None);

        editor.descend(10);
        editor.descend(22);
        assert_eq!(editor.current_destination(), Some(22));

        assert!(editor.back());
        assert_eq!(editor.current_destination(), Some(10));
        assert!(editor.back());
        assert!(!editor.back());
        assert_eq!(editor.current_destination(), None);

        // Still picking for the same subject after bottoming out.
        assert!(matches!(editor, EditorState::Moving { subject: s, .. } if s == subject));
    }

    #[test]
    fn picker_navigation_is_inert_when_no_move_is_open() {
        let mut editor = EditorState::default();
        editor.descend(10);
        assert!(!editor.back());
        assert_eq!(editor.current_destination(), None);
        assert_eq!(editor, EditorState::Closed);
    }
}
