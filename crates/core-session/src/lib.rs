//! Session state: one live buffer value orchestrating the two history stacks.
//!
//! A [`Session`] is an explicit value owning its buffer and both stacks, so
//! independent sessions never share history state. Until an initializing
//! event runs, every other event is a silent no-op ("ignore commands before
//! create"); after that:
//!
//! - applying an edit advances the buffer, records the action in the undo
//!   deque, and discards the redo stack (a new edit forks away from whatever
//!   redo would have restored);
//! - undo restores the action's pre-state and parks the action on the redo
//!   stack;
//! - redo restores the post-state and pushes the action back onto the undo
//!   deque, subject to the normal weight trim — a redo can itself evict older
//!   history.
//!
//! Undo/redo on an empty stack reports a non-fatal error and leaves the
//! buffer untouched. Nothing here is fatal; the session is single-threaded
//! and synchronous by construction.

use core_history::{Action, RedoStack, UndoStack};
use thiserror::Error;
use tracing::{debug, trace};

/// Non-fatal, locally recoverable session errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("Nothing to undo.")]
    NothingToUndo,
    #[error("Nothing to redo.")]
    NothingToRedo,
}

#[derive(Debug, Default)]
pub struct Session {
    current: String,
    undo: UndoStack,
    redo: RedoStack,
    created: bool,
}

impl Session {
    /// An uninitialized session; mutating events are ignored until
    /// [`Session::initialize`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.created
    }

    /// The live buffer value, verbatim.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Resident undo weight (diagnostic).
    pub fn undo_weight(&self) -> u64 {
        self.undo.total_weight()
    }

    /// Reset everything: both stacks cleared, buffer replaced, undo budget
    /// reconfigured (negative input clamps to zero). Idempotent; re-running
    /// at any time starts the session over.
    pub fn initialize(&mut self, max_weight: i64, text: impl Into<String>) {
        self.undo.clear();
        self.redo.clear();
        self.undo.set_max_weight(max_weight);
        self.current = text.into();
        self.created = true;
        debug!(
            target: "session",
            max_weight = self.undo.max_weight(),
            buffer_chars = self.current.chars().count(),
            "initialize"
        );
    }

    /// Record an applied edit. The caller has already computed the action
    /// against the current buffer; the session advances to the post-state,
    /// stores the action, and invalidates any redo history.
    pub fn apply_edit(&mut self, action: Action) {
        if !self.created {
            trace!(target: "session", "edit_ignored_uninitialized");
            return;
        }
        debug_assert_eq!(
            action.prev, self.current,
            "edit must be computed against the live buffer"
        );
        self.current.clone_from(&action.next);
        self.undo.push(action);
        self.redo.clear();
        trace!(
            target: "session",
            undo_depth = self.undo.len(),
            undo_weight = self.undo.total_weight(),
            "apply_edit"
        );
    }

    /// Restore the newest recorded action's pre-state and make the action
    /// available for redo.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        if !self.created {
            trace!(target: "session", "undo_ignored_uninitialized");
            return Ok(());
        }
        let Some(action) = self.undo.pop() else {
            trace!(target: "session", "undo_empty");
            return Err(SessionError::NothingToUndo);
        };
        self.current.clone_from(&action.prev);
        self.redo.push(action);
        trace!(
            target: "session",
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "undo"
        );
        Ok(())
    }

    /// Re-apply the most recently undone action. The push back onto the undo
    /// deque runs through the normal trim policy.
    pub fn redo(&mut self) -> Result<(), SessionError> {
        if !self.created {
            trace!(target: "session", "redo_ignored_uninitialized");
            return Ok(());
        }
        let Some(action) = self.redo.pop() else {
            trace!(target: "session", "redo_empty");
            return Err(SessionError::NothingToRedo);
        };
        self.current.clone_from(&action.next);
        self.undo.push(action);
        trace!(
            target: "session",
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "redo"
        );
        Ok(())
    }
}
