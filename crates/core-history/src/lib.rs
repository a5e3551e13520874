//! Weighted undo/redo history primitives.
//!
//! The history is split across two structures with very different policies:
//!
//! - [`UndoStack`]: a doubly-linked deque bounded by a cumulative weight
//!   budget rather than an entry count. New actions enter at the top; when
//!   the resident weight exceeds the configured maximum, the oldest entries
//!   are evicted from the bottom until the budget holds again.
//! - [`RedoStack`]: a plain unbounded LIFO. Entries only arrive here when an
//!   action is undone, and the whole stack is discarded whenever a fresh edit
//!   forks away from the redo branch (the session layer owns that policy).
//!
//! Actions move between the two stacks by value; a node is only ever owned by
//! the structure it currently resides in.

pub mod redo;
pub mod undo;

pub use redo::RedoStack;
pub use undo::UndoStack;

/// A recorded state transition: full before/after snapshots of the buffer
/// plus the cost charged against the undo budget.
///
/// Immutable once built. The weight is whatever the edit layer decided the
/// action costs (typically the number of characters touched); the history
/// only sums and compares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Buffer value before the edit.
    pub prev: String,
    /// Buffer value after the edit.
    pub next: String,
    /// Non-negative cost charged against the undo budget.
    pub weight: u64,
}

impl Action {
    pub fn new(prev: impl Into<String>, next: impl Into<String>, weight: u64) -> Self {
        Self {
            prev: prev.into(),
            next: next.into(),
            weight,
        }
    }
}
