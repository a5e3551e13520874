//! Weight-bounded undo deque.
//!
//! Supports O(1) push-at-top and pop-from-top plus trim-from-bottom, with
//! live weight accounting. The nodes form a doubly-linked chain stored in a
//! slab arena: slots are addressed by index, freed slots go onto an intrusive
//! free list, and `older`/`newer` links are slot indices rather than
//! pointers. Removal always detaches and releases a slot in the same step,
//! so a node is never reachable from two places.
//!
//! Eviction is strictly oldest-first. A newly pushed action is admitted
//! before trim runs, so an action heavier than the entire budget is pushed
//! and then immediately evicted from the bottom (it is simultaneously the
//! newest and, once everything else is gone, the oldest element), leaving the
//! deque empty. The buffer mutation itself already happened upstream; the
//! history just cannot retain a way back.

use tracing::trace;

use crate::Action;

#[derive(Debug)]
struct Node {
    action: Action,
    /// Toward the bottom (oldest) end.
    older: Option<usize>,
    /// Toward the top (newest) end.
    newer: Option<usize>,
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// Doubly-linked undo deque bounded by cumulative action weight.
#[derive(Debug, Default)]
pub struct UndoStack {
    slots: Vec<Slot>,
    free: Option<usize>,
    top: Option<usize>,
    bottom: Option<usize>,
    len: usize,
    total_weight: u64,
    max_weight: u64,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Number of resident actions (diagnostic).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Sum of resident action weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    /// Set the weight budget. Negative input clamps to zero. Trim runs
    /// immediately, so lowering the cap can evict resident entries.
    pub fn set_max_weight(&mut self, max_weight: i64) {
        self.max_weight = u64::try_from(max_weight).unwrap_or(0);
        trace!(
            target: "history.undo",
            max_weight = self.max_weight,
            total_weight = self.total_weight,
            "set_max_weight"
        );
        self.trim();
    }

    /// Release every node and reset the weight accounting.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.top = None;
        self.bottom = None;
        self.len = 0;
        self.total_weight = 0;
        trace!(target: "history.undo", "clear");
    }

    /// Link `action` as the new top, then trim from the bottom while the
    /// resident weight exceeds the budget.
    pub fn push(&mut self, action: Action) {
        let weight = action.weight;
        let idx = self.alloc(Node {
            action,
            older: self.top,
            newer: None,
        });
        match self.top {
            Some(top) => self.node_mut(top).newer = Some(idx),
            None => self.bottom = Some(idx),
        }
        self.top = Some(idx);
        self.len += 1;
        self.total_weight += weight;
        trace!(
            target: "history.undo",
            depth = self.len,
            weight,
            total_weight = self.total_weight,
            max_weight = self.max_weight,
            "push"
        );
        self.trim();
    }

    /// Detach and return the newest action, or `None` when the deque is
    /// empty.
    pub fn pop(&mut self) -> Option<Action> {
        let idx = self.top?;
        let node = self.release(idx);
        self.top = node.older;
        match self.top {
            Some(older) => self.node_mut(older).newer = None,
            None => self.bottom = None,
        }
        self.len -= 1;
        // Saturating floor absorbs any accounting drift; correct bookkeeping
        // never goes below zero.
        self.total_weight = self.total_weight.saturating_sub(node.action.weight);
        trace!(
            target: "history.undo",
            depth = self.len,
            total_weight = self.total_weight,
            "pop"
        );
        Some(node.action)
    }

    /// Walk the resident actions newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        let mut cursor = self.top;
        std::iter::from_fn(move || {
            let idx = cursor?;
            let node = self.node(idx);
            cursor = node.older;
            Some(&node.action)
        })
    }

    /// Evict from the bottom until the resident weight fits the budget.
    fn trim(&mut self) {
        while let Some(idx) = self.bottom {
            if self.total_weight <= self.max_weight {
                break;
            }
            let node = self.release(idx);
            self.total_weight = self.total_weight.saturating_sub(node.action.weight);
            self.len -= 1;
            self.bottom = node.newer;
            match self.bottom {
                Some(newer) => self.node_mut(newer).older = None,
                None => self.top = None,
            }
            trace!(
                target: "history.undo",
                evicted_weight = node.action.weight,
                depth = self.len,
                total_weight = self.total_weight,
                max_weight = self.max_weight,
                "trim_evict"
            );
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free {
            Some(idx) => {
                self.free = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node {
        let slot = std::mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released index points at vacant slot"),
        }
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index points at vacant slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked index points at vacant slot"),
        }
    }
}
