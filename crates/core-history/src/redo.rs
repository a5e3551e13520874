//! Unbounded redo LIFO.
//!
//! A singly-linked `Box` chain: each node owns the next-older one, so only a
//! head pointer is tracked and no trimming from the far end ever happens.
//! Teardown unlinks iteratively; the default recursive drop of a long chain
//! could otherwise exhaust the call stack.

use tracing::trace;

use crate::Action;

#[derive(Debug)]
struct Node {
    action: Action,
    older: Option<Box<Node>>,
}

#[derive(Debug, Default)]
pub struct RedoStack {
    head: Option<Box<Node>>,
    len: usize,
}

impl RedoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, action: Action) {
        self.head = Some(Box::new(Node {
            action,
            older: self.head.take(),
        }));
        self.len += 1;
        trace!(target: "history.redo", depth = self.len, "push");
    }

    pub fn pop(&mut self) -> Option<Action> {
        let node = self.head.take()?;
        self.head = node.older;
        self.len -= 1;
        trace!(target: "history.redo", depth = self.len, "pop");
        Some(node.action)
    }

    pub fn clear(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.older.take();
        }
        self.len = 0;
        trace!(target: "history.redo", "clear");
    }
}

impl Drop for RedoStack {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn action(tag: &str) -> Action {
        Action::new(format!("{tag}-prev"), format!("{tag}-next"), 1)
    }

    #[test]
    fn lifo_order() {
        let mut stack = RedoStack::new();
        stack.push(action("a"));
        stack.push(action("b"));
        stack.push(action("c"));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop().unwrap().prev, "c-prev");
        assert_eq!(stack.pop().unwrap().prev, "b-prev");
        assert_eq!(stack.pop().unwrap().prev, "a-prev");
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn clear_releases_all_nodes() {
        let mut stack = RedoStack::new();
        for i in 0..8 {
            stack.push(action(&i.to_string()));
        }
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut stack = RedoStack::new();
        for i in 0..100_000 {
            stack.push(action(&i.to_string()));
        }
        drop(stack);
    }
}
