//! Ancestor stack of the element currently being built

use crate::dom::NodeId;

/// Chain of open elements from the `schema` root down to the current one.
///
/// Once the root has been popped the stack stays empty; nothing pushes it
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStack {
    items: Vec<NodeId>,
}

impl ElementStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the current element
    pub fn push(&mut self, id: NodeId) {
        self.items.push(id);
    }

    /// Close the current element. Returns false if the stack was already empty.
    pub fn pop(&mut self) -> bool {
        self.items.pop().is_some()
    }

    /// The current element
    pub fn top(&self) -> Option<NodeId> {
        self.items.last().copied()
    }

    /// Number of open elements
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    /// Check if no element is open
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Open elements from the root down
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementKind, Schema};

    #[test]
    fn test_push_pop() {
        let mut schema = Schema::new();
        let child = schema.append_child(NodeId::ROOT, ElementKind::TopLevelElement);

        let mut stack = ElementStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);

        stack.push(NodeId::ROOT);
        stack.push(child);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Some(child));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![NodeId::ROOT, child]);

        assert!(stack.pop());
        assert_eq!(stack.top(), Some(NodeId::ROOT));
        assert!(stack.pop());
        assert!(!stack.pop());
        assert!(stack.is_empty());
    }
}
