use std::fmt;

/// A stable handle of a ring cell, i.e. its slot in the arena.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub(crate) struct NodeId(usize);

/// The sentinel ("ghost") node. It is allocated with the ring and never freed.
pub(crate) const SENTINEL: NodeId = NodeId(0);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == SENTINEL {
            f.write_str("#")
        } else {
            write!(f, "@{}", self.0)
        }
    }
}

pub(crate) struct Node<T> {
    /// `None` for the sentinel and for vacant slots.
    pub(crate) value: Option<T>,
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

/// The node arena of a list, together with its counters.
///
/// The cells reachable from the sentinel form a closed cycle:
/// - for every cell `n`, `n.next.prev == n` and `n.prev.next == n`;
/// - walking `next` from the sentinel `len` times returns to the sentinel.
///
/// Slots unlinked from the cycle are pushed to `vacant` and reused by later
/// insertions.
pub(crate) struct Ring<T> {
    nodes: Vec<Node<T>>,
    vacant: Vec<NodeId>,
    pub(crate) len: usize,
    /// Structural modification counter; only ever compared for equality.
    pub(crate) changes: u64,
}

impl<T> Ring<T> {
    pub(crate) fn new() -> Self {
        let ghost = Node {
            value: None,
            next: SENTINEL,
            prev: SENTINEL,
        };
        Self {
            nodes: vec![ghost],
            vacant: Vec::new(),
            len: 0,
            changes: 0,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn next_of(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    pub(crate) fn prev_of(&self, id: NodeId) -> NodeId {
        self.node(id).prev
    }

    pub(crate) fn front(&self) -> NodeId {
        self.next_of(SENTINEL)
    }

    pub(crate) fn back(&self) -> NodeId {
        self.prev_of(SENTINEL)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.front() == SENTINEL
    }

    pub(crate) fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).value.as_ref()
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).value.as_mut()
    }

    /// Advances the modification counter and returns its new value.
    pub(crate) fn bump(&mut self) -> u64 {
        self.changes = self.changes.wrapping_add(1);
        self.changes
    }

    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    fn allocate(&mut self, value: T) -> NodeId {
        let node = Node {
            value: Some(value),
            next: SENTINEL,
            prev: SENTINEL,
        };
        match self.vacant.pop() {
            Some(id) => {
                *self.node_mut(id) = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Splices a new node holding `value` between `at` and `at.next`, and
    /// returns the new node.
    pub(crate) fn insert_after(&mut self, at: NodeId, value: T) -> NodeId {
        let next = self.next_of(at);
        #[cfg(debug_assertions)]
        self.assert_adjacent(at, next);
        let node = self.allocate(value);
        self.connect(at, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(at, node);
            self.assert_adjacent(node, next);
        }
        node
    }

    /// Splices `id` out of the ring, frees its slot and returns its value.
    ///
    /// Returns `None`, leaving the ring untouched, if `id` holds no value
    /// (the sentinel, or an already vacant slot).
    pub(crate) fn unlink(&mut self, id: NodeId) -> Option<T> {
        let value = self.node_mut(id).value.take()?;
        let Node { prev, next, .. } = *self.node(id);
        self.connect(prev, next);
        self.vacant.push(id);
        self.len -= 1;
        Some(value)
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.front())
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.back())
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut id = self.front();
        while id != SENTINEL {
            let node = self.node(id);
            list.entries(&node.value);
            id = node.next;
        }
        list.finish()
    }
}
