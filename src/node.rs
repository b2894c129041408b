//! Node identity for entity-item graphs.
//!
//! Node kind is encoded in the id itself: entities are the odd ids
//! starting at 1, items are the even ids starting at 2. Id 0 has no
//! kind and never appears in a live graph. The encoding is part of the
//! persisted artifact layout, so persisted graphs carry no redundant
//! kind tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External identifier of a node in a [`BipartiteGraph`](crate::BipartiteGraph).
pub type NodeId = u64;

/// The two disjoint node kinds of a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Odd ids, starting at 1.
    Entity,
    /// Even ids, starting at 2.
    Item,
}

impl NodeKind {
    /// Derive the kind of an id, or `None` for the kindless id 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eigraph::NodeKind;
    ///
    /// assert_eq!(NodeKind::of(1), Some(NodeKind::Entity));
    /// assert_eq!(NodeKind::of(2), Some(NodeKind::Item));
    /// assert_eq!(NodeKind::of(0), None);
    /// ```
    pub fn of(id: NodeId) -> Option<Self> {
        if id == 0 {
            None
        } else if id % 2 == 1 {
            Some(Self::Entity)
        } else {
            Some(Self::Item)
        }
    }

    /// Get the kind name as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns whether `id` denotes an entity (odd, >= 1).
pub fn is_entity(id: NodeId) -> bool {
    id % 2 == 1
}

/// Returns whether `id` denotes an item (even, >= 2).
pub fn is_item(id: NodeId) -> bool {
    id >= 2 && id % 2 == 0
}

/// Order a mixed-kind pair as (entity, item).
///
/// Callers must have already checked that the two ids are of different
/// kinds.
pub(crate) fn order_ei(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if is_entity(b) {
        (b, a)
    } else {
        (a, b)
    }
}
