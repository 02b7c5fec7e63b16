//! Node storage for the sample-point grid

pub mod generator;

use serde::{Deserialize, Serialize};

/// A single geographic sample point on the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, dense from 0
    pub id: u32,

    /// Grid column
    pub x: u32,

    /// Grid row
    pub y: u32,

    /// Terrain elevation at this point
    pub elevation: f64,

    /// Flood risk score in [0, 1]
    pub risk_score: f64,
}

/// Immutable set of sample points, generated once at process start
///
/// Every other component receives read-only views; concurrent readers
/// need no locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Build a store from an explicit node list
    ///
    /// Node ids must be dense (0..n); the list is sorted by id so that
    /// id equals position.
    pub fn from_nodes(mut nodes: Vec<Node>) -> Self {
        nodes.sort_unstable_by_key(|n| n.id);
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id as usize == i));
        Self { nodes }
    }

    /// All nodes in ascending-id order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id
    pub fn get(&self, id: u32) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Number of nodes in the store
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the store holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
