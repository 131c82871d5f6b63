use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stable handle for a node inside a [`Graph`](crate::graph::Graph) arena.
///
/// Parent links and visited sets are keyed by `NodeId`, never by references
/// into the node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Represents the cost of traversing a single edge, or an accumulated path cost.
/// Unweighted graphs use `Cost::DEFAULT` (1.0) for every edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const DEFAULT: Cost = Cost(1.0);
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Total ordering over costs (NaN sorts above every number).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(units: u32) -> Self {
        Cost(f64::from(units))
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge stored in a node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: Cost,
}

/// Source-to-destination node sequence, both endpoints inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    pub nodes: Vec<N>,
    pub cost: Cost,
}

impl<N: PartialEq> Path<N> {
    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }
}
