use crate::graph::types::{Edge, NodeId};

/// Trait for providing graph adjacency to the search algorithms
///
/// Every search is generic over this trait. Implementations own the node
/// table; searches only hold `NodeId`s for the duration of one call.
pub trait GraphProvider {
    type Node;

    fn node_count(&self) -> usize;

    /// Handle for a caller-supplied node, `None` if the node is unknown
    fn node_id(&self, node: &Self::Node) -> Option<NodeId>;

    fn node(&self, id: NodeId) -> &Self::Node;

    /// Edges leaving `id`, in insertion order
    fn outgoing(&self, id: NodeId) -> &[Edge];

    /// Edges entering `id`, each pointing back at its source node
    fn incoming(&self, id: NodeId) -> &[Edge];
}
