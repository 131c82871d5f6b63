use crate::graph::provider::GraphProvider;
use crate::graph::types::{Cost, Edge, NodeId};
use std::collections::HashMap;
use std::hash::Hash;

/// Arena-backed adjacency graph owned by the caller
///
/// Nodes are interned into a table on first mention; every node gets its own
/// outgoing and incoming edge lists. Looking up an unknown node yields no
/// neighbors rather than an error.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, NodeId>,
    outgoing: Vec<Vec<Edge>>,
    incoming: Vec<Vec<Edge>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a weighted directed graph from `node -> [(neighbor, cost)]` entries.
    /// Keys are registered in iteration order, so isolated nodes are kept.
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            for (neighbor, cost) in neighbors {
                graph.add_edge(node.clone(), neighbor, cost);
            }
        }
        graph
    }

    /// Build a unit-weight directed graph from `node -> [neighbor]` entries
    pub fn from_unweighted_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in adjacency {
            graph.add_node(node.clone());
            for neighbor in neighbors {
                graph.add_unit_edge(node.clone(), neighbor);
            }
        }
        graph
    }

    /// Register a node, returning its existing handle if already present
    pub fn add_node(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node.clone());
        self.index.insert(node, id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Add a directed edge, registering either endpoint if needed
    pub fn add_edge(&mut self, from: N, to: N, cost: impl Into<Cost>) {
        let cost = cost.into();
        let from_id = self.add_node(from);
        let to_id = self.add_node(to);
        self.outgoing[from_id.0].push(Edge { to: to_id, cost });
        self.incoming[to_id.0].push(Edge { to: from_id, cost });
    }

    pub fn add_unit_edge(&mut self, from: N, to: N) {
        self.add_edge(from, to, Cost::DEFAULT);
    }

    /// Add the edge in both directions with the same cost
    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: impl Into<Cost>) {
        let cost = cost.into();
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Outgoing neighbors with their edge costs; empty for unknown nodes
    pub fn neighbors(&self, node: &N) -> Vec<(&N, Cost)> {
        match self.index.get(node) {
            Some(id) => self.outgoing[id.0]
                .iter()
                .map(|edge| (&self.nodes[edge.to.0], edge.cost))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }
}

impl<N: Clone + Eq + Hash> GraphProvider for Graph<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_id(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    fn node(&self, id: NodeId) -> &N {
        &self.nodes[id.0]
    }

    fn outgoing(&self, id: NodeId) -> &[Edge] {
        &self.outgoing[id.0]
    }

    fn incoming(&self, id: NodeId) -> &[Edge] {
        &self.incoming[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph: Graph<&str> = Graph::from_unweighted_adjacency([("A", vec!["B"])]);
        assert!(graph.neighbors(&"Z").is_empty());
        assert!(!graph.contains(&"Z"));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        let first = graph.add_node("A");
        let second = graph.add_node("A");
        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_neighbor_order_and_costs() {
        let graph = Graph::from_adjacency([("A", vec![("B", 1.0), ("C", 3.0)])]);
        let neighbors = graph.neighbors(&"A");
        assert_eq!(neighbors, vec![(&"B", Cost::from(1)), (&"C", Cost::from(3))]);
        assert!(graph.neighbors(&"B").is_empty());
    }

    #[test]
    fn test_incoming_mirrors_outgoing() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 4.0);
        let two = graph.node_id(&2).unwrap();
        let one = graph.node_id(&1).unwrap();
        assert_eq!(graph.incoming(two), &[Edge { to: one, cost: Cost::from(4) }]);
        assert!(graph.incoming(one).is_empty());
    }

    #[test]
    fn test_undirected_edge_adds_both_directions() {
        let mut graph = Graph::new();
        graph.add_undirected_edge(0, 1, 2.0);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(&1), vec![(&0, Cost::from(2))]);
    }

    #[test]
    fn test_adjacency_lists_are_independent() {
        let mut graph = Graph::new();
        graph.add_node('a');
        graph.add_node('b');
        graph.add_unit_edge('a', 'b');
        assert_eq!(graph.neighbors(&'a').len(), 1);
        assert!(graph.neighbors(&'b').is_empty());
    }

    #[test]
    fn test_isolated_keys_are_registered() {
        let graph: Graph<u32> = Graph::from_unweighted_adjacency([(8, vec![]), (2, vec![])]);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&8));
    }
}
