//! Path reconstruction utilities for graph searches

use crate::graph::provider::GraphProvider;
use crate::graph::types::{Cost, NodeId, Path};

/// Parent link recorded when a node is first reached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predecessor {
    pub node: NodeId,
    pub cost: Cost,
}

/// Per-search parent table indexed by `NodeId`
#[derive(Debug, Clone)]
pub struct Predecessors {
    links: Vec<Option<Predecessor>>,
}

impl Predecessors {
    pub fn new(node_count: usize) -> Self {
        Self {
            links: vec![None; node_count],
        }
    }

    pub fn set(&mut self, node: NodeId, pred: NodeId, cost: Cost) {
        self.links[node.0] = Some(Predecessor { node: pred, cost });
    }

    pub fn get(&self, node: NodeId) -> Option<Predecessor> {
        self.links[node.0]
    }

    /// Walk parent links from `from` until a node without a parent, returning
    /// the visited ids (starting with `from`) and the summed edge cost.
    pub fn chain(&self, from: NodeId) -> (Vec<NodeId>, Cost) {
        let mut ids = vec![from];
        let mut cost = Cost::ZERO;
        let mut current = from;
        while let Some(pred) = self.get(current) {
            cost = cost + pred.cost;
            current = pred.node;
            ids.push(current);
        }
        (ids, cost)
    }
}

/// Rebuild the root-to-`target` path from a parent table
pub fn reconstruct_path<G>(graph: &G, target: NodeId, predecessors: &Predecessors) -> Path<G::Node>
where
    G: GraphProvider,
    G::Node: Clone,
{
    let (mut ids, cost) = predecessors.chain(target);
    ids.reverse();
    materialize(graph, &ids, cost)
}

/// Resolve a sequence of ids into caller-owned node values
pub fn materialize<G>(graph: &G, ids: &[NodeId], cost: Cost) -> Path<G::Node>
where
    G: GraphProvider,
    G::Node: Clone,
{
    Path {
        nodes: ids.iter().map(|&id| graph.node(id).clone()).collect(),
        cost,
    }
}

/// Sum of edge costs along consecutive ids, taking the cheapest parallel edge
pub fn path_cost<G: GraphProvider>(graph: &G, ids: &[NodeId]) -> Cost {
    ids.windows(2).fold(Cost::ZERO, |acc, pair| {
        let step = graph
            .outgoing(pair[0])
            .iter()
            .filter(|edge| edge.to == pair[1])
            .map(|edge| edge.cost)
            .min_by(Cost::total_cmp)
            .unwrap_or(Cost::DEFAULT);
        acc + step
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_reconstruct_follows_parents_to_root() {
        let graph = Graph::from_adjacency([("A", vec![("B", 1.0)]), ("B", vec![("C", 2.0)])]);
        let a = graph.node_id(&"A").unwrap();
        let b = graph.node_id(&"B").unwrap();
        let c = graph.node_id(&"C").unwrap();

        let mut preds = Predecessors::new(graph.node_count());
        preds.set(b, a, Cost::from(1));
        preds.set(c, b, Cost::from(2));

        let path = reconstruct_path(&graph, c, &preds);
        assert_eq!(path.nodes, vec!["A", "B", "C"]);
        assert_eq!(path.cost, Cost::from(3));
    }

    #[test]
    fn test_root_reconstructs_to_single_node() {
        let graph = Graph::from_unweighted_adjacency([("A", vec!["B"])]);
        let a = graph.node_id(&"A").unwrap();
        let preds = Predecessors::new(graph.node_count());
        let path = reconstruct_path(&graph, a, &preds);
        assert_eq!(path.nodes, vec!["A"]);
        assert_eq!(path.cost, Cost::ZERO);
    }

    #[test]
    fn test_path_cost_uses_cheapest_parallel_edge() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1, 5.0);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 2, 1.0);
        let ids: Vec<_> = [0, 1, 2].iter().map(|n| graph.node_id(n).unwrap()).collect();
        assert_eq!(path_cost(&graph, &ids), Cost::from(3));
    }
}
