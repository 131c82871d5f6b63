use crate::graph::{reconstruct_path, Cost, GraphProvider, NodeId, Path, Predecessors};
use std::collections::VecDeque;
use tracing::debug;

/// Node ids reachable from `start` in breadth-first discovery order,
/// `start` first
pub(crate) fn visit_order<G: GraphProvider>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        for edge in graph.outgoing(current) {
            if !visited[edge.to.index()] {
                visited[edge.to.index()] = true;
                queue.push_back(edge.to);
            }
        }
    }
    order
}

/// Breadth-first visitation order from `start`
///
/// Each reachable node appears exactly once, in first-discovered order. Nodes
/// are marked visited when enqueued, so a node is never queued twice. A start
/// node the graph does not know is its own (neighborless) traversal.
#[tracing::instrument(skip(graph))]
pub fn traverse<G>(graph: &G, start: &G::Node) -> Vec<G::Node>
where
    G: GraphProvider,
    G::Node: Clone + std::fmt::Debug,
{
    let Some(start_id) = graph.node_id(start) else {
        return vec![start.clone()];
    };

    let order: Vec<G::Node> = visit_order(graph, start_id)
        .into_iter()
        .map(|id| graph.node(id).clone())
        .collect();

    debug!(visited = order.len(), "bfs traversal complete");
    order
}

/// Fewest-edges path from `start` to `goal`
///
/// Stops as soon as the goal is dequeued and rebuilds the path from parent
/// links. The reported cost is the sum of the traversed edge costs, which is
/// not necessarily the cheapest weighted route.
#[tracing::instrument(skip(graph))]
pub fn shortest_unweighted_path<G>(graph: &G, start: &G::Node, goal: &G::Node) -> Option<Path<G::Node>>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
{
    if start == goal {
        return Some(Path {
            nodes: vec![start.clone()],
            cost: Cost::ZERO,
        });
    }
    let start_id = graph.node_id(start)?;
    let goal_id = graph.node_id(goal)?;

    let mut visited = vec![false; graph.node_count()];
    let mut predecessors = Predecessors::new(graph.node_count());
    let mut queue = VecDeque::new();

    visited[start_id.index()] = true;
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        if current == goal_id {
            let path = reconstruct_path(graph, goal_id, &predecessors);
            debug!(hops = path.len(), "bfs path found");
            return Some(path);
        }

        for edge in graph.outgoing(current) {
            if !visited[edge.to.index()] {
                visited[edge.to.index()] = true;
                predecessors.set(edge.to, current, edge.cost);
                queue.push_back(edge.to);
            }
        }
    }

    debug!("bfs exhausted without reaching goal");
    None
}

#[cfg(test)]
mod tests;
