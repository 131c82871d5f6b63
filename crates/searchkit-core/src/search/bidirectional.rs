use crate::graph::path::materialize;
use crate::graph::{Cost, GraphProvider, NodeId, Path, Predecessors};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Which end of the search a queue entry was reached from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Expanding outgoing edges away from the start
    Forward,
    /// Expanding incoming edges back from the target
    Backward,
}

/// Visitation flags and parent links for one direction
struct Side {
    visited: Vec<bool>,
    parents: Predecessors,
}

impl Side {
    fn new(node_count: usize, seed: NodeId) -> Self {
        let mut visited = vec![false; node_count];
        visited[seed.index()] = true;
        Self {
            visited,
            parents: Predecessors::new(node_count),
        }
    }
}

/// Meet-in-the-middle search expanding from both endpoints at once
///
/// Start and target share one FIFO queue, each entry tagged with the
/// direction it was reached from. The forward side follows outgoing edges and
/// the backward side follows incoming edges, so directed graphs are handled
/// correctly. The first dequeued node already visited from both sides is the
/// meeting node; the path is the forward parent chain up to it followed by
/// the backward chain down to the target.
#[tracing::instrument(skip(graph))]
pub fn bidirectional_search<G>(graph: &G, start: &G::Node, target: &G::Node) -> Option<Path<G::Node>>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
{
    if start == target {
        return Some(Path {
            nodes: vec![start.clone()],
            cost: Cost::ZERO,
        });
    }
    let start_id = graph.node_id(start)?;
    let target_id = graph.node_id(target)?;

    let node_count = graph.node_count();
    let mut forward = Side::new(node_count, start_id);
    let mut backward = Side::new(node_count, target_id);
    let mut queue = VecDeque::from([
        (start_id, Direction::Forward),
        (target_id, Direction::Backward),
    ]);

    while let Some((current, direction)) = queue.pop_front() {
        if forward.visited[current.index()] && backward.visited[current.index()] {
            debug!(meeting = current.index(), "frontiers met");
            return Some(stitch(graph, current, &forward.parents, &backward.parents));
        }

        let (side, edges) = match direction {
            Direction::Forward => (&mut forward, graph.outgoing(current)),
            Direction::Backward => (&mut backward, graph.incoming(current)),
        };
        for edge in edges {
            if !side.visited[edge.to.index()] {
                side.visited[edge.to.index()] = true;
                side.parents.set(edge.to, current, edge.cost);
                trace!(node = edge.to.index(), ?direction, "reached");
                queue.push_back((edge.to, direction));
            }
        }
    }

    debug!("both frontiers exhausted without meeting");
    None
}

/// Join the two parent chains at `meeting`, keeping the meeting node once
fn stitch<G>(
    graph: &G,
    meeting: NodeId,
    forward: &Predecessors,
    backward: &Predecessors,
) -> Path<G::Node>
where
    G: GraphProvider,
    G::Node: Clone,
{
    let (mut ids, head_cost) = forward.chain(meeting);
    ids.reverse();
    let (tail, tail_cost) = backward.chain(meeting);
    ids.extend(tail.into_iter().skip(1));

    materialize(graph, &ids, head_cost + tail_cost)
}
