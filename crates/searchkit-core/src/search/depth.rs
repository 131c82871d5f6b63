use crate::graph::path::{materialize, path_cost};
use crate::graph::{Cost, GraphProvider, NodeId, Path};
use crate::search::bfs::visit_order;
use serde::Serialize;
use tracing::{debug, trace};

/// Outcome of an iterative deepening search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Deepening<N> {
    /// Target found; `depth` is the limit it was found at (its hop distance)
    Found { path: Path<N>, depth: usize },
    /// The caller's limit was hit while deeper branches were still unexplored
    NotFound { explored_to: usize },
    /// The target cannot be reached from start at any depth
    Unreachable,
}

/// Result of one depth-limited pass
enum Pass {
    Found(Vec<NodeId>),
    /// Some branch was cut off by the limit with edges left to follow
    Cutoff,
    /// Every branch ended at a dead end before the limit
    Exhausted,
}

struct Frame {
    node: NodeId,
    next_edge: usize,
    remaining: usize,
}

/// Depth-first pass from `start`, following at most `limit` edges per branch
///
/// Runs on an explicit stack whose frames form the current path, so popping a
/// frame is the backtrack step. Neighbors are tried in adjacency order, which
/// gives the same first path as the recursive formulation. Revisits are not
/// suppressed; the limit alone bounds the search on cyclic graphs.
fn bounded_dfs<G: GraphProvider>(graph: &G, start: NodeId, goal: NodeId, limit: usize) -> Pass {
    if start == goal {
        return Pass::Found(vec![start]);
    }

    let mut cut_off = false;
    let mut stack = vec![Frame {
        node: start,
        next_edge: 0,
        remaining: limit,
    }];

    while let Some(frame) = stack.last_mut() {
        let edges = graph.outgoing(frame.node);
        if frame.remaining == 0 {
            cut_off |= !edges.is_empty();
            stack.pop();
            continue;
        }
        let Some(edge) = edges.get(frame.next_edge) else {
            stack.pop();
            continue;
        };
        frame.next_edge += 1;
        let remaining = frame.remaining - 1;

        if edge.to == goal {
            let mut ids: Vec<NodeId> = stack.iter().map(|f| f.node).collect();
            ids.push(goal);
            return Pass::Found(ids);
        }

        trace!(node = edge.to.index(), remaining, "descend");
        stack.push(Frame {
            node: edge.to,
            next_edge: 0,
            remaining,
        });
    }

    if cut_off {
        Pass::Cutoff
    } else {
        Pass::Exhausted
    }
}

/// Depth-first search for `goal` that follows at most `limit` edges
///
/// A returned path has at most `limit + 1` nodes. Raising the limit can only
/// turn a miss into a hit.
#[tracing::instrument(skip(graph))]
pub fn depth_limited_search<G>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    limit: usize,
) -> Option<Path<G::Node>>
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

    match bounded_dfs(graph, start_id, goal_id, limit) {
        Pass::Found(ids) => {
            let cost = path_cost(graph, &ids);
            Some(materialize(graph, &ids, cost))
        }
        Pass::Cutoff | Pass::Exhausted => None,
    }
}

/// Depth-limited search repeated with limits 0, 1, 2, ...
///
/// A breadth-first reachability pass runs first, so a target that is absent
/// or outside the start's reachable set is `Unreachable` without any
/// deepening. Otherwise the limit never needs to pass `reachable - 1`, the
/// longest simple path inside that set. With `max_limit` set, giving up
/// before the target is found yields `NotFound`.
#[tracing::instrument(skip(graph))]
pub fn iterative_deepening_search<G>(
    graph: &G,
    start: &G::Node,
    target: &G::Node,
    max_limit: Option<usize>,
) -> Deepening<G::Node>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
{
    if start == target {
        return Deepening::Found {
            path: Path {
                nodes: vec![start.clone()],
                cost: Cost::ZERO,
            },
            depth: 0,
        };
    }
    let (Some(start_id), Some(target_id)) = (graph.node_id(start), graph.node_id(target)) else {
        debug!("endpoint absent from graph");
        return Deepening::Unreachable;
    };

    let reachable = visit_order(graph, start_id);
    if !reachable.contains(&target_id) {
        debug!(reachable = reachable.len(), "target outside the reachable set");
        return Deepening::Unreachable;
    }

    let ceiling = reachable.len() - 1;
    let mut limit = 0;
    loop {
        debug!(limit, "trying depth limit");
        match bounded_dfs(graph, start_id, target_id, limit) {
            Pass::Found(ids) => {
                let cost = path_cost(graph, &ids);
                let path = materialize(graph, &ids, cost);
                return Deepening::Found {
                    depth: path.len(),
                    path,
                };
            }
            Pass::Exhausted => return Deepening::Unreachable,
            Pass::Cutoff => {}
        }

        if limit >= ceiling {
            return Deepening::Unreachable;
        }
        if max_limit.is_some_and(|max| limit >= max) {
            return Deepening::NotFound { explored_to: limit };
        }
        limit += 1;
    }
}
