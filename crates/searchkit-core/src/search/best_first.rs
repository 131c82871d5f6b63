use crate::error::{Result, SearchError};
use crate::graph::{reconstruct_path, Cost, GraphProvider, NodeId, Path, Predecessors};
use crate::search::bfs::visit_order;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// What a frontier entry is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Greedy: key is the cost of the single edge used to reach the node.
    /// Each node is claimed the first time it is pushed. NOT guaranteed to
    /// return a minimum-cost path.
    EdgeCost,
    /// Key is the accumulated cost from the source (Dijkstra). Optimal for
    /// non-negative weights; any negative edge reachable from the source is
    /// rejected before the search starts.
    #[default]
    PathCost,
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edge-cost" | "greedy" => Ok(Priority::EdgeCost),
            "path-cost" | "accumulated" => Ok(Priority::PathCost),
            other => Err(format!(
                "unknown priority '{}' (expected: edge-cost, path-cost)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::EdgeCost => write!(f, "edge-cost"),
            Priority::PathCost => write!(f, "path-cost"),
        }
    }
}

/// Frontier entry, wrapped in `Reverse` to make `BinaryHeap` a min-heap.
/// Equal keys pop in push order.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node: NodeId,
    pub key: Cost,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during one best-first run
struct FrontierState {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    predecessors: Predecessors,
    /// Greedy mode: claimed on push. Path-cost mode: settled on pop.
    closed: Vec<bool>,
    best: Vec<Option<Cost>>,
    order: Vec<NodeId>,
    seq: u64,
}

impl FrontierState {
    fn new(node_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            predecessors: Predecessors::new(node_count),
            closed: vec![false; node_count],
            best: vec![None; node_count],
            order: Vec::new(),
            seq: 0,
        }
    }

    fn push(&mut self, node: NodeId, key: Cost) {
        self.heap.push(Reverse(HeapEntry {
            node,
            key,
            seq: self.seq,
        }));
        self.seq += 1;
    }
}

/// Reject any negative edge reachable from `source`, wherever it sits
/// relative to the target
fn check_non_negative<G>(graph: &G, source: NodeId) -> Result<()>
where
    G: GraphProvider,
    G::Node: std::fmt::Debug,
{
    for node in visit_order(graph, source) {
        if let Some(edge) = graph.outgoing(node).iter().find(|e| e.cost.is_negative()) {
            return Err(SearchError::NegativeCost {
                from: format!("{:?}", graph.node(node)),
                to: format!("{:?}", graph.node(edge.to)),
                cost: edge.cost.value(),
            });
        }
    }
    Ok(())
}

/// Expand from `source` in priority order until `target` is popped, or
/// until the frontier empties. Returns the final state and whether the
/// target was reached.
fn run<G>(
    graph: &G,
    source: NodeId,
    target: Option<NodeId>,
    priority: Priority,
) -> Result<(FrontierState, bool)>
where
    G: GraphProvider,
    G::Node: std::fmt::Debug,
{
    if priority == Priority::PathCost {
        check_non_negative(graph, source)?;
    }

    let mut state = FrontierState::new(graph.node_count());
    state.best[source.index()] = Some(Cost::ZERO);
    if priority == Priority::EdgeCost {
        state.closed[source.index()] = true;
    }
    state.push(source, Cost::ZERO);

    while let Some(Reverse(HeapEntry { node: current, key, .. })) = state.heap.pop() {
        if priority == Priority::PathCost {
            // Stale duplicate of an already settled node
            if state.closed[current.index()] {
                continue;
            }
            state.closed[current.index()] = true;
        }
        state.order.push(current);
        trace!(node = current.index(), key = key.value(), "pop");

        if Some(current) == target {
            return Ok((state, true));
        }

        let reached = state.best[current.index()].unwrap_or(Cost::ZERO);
        for edge in graph.outgoing(current) {
            match priority {
                Priority::EdgeCost => {
                    if !state.closed[edge.to.index()] {
                        state.closed[edge.to.index()] = true;
                        state.best[edge.to.index()] = Some(reached + edge.cost);
                        state.predecessors.set(edge.to, current, edge.cost);
                        state.push(edge.to, edge.cost);
                    }
                }
                Priority::PathCost => {
                    if state.closed[edge.to.index()] {
                        continue;
                    }
                    let candidate = reached + edge.cost;
                    let improves = state.best[edge.to.index()]
                        .is_none_or(|known| candidate.total_cmp(&known) == Ordering::Less);
                    if improves {
                        state.best[edge.to.index()] = Some(candidate);
                        state.predecessors.set(edge.to, current, edge.cost);
                        state.push(edge.to, candidate);
                    }
                }
            }
        }
    }

    Ok((state, false))
}

/// Priority-ordered search from `source` to `target`
///
/// Under `Priority::PathCost` the returned path is a cheapest path for
/// non-negative weights. Under `Priority::EdgeCost` it is whatever chain of
/// first claims led to the target, which can be far from optimal.
#[tracing::instrument(skip(graph))]
pub fn best_first_search<G>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    priority: Priority,
) -> Result<Option<Path<G::Node>>>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
{
    if source == target {
        return Ok(Some(Path {
            nodes: vec![source.clone()],
            cost: Cost::ZERO,
        }));
    }
    let (Some(source_id), Some(target_id)) = (graph.node_id(source), graph.node_id(target)) else {
        return Ok(None);
    };

    let (state, reached) = run(graph, source_id, Some(target_id), priority)?;
    debug!(expanded = state.order.len(), reached, "best-first complete");
    Ok(reached.then(|| reconstruct_path(graph, target_id, &state.predecessors)))
}

/// Nodes in the order they were popped, ending with `target` if reached
#[tracing::instrument(skip(graph))]
pub fn expansion_order<G>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    priority: Priority,
) -> Result<Vec<G::Node>>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
{
    let Some(source_id) = graph.node_id(source) else {
        return Ok(vec![source.clone()]);
    };
    // An unknown target leaves the run to visit everything reachable
    let (state, _) = run(graph, source_id, graph.node_id(target), priority)?;
    Ok(state.order.iter().map(|&id| graph.node(id).clone()).collect())
}
