use crate::error::{Result, SearchError};
use crate::graph::path::materialize;
use crate::graph::{Cost, GraphProvider, NodeId, Path};
use tracing::{debug, trace};

/// Options for beam search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamOptions {
    /// Candidates kept between generations (at least 1)
    pub width: usize,
    /// Give up after this many generations
    pub max_iterations: Option<usize>,
}

impl BeamOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            max_iterations: None,
        }
    }
}

impl Default for BeamOptions {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Partial path held in the beam
#[derive(Debug, Clone)]
struct Candidate {
    path: Vec<NodeId>,
    g: Cost,
    f: Cost,
}

impl Candidate {
    fn head(&self) -> NodeId {
        // Candidates are never built with an empty path
        self.path[self.path.len() - 1]
    }
}

fn estimate<N, H>(heuristic: &H, node: &N, goal: &N) -> Result<Cost>
where
    H: Fn(&N, &N) -> f64,
{
    let h = heuristic(node, goal);
    if !h.is_finite() || h < 0.0 {
        return Err(SearchError::InvalidHeuristic { value: h });
    }
    Ok(Cost::new(h))
}

/// Width-bounded informed search scored by `f = g + h`
///
/// Each generation scans the beam in order and returns the first candidate
/// standing on the goal. Otherwise every candidate is expanded into all of its
/// neighbors, the children are stably sorted by `f`, and only the best `width`
/// survive. Pruning makes this incomplete and non-optimal: a discarded
/// candidate may have been the only way to the goal. An empty generation, or
/// exceeding `max_iterations`, yields `None`.
#[tracing::instrument(skip(graph, heuristic))]
pub fn beam_search<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: H,
    options: &BeamOptions,
) -> Result<Option<Path<G::Node>>>
where
    G: GraphProvider,
    G::Node: Clone + PartialEq + std::fmt::Debug,
    H: Fn(&G::Node, &G::Node) -> f64,
{
    if options.width == 0 {
        return Err(SearchError::InvalidBeamWidth(options.width));
    }

    let initial_h = estimate(&heuristic, start, goal)?;
    let Some(start_id) = graph.node_id(start) else {
        return Ok((start == goal).then(|| Path {
            nodes: vec![start.clone()],
            cost: Cost::ZERO,
        }));
    };

    let mut beam = vec![Candidate {
        path: vec![start_id],
        g: Cost::ZERO,
        f: initial_h,
    }];
    let mut generation = 0usize;

    while !beam.is_empty() {
        if let Some(found) = beam.iter().find(|c| graph.node(c.head()) == goal) {
            debug!(generation, cost = found.g.value(), "beam reached goal");
            return Ok(Some(materialize(graph, &found.path, found.g)));
        }
        if options.max_iterations.is_some_and(|max| generation >= max) {
            debug!(generation, "beam iteration bound reached");
            return Ok(None);
        }

        let mut next = Vec::new();
        for candidate in &beam {
            for edge in graph.outgoing(candidate.head()) {
                let g = candidate.g + edge.cost;
                let h = estimate(&heuristic, graph.node(edge.to), goal)?;
                let mut path = candidate.path.clone();
                path.push(edge.to);
                next.push(Candidate { path, g, f: g + h });
            }
        }

        // Stable: equal f keeps discovery order
        next.sort_by(|a, b| a.f.total_cmp(&b.f));
        next.truncate(options.width);
        trace!(generation, kept = next.len(), "beam pruned");

        beam = next;
        generation += 1;
    }

    debug!(generation, "beam emptied without reaching goal");
    Ok(None)
}

#[cfg(test)]
mod tests;
