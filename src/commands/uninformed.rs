//! Commands for the searches that use no cost or estimate information

use searchkit_core::bail_usage;
use searchkit_core::error::Result;
use searchkit_core::search::{
    bidirectional_search, depth_limited_search, iterative_deepening_search,
    shortest_unweighted_path, traverse,
};

use crate::cli::Cli;
use crate::output;
use crate::samples;

pub fn bfs(cli: &Cli, start: char) -> Result<()> {
    let graph = samples::letter_graph();
    let order = traverse(&graph, &start);
    tracing::debug!(visited = order.len(), "bfs complete");
    output::print_order(cli.format, "bfs", &order)
}

pub fn path(cli: &Cli, start: char, goal: char) -> Result<()> {
    let graph = samples::letter_graph();
    let path = shortest_unweighted_path(&graph, &start, &goal);
    output::print_path(cli.format, "path", path.as_ref())
}

pub fn dls(cli: &Cli, start: u32, goal: u32, limit: usize, edges: &[(u32, u32)]) -> Result<()> {
    let graph = if edges.is_empty() {
        samples::deepening_graph()
    } else {
        if !edges.iter().any(|&(from, to)| from == start || to == start) {
            bail_usage!(format!("start node {} does not appear in any --edge", start));
        }
        samples::edge_graph(edges)
    };
    let path = depth_limited_search(&graph, &start, &goal, limit);
    output::print_path(cli.format, "dls", path.as_ref())
}

pub fn iddfs(cli: &Cli, start: u32, goal: u32, max_depth: Option<usize>) -> Result<()> {
    let graph = samples::deepening_graph();
    let outcome = iterative_deepening_search(&graph, &start, &goal, max_depth);
    output::print_deepening(cli.format, &outcome)
}

pub fn bidirectional(cli: &Cli, start: u32, goal: u32) -> Result<()> {
    let graph = samples::meeting_graph();
    let path = bidirectional_search(&graph, &start, &goal);
    output::print_path(cli.format, "bidirectional", path.as_ref())
}
