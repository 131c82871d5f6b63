//! Commands for the cost- and estimate-guided searches

use searchkit_core::error::Result;
use searchkit_core::search::{beam_search, best_first_search, expansion_order, BeamOptions, Priority};

use crate::cli::Cli;
use crate::output;
use crate::samples;

pub fn best_first(cli: &Cli, start: u32, goal: u32, priority: Priority) -> Result<()> {
    let graph = samples::weighted_graph();
    let path = best_first_search(&graph, &start, &goal, priority)?;
    let expanded = expansion_order(&graph, &start, &goal, priority)?;
    tracing::debug!(%priority, expanded = expanded.len(), "best-first complete");
    output::print_best_first(cli.format, path.as_ref(), &expanded)
}

pub fn beam(cli: &Cli, start: char, goal: char, options: &BeamOptions) -> Result<()> {
    let graph = samples::beam_graph();
    let path = beam_search(&graph, &start, &goal, samples::beam_heuristic, options)?;
    output::print_path(cli.format, "beam", path.as_ref())
}
