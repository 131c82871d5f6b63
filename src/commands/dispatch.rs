//! Command dispatch logic for searchkit
use std::time::Instant;

use searchkit_core::config::SearchConfig;
use searchkit_core::error::Result;
use searchkit_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{game, informed, uninformed};

pub fn run(cli: &Cli, started: Instant) -> Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(elapsed = ?started.elapsed(), "load_config");

    let result = match &cli.command {
        Commands::Bfs { start } => uninformed::bfs(cli, *start),

        Commands::Path { start, goal } => uninformed::path(cli, *start, *goal),

        Commands::Dls {
            start,
            goal,
            limit,
            edges,
        } => uninformed::dls(cli, *start, *goal, *limit, edges),

        Commands::Iddfs {
            start,
            goal,
            max_depth,
        } => uninformed::iddfs(cli, *start, *goal, max_depth.or(config.max_depth)),

        Commands::Bidirectional { start, goal } => uninformed::bidirectional(cli, *start, *goal),

        Commands::BestFirst {
            start,
            goal,
            priority,
        } => informed::best_first(cli, *start, *goal, priority.unwrap_or(config.priority)),

        Commands::Beam {
            start,
            goal,
            width,
            max_iterations,
        } => {
            let mut options = config.beam_options();
            if let Some(width) = width {
                options.width = *width;
            }
            if max_iterations.is_some() {
                options.max_iterations = *max_iterations;
            }
            informed::beam(cli, *start, *goal, &options)
        }

        Commands::Minimax { leaves } => game::minimax(cli, leaves),

        Commands::AlphaBeta { leaves } => game::alpha_beta(cli, leaves),
    };

    trace_time!(started, "run_command");
    result
}

/// Read the `--config` file if one was given
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match &cli.config {
        Some(path) => {
            let config = SearchConfig::load(path)?;
            tracing::debug!(path = %path.display(), ?config, "config loaded");
            Ok(config)
        }
        None => Ok(SearchConfig::default()),
    }
}
