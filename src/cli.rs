//! CLI argument parsing for searchkit
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use searchkit_core::search::Priority;

use crate::output::OutputFormat;

/// Searchkit - run the classic graph and game-tree searches on sample inputs
#[derive(Parser, Debug)]
#[command(name = "searchkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress error messages in human output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "searchkit_core=debug")
    #[arg(long, global = true, env = "SEARCHKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML file with default search settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first visit order of the letter graph
    Bfs {
        /// Node to start from
        #[arg(long, default_value_t = 'A')]
        start: char,
    },

    /// Fewest-edge path through the letter graph
    Path {
        #[arg(long, default_value_t = 'D')]
        start: char,

        #[arg(long, default_value_t = 'F')]
        goal: char,
    },

    /// Depth-limited search over the integer graph or a graph given by --edge
    Dls {
        #[arg(long, default_value_t = 5)]
        start: u32,

        #[arg(long, default_value_t = 8)]
        goal: u32,

        /// Most edges a path may follow
        #[arg(long, default_value_t = 2)]
        limit: usize,

        /// Directed edge "FROM:TO"; repeat to build a custom graph
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<(u32, u32)>,
    },

    /// Iterative deepening over the integer graph
    Iddfs {
        #[arg(long, default_value_t = 5)]
        start: u32,

        #[arg(long, default_value_t = 8)]
        goal: u32,

        /// Deepest limit to try (overrides the config file)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Two-frontier search over the eight-node graph
    Bidirectional {
        #[arg(long, default_value_t = 0)]
        start: u32,

        #[arg(long, default_value_t = 4)]
        goal: u32,
    },

    /// Priority-frontier search over the five-vertex weighted graph
    BestFirst {
        #[arg(long, default_value_t = 0)]
        start: u32,

        #[arg(long, default_value_t = 2)]
        goal: u32,

        /// Frontier key: edge-cost (greedy) or path-cost (overrides the config file)
        #[arg(long, value_parser = parse_priority)]
        priority: Option<Priority>,
    },

    /// Width-bounded search over the beam graph with its heuristic table
    Beam {
        #[arg(long, default_value_t = 'A')]
        start: char,

        #[arg(long, default_value_t = 'G')]
        goal: char,

        /// Candidates kept per generation (overrides the config file)
        #[arg(long)]
        width: Option<usize>,

        /// Generation bound (overrides the config file)
        #[arg(long)]
        max_iterations: Option<usize>,
    },

    /// Plain minimax over the sample game tree or the given leaves
    Minimax {
        /// Comma-separated leaf values; the count must be a power of two
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        leaves: Vec<i64>,
    },

    /// Alpha-beta over the sample game tree or the given leaves
    AlphaBeta {
        /// Comma-separated leaf values; the count must be a power of two
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        leaves: Vec<i64>,
    },
}

/// Parse priority from string
fn parse_priority(s: &str) -> std::result::Result<Priority, String> {
    s.parse::<Priority>()
}

/// Parse an edge of the form "FROM:TO"
fn parse_edge(s: &str) -> std::result::Result<(u32, u32), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("edge '{}' must look like FROM:TO", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("edge '{}': {}", s, e))
    };
    Ok((parse(from)?, parse(to)?))
}
