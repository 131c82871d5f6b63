//! Game tree evaluation commands

use searchkit_core::error::Result;
use searchkit_core::game::{GameTree, Pruning};

use crate::cli::Cli;
use crate::output;
use crate::samples;

fn tree(leaves: &[i64]) -> Result<GameTree> {
    if leaves.is_empty() {
        GameTree::new(samples::GAME_LEAVES.to_vec())
    } else {
        GameTree::new(leaves.to_vec())
    }
}

pub fn minimax(cli: &Cli, leaves: &[i64]) -> Result<()> {
    let evaluation = tree(leaves)?.evaluate(Pruning::None);
    output::print_evaluation(cli.format, "minimax", &evaluation)
}

pub fn alpha_beta(cli: &Cli, leaves: &[i64]) -> Result<()> {
    let evaluation = tree(leaves)?.evaluate(Pruning::AlphaBeta);
    output::print_evaluation(cli.format, "alpha-beta", &evaluation)
}
