//! Two-player zero-sum game-tree evaluation
//!
//! Fixed-depth minimax over an implicit complete binary tree, with optional
//! alpha-beta cutoffs that never change the root value.

pub mod tree;

pub use tree::{alpha_beta, minimax, Evaluation, GameTree, Pruning};
