use crate::error::{Result, SearchError};
use serde::Serialize;
use tracing::debug;

/// Whether evaluation may skip subtrees that cannot change the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    None,
    AlphaBeta,
}

/// Root value plus how many leaves were actually read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub value: i64,
    pub leaves_visited: usize,
}

/// Complete binary game tree stored as its leaf row
///
/// Node `index` at depth `d` has children `2 * index` and `2 * index + 1` at
/// depth `d + 1`; at the leaf depth, `index` addresses the leaf row directly.
/// No internal nodes are materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    leaves: Vec<i64>,
    depth: usize,
}

impl GameTree {
    /// Wrap a leaf row whose length is a power of two
    pub fn new(leaves: Vec<i64>) -> Result<Self> {
        if leaves.is_empty() || !leaves.len().is_power_of_two() {
            return Err(SearchError::invalid_tree(format!(
                "leaf count {} is not a power of two",
                leaves.len()
            )));
        }
        let depth = leaves.len().trailing_zeros() as usize;
        Ok(Self { leaves, depth })
    }

    /// Distance from the root to the leaf row
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn leaves(&self) -> &[i64] {
        &self.leaves
    }

    /// Plain minimax value of the subtree at (`depth`, `index`).
    ///
    /// Panics if `index` is outside the row at `depth`.
    pub fn minimax(&self, depth: usize, index: usize, maximizing: bool) -> i64 {
        self.search(depth, index, maximizing, None, &mut 0)
    }

    /// Alpha-beta value of the subtree at (`depth`, `index`) within the
    /// window `[alpha, beta]`. With the full window this equals `minimax`.
    ///
    /// Panics if `index` is outside the row at `depth`.
    pub fn alpha_beta(
        &self,
        depth: usize,
        index: usize,
        maximizing: bool,
        alpha: i64,
        beta: i64,
    ) -> i64 {
        self.search(depth, index, maximizing, Some((alpha, beta)), &mut 0)
    }

    /// Evaluate from the root with the maximizing player to move
    pub fn evaluate(&self, pruning: Pruning) -> Evaluation {
        let window = match pruning {
            Pruning::None => None,
            Pruning::AlphaBeta => Some((i64::MIN, i64::MAX)),
        };
        let mut leaves_visited = 0;
        let value = self.search(0, 0, true, window, &mut leaves_visited);
        debug!(value, leaves_visited, ?pruning, "game tree evaluated");
        Evaluation {
            value,
            leaves_visited,
        }
    }

    fn search(
        &self,
        depth: usize,
        index: usize,
        maximizing: bool,
        window: Option<(i64, i64)>,
        leaves_visited: &mut usize,
    ) -> i64 {
        if depth >= self.depth {
            *leaves_visited += 1;
            return self.leaves[index];
        }

        let mut best = if maximizing { i64::MIN } else { i64::MAX };
        let mut window = window;
        for child in [index * 2, index * 2 + 1] {
            let value = self.search(depth + 1, child, !maximizing, window, leaves_visited);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };

            if let Some((alpha, beta)) = window.as_mut() {
                if maximizing {
                    *alpha = (*alpha).max(best);
                } else {
                    *beta = (*beta).min(best);
                }
                if *beta <= *alpha {
                    break;
                }
            }
        }
        best
    }

    fn check_position(&self, depth: usize, index: usize) -> Result<()> {
        if depth > self.depth {
            return Err(SearchError::invalid_tree(format!(
                "depth {} is below the leaf row at depth {}",
                depth, self.depth
            )));
        }
        if index >= 1usize << depth {
            return Err(SearchError::invalid_tree(format!(
                "index {} is outside the {} nodes at depth {}",
                index,
                1usize << depth,
                depth
            )));
        }
        Ok(())
    }
}

fn tree_for(leaves: &[i64], max_depth: usize) -> Result<GameTree> {
    let tree = GameTree::new(leaves.to_vec())?;
    if tree.depth() != max_depth {
        return Err(SearchError::invalid_tree(format!(
            "{} leaves form a tree of depth {}, not {}",
            leaves.len(),
            tree.depth(),
            max_depth
        )));
    }
    Ok(tree)
}

/// Minimax value at (`depth`, `index`) over a leaf row of depth `max_depth`
pub fn minimax(
    depth: usize,
    index: usize,
    maximizing: bool,
    leaves: &[i64],
    max_depth: usize,
) -> Result<i64> {
    let tree = tree_for(leaves, max_depth)?;
    tree.check_position(depth, index)?;
    Ok(tree.minimax(depth, index, maximizing))
}

/// Alpha-beta value at (`depth`, `index`) over a leaf row of depth `max_depth`
pub fn alpha_beta(
    depth: usize,
    index: usize,
    maximizing: bool,
    leaves: &[i64],
    max_depth: usize,
    alpha: i64,
    beta: i64,
) -> Result<i64> {
    let tree = tree_for(leaves, max_depth)?;
    tree.check_position(depth, index)?;
    Ok(tree.alpha_beta(depth, index, maximizing, alpha, beta))
}
