//! Searchkit Core Library
//!
//! Graph- and game-tree search algorithms over a shared, caller-owned graph
//! model. Searches hold no state between calls.

pub mod config;
pub mod error;
pub mod game;
pub mod graph;
pub mod logging;
pub mod search;
