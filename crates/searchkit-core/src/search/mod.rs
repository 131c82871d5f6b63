//! Graph search algorithms
//!
//! Each search is a single synchronous call that owns its frontier, visited
//! sets and parent tables for the duration of the call:
//! - `bfs`: breadth-first traversal and fewest-edges paths
//! - `depth`: depth-limited and iterative deepening search
//! - `bidirectional`: meet-in-the-middle search from both endpoints
//! - `best_first`: priority-ordered search, greedy or accumulated cost
//! - `beam`: width-bounded heuristic search

pub mod beam;
pub mod best_first;
pub mod bfs;
pub mod bidirectional;
pub mod depth;

pub use beam::{beam_search, BeamOptions};
pub use best_first::{best_first_search, expansion_order, Priority};
pub use bfs::{shortest_unweighted_path, traverse};
pub use bidirectional::bidirectional_search;
pub use depth::{depth_limited_search, iterative_deepening_search, Deepening};
