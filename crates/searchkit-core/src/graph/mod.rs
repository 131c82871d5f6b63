//! Graph representation shared by every search
//!
//! Provides the adjacency abstraction the algorithms run over:
//! - `Graph`: caller-owned, arena-indexed weighted digraph
//! - `GraphProvider`: trait seam the searches are generic over
//! - Path reconstruction from per-search parent tables

pub mod model;
pub mod path;
pub mod provider;
pub mod types;

pub use model::Graph;
pub use path::{reconstruct_path, Predecessors};
pub use provider::GraphProvider;
pub use types::{Cost, Edge, NodeId, Path};
