//! Sample graphs and trees the commands run against

use searchkit_core::graph::Graph;

/// Undirected six-node letter graph, stored as symmetric adjacency lists
pub fn letter_graph() -> Graph<char> {
    Graph::from_unweighted_adjacency([
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'D', 'E']),
        ('C', vec!['A', 'F']),
        ('D', vec!['B']),
        ('E', vec!['B', 'F']),
        ('F', vec!['C', 'E']),
    ])
}

/// Small directed integer graph used for the depth-bounded searches
pub fn deepening_graph() -> Graph<u32> {
    Graph::from_unweighted_adjacency([
        (5, vec![3, 7]),
        (7, vec![8]),
        (3, vec![2, 4]),
        (4, vec![8]),
        (8, vec![]),
        (2, vec![]),
    ])
}

/// Directed graph from explicit `(from, to)` edges
pub fn edge_graph(edges: &[(u32, u32)]) -> Graph<u32> {
    let mut graph = Graph::new();
    for &(from, to) in edges {
        graph.add_unit_edge(from, to);
    }
    graph
}

/// Eight-node graph for bidirectional search
pub fn meeting_graph() -> Graph<u32> {
    Graph::from_unweighted_adjacency([
        (0, vec![1, 5]),
        (1, vec![0, 2, 6]),
        (2, vec![1]),
        (3, vec![4, 6]),
        (4, vec![3]),
        (5, vec![0, 6]),
        (6, vec![1, 3, 5, 7]),
        (7, vec![6]),
    ])
}

/// Five-vertex weighted undirected graph for best-first search
pub fn weighted_graph() -> Graph<u32> {
    let mut graph = Graph::new();
    for v in 0..5 {
        graph.add_node(v);
    }
    for (a, b, cost) in [
        (0, 1, 1.0),
        (0, 2, 8.0),
        (1, 2, 12.0),
        (1, 4, 13.0),
        (2, 3, 6.0),
        (4, 3, 3.0),
    ] {
        graph.add_undirected_edge(a, b, cost);
    }
    graph
}

/// Directed weighted graph for beam search
pub fn beam_graph() -> Graph<char> {
    Graph::from_adjacency([
        ('A', vec![('B', 1.0), ('C', 3.0)]),
        ('B', vec![('D', 2.0), ('E', 4.0)]),
        ('C', vec![('F', 2.0)]),
        ('D', vec![('G', 1.0)]),
        ('E', vec![('G', 3.0)]),
        ('F', vec![('G', 4.0)]),
        ('G', vec![]),
    ])
}

/// Fixed estimates for the beam graph; the goal argument is ignored
pub fn beam_heuristic(node: &char, _goal: &char) -> f64 {
    match node {
        'A' => 5.0,
        'B' => 4.0,
        'C' => 3.0,
        'D' => 2.0,
        'E' => 3.0,
        'F' => 2.0,
        _ => 0.0,
    }
}

/// Leaf row of the depth-4 sample game tree
pub const GAME_LEAVES: [i64; 16] = [3, 4, 2, 1, 7, 8, 9, 10, 2, 11, 1, 12, 14, 9, 13, 16];
