use crate::graph::{Cost, Graph};
use crate::search::bfs::*;

fn letter_graph() -> Graph<char> {
    Graph::from_unweighted_adjacency([
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'D', 'E']),
        ('C', vec!['A', 'F']),
        ('D', vec!['B']),
        ('E', vec!['B', 'F']),
        ('F', vec!['C', 'E']),
    ])
}

/// Test the visitation order on the six-letter example graph
#[test]
fn test_traverse_letter_graph() {
    let graph = letter_graph();
    assert_eq!(traverse(&graph, &'A'), vec!['A', 'B', 'C', 'D', 'E', 'F']);
}

/// Test that a cycle does not cause a node to be visited twice
#[test]
fn test_traverse_visits_each_node_once() {
    let graph = Graph::from_unweighted_adjacency([(1, vec![2]), (2, vec![3]), (3, vec![1, 3])]);
    assert_eq!(traverse(&graph, &1), vec![1, 2, 3]);
}

/// Test that nodes unreachable from start are left out
#[test]
fn test_traverse_skips_unreachable() {
    let graph = Graph::from_unweighted_adjacency([("a", vec!["b"]), ("c", vec!["a"])]);
    assert_eq!(traverse(&graph, &"a"), vec!["a", "b"]);
}

/// Test that an unknown start node traverses to just itself
#[test]
fn test_traverse_unknown_start() {
    let graph = letter_graph();
    assert_eq!(traverse(&graph, &'Z'), vec!['Z']);
}

/// Test that the path uses the fewest edges, not the cheapest weights
#[test]
fn test_shortest_path_counts_edges() {
    let mut graph = Graph::new();
    graph.add_edge("s", "t", 10.0);
    graph.add_edge("s", "m", 1.0);
    graph.add_edge("m", "t", 1.0);

    let path = shortest_unweighted_path(&graph, &"s", &"t").unwrap();
    assert_eq!(path.nodes, vec!["s", "t"]);
    assert_eq!(path.len(), 1);
    assert_eq!(path.cost, Cost::from(10));
}

#[test]
fn test_shortest_path_letter_graph() {
    let graph = letter_graph();
    let path = shortest_unweighted_path(&graph, &'D', &'F').unwrap();
    assert_eq!(path.nodes, vec!['D', 'B', 'E', 'F']);
    assert_eq!(path.cost, Cost::from(3));
}

#[test]
fn test_shortest_path_start_is_goal() {
    let graph = letter_graph();
    let path = shortest_unweighted_path(&graph, &'C', &'C').unwrap();
    assert_eq!(path.nodes, vec!['C']);
    assert_eq!(path.cost, Cost::ZERO);
}

/// Test that a directed graph with no route reports not found
#[test]
fn test_shortest_path_not_found() {
    let graph = Graph::from_unweighted_adjacency([("a", vec!["b"]), ("c", vec!["a"])]);
    assert!(shortest_unweighted_path(&graph, &"a", &"c").is_none());
    assert!(shortest_unweighted_path(&graph, &"a", &"missing").is_none());
}
