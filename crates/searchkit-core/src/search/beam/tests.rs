use super::*;
use crate::graph::Graph;
use crate::search::best_first::{best_first_search, Priority};

fn beam_graph() -> Graph<char> {
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

fn table_heuristic(node: &char, _goal: &char) -> f64 {
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

/// Test the width-2 example reaches G through the cheapest route
#[test]
fn test_beam_example() {
    let graph = beam_graph();
    let path = beam_search(&graph, &'A', &'G', table_heuristic, &BeamOptions::new(2))
        .unwrap()
        .unwrap();
    assert_eq!(path.nodes, vec!['A', 'B', 'D', 'G']);
    assert_eq!(path.cost, Cost::from(4));
}

/// Test that width one degenerates to greedy descent on f
#[test]
fn test_beam_width_one_is_greedy() {
    let graph = beam_graph();
    let path = beam_search(&graph, &'A', &'G', table_heuristic, &BeamOptions::new(1))
        .unwrap()
        .unwrap();
    assert_eq!(path.nodes, vec!['A', 'B', 'D', 'G']);
}

/// Test that a wide beam loses nothing compared with full best-first search
#[test]
fn test_wide_beam_matches_best_first() {
    let graph = beam_graph();
    let beam = beam_search(&graph, &'A', &'G', |_: &char, _: &char| 0.0, &BeamOptions::new(16))
        .unwrap()
        .unwrap();
    let best = best_first_search(&graph, &'A', &'G', Priority::PathCost)
        .unwrap()
        .unwrap();
    assert_eq!(beam.cost, best.cost);
    assert_eq!(beam.nodes, best.nodes);
}

/// Test that pruning can discard the only route to the goal
#[test]
fn test_narrow_beam_prunes_solution() {
    let graph = Graph::from_adjacency([
        ('A', vec![('B', 1.0), ('C', 5.0)]),
        ('C', vec![('G', 1.0)]),
    ]);
    let h = |node: &char, _: &char| if *node == 'C' { 5.0 } else { 0.0 };

    assert!(beam_search(&graph, &'A', &'G', h, &BeamOptions::new(1))
        .unwrap()
        .is_none());
    let path = beam_search(&graph, &'A', &'G', h, &BeamOptions::new(2))
        .unwrap()
        .unwrap();
    assert_eq!(path.nodes, vec!['A', 'C', 'G']);
}

#[test]
fn test_beam_start_is_goal() {
    let graph = beam_graph();
    let path = beam_search(&graph, &'G', &'G', table_heuristic, &BeamOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(path.nodes, vec!['G']);
    assert_eq!(path.cost, Cost::ZERO);
}

#[test]
fn test_beam_rejects_zero_width() {
    let graph = beam_graph();
    let err = beam_search(&graph, &'A', &'G', table_heuristic, &BeamOptions::new(0)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidBeamWidth(0)));
}

#[test]
fn test_beam_rejects_negative_heuristic() {
    let graph = beam_graph();
    let err = beam_search(&graph, &'A', &'G', |_: &char, _: &char| -1.0, &BeamOptions::new(2))
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidHeuristic { .. }));
}

/// Test that an unreachable goal empties the beam on an acyclic graph
#[test]
fn test_beam_empties() {
    let graph = beam_graph();
    assert!(beam_search(&graph, &'C', &'B', table_heuristic, &BeamOptions::new(3))
        .unwrap()
        .is_none());
}

/// Test that the iteration bound stops a cycle from running forever
#[test]
fn test_beam_iteration_bound_on_cycle() {
    let mut graph = Graph::new();
    graph.add_undirected_edge(1, 2, 1.0);
    graph.add_node(3);
    let options = BeamOptions {
        width: 2,
        max_iterations: Some(50),
    };
    assert!(beam_search(&graph, &1, &3, |_: &i32, _: &i32| 0.0, &options)
        .unwrap()
        .is_none());
}
