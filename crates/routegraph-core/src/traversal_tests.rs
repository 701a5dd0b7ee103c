//! Tests for depth-first reachability.

use super::error::Error;
use super::store::AdjacencyGraph;
use super::traversal::depth_first;

fn acyclic_graph() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    for v in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(v);
    }
    graph.set_edge(&"A", &"B", 5).unwrap();
    graph.set_edge(&"A", &"C", 10).unwrap();
    graph.set_edge(&"B", &"C", 4).unwrap();
    graph.set_edge(&"B", &"E", 5).unwrap();
    graph.set_edge(&"B", &"D", 10).unwrap();
    graph.set_edge(&"C", &"E", 1).unwrap();
    graph.set_edge(&"D", &"F", 1).unwrap();
    graph.set_edge(&"D", &"E", 2).unwrap();
    graph.set_edge(&"E", &"F", 10).unwrap();
    graph
}

fn cyclic_graph() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    for v in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(v);
    }
    graph.set_edge(&"A", &"B", 5).unwrap();
    graph.set_edge(&"B", &"C", 4).unwrap();
    graph.set_edge(&"C", &"D", 7).unwrap();
    graph.set_edge(&"D", &"C", 8).unwrap();
    graph.set_edge(&"D", &"E", 6).unwrap();
    graph.set_edge(&"A", &"D", 5).unwrap();
    graph.set_edge(&"C", &"E", 2).unwrap();
    graph.set_edge(&"E", &"B", 3).unwrap();
    graph.set_edge(&"A", &"E", 7).unwrap();
    graph
}

#[test]
fn test_reaches_everything_from_root() {
    let graph = acyclic_graph();
    let visited = depth_first(&graph, &"A").unwrap();
    for v in ["A", "B", "C", "D", "E", "F"] {
        assert!(visited.contains(v), "expected {v} to be reachable");
    }
}

#[test]
fn test_reaches_downstream_only() {
    let graph = acyclic_graph();
    let visited = depth_first(&graph, &"D").unwrap();
    assert_eq!(visited.len(), 3);
    assert!(visited.contains("D"));
    assert!(visited.contains("E"));
    assert!(visited.contains("F"));
    assert!(!visited.contains("A"));
    assert!(!visited.contains("B"));
    assert!(!visited.contains("C"));
}

#[test]
fn test_each_call_owns_a_fresh_set() {
    let graph = acyclic_graph();
    let from_root = depth_first(&graph, &"A").unwrap();
    let from_d = depth_first(&graph, &"D").unwrap();
    assert!(from_root.contains("A"));
    assert!(!from_d.contains("A"));
}

#[test]
fn test_cycle_terminates() {
    let graph = cyclic_graph();
    let visited = depth_first(&graph, &"A").unwrap();
    assert_eq!(visited.len(), 5);
}

#[test]
fn test_isolated_start() {
    let mut graph = acyclic_graph();
    graph.add_vertex("Z");
    let visited = depth_first(&graph, &"Z").unwrap();
    assert_eq!(visited.len(), 1);
    assert!(visited.contains("Z"));
}

#[test]
fn test_unknown_start() {
    let graph = acyclic_graph();
    assert_eq!(depth_first(&graph, &"Z"), Err(Error::NoSuchVertex));
}

#[test]
fn test_does_not_touch_marks() {
    let graph = acyclic_graph();
    let _ = depth_first(&graph, &"A").unwrap();
    assert!(!graph.is_marked(&"A"));
}
