//! Tests for the edge value type.

use super::types::{Edge, WeightedEdge};

#[test]
fn test_edge_accessors() {
    let edge = Edge::new("B", 5);
    assert_eq!(*edge.terminal(), "B");
    assert_eq!(edge.weight(), 5);
}

#[test]
fn test_edge_negative_weight_allowed() {
    // Construction does not enforce non-negative weights.
    let edge = Edge::new(7u32, -3);
    assert_eq!(edge.weight(), -3);
}

#[test]
fn test_edge_capability_trait() {
    fn terminal_of<V, E: WeightedEdge<V>>(edge: &E) -> &V {
        edge.terminal()
    }

    let edge: Edge<String> = WeightedEdge::new("depot".to_string(), 4);
    assert_eq!(terminal_of(&edge), "depot");
}

#[test]
fn test_edge_serialize_deserialize() {
    let edge = Edge::new("C".to_string(), 42);
    let json = serde_json::to_string(&edge).unwrap();
    let restored: Edge<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(edge, restored);
}
