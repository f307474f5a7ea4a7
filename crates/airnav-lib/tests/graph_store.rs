use airnav_lib::{CartesianGraph, Error, Network, Node};

fn square() -> CartesianGraph {
    let mut graph = CartesianGraph::new();
    graph.add_node(Node::new("A", 0.0, 0.0)).unwrap();
    graph.add_node(Node::new("B", 4.0, 0.0)).unwrap();
    graph.add_node(Node::new("C", 4.0, 3.0)).unwrap();
    graph.add_node(Node::new("D", 0.0, 3.0)).unwrap();
    graph.add_segment("AB", "A", "B", None).unwrap();
    graph.add_segment("BC", "B", "C", None).unwrap();
    graph.add_segment("CB", "C", "B", None).unwrap();
    graph.add_segment("CD", "C", "D", None).unwrap();
    graph.add_segment("DA", "D", "A", None).unwrap();
    graph.add_segment("AC", "A", "C", Some(5.0)).unwrap();
    graph
}

#[test]
fn remove_node_purges_segments_and_neighbor_caches() {
    let mut graph = square();
    graph.remove_node("C").unwrap();

    assert!(graph.node("C").is_none());
    for segment in graph.segments() {
        assert_ne!(segment.origin, "C");
        assert_ne!(segment.destination, "C");
    }
    for name in ["A", "B", "D"] {
        let neighbors = graph.neighbors(&name.to_string());
        assert!(
            !neighbors.contains(&"C".to_string()),
            "neighbor cache of {name} still references the removed node"
        );
    }
    // Segments not touching C survive untouched.
    assert_eq!(graph.segments().len(), 2);
}

#[test]
fn remove_node_rejects_unknown_key_without_mutation() {
    let mut graph = square();
    let error = graph.remove_node("Q").unwrap_err();
    assert!(matches!(error, Error::UnknownNode { .. }));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.segments().len(), 6);
}

#[test]
fn explicit_cost_wins_over_euclidean_default() {
    let graph = square();
    assert_eq!(graph.cost_between(&"A".to_string(), &"C".to_string()), Some(5.0));
    // AB defaults to the 4.0 Euclidean distance.
    assert_eq!(graph.cost_between(&"A".to_string(), &"B".to_string()), Some(4.0));
}

#[test]
fn neighbor_registration_is_one_directional() {
    let graph = square();
    assert!(graph.neighbors(&"A".to_string()).contains(&"B".to_string()));
    assert!(!graph.neighbors(&"B".to_string()).contains(&"A".to_string()));
}

#[test]
fn unknown_node_error_suggests_similar_names() {
    let mut graph = CartesianGraph::new();
    graph.add_node(Node::new("GIRONA", 0.0, 0.0)).unwrap();
    graph.add_node(Node::new("REUS", 1.0, 1.0)).unwrap();
    let error = graph.add_segment("X", "GIRON", "REUS", None).unwrap_err();
    match error {
        Error::UnknownNode { name, suggestions } => {
            assert_eq!(name, "GIRON");
            assert_eq!(suggestions, vec!["GIRONA".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn closest_returns_nearest_node() {
    let graph = square();
    assert_eq!(graph.closest(3.9, 0.1).map(|n| n.name.as_str()), Some("B"));
    assert_eq!(graph.closest(-10.0, -10.0).map(|n| n.name.as_str()), Some("A"));
}
