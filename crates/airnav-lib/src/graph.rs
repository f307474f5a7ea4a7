//! Generic Cartesian graph store.
//!
//! Points are plain value records keyed by name; the neighbor index is owned
//! by the store itself so a removal can purge every reference in one place.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::network::{closest_matches, Network};

/// A located, uniquely named graph vertex on the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Planar Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A directed, costed connection between two named nodes.
///
/// Segment names are labels and need not be unique; identity for duplicate
/// detection is the ordered (origin, destination) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub cost: f64,
}

/// Graph store over named planar nodes and directed segments.
///
/// Node insertion order is preserved, which makes neighbor iteration,
/// tie-breaking, and serialization deterministic.
#[derive(Debug, Clone, Default)]
pub struct CartesianGraph {
    nodes: IndexMap<String, Node>,
    segments: Vec<Segment>,
    adjacency: HashMap<String, Vec<String>>,
}

impl CartesianGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Segments in insertion order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Insert a node. Rejects duplicate names and non-finite coordinates
    /// without modifying the store.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        for value in [node.x, node.y] {
            if !value.is_finite() {
                return Err(Error::InvalidCoordinate { value });
            }
        }
        if self.nodes.contains_key(&node.name) {
            return Err(Error::DuplicateNode { name: node.name });
        }
        self.nodes.insert(node.name.clone(), node);
        Ok(())
    }

    /// Insert a directed segment between two existing nodes.
    ///
    /// When `cost` is omitted it defaults to the Euclidean distance between
    /// the endpoints. The destination is registered in the origin's neighbor
    /// index; callers wanting bidirectional adjacency add both directions.
    pub fn add_segment(
        &mut self,
        name: &str,
        origin: &str,
        destination: &str,
        cost: Option<f64>,
    ) -> Result<()> {
        let origin_node = self
            .nodes
            .get(origin)
            .ok_or_else(|| self.unknown(origin))?;
        let destination_node = self
            .nodes
            .get(destination)
            .ok_or_else(|| self.unknown(destination))?;

        if self
            .segments
            .iter()
            .any(|s| s.origin == origin && s.destination == destination)
        {
            return Err(Error::DuplicateSegment {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        let cost = match cost {
            Some(cost) if cost < 0.0 => return Err(Error::NegativeCost { cost }),
            Some(cost) => cost,
            None => origin_node.distance_to(destination_node),
        };

        self.segments.push(Segment {
            name: name.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
        });

        let cache = self.adjacency.entry(origin.to_string()).or_default();
        if !cache.iter().any(|n| n == destination) {
            cache.push(destination.to_string());
        }
        Ok(())
    }

    /// Remove a node and everything that references it: segments touching it
    /// in either direction and every neighbor-index entry. The cascade either
    /// completes fully or, when the name is unknown, nothing is mutated.
    pub fn remove_node(&mut self, name: &str) -> Result<()> {
        if !self.nodes.contains_key(name) {
            return Err(self.unknown(name));
        }

        self.segments
            .retain(|s| s.origin != name && s.destination != name);
        self.adjacency.remove(name);
        for cache in self.adjacency.values_mut() {
            cache.retain(|n| n != name);
        }
        self.nodes.shift_remove(name);
        Ok(())
    }

    /// Remove the exact directed segment `origin -> destination`.
    ///
    /// The neighbor-index entry is dropped only once no segment in either
    /// direction still connects the pair.
    pub fn remove_segment(&mut self, origin: &str, destination: &str) -> Result<()> {
        let position = self
            .segments
            .iter()
            .position(|s| s.origin == origin && s.destination == destination)
            .ok_or_else(|| Error::UnknownSegment {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;
        self.segments.remove(position);

        let still_connected = self.segments.iter().any(|s| {
            (s.origin == origin && s.destination == destination)
                || (s.origin == destination && s.destination == origin)
        });
        if !still_connected {
            if let Some(cache) = self.adjacency.get_mut(origin) {
                cache.retain(|n| n != destination);
            }
            if let Some(cache) = self.adjacency.get_mut(destination) {
                cache.retain(|n| n != origin);
            }
        }
        Ok(())
    }

    /// Nodes reachable via one outgoing segment, in registration order.
    pub fn neighbor_names(&self, name: &str) -> &[String] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node minimizing planar Euclidean distance to the query coordinate.
    /// Ties are broken by insertion order; `None` when the store is empty or
    /// the query coordinate is not finite.
    pub fn closest(&self, x: f64, y: f64) -> Option<&Node> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let mut best: Option<(&Node, f64)> = None;
        for node in self.nodes.values() {
            let dx = node.x - x;
            let dy = node.y - y;
            let dist = (dx * dx + dy * dy).sqrt();
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((node, dist)),
            }
        }
        best.map(|(node, _)| node)
    }

    fn unknown(&self, name: &str) -> Error {
        Error::UnknownNode {
            name: name.to_string(),
            suggestions: self.suggestions(name),
        }
    }
}

impl Network for CartesianGraph {
    type Id = String;

    fn contains(&self, id: &String) -> bool {
        self.nodes.contains_key(id)
    }

    fn neighbors(&self, id: &String) -> Vec<String> {
        self.neighbor_names(id).to_vec()
    }

    fn cost_between(&self, a: &String, b: &String) -> Option<f64> {
        self.segments
            .iter()
            .find(|s| s.origin == *a && s.destination == *b)
            .or_else(|| {
                self.segments
                    .iter()
                    .find(|s| s.origin == *b && s.destination == *a)
            })
            .map(|s| s.cost)
    }

    fn heuristic(&self, from: &String, to: &String) -> f64 {
        match (self.nodes.get(from), self.nodes.get(to)) {
            (Some(from), Some(to)) => from.distance_to(to),
            _ => 0.0,
        }
    }

    fn suggestions(&self, query: &str) -> Vec<String> {
        closest_matches(self.nodes.keys().map(String::as_str), query, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CartesianGraph {
        let mut graph = CartesianGraph::new();
        graph.add_node(Node::new("X", 5.0, 5.0)).unwrap();
        graph.add_node(Node::new("Y", 10.0, 5.0)).unwrap();
        graph.add_node(Node::new("Z", 7.5, 10.0)).unwrap();
        graph.add_segment("XY", "X", "Y", None).unwrap();
        graph.add_segment("YZ", "Y", "Z", None).unwrap();
        graph.add_segment("ZX", "Z", "X", None).unwrap();
        graph
    }

    #[test]
    fn add_node_rejects_duplicate_name() {
        let mut graph = triangle();
        let error = graph.add_node(Node::new("X", 0.0, 0.0)).unwrap_err();
        assert!(matches!(error, Error::DuplicateNode { .. }));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn add_node_rejects_non_finite_coordinates() {
        let mut graph = CartesianGraph::new();
        let error = graph.add_node(Node::new("N", f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(error, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn add_segment_defaults_to_euclidean_cost() {
        let graph = triangle();
        let segment = &graph.segments()[0];
        assert_eq!(segment.cost, 5.0);
    }

    #[test]
    fn add_segment_rejects_negative_cost() {
        let mut graph = triangle();
        let error = graph.add_segment("YX", "Y", "X", Some(-1.0)).unwrap_err();
        assert!(matches!(error, Error::NegativeCost { .. }));
    }

    #[test]
    fn add_segment_rejects_duplicate_ordered_pair() {
        let mut graph = triangle();
        let error = graph.add_segment("XY2", "X", "Y", None).unwrap_err();
        assert!(matches!(error, Error::DuplicateSegment { .. }));
        // Reverse direction is a distinct segment and stays legal.
        graph.add_segment("YX", "Y", "X", None).unwrap();
    }

    #[test]
    fn add_segment_requires_existing_endpoints() {
        let mut graph = triangle();
        let error = graph.add_segment("XQ", "X", "Q", None).unwrap_err();
        assert!(matches!(error, Error::UnknownNode { .. }));
        assert_eq!(graph.segments().len(), 3);
    }

    #[test]
    fn cost_between_prefers_directed_match() {
        let mut graph = triangle();
        graph.add_segment("YX", "Y", "X", Some(99.0)).unwrap();
        assert_eq!(graph.cost_between(&"X".to_string(), &"Y".to_string()), Some(5.0));
        assert_eq!(graph.cost_between(&"Y".to_string(), &"X".to_string()), Some(99.0));
    }

    #[test]
    fn cost_between_falls_back_to_reverse_direction() {
        let graph = triangle();
        // Only X -> Y exists; the reverse query still resolves the cost.
        assert_eq!(graph.cost_between(&"Y".to_string(), &"X".to_string()), Some(5.0));
    }

    #[test]
    fn remove_segment_keeps_cache_while_reverse_edge_remains() {
        let mut graph = triangle();
        graph.add_segment("YX", "Y", "X", None).unwrap();
        graph.remove_segment("X", "Y").unwrap();
        assert_eq!(graph.neighbor_names("X"), ["Y".to_string()]);

        graph.remove_segment("Y", "X").unwrap();
        assert!(graph.neighbor_names("X").is_empty());
        assert_eq!(graph.neighbor_names("Y"), ["Z".to_string()]);
    }

    #[test]
    fn remove_segment_requires_exact_directed_match() {
        let mut graph = triangle();
        let error = graph.remove_segment("Y", "X").unwrap_err();
        assert!(matches!(error, Error::UnknownSegment { .. }));
    }

    #[test]
    fn closest_breaks_ties_by_insertion_order() {
        let mut graph = CartesianGraph::new();
        graph.add_node(Node::new("First", 0.0, 1.0)).unwrap();
        graph.add_node(Node::new("Second", 0.0, -1.0)).unwrap();
        assert_eq!(graph.closest(0.0, 0.0).map(|n| n.name.as_str()), Some("First"));
        assert!(CartesianGraph::new().closest(0.0, 0.0).is_none());
    }

    #[test]
    fn closest_rejects_non_finite_query() {
        let graph = triangle();
        assert!(graph.closest(f64::NAN, 0.0).is_none());
        assert!(graph.closest(0.0, f64::INFINITY).is_none());
    }
}
