//! The capability contract shared by both graph store variants.
//!
//! The traversal and shortest-path engines are written once against
//! [`Network`]; [`crate::graph::CartesianGraph`] and
//! [`crate::airspace::Airspace`] provide the two concrete stores.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identity key of a point within a network.
///
/// Cartesian graphs key points by name, airspaces by fix number; the search
/// engines only require equality, hashing, a deterministic order for
/// tie-breaking, and a printable form for error reporting.
pub trait PointId: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T: Clone + Eq + Hash + Ord + Debug + Display> PointId for T {}

/// Read-only routing view over a graph store.
pub trait Network {
    type Id: PointId;

    /// Whether `id` resolves to a point owned by this store.
    fn contains(&self, id: &Self::Id) -> bool;

    /// Points directly reachable via one outgoing edge from `id`, in
    /// deterministic store order. Unknown ids yield an empty list.
    fn neighbors(&self, id: &Self::Id) -> Vec<Self::Id>;

    /// Cost of an edge between `a` and `b` considered in either direction,
    /// preferring an exact directed match. `None` when no edge connects them.
    fn cost_between(&self, a: &Self::Id, b: &Self::Id) -> Option<f64>;

    /// Straight-line estimate between two points in the store's own
    /// coordinate space. Returns 0 when either point is unknown, which keeps
    /// the estimate admissible.
    fn heuristic(&self, from: &Self::Id, to: &Self::Id) -> f64;

    /// Candidate point names resembling a key that failed to resolve.
    fn suggestions(&self, _query: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Rank `candidates` by Jaro-Winkler similarity to `query` and keep the
/// closest `limit` entries above a fixed confidence floor.
pub(crate) fn closest_matches<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    const MIN_SIMILARITY: f64 = 0.7;

    let mut scored: Vec<(f64, &str)> = candidates
        .map(|name| (strsim::jaro_winkler(query, name), name))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_matches_ranks_by_similarity() {
        let names = ["GODOX", "GIRONA", "BEGAS"];
        let matches = closest_matches(names.iter().copied(), "GODO", 3);
        assert_eq!(matches.first().map(String::as_str), Some("GODOX"));
    }

    #[test]
    fn closest_matches_drops_dissimilar_names() {
        let names = ["ALPHA", "BRAVO"];
        let matches = closest_matches(names.iter().copied(), "zzzz", 3);
        assert!(matches.is_empty());
    }
}
