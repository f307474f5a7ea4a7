//! Traversal and shortest-path engines, written once against [`Network`].
//!
//! All searches are pure queries: they never mutate the store, and they
//! return `None` when the search space is exhausted. Endpoint validation
//! (unknown ids) is the orchestrator's job in [`crate::routing`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::network::Network;

/// Constraints applied during pathfinding.
#[derive(Debug, Clone)]
pub struct SearchConstraints<Id> {
    /// Point ids the resulting route must not traverse.
    pub avoid: HashSet<Id>,
}

impl<Id> Default for SearchConstraints<Id> {
    fn default() -> Self {
        Self {
            avoid: HashSet::new(),
        }
    }
}

impl<Id: std::hash::Hash + Eq> SearchConstraints<Id> {
    pub fn avoiding(avoid: HashSet<Id>) -> Self {
        Self { avoid }
    }

    fn allows(&self, id: &Id) -> bool {
        !self.avoid.contains(id)
    }
}

/// An ordered point sequence with its accumulated edge cost; the output of a
/// shortest-path search. Never empty: a start-equals-goal route holds the
/// single point at cost 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<Id> {
    pub steps: Vec<Id>,
    pub cost: f64,
}

impl<Id> Route<Id> {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Breadth-first reachability from `start` over directed adjacency.
///
/// Returns reached points in discovery order, `start` first, each at most
/// once. Deterministic given the store's neighbor order.
pub fn reachable<N: Network>(network: &N, start: &N::Id) -> Vec<N::Id> {
    let mut visited: HashSet<N::Id> = HashSet::new();
    let mut frontier: VecDeque<N::Id> = VecDeque::new();
    let mut order = Vec::new();

    frontier.push_back(start.clone());
    while let Some(current) = frontier.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for next in network.neighbors(&current) {
            if !visited.contains(&next) && !frontier.contains(&next) {
                frontier.push_back(next);
            }
        }
        order.push(current);
    }
    order
}

/// Dijkstra's algorithm: lowest-cost route honoring the avoid set, or `None`
/// when the goal is unreachable.
pub fn dijkstra<N: Network>(
    network: &N,
    start: &N::Id,
    goal: &N::Id,
    constraints: &SearchConstraints<N::Id>,
) -> Option<Route<N::Id>> {
    if !constraints.allows(start) || !constraints.allows(goal) {
        return None;
    }
    if start == goal {
        return Some(Route {
            steps: vec![start.clone()],
            cost: 0.0,
        });
    }

    let mut distances: HashMap<N::Id, f64> = HashMap::new();
    let mut parents: HashMap<N::Id, Option<N::Id>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    queue.push(QueueEntry::new(start.clone(), 0.0));

    while let Some(entry) = queue.pop() {
        let current_distance = *distances.get(&entry.node).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > current_distance {
            continue; // stale heap entry
        }

        if entry.node == *goal {
            return Some(Route {
                steps: reconstruct(&parents, start, goal),
                cost: current_distance,
            });
        }

        for next in network.neighbors(&entry.node) {
            if !constraints.allows(&next) {
                continue;
            }
            let Some(edge_cost) = network.cost_between(&entry.node, &next) else {
                continue;
            };
            let next_cost = current_distance + edge_cost;
            if next_cost < *distances.get(&next).unwrap_or(&f64::INFINITY) {
                distances.insert(next.clone(), next_cost);
                parents.insert(next.clone(), Some(entry.node.clone()));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// A* search guided by the store's own straight-line heuristic.
pub fn a_star<N: Network>(
    network: &N,
    start: &N::Id,
    goal: &N::Id,
    constraints: &SearchConstraints<N::Id>,
) -> Option<Route<N::Id>> {
    if !constraints.allows(start) || !constraints.allows(goal) {
        return None;
    }
    if start == goal {
        return Some(Route {
            steps: vec![start.clone()],
            cost: 0.0,
        });
    }

    let mut g_score: HashMap<N::Id, f64> = HashMap::new();
    let mut parents: HashMap<N::Id, Option<N::Id>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start.clone(), 0.0);
    parents.insert(start.clone(), None);
    let estimate = network.heuristic(start, goal);
    queue.push(AStarEntry::new(start.clone(), 0.0, estimate));

    while let Some(entry) = queue.pop() {
        let current_score = *g_score.get(&entry.node).unwrap_or(&f64::INFINITY);
        if entry.cost.0 > current_score {
            continue;
        }

        if entry.node == *goal {
            return Some(Route {
                steps: reconstruct(&parents, start, goal),
                cost: current_score,
            });
        }

        for next in network.neighbors(&entry.node) {
            if !constraints.allows(&next) {
                continue;
            }
            let Some(edge_cost) = network.cost_between(&entry.node, &next) else {
                continue;
            };
            let tentative_g = current_score + edge_cost;
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next.clone(), tentative_g);
                parents.insert(next.clone(), Some(entry.node.clone()));
                let estimate = network.heuristic(&next, goal);
                queue.push(AStarEntry::new(next, tentative_g, estimate));
            }
        }
    }

    None
}

fn reconstruct<Id: Clone + Eq + std::hash::Hash>(
    parents: &HashMap<Id, Option<Id>>,
    start: &Id,
    goal: &Id,
) -> Vec<Id> {
    let mut steps = Vec::new();
    let mut current = Some(goal.clone());
    while let Some(node) = current {
        steps.push(node.clone());
        if node == *start {
            break;
        }
        current = parents.get(&node).cloned().flatten();
    }
    steps.reverse();
    steps
}

/// Total order over f64 costs so `BinaryHeap` can use them directly.
#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry<Id> {
    node: Id,
    cost: FloatOrd,
}

impl<Id> QueueEntry<Id> {
    fn new(node: Id, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl<Id: Ord + Eq> Ord for QueueEntry<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; id order makes
        // ties deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<Id: Ord + Eq> PartialOrd for QueueEntry<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct AStarEntry<Id> {
    node: Id,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<Id> AStarEntry<Id> {
    fn new(node: Id, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl<Id: Ord + Eq> Ord for AStarEntry<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<Id: Ord + Eq> PartialOrd for AStarEntry<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
