//! Route planning orchestration.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - supported shortest-path strategies (Dijkstra, A*)
//! - [`RouteRequest`] - high-level route planning request
//! - [`RoutePlan`] - planned route result
//! - [`plan_route`] - main entry point for computing routes
//! - [`reachable_points`] - validated breadth-first reachability
//!
//! Endpoint validation happens here, before any search runs: an unknown start
//! or goal id is a hard [`Error::UnknownNode`], while an exhausted search is
//! the distinct [`Error::NoRoute`] outcome.

mod planner;

pub use planner::{select_planner, AStarPlanner, DijkstraPlanner, RoutePlanner};

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::Network;
use crate::search::{self, SearchConstraints};

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm: the uniform-relaxation baseline.
    #[default]
    Dijkstra,
    /// A* search, guided by the store's straight-line heuristic.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request over a network's own id type.
#[derive(Debug, Clone)]
pub struct RouteRequest<Id> {
    pub start: Id,
    pub goal: Id,
    pub algorithm: RouteAlgorithm,
    /// Ids the route must not traverse. A start or goal listed here makes
    /// the search fail with [`Error::NoRoute`] rather than erroring early.
    pub avoid: Vec<Id>,
}

impl<Id> RouteRequest<Id> {
    /// Request a route with the default algorithm and no avoid set.
    pub fn new(start: Id, goal: Id) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::default(),
            avoid: Vec::new(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn avoiding(mut self, avoid: Vec<Id>) -> Self {
        self.avoid = avoid;
        self
    }
}

/// Planned route returned by the library. Owned by the caller and never
/// mutated after being returned.
#[derive(Debug, Clone)]
pub struct RoutePlan<Id> {
    pub algorithm: RouteAlgorithm,
    pub start: Id,
    pub goal: Id,
    pub steps: Vec<Id>,
    /// Sum of the edge costs between consecutive steps.
    pub cost: f64,
}

impl<Id> RoutePlan<Id> {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm and constraints.
pub fn plan_route<N: Network>(network: &N, request: &RouteRequest<N::Id>) -> Result<RoutePlan<N::Id>> {
    let start = resolve(network, &request.start)?;
    let goal = resolve(network, &request.goal)?;
    debug!(%start, %goal, algorithm = %request.algorithm, "planning route");

    let avoid: HashSet<N::Id> = request.avoid.iter().cloned().collect();
    let constraints = SearchConstraints::avoiding(avoid);

    let planner = select_planner::<N>(request.algorithm);
    let route = planner
        .find_route(network, &start, &goal, &constraints)
        .ok_or_else(|| Error::NoRoute {
            start: start.to_string(),
            goal: goal.to_string(),
        })?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start,
        goal,
        steps: route.steps,
        cost: route.cost,
    })
}

/// All points reachable from `start` via directed edges, in breadth-first
/// discovery order. Unknown start ids fail before the traversal runs.
pub fn reachable_points<N: Network>(network: &N, start: &N::Id) -> Result<Vec<N::Id>> {
    let start = resolve(network, start)?;
    Ok(search::reachable(network, &start))
}

fn resolve<N: Network>(network: &N, id: &N::Id) -> Result<N::Id> {
    if network.contains(id) {
        Ok(id.clone())
    } else {
        let name = id.to_string();
        let suggestions = network.suggestions(&name);
        Err(Error::UnknownNode { name, suggestions })
    }
}
