//! Shortest-path strategies behind a common trait, so algorithms can be
//! added without touching the orchestration in [`plan_route`].
//!
//! [`plan_route`]: super::plan_route

use crate::network::Network;
use crate::search::{a_star, dijkstra, Route, SearchConstraints};

use super::RouteAlgorithm;

/// A shortest-path strategy over one network type.
pub trait RoutePlanner<N: Network> {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search. `None` means the space was exhausted without
    /// reaching the goal.
    fn find_route(
        &self,
        network: &N,
        start: &N::Id,
        goal: &N::Id,
        constraints: &SearchConstraints<N::Id>,
    ) -> Option<Route<N::Id>>;
}

/// Uniform edge relaxation; the baseline when no directional heuristic is
/// wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl<N: Network> RoutePlanner<N> for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_route(
        &self,
        network: &N,
        start: &N::Id,
        goal: &N::Id,
        constraints: &SearchConstraints<N::Id>,
    ) -> Option<Route<N::Id>> {
        dijkstra(network, start, goal, constraints)
    }
}

/// Heuristic-guided search using the store's straight-line estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPlanner;

impl<N: Network> RoutePlanner<N> for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_route(
        &self,
        network: &N,
        start: &N::Id,
        goal: &N::Id,
        constraints: &SearchConstraints<N::Id>,
    ) -> Option<Route<N::Id>> {
        a_star(network, start, goal, constraints)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner<N: Network>(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner<N>> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CartesianGraph;

    #[test]
    fn planners_report_their_algorithm() {
        assert_eq!(
            RoutePlanner::<CartesianGraph>::algorithm(&DijkstraPlanner),
            RouteAlgorithm::Dijkstra
        );
        assert_eq!(
            RoutePlanner::<CartesianGraph>::algorithm(&AStarPlanner),
            RouteAlgorithm::AStar
        );
    }

    #[test]
    fn select_planner_chooses_matching_strategy() {
        let planner = select_planner::<CartesianGraph>(RouteAlgorithm::AStar);
        assert_eq!(planner.algorithm(), RouteAlgorithm::AStar);
    }
}
