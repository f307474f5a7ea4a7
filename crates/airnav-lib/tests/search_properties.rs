//! Cross-checks of the search engines against an exhaustive comparator.

use std::collections::HashSet;

use airnav_lib::search::{a_star, dijkstra, SearchConstraints};
use airnav_lib::{demo_graph, CartesianGraph, Network};

const EPSILON: f64 = 1e-9;

/// Exhaustively enumerate simple paths and return the cheapest total cost.
/// Only viable on small graphs; that is the point of the comparator.
fn brute_force_cost(
    graph: &CartesianGraph,
    start: &str,
    goal: &str,
    avoid: &HashSet<String>,
) -> Option<f64> {
    fn walk(
        graph: &CartesianGraph,
        current: &str,
        goal: &str,
        avoid: &HashSet<String>,
        visited: &mut Vec<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.map(|b| cost < b).unwrap_or(true) {
                *best = Some(cost);
            }
            return;
        }
        for next in graph.neighbors(&current.to_string()) {
            if visited.contains(&next) || avoid.contains(&next) {
                continue;
            }
            let Some(edge) = graph.cost_between(&current.to_string(), &next) else {
                continue;
            };
            visited.push(next.clone());
            walk(graph, &next, goal, avoid, visited, cost + edge, best);
            visited.pop();
        }
    }

    if avoid.contains(start) || avoid.contains(goal) {
        return None;
    }
    let mut best = None;
    let mut visited = vec![start.to_string()];
    walk(graph, start, goal, avoid, &mut visited, 0.0, &mut best);
    best
}

fn node_names(graph: &CartesianGraph) -> Vec<String> {
    graph.nodes().map(|n| n.name.clone()).collect()
}

#[test]
fn dijkstra_matches_brute_force_on_every_pair() {
    let graph = demo_graph();
    let names = node_names(&graph);
    let constraints = SearchConstraints::default();

    for start in &names {
        for goal in &names {
            let expected = brute_force_cost(&graph, start, goal, &constraints.avoid);
            let found = dijkstra(&graph, start, goal, &constraints).map(|r| r.cost);
            match (expected, found) {
                (Some(e), Some(f)) => {
                    assert!((e - f).abs() < EPSILON, "{start} -> {goal}: {e} vs {f}")
                }
                (None, None) => {}
                other => panic!("{start} -> {goal}: disagreement {other:?}"),
            }
        }
    }
}

#[test]
fn a_star_agrees_with_dijkstra_on_every_pair() {
    let graph = demo_graph();
    let names = node_names(&graph);
    let constraints = SearchConstraints::default();

    for start in &names {
        for goal in &names {
            let d = dijkstra(&graph, start, goal, &constraints).map(|r| r.cost);
            let a = a_star(&graph, start, goal, &constraints).map(|r| r.cost);
            match (d, a) {
                (Some(d), Some(a)) => {
                    assert!((d - a).abs() < EPSILON, "{start} -> {goal}: {d} vs {a}")
                }
                (None, None) => {}
                other => panic!("{start} -> {goal}: disagreement {other:?}"),
            }
        }
    }
}

#[test]
fn route_cost_is_the_sum_of_its_edges() {
    let graph = demo_graph();
    let names = node_names(&graph);
    let constraints = SearchConstraints::default();

    for start in &names {
        for goal in &names {
            let Some(route) = dijkstra(&graph, start, goal, &constraints) else {
                continue;
            };
            let mut summed = 0.0;
            for pair in route.steps.windows(2) {
                let edge = graph
                    .cost_between(&pair[0], &pair[1])
                    .expect("consecutive steps are connected");
                summed += edge;
            }
            assert!((route.cost - summed).abs() < EPSILON);
        }
    }
}

#[test]
fn avoided_points_never_appear_in_routes() {
    let graph = demo_graph();
    let names = node_names(&graph);

    for avoided in &names {
        let mut avoid = HashSet::new();
        avoid.insert(avoided.clone());
        let constraints = SearchConstraints::avoiding(avoid.clone());

        for start in &names {
            for goal in &names {
                if start == avoided || goal == avoided {
                    continue;
                }
                let found = dijkstra(&graph, start, goal, &constraints);
                if let Some(route) = &found {
                    assert!(!route.steps.contains(avoided));
                }
                let expected = brute_force_cost(&graph, start, goal, &avoid);
                assert_eq!(expected.is_some(), found.is_some(), "{start} -> {goal}");
            }
        }
    }
}

#[test]
fn bfs_result_is_duplicate_free_and_connected() {
    let graph = demo_graph();
    for start in node_names(&graph) {
        let reached = airnav_lib::search::reachable(&graph, &start);
        let unique: HashSet<&String> = reached.iter().collect();
        assert_eq!(unique.len(), reached.len(), "duplicates from {start}");
        assert_eq!(reached.first(), Some(&start));

        // Every reached point has some directed path from the start.
        let constraints = SearchConstraints::default();
        for point in &reached {
            assert!(
                dijkstra(&graph, &start, point, &constraints).is_some(),
                "{point} reported reachable from {start} but no path exists"
            );
        }
    }
}
