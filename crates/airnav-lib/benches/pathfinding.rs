use std::hint::black_box;

use airnav_lib::{
    demo_graph, plan_route, reachable_points, CartesianGraph, RouteAlgorithm, RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;

static GRAPH: Lazy<CartesianGraph> = Lazy::new(demo_graph);

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("dijkstra_a_h", |b| {
        let request = RouteRequest::new("A".to_string(), "H".to_string());
        b.iter(|| {
            let plan = plan_route(graph, &request).expect("route exists");
            black_box(plan.cost)
        });
    });

    c.bench_function("a_star_a_h", |b| {
        let request = RouteRequest::new("A".to_string(), "H".to_string())
            .with_algorithm(RouteAlgorithm::AStar);
        b.iter(|| {
            let plan = plan_route(graph, &request).expect("route exists");
            black_box(plan.cost)
        });
    });

    c.bench_function("reachable_k", |b| {
        let start = "K".to_string();
        b.iter(|| {
            let reached = reachable_points(graph, &start).expect("start exists");
            black_box(reached.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
