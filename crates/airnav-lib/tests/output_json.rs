use airnav_lib::{demo_graph, plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

#[test]
fn summary_serializes_to_json() {
    let graph = demo_graph();
    let request = RouteRequest::new("A".to_string(), "H".to_string())
        .with_algorithm(RouteAlgorithm::AStar);
    let plan = plan_route(&graph, &request).expect("route exists");
    let summary = RouteSummary::from_graph_plan(&plan).expect("plan is not empty");

    let value = serde_json::to_value(&summary).expect("serializes");
    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(value["start"], "A");
    assert_eq!(value["goal"], "H");
    assert_eq!(value["hops"], 3);
    assert_eq!(value["steps"][1]["id"], "B");
    // Graph steps have no separate display name.
    assert!(value["steps"][0].get("name").is_none());
}
