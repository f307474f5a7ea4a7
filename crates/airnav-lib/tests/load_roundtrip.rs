use std::path::PathBuf;

use airnav_lib::{demo_graph, load_airspace, load_graph, plan_route, save_graph, RouteRequest};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures").join(name)
}

#[test]
fn graph_fixture_matches_builtin_demo() {
    let loaded = load_graph(&fixture("demo_graph.txt")).expect("fixture loads");
    let builtin = demo_graph();
    assert_eq!(loaded.node_count(), builtin.node_count());
    assert_eq!(loaded.segments().len(), builtin.segments().len());
}

#[test]
fn save_then_load_is_isomorphic() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("roundtrip.txt");

    let original = demo_graph();
    save_graph(&original, &path).expect("save succeeds");
    let reloaded = load_graph(&path).expect("reload succeeds");

    assert_eq!(reloaded.node_count(), original.node_count());
    for node in original.nodes() {
        let other = reloaded.node(&node.name).expect("node survives round trip");
        assert_eq!(other.x, node.x);
        assert_eq!(other.y, node.y);
    }

    assert_eq!(reloaded.segments().len(), original.segments().len());
    for (a, b) in original.segments().iter().zip(reloaded.segments()) {
        assert_eq!(a.origin, b.origin);
        assert_eq!(a.destination, b.destination);
        assert!((a.cost - b.cost).abs() < 1e-9);
    }
}

#[test]
fn airspace_fixture_loads_and_routes() {
    let airspace = load_airspace(
        &fixture("catalonia_nav.txt"),
        &fixture("catalonia_seg.txt"),
        &fixture("catalonia_airports.txt"),
    )
    .expect("fixture loads");

    assert_eq!(airspace.point_count(), 8);
    assert_eq!(airspace.airports().len(), 2);

    let godox = airspace.point_number_by_name("GODOX").expect("fix exists");
    let gir = airspace.point_number_by_name("GIR").expect("fix exists");
    let plan = plan_route(&airspace, &RouteRequest::new(godox, gir)).expect("route exists");

    assert_eq!(plan.steps, vec![1, 2, 4, 5, 6, 7]);
    assert!((plan.cost - 280.0).abs() < 1e-9);
}

#[test]
fn airspace_airport_fixes_resolve() {
    let airspace = load_airspace(
        &fixture("catalonia_nav.txt"),
        &fixture("catalonia_seg.txt"),
        &fixture("catalonia_airports.txt"),
    )
    .expect("fixture loads");

    let lebl = airspace.airport("LEBL").expect("airport exists").clone();
    let sids: Vec<&str> = airspace
        .sid_fixes(&lebl)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(sids, vec!["BEGAS", "SLLUI"]);
}
