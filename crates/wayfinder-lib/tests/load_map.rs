mod common;

use std::fs;

use tempfile::TempDir;
use wayfinder_lib::{load_graph, plan_route, Error, RouteAlgorithm, RouteRequest};

use common::{romania, romania_path};

#[test]
fn romania_fixture_loads() {
    let graph = romania();

    assert_eq!(graph.node_count(), 20);
    assert_eq!(graph.edge_count(), 46);
    assert!(graph.has_node("rimnicu vilcea"));
    let targets: Vec<_> = graph
        .neighbours("Arad")
        .iter()
        .map(|edge| (edge.target.as_str(), edge.cost))
        .collect();
    assert_eq!(
        targets,
        vec![("Zerind", 75), ("Sibiu", 140), ("Timisoara", 118)]
    );
}

#[test]
fn missing_map_is_reported() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("absent.csv");

    let err = load_graph(&path).unwrap_err();
    assert!(matches!(err, Error::MapNotFound { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn malformed_map_reports_bad_cost() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("broken.csv");
    fs::write(&path, "Arad,Zerind,75\n\nZerind,Oradea,far\n").expect("write map");

    let err = load_graph(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidCost { ref value, .. } if value == "far"), "{err}");
}

#[test]
fn plan_route_runs_each_algorithm() {
    let graph = romania();
    let requests = [
        RouteRequest::bfs("Arad", "Bucharest"),
        RouteRequest::dfs("Arad", "Bucharest"),
        RouteRequest::depth_limited("Arad", "Bucharest", 3),
        RouteRequest::iterative_deepening("Arad", "Bucharest", 2),
    ];

    for request in requests {
        let plan = plan_route(&graph, &request).expect("route exists");
        assert_eq!(plan.algorithm, request.algorithm);
        assert_eq!(plan.origin, "Arad");
        assert_eq!(plan.destination, "Bucharest");
    }
}

#[test]
fn plan_serializes_to_json() {
    let graph = romania();
    let plan = plan_route(&graph, &RouteRequest::bfs("Arad", "Oradea")).unwrap();
    let value = serde_json::to_value(&plan).expect("serialize plan");

    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["steps"][0], "Arad");
    assert_eq!(value["cost"], 146);
    assert_eq!(plan.algorithm, RouteAlgorithm::Bfs);
    assert!(romania_path().exists());
}
