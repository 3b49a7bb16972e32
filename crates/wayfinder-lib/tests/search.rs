mod common;

use wayfinder_lib::{
    breadth_first_search, depth_first_search, depth_limited_search, iterative_deepening_search,
    Error, Graph, SearchOutcome,
};

use common::{node_pairs, romania};

fn small_map() -> Graph {
    let mut graph = Graph::new();
    graph.insert_edge("Arad", "Zerind", 75);
    graph.insert_edge("Zerind", "Oradea", 71);
    graph.insert_edge("Arad", "Sibiu", 140);
    graph
}

#[test]
fn bfs_prefers_fewest_hops_over_cost() {
    let graph = romania();
    let route = breadth_first_search(&graph, "Arad", "Bucharest").expect("route exists");

    assert_eq!(route.steps, vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
    assert_eq!(route.cost, 450, "cheaper route via Pitesti costs 418");
}

#[test]
fn dfs_follows_last_listed_neighbour() {
    let graph = romania();
    let route = depth_first_search(&graph, "arad", "bucharest").expect("route exists");

    assert_eq!(
        route.steps,
        vec![
            "Arad",
            "Timisoara",
            "Lugoj",
            "Mehadia",
            "Drobeta",
            "Craiova",
            "Pitesti",
            "Bucharest"
        ]
    );
    assert_eq!(route.cost, 733);
}

#[test]
fn depth_limited_search_needs_enough_depth() {
    let graph = romania();

    assert_eq!(
        depth_limited_search(&graph, "Arad", "Bucharest", 2).unwrap(),
        SearchOutcome::Cutoff
    );

    let outcome = depth_limited_search(&graph, "Arad", "Bucharest", 3).unwrap();
    let route = outcome.into_route().expect("found within 3 hops");
    assert_eq!(route.steps, vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
    assert_eq!(route.cost, 450);
}

#[test]
fn small_map_examples() {
    let graph = small_map();

    let bfs = breadth_first_search(&graph, "Arad", "Oradea").unwrap();
    assert_eq!(bfs.steps, vec!["Arad", "Zerind", "Oradea"]);
    assert_eq!(bfs.cost, 146);

    let dfs = depth_first_search(&graph, "Arad", "Oradea").unwrap();
    assert!(dfs.matches_graph(&graph));

    assert!(matches!(
        depth_limited_search(&graph, "Arad", "Oradea", 1).unwrap(),
        SearchOutcome::Cutoff | SearchOutcome::Failure
    ));
    let found = depth_limited_search(&graph, "Arad", "Oradea", 2).unwrap();
    assert_eq!(found.route().map(|route| route.cost), Some(146));
}

#[test]
fn bfs_hop_count_is_minimal_for_every_pair() {
    let graph = romania();
    for (origin, destination) in node_pairs(&graph) {
        let bfs = breadth_first_search(&graph, &origin, &destination).unwrap();
        // Iterative deepening with step 1 finds the shallowest route.
        let ids = iterative_deepening_search(&graph, &origin, &destination, 1).unwrap();
        assert_eq!(
            bfs.hop_count(),
            ids.hop_count(),
            "{origin} -> {destination}"
        );

        let dfs = depth_first_search(&graph, &origin, &destination).unwrap();
        assert!(bfs.hop_count() <= dfs.hop_count(), "{origin} -> {destination}");
    }
}

#[test]
fn reported_cost_matches_edges_for_all_algorithms() {
    let graph = romania();
    for (origin, destination) in node_pairs(&graph) {
        let routes = [
            breadth_first_search(&graph, &origin, &destination).unwrap(),
            depth_first_search(&graph, &origin, &destination).unwrap(),
            iterative_deepening_search(&graph, &origin, &destination, 2).unwrap(),
        ];
        for route in routes {
            assert_eq!(route.origin(), Some(origin.as_str()));
            assert_eq!(route.destination(), Some(destination.as_str()));
            assert!(route.matches_graph(&graph), "{route}");
        }

        if let Some(route) = depth_limited_search(&graph, &origin, &destination, 4)
            .unwrap()
            .into_route()
        {
            assert!(route.matches_graph(&graph), "{route}");
        }
    }
}

#[test]
fn depth_limited_never_exceeds_limit() {
    let graph = romania();
    for (origin, destination) in node_pairs(&graph) {
        for limit in 0..=4 {
            let outcome = depth_limited_search(&graph, &origin, &destination, limit).unwrap();
            if let Some(route) = outcome.route() {
                assert!(route.hop_count() <= limit, "{origin} -> {destination} @ {limit}");
            }
        }
    }
}

#[test]
fn iterative_deepening_matches_first_successful_depth_limit() {
    let graph = romania();
    let pairs = [("Arad", "Bucharest"), ("Neamt", "Timisoara"), ("Oradea", "Eforie")];
    for (origin, destination) in pairs {
        let ids = iterative_deepening_search(&graph, origin, destination, 1).unwrap();
        let first_found = (0..)
            .find_map(|limit| {
                depth_limited_search(&graph, origin, destination, limit)
                    .unwrap()
                    .into_route()
            })
            .expect("reachable");
        assert_eq!(ids, first_found);
    }
}

#[test]
fn validation_applies_to_every_algorithm() {
    let graph = romania();

    let same = [
        breadth_first_search(&graph, "Arad", "ARAD").unwrap_err(),
        depth_first_search(&graph, "Arad", "ARAD").unwrap_err(),
        depth_limited_search(&graph, "Arad", "ARAD", 5).unwrap_err(),
        iterative_deepening_search(&graph, "Arad", "ARAD", 1).unwrap_err(),
    ];
    for err in same {
        assert_eq!(err.to_string(), "Source and Destination cannot be same.");
    }

    let unknown_origin = depth_limited_search(&graph, "Atlantis", "Arad", 5).unwrap_err();
    assert_eq!(
        unknown_origin.to_string(),
        "Unable to find 'Source City' in the map."
    );

    let unknown_destination =
        iterative_deepening_search(&graph, "Arad", "Atlantis", 1).unwrap_err();
    assert_eq!(
        unknown_destination.to_string(),
        "Unable to find 'Destination City' in the map."
    );
    assert!(unknown_destination.is_invalid_input());
}

#[test]
fn unreachable_destination_reports_path_not_found() {
    let mut graph = romania();
    graph.insert_node("Constanta");

    let err = breadth_first_search(&graph, "Arad", "Constanta").unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
    assert_eq!(err.to_string(), "Path not found.");
    assert!(!err.is_invalid_input());
}

#[test]
fn parallel_arcs_report_the_arc_taken() {
    let mut graph = Graph::new();
    graph.insert_arc("A", "B", 10);
    graph.insert_arc("A", "B", 1);
    graph.insert_node("B");

    let route = breadth_first_search(&graph, "A", "B").unwrap();
    assert_eq!(route.cost, 10, "first listed arc is generated first");
    assert!(route.matches_graph(&graph));
}

#[test]
fn depth_limited_search_may_repeat_nodes() {
    let mut graph = Graph::new();
    graph.insert_arc("A", "B", 1);
    graph.insert_arc("B", "A", 1);
    graph.insert_arc("A", "C", 5);
    graph.insert_arc("C", "D", 5);
    graph.insert_node("D");

    // Depth-first search never re-expands A and takes the direct branch.
    let dfs = depth_first_search(&graph, "A", "D").unwrap();
    assert_eq!(dfs.steps, vec!["A", "C", "D"]);

    let route = depth_limited_search(&graph, "A", "D", 4)
        .unwrap()
        .into_route()
        .expect("route within four edges");
    assert_eq!(route.steps, vec!["A", "B", "A", "C", "D"]);
    assert!(route.hop_count() <= 4);
}

#[test]
fn deep_limit_on_cycle_returns_cutoff() {
    let mut graph = Graph::new();
    graph.insert_edge("A", "B", 1);
    graph.insert_node("C");
    assert_eq!(
        depth_limited_search(&graph, "A", "C", 250_000).unwrap(),
        SearchOutcome::Cutoff
    );
}
