use selection_labels::caching_dijkstra::CachingDijkstra;
use selection_labels::dijkstra::Dijkstra;
use selection_labels::graph::Graph;
use selection_labels::oracle::DistanceOracle;
use selection_labels::types::*;

// 0 -> 1 -> 2 -> 3 -> 4, every edge has weight 1
fn get_line_graph() -> Graph {
    Graph::from_adjacency(vec![
        vec![(1, 1)],
        vec![(2, 1)],
        vec![(3, 1)],
        vec![(4, 1)],
        vec![],
    ])
}

//      5
//  0 ─────► 1
//  │        ▲
//  │1       │1
//  ▼        │
//  2 ───────┘
fn get_detour_graph() -> Graph {
    Graph::from_adjacency(vec![vec![(1, 5), (2, 1)], vec![], vec![(1, 1)]])
}

#[test]
fn distances_on_line_graph() {
    let graph = get_line_graph();
    let mut dijkstra = Dijkstra::new(&graph);

    for target in 0..5 {
        assert_eq!(dijkstra.find_distance(0, target), target as Distance);
    }

    assert_eq!(dijkstra.find_distance(4, 0), UNREACHABLE);
    assert_eq!(dijkstra.find_distance(2, 1), UNREACHABLE);
    assert_eq!(dijkstra.find_distance(2, 2), 0);
}

#[test]
fn session_reuse_answers_repeated_sources() {
    let graph = get_line_graph();
    let mut dijkstra = Dijkstra::new(&graph);

    // ascending targets resume the search, descending targets hit settled nodes
    assert_eq!(dijkstra.find_distance(0, 1), 1);
    assert_eq!(dijkstra.find_distance(0, 4), 4);
    assert_eq!(dijkstra.find_distance(0, 2), 2);
    assert_eq!(dijkstra.find_distance(0, 4), 4);

    // switching the source resets the state
    assert_eq!(dijkstra.find_distance(1, 3), 2);
    assert_eq!(dijkstra.find_distance(0, 3), 3);
}

#[test]
fn shortest_path_takes_the_detour() {
    let graph = get_detour_graph();
    let mut dijkstra = Dijkstra::new(&graph);

    assert_eq!(dijkstra.find_distance(0, 1), 2);

    let path = dijkstra.find_route(0, 1).unwrap();
    assert_eq!(path.nodes(), &[0, 2, 1]);
    assert_eq!(path.middle_node(), Some(2));
    assert_eq!(path.source(), Some(0));
    assert_eq!(path.target(), Some(1));
}

#[test]
fn route_on_line_graph() {
    let graph = get_line_graph();
    let mut dijkstra = Dijkstra::new(&graph);

    let path = dijkstra.find_route(0, 4).unwrap();
    assert_eq!(path.nodes(), &[0, 1, 2, 3, 4]);
    assert_eq!(path.middle_node(), Some(2));

    assert!(dijkstra.find_route(4, 0).is_none());
}

#[test]
fn dijkstra_rank_counts_settled_nodes() {
    let graph = get_line_graph();
    let mut dijkstra = Dijkstra::new(&graph);

    for target in 0..5u32 {
        assert_eq!(dijkstra.dijkstra_rank(0, target), Some(target as usize));
    }

    assert_eq!(dijkstra.dijkstra_rank(3, 0), None);
}

#[test]
fn cache_matches_dijkstra_on_all_pairs() {
    //  ┌─┐ 1  ┌─┐ 1  ┌─┐
    //  │0├───►│1├───►│2│
    //  └┬┘    └─┘    └▲┘
    //   │ 3           │
    //   └────►┌─┐ 1   │
    //         │3├─────┘
    //         └─┘
    // plus an isolated node 4 and a back edge 2 -> 0 with weight 10
    let graph = Graph::from_adjacency(vec![
        vec![(1, 1), (3, 3)],
        vec![(2, 1)],
        vec![(0, 10)],
        vec![(2, 1)],
        vec![],
    ]);

    let cache = CachingDijkstra::new(&graph);
    let mut dijkstra = Dijkstra::new(&graph);

    for source in graph.node_ids() {
        for target in graph.node_ids() {
            assert_eq!(
                dijkstra.find_distance(source, target),
                cache.find_distance(source, target),
                "pair ({}, {})",
                source,
                target
            );
        }
    }

    assert_eq!(cache.find_distance(0, 2), 2);
    assert_eq!(cache.find_distance(2, 3), 13);
    assert_eq!(cache.find_distance(0, 4), UNREACHABLE);
    assert_eq!(cache.find_distance(4, 0), UNREACHABLE);
}

#[test]
fn add_distances_is_absorbing() {
    assert_eq!(add_distances(2, 3), 5);
    assert_eq!(add_distances(UNREACHABLE, 3), UNREACHABLE);
    assert_eq!(add_distances(3, UNREACHABLE), UNREACHABLE);
    assert_eq!(add_distances(UNREACHABLE, UNREACHABLE), UNREACHABLE);
}
