//! A constructed graph is read-only, so one instance can back concurrent
//! queries from several threads without locking: every invocation owns its
//! transient state. These tests pin that contract.

use crossbeam_utils::thread;
use quiver::DiGraph;

fn fixture() -> DiGraph<u64> {
    DiGraph::from_weighted(vec![
        vec![(1, 5u64), (2, 3), (3, 4)],
        vec![(2, 1), (0, 5)],
        vec![(0, 3), (4, 6), (1, 1)],
        vec![(0, 4), (4, 2)],
        vec![(3, 2), (2, 6)],
    ])
    .unwrap()
}

#[test]
fn concurrent_queries_agree_with_single_threaded_results() {
    let graph = fixture();
    let expected_dist = graph.dijkstra(0).unwrap();
    let expected_scc = graph.tarjan_scc().unwrap();
    let expected_order = graph.dfs_iterative().unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|_| {
                assert_eq!(graph.dijkstra(0).unwrap(), expected_dist);
                assert_eq!(graph.tarjan_scc().unwrap(), expected_scc);
                assert_eq!(graph.dfs_iterative().unwrap(), expected_order);
                assert_eq!(graph.bfs().unwrap().len(), graph.vertex_count());
            });
        }
    })
    .unwrap();
}

#[test]
fn distinct_sources_can_run_in_parallel() {
    let graph = fixture();
    let graph = &graph;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..graph.vertex_count())
            .map(|source| scope.spawn(move |_| graph.dijkstra(source).unwrap()))
            .collect();
        for (source, handle) in handles.into_iter().enumerate() {
            let dist = handle.join().unwrap();
            assert_eq!(dist[source], Some(0));
        }
    })
    .unwrap();
}
