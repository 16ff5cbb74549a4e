mod dijkstra_binary;
mod dijkstra_linear;
pub mod error;
pub mod generator;
pub mod graph;
mod paths;
pub mod traversal;

pub use dijkstra_binary::dijkstra_binary_heap;
pub use dijkstra_linear::dijkstra_linear_scan;
pub use error::GraphError;
pub use error::Result;
pub use graph::Edge;
pub use graph::Graph;
pub use paths::Path;
pub use paths::ShortestPaths;
pub use traversal::Bfs;
pub use traversal::DfsStack;
pub use traversal::dfs_recursive;

/// Distance of a vertex the source cannot reach.
pub const INF: u64 = u64::MAX / 4;

/// Largest accepted edge weight. A simple path has fewer than `2^30` edges in any matrix that fits
/// in memory, so no path sum reaches [`INF`].
pub const MAX_WEIGHT: u64 = u32::MAX as u64;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TraversalStrategy {
    Bfs,
    DfsStack,
    DfsRecursive,
}

pub const ALL_TRAVERSALS: [TraversalStrategy; 3] = [
    TraversalStrategy::Bfs,
    TraversalStrategy::DfsStack,
    TraversalStrategy::DfsRecursive,
];

pub fn traversal_name(strategy: TraversalStrategy) -> &'static str {
    match strategy {
        TraversalStrategy::Bfs => "bfs",
        TraversalStrategy::DfsStack => "dfs_stack",
        TraversalStrategy::DfsRecursive => "dfs_recursive",
    }
}

/// Vertices reachable from `start` in discovery order.
#[tracing::instrument(skip(graph, strategy), fields(algo = traversal_name(strategy)))]
pub fn traverse(graph: &Graph, start: usize, strategy: TraversalStrategy) -> Result<Vec<usize>> {
    let order: Vec<usize> = match strategy {
        TraversalStrategy::Bfs => Bfs::new(graph, start)?.collect(),
        TraversalStrategy::DfsStack => DfsStack::new(graph, start)?.collect(),
        TraversalStrategy::DfsRecursive => dfs_recursive(graph, start)?,
    };
    tracing::debug!(visited = order.len(), "traversal finished");
    Ok(order)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ShortestPathStrategy {
    LinearScan,
    BinaryHeap,
}

pub const ALL_STRATEGIES: [ShortestPathStrategy; 2] = [
    ShortestPathStrategy::LinearScan,
    ShortestPathStrategy::BinaryHeap,
];

pub fn strategy_name(strategy: ShortestPathStrategy) -> &'static str {
    match strategy {
        ShortestPathStrategy::LinearScan => "dijkstra_linear_scan",
        ShortestPathStrategy::BinaryHeap => "dijkstra_binary_heap",
    }
}

pub fn shortest_paths(
    graph: &Graph,
    source: usize,
    strategy: ShortestPathStrategy,
) -> Result<ShortestPaths> {
    match strategy {
        ShortestPathStrategy::LinearScan => dijkstra_linear_scan(graph, source),
        ShortestPathStrategy::BinaryHeap => dijkstra_binary_heap(graph, source),
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generator::ALL_CASES;
    use crate::generator::generate_case;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn seven_vertex_graph() -> Graph {
        let mut g = Graph::new(7).unwrap();
        for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (4, 6), (5, 6)] {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    fn six_vertex_weighted_graph() -> Graph {
        Graph::from_edges(
            6,
            &[(0, 1, 4), (0, 3, 1), (1, 2, 2), (2, 3, 5), (3, 4, 1), (4, 5, 3)],
        )
        .unwrap()
    }

    fn random_graph(n: usize, density: f64, max_weight: i64, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = Graph::new(n).unwrap();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(density) {
                    g.add_weighted_edge(u, v, rng.random_range(1..=max_weight))
                        .unwrap();
                }
            }
        }
        g
    }

    fn unit_weights(g: &Graph) -> Graph {
        let edges: Vec<(usize, usize, i64)> =
            g.edges().into_iter().map(|(u, v, _)| (u, v, 1)).collect();
        Graph::from_edges(g.vertex_count(), &edges).unwrap()
    }

    #[test]
    fn seven_vertex_traversals() {
        init_tracing();
        let g = seven_vertex_graph();
        assert_eq!(
            traverse(&g, 0, TraversalStrategy::Bfs).unwrap(),
            vec![0, 1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            traverse(&g, 0, TraversalStrategy::DfsRecursive).unwrap(),
            vec![0, 1, 3, 4, 6, 5, 2]
        );
        assert_eq!(
            traverse(&g, 0, TraversalStrategy::DfsStack).unwrap(),
            vec![0, 1, 3, 4, 6, 5, 2]
        );
    }

    #[test]
    fn seven_vertex_traversals_from_other_starts() {
        let g = seven_vertex_graph();
        assert_eq!(Bfs::new(&g, 3).unwrap().collect::<Vec<_>>(), vec![3, 1, 0, 4, 2, 6, 5]);
        assert_eq!(Bfs::new(&g, 6).unwrap().collect::<Vec<_>>(), vec![6, 4, 5, 1, 2, 0, 3]);
        assert_eq!(dfs_recursive(&g, 3).unwrap(), vec![3, 1, 0, 2, 5, 6, 4]);
        assert_eq!(dfs_recursive(&g, 6).unwrap(), vec![6, 4, 1, 0, 2, 5, 3]);
    }

    #[test]
    fn traversal_rejects_bad_start() {
        let g = seven_vertex_graph();
        let expected = GraphError::InvalidVertex {
            vertex: 7,
            vertex_count: 7,
        };
        for strategy in ALL_TRAVERSALS {
            assert_eq!(traverse(&g, 7, strategy), Err(expected.clone()));
        }
        assert!(Bfs::new(&g, 7).is_err());
        assert!(DfsStack::new(&g, 99).is_err());
    }

    #[test]
    fn traversal_skips_other_components() {
        let g = Graph::from_edges(6, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]).unwrap();
        for strategy in ALL_TRAVERSALS {
            let name = traversal_name(strategy);
            assert_eq!(traverse(&g, 0, strategy).unwrap(), vec![0, 1, 2], "{name}");
            assert_eq!(traverse(&g, 5, strategy).unwrap(), vec![5], "{name}");
        }
    }

    #[test]
    fn traversal_iterators_restart_per_call() {
        let g = seven_vertex_graph();
        let mut first = DfsStack::new(&g, 0).unwrap();
        assert_eq!(first.next(), Some(0));
        assert_eq!(first.next(), Some(1));
        let again: Vec<usize> = DfsStack::new(&g, 0).unwrap().collect();
        assert_eq!(again, vec![0, 1, 3, 4, 6, 5, 2]);
        assert_eq!(first.by_ref().count(), 5);
        assert_eq!(first.next(), None);
    }

    #[test]
    fn dfs_variants_agree_random() {
        for seed in 0..40_u64 {
            let n = 2 + (seed as usize % 30);
            let g = random_graph(n, 0.15, 1, 0xDF50_0000 + seed);
            for start in 0..n {
                let stack: Vec<usize> = DfsStack::new(&g, start).unwrap().collect();
                assert_eq!(stack, dfs_recursive(&g, start).unwrap(), "seed={seed} start={start}");
            }
        }
    }

    #[test]
    fn traversals_visit_same_component() {
        for seed in 0..20_u64 {
            let g = random_graph(25, 0.08, 1, 0xC0C0_0000 + seed);
            let start = seed as usize % 25;
            let mut bfs = traverse(&g, start, TraversalStrategy::Bfs).unwrap();
            let mut dfs = traverse(&g, start, TraversalStrategy::DfsStack).unwrap();
            assert_eq!(bfs[0], start);
            assert_eq!(dfs[0], start);
            bfs.sort_unstable();
            dfs.sort_unstable();
            assert_eq!(bfs, dfs, "seed={seed}");

            let paths = dijkstra_binary_heap(&g, start).unwrap();
            let reachable: Vec<usize> = (0..25).filter(|&v| paths.is_reachable(v)).collect();
            assert_eq!(bfs, reachable, "seed={seed}");
        }
    }

    #[test]
    fn bfs_hop_counts_never_decrease() {
        for seed in 0..20_u64 {
            let g = random_graph(30, 0.1, 9, 0xBF50_0000 + seed);
            let start = seed as usize % 30;
            let hops = dijkstra_linear_scan(&unit_weights(&g), start).unwrap();

            let mut bfs = Bfs::new(&g, start).unwrap();
            let mut last = 0;
            while let Some((v, depth)) = bfs.next_with_depth() {
                assert!(depth >= last, "seed={seed}");
                assert_eq!(Some(depth as u64), hops.distance(v), "seed={seed} v={v}");
                last = depth;
            }
        }
    }

    #[test]
    fn six_vertex_dijkstra() {
        init_tracing();
        let g = six_vertex_weighted_graph();
        for strategy in ALL_STRATEGIES {
            let name = strategy_name(strategy);
            let paths = shortest_paths(&g, 0, strategy).unwrap();
            assert_eq!(paths.distances(), &[0, 4, 6, 1, 2, 5], "{name}");
            let path = paths.path_to(5).unwrap().unwrap();
            assert_eq!(path.vertices(), &[0, 3, 4, 5], "{name}");
            assert_eq!(path.to_string(), "0 -> 3 -> 4 -> 5", "{name}");
            assert_eq!(path.len(), 3);
            assert_eq!((path.source(), path.target()), (0, 5));
            assert_eq!(paths.settle_order(), &[0, 3, 4, 1, 5, 2], "{name}");
        }
    }

    #[test]
    fn six_vertex_dijkstra_from_vertex_two() {
        let g = six_vertex_weighted_graph();
        let paths = dijkstra_linear_scan(&g, 2).unwrap();
        assert_eq!(paths.distances(), &[6, 2, 0, 5, 6, 9]);
        assert_eq!(paths.path_to(0).unwrap().unwrap().to_string(), "2 -> 1 -> 0");
        assert_eq!(paths.path_to(5).unwrap().unwrap().to_string(), "2 -> 3 -> 4 -> 5");
    }

    #[test]
    fn source_path_is_trivial() {
        let g = six_vertex_weighted_graph();
        let paths = dijkstra_binary_heap(&g, 3).unwrap();
        assert_eq!(paths.source(), 3);
        assert_eq!(paths.distance(3), Some(0));
        assert_eq!(paths.predecessor(3), None);
        let path = paths.path_to(3).unwrap().unwrap();
        assert_eq!(path.vertices(), &[3]);
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "3");
    }

    #[test]
    fn unreachable_vertices_have_no_path() {
        let g = Graph::from_edges(5, &[(0, 1, 2), (3, 4, 1)]).unwrap();
        for strategy in ALL_STRATEGIES {
            let paths = shortest_paths(&g, 0, strategy).unwrap();
            assert_eq!(paths.distances(), &[0, 2, INF, INF, INF]);
            assert_eq!(paths.distance(3), None);
            assert!(!paths.is_reachable(4));
            assert_eq!(paths.predecessor(4), None);
            assert_eq!(paths.path_to(4), Ok(None));
            assert_eq!(paths.settle_order(), &[0, 1]);
        }
    }

    #[test]
    fn dijkstra_rejects_bad_source_and_target() {
        let g = six_vertex_weighted_graph();
        for strategy in ALL_STRATEGIES {
            assert_eq!(
                shortest_paths(&g, 6, strategy),
                Err(GraphError::InvalidVertex {
                    vertex: 6,
                    vertex_count: 6
                })
            );
        }
        let paths = dijkstra_binary_heap(&g, 0).unwrap();
        assert!(paths.path_to(6).is_err());
    }

    #[test]
    fn single_vertex_graph() {
        let g = Graph::new(1).unwrap();
        assert_eq!(traverse(&g, 0, TraversalStrategy::Bfs).unwrap(), vec![0]);
        for strategy in ALL_STRATEGIES {
            let paths = shortest_paths(&g, 0, strategy).unwrap();
            assert_eq!(paths.distances(), &[0]);
            assert_eq!(paths.settle_order(), &[0]);
        }
    }

    #[test]
    fn negative_weight_rejected_on_weighted_graph() {
        let mut g = six_vertex_weighted_graph();
        assert_eq!(
            g.add_weighted_edge(0, 5, -3),
            Err(GraphError::NegativeWeight {
                from: 0,
                to: 5,
                weight: -3
            })
        );
        assert_eq!(g, six_vertex_weighted_graph());
        let paths = dijkstra_binary_heap(&g, 0).unwrap();
        assert_eq!(paths.distances(), &[0, 4, 6, 1, 2, 5]);
    }

    #[test]
    fn oversized_weight_rejected() {
        assert_eq!(
            Graph::from_edges(2, &[(0, 1, i64::MAX)]),
            Err(GraphError::WeightTooLarge {
                from: 0,
                to: 1,
                weight: i64::MAX,
                max: MAX_WEIGHT
            })
        );

        let half = (INF / 2 + 1) as i64;
        let mut g = Graph::from_edges(3, &[(0, 1, 7)]).unwrap();
        assert!(g.add_weighted_edge(1, 2, half).is_err());
        assert_eq!(g.weight(1, 2), Ok(None));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn heaviest_edges_stay_reachable() {
        let g = Graph::from_edges(2, &[(0, 1, MAX_WEIGHT as i64)]).unwrap();
        for strategy in ALL_STRATEGIES {
            let paths = shortest_paths(&g, 0, strategy).unwrap();
            assert!(paths.is_reachable(1));
            assert_eq!(paths.distance(1), Some(MAX_WEIGHT));
        }

        let n = 64;
        let chain: Vec<(usize, usize, i64)> =
            (1..n).map(|v| (v - 1, v, MAX_WEIGHT as i64)).collect();
        let g = Graph::from_edges(n, &chain).unwrap();
        let bfs = traverse(&g, 0, TraversalStrategy::Bfs).unwrap();
        assert_eq!(bfs.len(), n);
        for strategy in ALL_STRATEGIES {
            let name = strategy_name(strategy);
            let paths = shortest_paths(&g, 0, strategy).unwrap();
            for v in 0..n {
                assert_eq!(paths.distance(v), Some(v as u64 * MAX_WEIGHT), "{name} v={v}");
            }
            let path = paths.path_to(n - 1).unwrap().unwrap();
            assert_eq!(path.len(), n - 1, "{name}");
        }
    }

    #[test]
    fn strategies_agree_random() {
        for seed in 0..30_u64 {
            let n = 1 + (seed as usize % 40);
            // Small weights force plenty of distance ties.
            let g = random_graph(n, 0.2, 4, 0xD1A1_0000 + seed);
            let src = seed as usize % n;
            let linear = dijkstra_linear_scan(&g, src).unwrap();
            let binary = dijkstra_binary_heap(&g, src).unwrap();
            assert_eq!(linear, binary, "seed={seed}");
        }
    }

    #[test]
    fn dijkstra_invariants_random() {
        for seed in 0..25_u64 {
            let n = 35;
            let g = random_graph(n, 0.1, 50, 0x1A7A_0000 + seed);
            let src = seed as usize % n;
            let paths = dijkstra_binary_heap(&g, src).unwrap();

            assert_eq!(paths.distance(src), Some(0));

            let mut seen = vec![false; n];
            for &v in paths.settle_order() {
                assert!(!seen[v], "seed={seed} settled {v} twice");
                seen[v] = true;
            }
            let dists: Vec<u64> = paths.settle_order().iter().map(|&v| paths.distances()[v]).collect();
            assert!(dists.windows(2).all(|w| w[0] <= w[1]), "seed={seed}");

            for v in 0..n {
                match paths.path_to(v).unwrap() {
                    Some(path) => {
                        assert!(path.len() < n, "seed={seed}");
                        assert_eq!(path.source(), src);
                        assert_eq!(path.target(), v);
                        let total: u64 = path
                            .vertices()
                            .windows(2)
                            .map(|w| g.weight(w[0], w[1]).unwrap().unwrap())
                            .sum();
                        assert_eq!(Some(total), paths.distance(v), "seed={seed} v={v}");
                    }
                    None => assert!(!paths.is_reachable(v)),
                }
            }

            for (u, v, w) in g.edges() {
                if let (Some(du), Some(dv)) = (paths.distance(u), paths.distance(v)) {
                    assert!(dv <= du + w && du <= dv + w, "seed={seed} edge {u}-{v}");
                }
            }
        }
    }

    #[test]
    fn generated_cases_agree() {
        for (i, case) in ALL_CASES.iter().enumerate() {
            let input = generate_case(*case, 100, 0x5EED_0000 + i as u64).unwrap();
            let g = &input.graph;
            assert!(g.vertex_count() >= 8, "case={case:?}");
            assert!(input.source < g.vertex_count(), "case={case:?}");

            let linear = dijkstra_linear_scan(g, input.source).unwrap();
            let binary = dijkstra_binary_heap(g, input.source).unwrap();
            assert_eq!(linear, binary, "case={case:?}");

            let bfs = traverse(g, input.source, TraversalStrategy::Bfs).unwrap();
            assert_eq!(bfs.len(), linear.settle_order().len(), "case={case:?}");
        }
    }

    #[test]
    fn disconnected_case_leaves_second_half_unreachable() {
        let input = generate_case(generator::GraphCase::Disconnected, 40, 7).unwrap();
        let paths = dijkstra_binary_heap(&input.graph, input.source).unwrap();
        for v in 20..40 {
            assert!(!paths.is_reachable(v));
        }
    }
}
