//! 图引擎性质测试
//!
//! 随机编辑序列下的对称性、剪枝幂等性以及落盘往返

use adjgraph::{Applicability, EdgeTriple, Error, Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];

/// 在图上执行一串随机的增删操作，忽略非致命信号
fn random_edits(graph: &mut Graph, rng: &mut StdRng, steps: usize) {
    for _ in 0..steps {
        let u = NAMES[rng.gen_range(0..NAMES.len())];
        let v = NAMES[rng.gen_range(0..NAMES.len())];
        let weight = graph.is_weighted().then(|| rng.gen_range(1..10) as f64);

        let result = match rng.gen_range(0..10) {
            0 => graph.add_vertex(u),
            1 => graph.remove_vertex(u),
            2..=3 => graph.remove_edge(u, v),
            _ => graph.add_edge(u, v, weight, rng.gen_bool(0.3)).map(|_| ()),
        };
        match result {
            Ok(()) => {}
            Err(e) if e.is_signal() => {}
            Err(Error::UnknownVertex(_)) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
}

fn seeded_graph(directed: bool, weighted: bool, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(directed, weighted);
    for name in NAMES {
        graph.add_vertex(*name).unwrap();
    }
    random_edits(&mut graph, &mut rng, 200);
    graph
}

fn sorted_edges(graph: &Graph) -> Vec<((VertexId, VertexId), Option<f64>)> {
    let mut edges: Vec<_> = graph
        .edges()
        .into_iter()
        .map(|e: EdgeTriple| {
            let key = if graph.is_directed() {
                (e.source.clone(), e.target.clone())
            } else {
                e.unordered_key()
            };
            (key, e.weight)
        })
        .collect();
    edges.sort_by(|a, b| a.0.cmp(&b.0));
    edges
}

fn assert_symmetric(graph: &Graph) {
    for (u, edges) in graph.adjacency() {
        for edge in edges {
            let v = edge.target();
            assert!(graph.contains_vertex(v.as_str()), "dangling target {}", v);
            if u != v {
                let back = graph
                    .neighbors(v.as_str())
                    .unwrap()
                    .iter()
                    .find(|e| e.target() == u)
                    .unwrap_or_else(|| panic!("missing mirror {}-{}", v, u));
                assert_eq!(back.weight(), edge.weight());
            }
        }
    }
}

#[test]
fn test_undirected_symmetry_after_random_edits() {
    for seed in 0..20 {
        for weighted in [false, true] {
            let graph = seeded_graph(false, weighted, seed);
            assert_symmetric(&graph);
        }
    }
}

#[test]
fn test_weight_presence_matches_mode() {
    for seed in 0..10 {
        for directed in [false, true] {
            for weighted in [false, true] {
                let graph = seeded_graph(directed, weighted, seed);
                for (_, edges) in graph.adjacency() {
                    for edge in edges {
                        assert_eq!(edge.weight().is_some(), weighted);
                    }
                }
            }
        }
    }
}

#[test]
fn test_pruning_is_idempotent() {
    for seed in 0..20 {
        for directed in [false, true] {
            let mut graph = seeded_graph(directed, false, seed);
            graph.remove_hanging_vertices();
            let once = sorted_edges(&graph);
            let vertices: Vec<VertexId> = graph.vertices().cloned().collect();

            assert!(graph.remove_hanging_vertices().is_empty());
            assert_eq!(sorted_edges(&graph), once);
            assert_eq!(graph.vertices().cloned().collect::<Vec<_>>(), vertices);
            assert!(graph.adjacency().all(|(_, edges)| edges.len() != 1));
        }
    }
}

#[test]
fn test_disk_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    for seed in 0..10 {
        for directed in [false, true] {
            for weighted in [false, true] {
                let graph = seeded_graph(directed, weighted, seed);
                let path = dir.path().join(format!("g-{}-{}-{}.txt", seed, directed, weighted));

                graph.save_to_file(&path).unwrap();
                let loaded = Graph::load_from_file(&path).unwrap();

                assert_eq!(loaded.kind(), graph.kind());
                assert_eq!(sorted_edges(&loaded), sorted_edges(&graph));
                assert_eq!(loaded.vertex_count(), graph.vertex_count());
            }
        }
    }
}

#[test]
fn test_unstorable_vertex_ids_never_reach_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ids.txt");

    let mut graph = Graph::new(false, false);
    assert!(matches!(graph.add_vertex("a b"), Err(Error::InvalidVertexId(_))));
    assert!(matches!(graph.add_vertex(""), Err(Error::InvalidVertexId(_))));
    graph.add_vertex("a").unwrap();
    graph.add_vertex("b").unwrap();

    graph.save_to_file(&path).unwrap();
    let loaded = Graph::load_from_file(&path).unwrap();
    assert_eq!(
        loaded.vertices().map(|v| v.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert_eq!(loaded.edge_count(), 0);
}

#[test]
fn test_documented_examples() {
    // BFS
    let mut graph = Graph::new(false, false);
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v).unwrap();
    }
    for (u, v) in [("A", "B"), ("B", "C"), ("A", "D")] {
        graph.add_edge(u, v, None, false).unwrap();
    }
    let paths = graph.shortest_paths_from("A").unwrap();
    for (v, d) in [("A", 0), ("B", 1), ("D", 1), ("C", 2)] {
        assert_eq!(paths.distance(v), Some(d));
    }
    assert!(paths.unreachable.is_empty());

    // 环检测
    let mut cyclic = Graph::new(true, false);
    for v in ["A", "B", "C"] {
        cyclic.add_vertex(v).unwrap();
    }
    cyclic.add_edge("A", "B", None, false).unwrap();
    cyclic.add_edge("B", "C", None, false).unwrap();
    assert_eq!(cyclic.is_acyclic(), Applicability::Applicable(true));
    cyclic.add_edge("C", "A", None, false).unwrap();
    assert_eq!(cyclic.is_acyclic(), Applicability::Applicable(false));

    // 最小生成树
    let mut weighted = Graph::new(false, true);
    for v in ["A", "B", "C"] {
        weighted.add_vertex(v).unwrap();
    }
    weighted.add_edge("A", "B", Some(1.0), false).unwrap();
    weighted.add_edge("B", "C", Some(2.0), false).unwrap();
    weighted.add_edge("A", "C", Some(5.0), false).unwrap();
    let tree = weighted.minimum_spanning_tree().applicable().unwrap();
    assert_eq!(tree.total_weight, 3.0);
    assert_eq!(tree.edges.len(), 2);

    // 未知顶点
    let mut empty = Graph::new(false, false);
    assert!(matches!(
        empty.add_edge("X", "Y", None, false),
        Err(Error::UnknownVertex(_))
    ));
    assert!(empty.is_empty());
}
