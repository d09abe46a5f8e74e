//! 纯文本图格式
//!
//! 第一行为文件头 `{directed|undirected} {weighted|unweighted}`，之后每行为：
//! - `V`：孤立顶点
//! - `U V`：无权边
//! - `U V W`：带权边，W 为浮点数
//!
//! 无向图中每条边只写一次（源 <= 目标），有向图写出全部存储的边。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::GraphKind;
use tracing::debug;

/// 从文本行解析图
///
/// 解析在一个新图上进行，任何一行出错都直接返回错误，不会产生半成品。
/// 重复出现的边按覆盖处理，后出现的权重生效。
pub fn parse_lines<I, S>(lines: I) -> Result<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let header = lines
        .next()
        .ok_or_else(|| Error::MalformedHeader("文件为空".to_string()))?;
    let kind = GraphKind::parse_header(header.as_ref())?;
    let mut graph = Graph::with_kind(kind);

    let mut records = 0;
    for (index, line) in lines.enumerate() {
        // 文件头占第 1 行
        let line_no = index + 2;
        let line = line.as_ref();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let malformed = |reason: &str| Error::MalformedRecord {
            line: line_no,
            content: line.to_string(),
            reason: reason.to_string(),
        };

        match (tokens.as_slice(), kind.weighted) {
            ([], _) => return Err(malformed("空行")),
            ([vertex], _) => ensure_vertex(&mut graph, vertex)?,
            ([u, v], false) => {
                ensure_vertex(&mut graph, u)?;
                ensure_vertex(&mut graph, v)?;
                graph.add_edge(u, v, None, true)?;
            }
            ([u, v, w], true) => {
                let weight: f64 = w.parse().map_err(|_| malformed("权重不是数字"))?;
                if !weight.is_finite() {
                    return Err(malformed("权重必须是有限数"));
                }
                ensure_vertex(&mut graph, u)?;
                ensure_vertex(&mut graph, v)?;
                graph.add_edge(u, v, Some(weight), true)?;
            }
            (_, true) => return Err(malformed("带权图的记录应为 1 或 3 个字段")),
            (_, false) => return Err(malformed("无权图的记录应为 1 或 2 个字段")),
        }
        records += 1;
    }

    debug!(
        records,
        vertices = graph.vertex_count(),
        kind = %kind,
        "graph parsed"
    );
    Ok(graph)
}

fn ensure_vertex(graph: &mut Graph, id: &str) -> Result<()> {
    if !graph.contains_vertex(id) {
        graph.add_vertex(id)?;
    }
    Ok(())
}

/// 将图编码为文本行（第一行为文件头）
pub fn to_lines(graph: &Graph) -> Vec<String> {
    let mut lines = vec![graph.kind().header()];

    for (vertex, edges) in graph.adjacency() {
        if edges.is_empty() {
            lines.push(vertex.to_string());
            continue;
        }
        for edge in edges {
            let target = edge.target();
            // 自环 (vertex == target) 也要写出
            if !graph.is_directed() && vertex > target {
                continue;
            }
            lines.push(match edge.weight() {
                Some(w) => format!("{} {} {}", vertex, target, format_weight(w)),
                None => format!("{} {}", vertex, target),
            });
        }
    }

    lines
}

/// 保证可以无损解析回来的最短表示，整数权重保留 `.0`
fn format_weight(weight: f64) -> String {
    format!("{:?}", weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    #[test]
    fn test_parse_undirected_weighted() {
        let graph = parse_lines(["UNDIRECTED Weighted", "A B 1.5", "B C 2", "D"]).unwrap();

        assert!(!graph.is_directed());
        assert!(graph.is_weighted());
        assert_eq!(
            graph.vertices().map(|v| v.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C", "D"]
        );
        assert_eq!(graph.neighbors("B").unwrap().len(), 2);
        assert_eq!(graph.neighbors("C").unwrap()[0].weight(), Some(2.0));
        assert!(graph.neighbors("D").unwrap().is_empty());
    }

    #[test]
    fn test_parse_directed_unweighted() {
        let graph = parse_lines(["directed unweighted", "A B", "B A", "C C"]).unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.find_loops(), vec![VertexId::from("C")]);
    }

    #[test]
    fn test_parse_repeated_edge_overwrites() {
        let graph = parse_lines(["undirected weighted", "A B 1", "B A 4"]).unwrap();
        assert_eq!(graph.neighbors("A").unwrap().len(), 1);
        assert_eq!(graph.neighbors("A").unwrap()[0].weight(), Some(4.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_lines(Vec::<String>::new()),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            parse_lines(["directed"]),
            Err(Error::MalformedHeader(_))
        ));
        assert!(matches!(
            parse_lines(["directed weighted", "A B"]),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
        assert!(matches!(
            parse_lines(["directed unweighted", "A", "A B 3"]),
            Err(Error::MalformedRecord { line: 3, .. })
        ));
        assert!(matches!(
            parse_lines(["directed weighted", "A B x"]),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
        for w in ["NaN", "inf", "-inf"] {
            assert!(matches!(
                parse_lines(["undirected weighted".to_string(), format!("A B {}", w)]),
                Err(Error::MalformedRecord { line: 2, .. })
            ));
        }
        assert!(matches!(
            parse_lines(["directed unweighted", ""]),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
        assert!(matches!(
            parse_lines(["directed unweighted", "A B C D"]),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_to_lines_undirected_writes_each_edge_once() {
        let mut graph = Graph::new(false, true);
        for v in ["B", "A", "C", "E"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("B", "A", Some(1.0), false).unwrap();
        graph.add_edge("C", "C", Some(2.5), false).unwrap();

        assert_eq!(
            to_lines(&graph),
            vec!["undirected weighted", "A B 1.0", "C C 2.5", "E"]
        );
    }

    #[test]
    fn test_to_lines_directed() {
        let mut graph = Graph::new(true, false);
        for v in ["B", "A"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("B", "A", None, false).unwrap();
        graph.add_edge("A", "B", None, false).unwrap();

        assert_eq!(to_lines(&graph), vec!["directed unweighted", "B A", "A B"]);
    }

    #[test]
    fn test_roundtrip_preserves_edges() {
        let original = parse_lines([
            "undirected weighted",
            "A B 0.1",
            "B C 3",
            "C C 7.25",
            "Z",
        ])
        .unwrap();
        let reloaded = parse_lines(to_lines(&original)).unwrap();

        assert_eq!(reloaded.kind(), original.kind());
        let mut a: Vec<_> = original.edges().iter().map(|e| (e.unordered_key(), e.weight)).collect();
        let mut b: Vec<_> = reloaded.edges().iter().map(|e| (e.unordered_key(), e.weight)).collect();
        a.sort_by(|x, y| x.0.cmp(&y.0));
        b.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(a, b);
        assert!(reloaded.contains_vertex("Z"));
    }
}
