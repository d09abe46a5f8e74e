//! 结果打印器
//!
//! 把图和算法结果渲染成表格文本

use crate::algorithm::{AllPairsLengths, OutDegreeComparison, ShortestPaths, SpanningTree};
use crate::graph::{EdgeTriple, Graph, VertexId};
use prettytable::{format, row, Cell, Row, Table};

fn new_table(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(titles.iter().map(|t| Cell::new(t)).collect()));
    table
}

fn format_weight(weight: Option<f64>) -> String {
    weight.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 邻接表
pub fn adjacency_table(graph: &Graph) -> String {
    if graph.is_empty() {
        return format!("图为空 ({})\n", graph.kind());
    }

    let mut table = new_table(&["顶点", "邻接顶点"]);
    for (vertex, edges) in graph.adjacency() {
        let neighbors: Vec<String> = edges
            .iter()
            .map(|e| match e.weight() {
                Some(w) => format!("{} ({})", e.target(), w),
                None => e.target().to_string(),
            })
            .collect();
        table.add_row(row![vertex, neighbors.join(", ")]);
    }

    format!("{}图类型: {}\n", table, graph.kind())
}

/// 边列表
pub fn edge_table(edges: &[EdgeTriple], weighted: bool) -> String {
    if edges.is_empty() {
        return "图中没有边\n".to_string();
    }

    let mut table = if weighted {
        new_table(&["源", "目标", "权重"])
    } else {
        new_table(&["源", "目标"])
    };
    for edge in edges {
        if weighted {
            table.add_row(row![edge.source, edge.target, format_weight(edge.weight)]);
        } else {
            table.add_row(row![edge.source, edge.target]);
        }
    }

    format!("{}{} 条边\n", table, edges.len())
}

/// 统计信息
pub fn stats_table(graph: &Graph) -> String {
    let mut table = new_table(&["属性", "值"]);
    table.add_row(row!["图类型", graph.kind()]);
    table.add_row(row!["顶点数", graph.vertex_count()]);
    table.add_row(row!["边数", graph.edge_count()]);
    table.add_row(row!["自环数", graph.find_loops().len()]);
    table.to_string()
}

/// 出度比较
pub fn out_degree_report(result: &OutDegreeComparison) -> String {
    let mut output = format!("顶点 '{}' 的出度: {}\n", result.vertex, result.out_degree);
    if result.greater.is_empty() {
        output.push_str("没有出度更大的顶点\n");
        return output;
    }

    let mut table = new_table(&["顶点", "出度"]);
    for (vertex, degree) in &result.greater {
        table.add_row(row![vertex, degree]);
    }
    output.push_str(&table.to_string());
    output
}

/// 自环顶点
pub fn loops_report(loops: &[VertexId]) -> String {
    if loops.is_empty() {
        "图中没有带自环的顶点\n".to_string()
    } else {
        let names: Vec<&str> = loops.iter().map(|v| v.as_str()).collect();
        format!("带自环的顶点: {}\n", names.join(", "))
    }
}

/// 单源最短路径
pub fn shortest_paths_table(paths: &ShortestPaths) -> String {
    let mut table = new_table(&["顶点", "跳数"]);
    for (vertex, distance) in &paths.distances {
        table.add_row(row![vertex, distance]);
    }

    let mut output = format!("从顶点 '{}' 出发的最短路径:\n{}", paths.source, table);
    if !paths.unreachable.is_empty() {
        let names: Vec<&str> = paths.unreachable.iter().map(|v| v.as_str()).collect();
        output.push_str(&format!("不可达顶点: {}\n", names.join(", ")));
    }
    output
}

/// 全源最短路径长度
pub fn all_pairs_table(all: &AllPairsLengths) -> String {
    if all.is_empty() {
        return "图为空\n".to_string();
    }

    let mut table = new_table(&["起点", "终点", "跳数"]);
    for (source, target, distance) in all.pairs() {
        let distance = distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "无路径".to_string());
        table.add_row(row![source, target, distance]);
    }
    table.to_string()
}

/// 最小生成树
pub fn spanning_tree_table(tree: &SpanningTree) -> String {
    if tree.edges.is_empty() {
        return "最小生成树为空\n".to_string();
    }

    let mut table = new_table(&["源", "目标", "权重"]);
    for edge in &tree.edges {
        table.add_row(row![edge.source, edge.target, format_weight(edge.weight)]);
    }

    let mut output = format!("最小生成树:\n{}总权重: {}\n", table, tree.total_weight);
    if !tree.spans_all {
        output.push_str("图不连通，只覆盖了起点所在的连通分量\n");
    }
    output
}

/// 帮助信息
pub fn help_text() -> String {
    r#"
═══════════════════════════════════════════════════════════════
                    AdjGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                    显示帮助
  quit, exit, q                 退出程序
  new <directed|undirected> <weighted|unweighted>
                                创建新的空图
  load <文件>                   从文件加载图
  save <文件>                   保存图到文件
  show, s                       显示邻接表
  edges, e                      显示边列表
  stats                         显示统计信息
  json                          以 JSON 输出图

修改:
  add-vertex, av <顶点>         添加顶点
  add-edge, ae <u> <v> [权重] [--force]
                                添加边，--force 覆盖已有边
  remove-vertex, rv <顶点>      删除顶点
  remove-edge, re <u> <v>       删除边
  prune                         反复删除悬挂顶点

查询:
  outdegree, od <顶点>          列出出度更大的顶点
  loops                         列出带自环的顶点
  acyclic                       判断有向图是否无环
  bfs <起点>                    单源最短路径（跳数）
  apsp                          全源最短路径长度
  mst                           Prim 最小生成树

═══════════════════════════════════════════════════════════════
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new(false, true);
        for v in ["A", "B", "C"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge("A", "B", Some(1.0), false).unwrap();
        graph.add_edge("B", "C", Some(2.0), false).unwrap();
        graph
    }

    #[test]
    fn test_adjacency_table() {
        let output = adjacency_table(&sample());
        assert!(output.contains("B (1)"));
        assert!(output.contains("图类型: 无向, 带权"));
        assert!(adjacency_table(&Graph::default()).starts_with("图为空"));
    }

    #[test]
    fn test_edge_table() {
        let graph = sample();
        let output = edge_table(&graph.edges(), true);
        assert!(output.ends_with("2 条边\n"));
        assert_eq!(edge_table(&[], false), "图中没有边\n");
    }

    #[test]
    fn test_shortest_paths_table_lists_unreachable() {
        let mut graph = sample();
        graph.add_vertex("Z").unwrap();
        let output = shortest_paths_table(&graph.shortest_paths_from("A").unwrap());
        assert!(output.contains("不可达顶点: Z"));
    }

    #[test]
    fn test_spanning_tree_table() {
        let tree = sample().minimum_spanning_tree().applicable().unwrap();
        let output = spanning_tree_table(&tree);
        assert!(output.contains("总权重: 3"));
    }

    #[test]
    fn test_loops_report() {
        assert_eq!(loops_report(&[]), "图中没有带自环的顶点\n");
        assert_eq!(
            loops_report(&[VertexId::from("A"), VertexId::from("B")]),
            "带自环的顶点: A, B\n"
        );
    }
}
