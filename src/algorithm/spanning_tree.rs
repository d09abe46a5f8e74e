//! 最小生成树
//!
//! Prim 算法：每轮线性扫描已访问集合的全部出边，选出权重最小的跨越边。
//! 复杂度 O(V·E)，不使用优先队列。

use crate::graph::{EdgeTriple, Graph, VertexId};
use crate::types::Applicability;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree {
    /// 按选入顺序排列的树边
    pub edges: Vec<EdgeTriple>,
    /// 总权重
    pub total_weight: f64,
    /// 是否覆盖全部顶点（图不连通时只得到起点所在分量的树）
    pub spans_all: bool,
}

/// Prim 最小生成树算法
pub struct Prim<'a> {
    graph: &'a Graph,
}

impl<'a> Prim<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 从插入顺序中的第一个顶点开始构造最小生成树
    pub fn minimum_spanning_tree(&self) -> Applicability<SpanningTree> {
        if self.graph.is_directed() {
            return Applicability::not_applicable("有向图不存在最小生成树");
        }
        if !self.graph.is_weighted() {
            return Applicability::not_applicable("无权图不计算最小生成树");
        }

        let mut tree = SpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            spans_all: true,
        };

        let Some(start) = self.graph.vertices().next() else {
            return Applicability::Applicable(tree);
        };

        // 访问集合保持插入顺序，同权重时先扫描到的边胜出
        let mut visited: IndexSet<&'a VertexId> = IndexSet::new();
        visited.insert(start);

        while visited.len() < self.graph.vertex_count() {
            let Some((u, v, weight)) = self.lightest_frontier_edge(&visited) else {
                break;
            };
            tree.edges
                .push(EdgeTriple::new(u.clone(), v.clone(), Some(weight)));
            tree.total_weight += weight;
            visited.insert(v);
        }

        tree.spans_all = visited.len() == self.graph.vertex_count();
        debug!(
            edges = tree.edges.len(),
            total_weight = tree.total_weight,
            spans_all = tree.spans_all,
            "spanning tree built"
        );

        Applicability::Applicable(tree)
    }

    fn lightest_frontier_edge(
        &self,
        visited: &IndexSet<&'a VertexId>,
    ) -> Option<(&'a VertexId, &'a VertexId, f64)> {
        let mut best: Option<(&'a VertexId, &'a VertexId, f64)> = None;

        for &u in visited {
            for edge in self.graph.neighbors(u.as_str()).unwrap_or(&[]) {
                let v = edge.target();
                if visited.contains(v) {
                    continue;
                }
                let Some(weight) = edge.weight().filter(|w| !w.is_nan()) else {
                    continue;
                };
                if best.map_or(true, |(_, _, min)| weight < min) {
                    best = Some((u, v, weight));
                }
            }
        }

        best
    }
}
