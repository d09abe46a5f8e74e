//! 结构查询
//!
//! 出度比较、自环检测和有向图的环检测

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::Applicability;
use serde::Serialize;
use std::collections::HashSet;

/// 出度比较结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutDegreeComparison {
    /// 被比较的顶点
    pub vertex: VertexId,
    /// 该顶点的出度
    pub out_degree: usize,
    /// 出度严格更大的顶点及其出度（按顶点插入顺序）
    pub greater: Vec<(VertexId, usize)>,
}

/// 结构分析器
pub struct StructureAnalyzer<'a> {
    graph: &'a Graph,
}

impl<'a> StructureAnalyzer<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 列出出度大于给定顶点出度的所有顶点
    pub fn compare_out_degree(&self, vertex: &str) -> Result<OutDegreeComparison> {
        let vertex = self
            .graph
            .vertex_key(vertex)
            .ok_or_else(|| Error::UnknownVertex(VertexId::from(vertex)))?;
        let out_degree = self.graph.out_degree(vertex.as_str()).unwrap_or(0);

        let greater = self
            .graph
            .adjacency()
            .filter(|(_, edges)| edges.len() > out_degree)
            .map(|(v, edges)| (v.clone(), edges.len()))
            .collect();

        Ok(OutDegreeComparison {
            vertex: vertex.clone(),
            out_degree,
            greater,
        })
    }

    /// 查找带自环的顶点
    pub fn find_loops(&self) -> Vec<VertexId> {
        self.graph
            .adjacency()
            .filter(|(v, edges)| edges.iter().any(|e| e.target() == *v))
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// 判断有向图是否无环
    ///
    /// 对每个未访问顶点做 DFS，遇到仍在递归栈上的顶点即为回边。无向图上不适用。
    pub fn is_acyclic(&self) -> Applicability<bool> {
        if !self.graph.is_directed() {
            return Applicability::not_applicable("无向图不做环检测");
        }

        let mut visited = HashSet::new();
        let mut on_stack = HashSet::new();

        for root in self.graph.vertices() {
            if visited.contains(root) {
                continue;
            }
            if self.has_back_edge_from(root, &mut visited, &mut on_stack) {
                return Applicability::Applicable(false);
            }
        }

        Applicability::Applicable(true)
    }

    /// 显式栈 DFS，栈帧为 (顶点, 下一条待检查出边的下标)
    fn has_back_edge_from(
        &self,
        root: &'a VertexId,
        visited: &mut HashSet<&'a VertexId>,
        on_stack: &mut HashSet<&'a VertexId>,
    ) -> bool {
        let mut stack: Vec<(&'a VertexId, usize)> = vec![(root, 0)];
        visited.insert(root);
        on_stack.insert(root);

        while let Some(frame) = stack.last_mut() {
            let (vertex, next) = *frame;
            let edges = self.graph.neighbors(vertex.as_str()).unwrap_or(&[]);

            match edges.get(next) {
                Some(edge) => {
                    frame.1 += 1;
                    let target = edge.target();
                    if on_stack.contains(target) {
                        return true;
                    }
                    if visited.insert(target) {
                        on_stack.insert(target);
                        stack.push((target, 0));
                    }
                }
                None => {
                    on_stack.remove(vertex);
                    stack.pop();
                }
            }
        }

        false
    }
}
