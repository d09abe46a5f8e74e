//! 图算法模块
//!
//! 包含结构查询、BFS 最短路径和 Prim 最小生成树

mod path_tracing;
mod spanning_tree;
mod structure;

pub use path_tracing::{AllPairsLengths, PathFinder, ShortestPaths};
pub use spanning_tree::{Prim, SpanningTree};
pub use structure::{OutDegreeComparison, StructureAnalyzer};

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::types::Applicability;

impl Graph {
    /// 出度比较
    pub fn compare_out_degree(&self, vertex: &str) -> Result<OutDegreeComparison> {
        StructureAnalyzer::new(self).compare_out_degree(vertex)
    }

    /// 带自环的顶点
    pub fn find_loops(&self) -> Vec<VertexId> {
        StructureAnalyzer::new(self).find_loops()
    }

    /// 有向图无环检测
    pub fn is_acyclic(&self) -> Applicability<bool> {
        StructureAnalyzer::new(self).is_acyclic()
    }

    /// 单源 BFS 最短路径
    pub fn shortest_paths_from(&self, source: &str) -> Result<ShortestPaths> {
        PathFinder::new(self).shortest_paths_from(source)
    }

    /// 全源最短路径长度
    pub fn all_pairs_shortest_path_lengths(&self) -> AllPairsLengths {
        PathFinder::new(self).all_pairs_lengths()
    }

    /// Prim 最小生成树
    pub fn minimum_spanning_tree(&self) -> Applicability<SpanningTree> {
        Prim::new(self).minimum_spanning_tree()
    }
}
