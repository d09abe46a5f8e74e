//! 最短路径算法
//!
//! 基于 BFS 的跳数最短路径。边权一律忽略：带权图上得到的同样是跳数，而非加权距离。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;

/// 单源最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    /// 起点
    pub source: VertexId,
    /// 可达顶点的跳数（按 BFS 发现顺序，即距离非递减）
    pub distances: IndexMap<VertexId, usize>,
    /// 不可达顶点（按顶点插入顺序）
    pub unreachable: Vec<VertexId>,
}

impl ShortestPaths {
    /// 获取到某顶点的跳数，不可达时为 None
    pub fn distance(&self, vertex: &str) -> Option<usize> {
        self.distances.get(vertex).copied()
    }
}

/// 全源最短路径长度
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairsLengths {
    /// 起点 -> (终点 -> 跳数)，None 表示无路径
    rows: IndexMap<VertexId, IndexMap<VertexId, Option<usize>>>,
}

impl AllPairsLengths {
    /// 获取 source 到 target 的跳数
    pub fn distance(&self, source: &str, target: &str) -> Option<usize> {
        self.rows.get(source)?.get(target).copied().flatten()
    }

    /// 按顶点插入顺序遍历所有有序顶点对
    pub fn pairs(&self) -> impl Iterator<Item = (&VertexId, &VertexId, Option<usize>)> + '_ {
        self.rows
            .iter()
            .flat_map(|(s, row)| row.iter().map(move |(t, d)| (s, t, *d)))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Graph,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 从 source 出发的 BFS 最短路径
    pub fn shortest_paths_from(&self, source: &str) -> Result<ShortestPaths> {
        let source = self
            .graph
            .vertex_key(source)
            .ok_or_else(|| Error::UnknownVertex(VertexId::from(source)))?;

        let reached = self.bfs(source);
        let unreachable = self
            .graph
            .vertices()
            .filter(|v| !reached.contains_key(*v))
            .cloned()
            .collect();

        Ok(ShortestPaths {
            source: source.clone(),
            distances: reached
                .into_iter()
                .map(|(v, d)| (v.clone(), d))
                .collect(),
            unreachable,
        })
    }

    /// 以每个顶点为起点做一次 BFS，代价 O(V·(V+E))
    pub fn all_pairs_lengths(&self) -> AllPairsLengths {
        let rows = self
            .graph
            .vertices()
            .map(|source| {
                let reached = self.bfs(source);
                let row = self
                    .graph
                    .vertices()
                    .map(|target| (target.clone(), reached.get(target).copied()))
                    .collect();
                (source.clone(), row)
            })
            .collect();

        AllPairsLengths { rows }
    }

    /// FIFO 遍历，按邻接表存储顺序扩展
    fn bfs(&self, source: &'a VertexId) -> IndexMap<&'a VertexId, usize> {
        let mut distances = IndexMap::new();
        let mut queue = VecDeque::new();

        distances.insert(source, 0);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let depth = distances[&current];
            for edge in self.graph.neighbors(current.as_str()).unwrap_or(&[]) {
                let next = edge.target();
                if !distances.contains_key(next) {
                    distances.insert(next, depth + 1);
                    queue.push_back(next);
                }
            }
        }

        distances
    }
}
