//! 图数据结构
//!
//! 基于邻接表的可变图。顶点按插入顺序保存，遍历、显示、BFS 的同层顺序
//! 以及最小生成树的起点都依赖这一顺序。

use super::edge::{Edge, EdgeTriple};
use super::vertex::VertexId;
use crate::error::{Error, Result};
use crate::types::GraphKind;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// 加边结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// 新增了一条边
    Added,
    /// 覆盖了已有边的权重
    Updated,
}

/// 图
///
/// 不变量：
/// - 每条边的目标顶点都是邻接表中的键
/// - 无向图中 `u != v` 的边成对存储，自环只存一次
/// - 同一有序顶点对之间至多一条边
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// 图模式
    kind: GraphKind,
    /// 邻接表（保持插入顺序）
    adjacency: IndexMap<VertexId, Vec<Edge>>,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_kind(GraphKind::new(directed, weighted))
    }

    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.kind.weighted
    }

    // ==================== 只读访问 ====================

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 获取边数量（无向边计一次）
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.adjacency.keys()
    }

    /// 按插入顺序遍历 (顶点, 出边列表)
    pub fn adjacency(&self) -> impl Iterator<Item = (&VertexId, &[Edge])> + '_ {
        self.adjacency.iter().map(|(v, edges)| (v, edges.as_slice()))
    }

    /// 获取顶点的出边
    pub fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// 获取顶点的出度（邻接表长度）
    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.adjacency.get(id).map(Vec::len)
    }

    /// 是否存在边 u→v
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |edges| edges.iter().any(|e| e.target().as_str() == v))
    }

    /// 获取图中存储的顶点 ID
    pub(crate) fn vertex_key(&self, id: &str) -> Option<&VertexId> {
        self.adjacency.get_key_value(id).map(|(key, _)| key)
    }

    /// 查找顶点的规范 ID，不存在时返回 `UnknownVertex`
    pub(crate) fn require_vertex(&self, id: &str) -> Result<VertexId> {
        self.vertex_key(id)
            .cloned()
            .ok_or_else(|| Error::UnknownVertex(VertexId::from(id)))
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 空 ID 和含空白的 ID 无法写入文本格式，直接拒绝。
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> Result<()> {
        let id = id.into();
        if id.as_str().is_empty() || id.as_str().chars().any(char::is_whitespace) {
            warn!(vertex = ?id.as_str(), "invalid vertex id");
            return Err(Error::InvalidVertexId(id.as_str().to_string()));
        }
        if self.adjacency.contains_key(&id) {
            warn!(vertex = %id, "vertex already exists");
            return Err(Error::AlreadyExists(id));
        }
        debug!(vertex = %id, "vertex added");
        self.adjacency.insert(id, Vec::new());
        Ok(())
    }

    /// 删除顶点及所有指向它的边
    pub fn remove_vertex(&mut self, id: &str) -> Result<()> {
        let id = self.require_vertex(id)?;
        let stripped = self.detach(&id);
        debug!(vertex = %id, stripped, "vertex removed");
        Ok(())
    }

    /// 删除键并清除其它邻接表中对它的引用，返回清除的引用数
    fn detach(&mut self, id: &VertexId) -> usize {
        self.adjacency.shift_remove(id);
        let mut stripped = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| e.target() != id);
            stripped += before - edges.len();
        }
        stripped
    }

    // ==================== 边操作 ====================

    /// 添加边 u→v
    ///
    /// 所有校验在修改之前完成，失败时图保持不变。无向图中 `u != v` 的边
    /// 会同步写入 v→u；无权图忽略传入的权重。
    pub fn add_edge(
        &mut self,
        u: &str,
        v: &str,
        weight: Option<f64>,
        overwrite: bool,
    ) -> Result<EdgeInsertion> {
        let source = self.require_vertex(u)?;
        let target = self.require_vertex(v)?;

        let weight = if self.kind.weighted {
            match weight {
                Some(w) if w.is_finite() => Some(w),
                Some(w) => {
                    return Err(Error::InvalidWeight {
                        from: source,
                        to: target,
                        weight: w,
                    })
                }
                None => {
                    return Err(Error::MissingWeight {
                        from: source,
                        to: target,
                    })
                }
            }
        } else {
            None
        };

        if self.has_edge(u, v) && !overwrite {
            warn!(from = %source, to = %target, "edge already exists");
            return Err(Error::EdgeExists {
                from: source,
                to: target,
            });
        }

        let insertion = self.upsert(&source, &target, weight);
        if !self.kind.directed && source != target {
            self.upsert(&target, &source, weight);
        }

        debug!(from = %source, to = %target, ?weight, ?insertion, "edge stored");
        Ok(insertion)
    }

    fn upsert(&mut self, u: &VertexId, v: &VertexId, weight: Option<f64>) -> EdgeInsertion {
        let edges = self.adjacency.entry(u.clone()).or_default();
        match edges.iter_mut().find(|e| e.target() == v) {
            Some(edge) => {
                edge.set_weight(weight);
                EdgeInsertion::Updated
            }
            None => {
                edges.push(Edge::new(v.clone(), weight));
                EdgeInsertion::Added
            }
        }
    }

    /// 删除边 u→v（无向图同时删除 v→u）
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<()> {
        let source = self.require_vertex(u)?;
        if !self.has_edge(u, v) {
            warn!(from = %source, to = v, "edge not found");
            return Err(Error::EdgeNotFound {
                from: source,
                to: VertexId::from(v),
            });
        }

        if let Some(edges) = self.adjacency.get_mut(u) {
            edges.retain(|e| e.target().as_str() != v);
        }
        if !self.kind.directed && u != v {
            if let Some(edges) = self.adjacency.get_mut(v) {
                edges.retain(|e| e.target().as_str() != u);
            }
        }

        debug!(from = %source, to = v, "edge removed");
        Ok(())
    }

    /// 获取边集
    ///
    /// 无向图中每个无序顶点对只输出一次（以首次遇到的方向为准），自环也只输出一次。
    pub fn edges(&self) -> Vec<EdgeTriple> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for (vertex, edges) in &self.adjacency {
            for edge in edges {
                let triple = EdgeTriple::new(vertex.clone(), edge.target().clone(), edge.weight());
                if self.kind.directed || seen.insert(triple.unordered_key()) {
                    result.push(triple);
                }
            }
        }

        result
    }

    // ==================== 结构修改 ====================

    /// 反复删除悬挂顶点（邻接表长度恰为 1），直到不再出现新的悬挂顶点
    ///
    /// 原地修改，返回按删除顺序排列的顶点。
    pub fn remove_hanging_vertices(&mut self) -> Vec<VertexId> {
        let mut removed = Vec::new();
        let mut pass = 0;

        loop {
            let hanging: Vec<VertexId> = self
                .adjacency
                .iter()
                .filter(|(_, edges)| edges.len() == 1)
                .map(|(v, _)| v.clone())
                .collect();
            if hanging.is_empty() {
                break;
            }

            pass += 1;
            debug!(pass, count = hanging.len(), "removing hanging vertices");
            for vertex in hanging {
                self.detach(&vertex);
                removed.push(vertex);
            }
        }

        removed
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            let neighbors: Vec<String> = edges
                .iter()
                .map(|e| match e.weight() {
                    Some(w) => format!("{} ({})", e.target(), w),
                    None => e.target().to_string(),
                })
                .collect();
            writeln!(f, "{}: {}", vertex, neighbors.join(", "))?;
        }
        write!(f, "图类型: {}", self.kind)
    }
}
