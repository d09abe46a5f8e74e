//! 边定义

use crate::graph::vertex::VertexId;
use serde::Serialize;
use std::fmt;

/// 邻接表中的一条出边
///
/// 无权图中 `weight` 恒为 `None`，带权图中恒为 `Some`。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// 目标顶点
    target: VertexId,
    /// 权重
    weight: Option<f64>,
}

impl Edge {
    pub fn new(target: VertexId, weight: Option<f64>) -> Self {
        Self { target, weight }
    }

    pub fn target(&self) -> &VertexId {
        &self.target
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: Option<f64>) {
        self.weight = weight;
    }
}

/// 边集中的一项：(源, 目标, 权重)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeTriple {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: Option<f64>,
}

impl EdgeTriple {
    pub fn new(source: VertexId, target: VertexId, weight: Option<f64>) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// 端点排序后的键，用于无向边去重比较
    pub fn unordered_key(&self) -> (VertexId, VertexId) {
        if self.source <= self.target {
            (self.source.clone(), self.target.clone())
        } else {
            (self.target.clone(), self.source.clone())
        }
    }
}

impl fmt::Display for EdgeTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} - {} (权重: {})", self.source, self.target, w),
            None => write!(f, "{} - {}", self.source, self.target),
        }
    }
}
