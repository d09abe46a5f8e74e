//! 错误类型定义

use crate::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(VertexId),

    #[error("顶点已存在: {0}")]
    AlreadyExists(VertexId),

    #[error("边已存在: {from}-{to}")]
    EdgeExists { from: VertexId, to: VertexId },

    #[error("边不存在: {from}-{to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("顶点 ID 不能为空或包含空白: {0:?}")]
    InvalidVertexId(String),

    #[error("边 {from}-{to} 的权重必须是有限数: {weight}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },

    #[error("带权图的边 {from}-{to} 必须指定权重")]
    MissingWeight { from: VertexId, to: VertexId },

    #[error("文件头格式错误: {0}")]
    MalformedHeader(String),

    #[error("第 {line} 行格式错误 ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 是否为非致命信号（调用方可忽略并继续）
    pub fn is_signal(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists(_) | Error::EdgeExists { .. } | Error::EdgeNotFound { .. }
        )
    }
}
