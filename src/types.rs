//! 公共类型定义
//!
//! 图模式（有向/无向、带权/无权）以及"不适用"结果的表示

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// 图模式：构造或加载时确定，之后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GraphKind {
    /// 是否有向
    pub directed: bool,
    /// 是否带权
    pub weighted: bool,
}

impl GraphKind {
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    /// 解析文件头，例如 `directed weighted`（大小写不敏感，多余的词忽略）
    pub fn parse_header(line: &str) -> Result<Self> {
        let tokens: Vec<String> = line
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.len() < 2 {
            return Err(Error::MalformedHeader(format!(
                "需要两个模式词，实际为 {:?}",
                line.trim()
            )));
        }

        let directed = match tokens[0].as_str() {
            "directed" => true,
            "undirected" => false,
            other => {
                return Err(Error::MalformedHeader(format!(
                    "未知的方向模式: {}",
                    other
                )))
            }
        };
        let weighted = match tokens[1].as_str() {
            "weighted" => true,
            "unweighted" => false,
            other => {
                return Err(Error::MalformedHeader(format!(
                    "未知的权重模式: {}",
                    other
                )))
            }
        };

        Ok(Self { directed, weighted })
    }

    /// 生成文件头
    pub fn header(&self) -> String {
        format!(
            "{} {}",
            if self.directed { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" }
        )
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            if self.directed { "有向" } else { "无向" },
            if self.weighted { "带权" } else { "无权" }
        )
    }
}

/// 仅对特定图模式有意义的操作结果
///
/// `NotApplicable` 不是错误：它表示操作在当前图上没有定义（例如有向图的最小生成树）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Applicability<T> {
    Applicable(T),
    NotApplicable { reason: String },
}

impl<T> Applicability<T> {
    pub(crate) fn not_applicable(reason: impl Into<String>) -> Self {
        Applicability::NotApplicable {
            reason: reason.into(),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Applicability::Applicable(_))
    }

    /// 转换为 Option，丢弃不适用原因
    pub fn applicable(self) -> Option<T> {
        match self {
            Applicability::Applicable(value) => Some(value),
            Applicability::NotApplicable { .. } => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.applicable().unwrap_or(default)
    }
}
