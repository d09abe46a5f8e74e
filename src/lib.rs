//! AdjGraph - 邻接表图引擎
//!
//! 可变的邻接表图，支持：
//! - 有向/无向、带权/无权四种模式
//! - 顶点与边的增删，无向图自动维护对称性
//! - 纯文本格式的加载与保存
//! - 经典图查询（出度比较、自环、悬挂顶点剪枝、环检测、BFS 最短路径、Prim 最小生成树）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod storage;
pub mod types;

// 重导出常用类型
pub use algorithm::{AllPairsLengths, OutDegreeComparison, ShortestPaths, SpanningTree};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeInsertion, EdgeTriple, Graph, VertexId};
pub use storage::GraphFile;
pub use types::{Applicability, GraphKind};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
