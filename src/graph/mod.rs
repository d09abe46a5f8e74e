//! 图核心模块
//!
//! 定义顶点、边和邻接表图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::{Edge, EdgeTriple};
pub use graph::{EdgeInsertion, Graph};
pub use vertex::VertexId;
