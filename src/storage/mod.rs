//! 持久化模块
//!
//! 单行空白分隔的纯文本格式：
//! - 文本编解码 (`text_format`)
//! - 文件读写 (`GraphFile`)

mod disk;
pub mod text_format;

pub use disk::GraphFile;

use crate::error::Result;
use crate::graph::Graph;
use std::path::Path;

impl Graph {
    /// 从文件加载图，模式由文件头决定
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        GraphFile::new(path).load()
    }

    /// 保存到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        GraphFile::new(path).save(self).map(|_| ())
    }
}
