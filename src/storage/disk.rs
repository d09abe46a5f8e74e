//! 文件读写
//!
//! 负责图文件与文本行之间的 I/O，格式编解码见 `text_format`

use crate::error::Result;
use crate::graph::Graph;
use crate::storage::text_format;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 单个图文件
#[derive(Debug, Clone)]
pub struct GraphFile {
    path: PathBuf,
}

impl GraphFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取并解析图
    pub fn load(&self) -> Result<Graph> {
        let reader = BufReader::new(File::open(&self.path)?);
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        let graph = text_format::parse_lines(&lines)?;
        debug!(path = %self.path.display(), lines = lines.len(), "graph loaded");
        Ok(graph)
    }

    /// 写出图，返回写入的行数
    pub fn save(&self, graph: &Graph) -> Result<usize> {
        let lines = text_format::to_lines(graph);
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for line in &lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        debug!(path = %self.path.display(), lines = lines.len(), "graph saved");
        Ok(lines.len())
    }
}
