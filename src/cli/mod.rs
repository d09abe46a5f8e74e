//! 交互式命令行
//!
//! 持有一个图实例并把用户命令分派给图操作，渲染结果和错误

mod commands;
mod completer;
pub mod printer;

pub use commands::{execute_command, CommandResult, Session, COMMANDS};
pub use completer::ShellCompleter;

use std::path::PathBuf;

/// 历史记录文件名
const HISTORY_FILE: &str = ".adjgraph_history";

/// 交互式命令行配置
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// 提示符
    pub prompt: String,
    /// 历史记录文件（None 时不保存历史）
    pub history_file: Option<PathBuf>,
    /// 是否彩色输出
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "adjgraph> ".to_string(),
            history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE)),
            color: true,
        }
    }
}
