//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：第一个词补全命令名，`new` 之后补全图模式，
//! 其余位置补全当前图中的顶点名

use crate::cli::commands::COMMANDS;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// `new` 命令的参数
const GRAPH_MODES: &[&str] = &["directed", "undirected", "weighted", "unweighted"];

/// 需要顶点参数的命令
const VERTEX_COMMANDS: &[&str] = &[
    "add-edge", "ae", "remove-vertex", "rv", "remove-edge", "re", "outdegree", "od", "bfs",
    "path",
];

/// AdjGraph CLI 补全器
#[derive(Default)]
pub struct ShellCompleter {
    /// 当前图中的顶点（每条命令执行后刷新）
    vertices: Vec<String>,
}

impl ShellCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 刷新顶点候选
    pub fn set_vertices<I, S>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertices = vertices.into_iter().map(Into::into).collect();
    }

    fn candidates(&self, words: &[&str], at_word_end: bool) -> Vec<String> {
        // 正在输入的是第几个词
        let position = if at_word_end {
            words.len().saturating_sub(1)
        } else {
            words.len()
        };

        if position == 0 {
            return COMMANDS.iter().map(|c| c.to_string()).collect();
        }

        let command = words[0].to_lowercase();
        if command == "new" {
            GRAPH_MODES.iter().map(|m| m.to_string()).collect()
        } else if VERTEX_COMMANDS.contains(&command.as_str()) {
            self.vertices.clone()
        } else {
            Vec::new()
        }
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        let current_word = if at_word_end {
            words.last().copied().unwrap_or("")
        } else {
            ""
        };
        let start_pos = pos - current_word.len();

        let completions = self
            .candidates(&words, at_word_end)
            .into_iter()
            .filter(|c| c.starts_with(current_word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();

        Ok((start_pos, completions))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
