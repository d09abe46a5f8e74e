//! 交互命令处理
//!
//! 解析一行输入并在当前会话的图上执行

use crate::cli::printer;
use crate::error::Error;
use crate::graph::{EdgeInsertion, Graph};
use crate::types::{Applicability, GraphKind};
use std::path::PathBuf;

/// 命令执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 非致命提示（顶点已存在、边已存在、边不存在）
    Warning(String),
    /// 错误
    Error(String),
}

impl From<Error> for CommandResult {
    fn from(err: Error) -> Self {
        if err.is_signal() {
            CommandResult::Warning(err.to_string())
        } else {
            CommandResult::Error(err.to_string())
        }
    }
}

/// 会话状态：当前图及其来源文件
#[derive(Debug, Default)]
pub struct Session {
    graph: Graph,
    path: Option<PathBuf>,
}

impl Session {
    pub fn new(graph: Graph) -> Self {
        Self { graph, path: None }
    }

    /// 从文件打开的会话
    pub fn with_path(graph: Graph, path: PathBuf) -> Self {
        Self {
            graph,
            path: Some(path),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 最近一次加载或保存的文件
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

/// 命令名（用于补全）
pub const COMMANDS: &[&str] = &[
    "help", "quit", "exit", "new", "load", "save", "show", "edges", "stats", "json",
    "add-vertex", "add-edge", "remove-vertex", "remove-edge", "prune", "outdegree", "loops",
    "acyclic", "bfs", "apsp", "mst",
];

fn usage(text: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", text))
}

/// 解析并执行命令
pub fn execute_command(input: &str, session: &mut Session) -> CommandResult {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((first, args)) = parts.split_first() else {
        return CommandResult::Continue;
    };
    let cmd = first.to_lowercase();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(printer::help_text()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "new" => match GraphKind::parse_header(&args.join(" ")) {
            Ok(kind) => {
                session.graph = Graph::with_kind(kind);
                session.path = None;
                CommandResult::Message(format!("已创建新图: {}", kind))
            }
            Err(_) => usage("new <directed|undirected> <weighted|unweighted>"),
        },

        "load" => match args {
            [file] => match Graph::load_from_file(*file) {
                Ok(graph) => {
                    let message = format!(
                        "已从 '{}' 加载图:\n{}",
                        file,
                        printer::adjacency_table(&graph)
                    );
                    session.graph = graph;
                    session.path = Some(PathBuf::from(*file));
                    CommandResult::Message(message)
                }
                Err(e) => e.into(),
            },
            _ => usage("load <文件>"),
        },

        "save" => {
            let path = match args {
                [file] => PathBuf::from(*file),
                [] => match &session.path {
                    Some(path) => path.clone(),
                    None => return usage("save <文件>"),
                },
                _ => return usage("save <文件>"),
            };
            match session.graph.save_to_file(&path) {
                Ok(()) => {
                    let message = format!("图已保存到 '{}'", path.display());
                    session.path = Some(path);
                    CommandResult::Message(message)
                }
                Err(e) => e.into(),
            }
        }

        "show" | "s" => CommandResult::Message(printer::adjacency_table(&session.graph)),

        "edges" | "e" => CommandResult::Message(printer::edge_table(
            &session.graph.edges(),
            session.graph.is_weighted(),
        )),

        "stats" | "info" => CommandResult::Message(printer::stats_table(&session.graph)),

        "json" => match serde_json::to_string_pretty(&session.graph) {
            Ok(json) => CommandResult::Message(json),
            Err(e) => CommandResult::Error(format!("序列化失败: {}", e)),
        },

        "add-vertex" | "av" => match args {
            [vertex] => match session.graph.add_vertex(*vertex) {
                Ok(()) => CommandResult::Message(format!("已添加顶点 '{}'", vertex)),
                Err(e) => e.into(),
            },
            _ => usage("add-vertex <顶点>"),
        },

        "add-edge" | "ae" => add_edge(args, &mut session.graph),

        "remove-vertex" | "rv" => match args {
            [vertex] => match session.graph.remove_vertex(vertex) {
                Ok(()) => CommandResult::Message(format!("已删除顶点 '{}'", vertex)),
                Err(e) => e.into(),
            },
            _ => usage("remove-vertex <顶点>"),
        },

        "remove-edge" | "re" => match args {
            [u, v] => match session.graph.remove_edge(u, v) {
                Ok(()) => CommandResult::Message(format!("已删除边 {}-{}", u, v)),
                Err(e) => e.into(),
            },
            _ => usage("remove-edge <u> <v>"),
        },

        "prune" => {
            let removed = session.graph.remove_hanging_vertices();
            let names: Vec<&str> = removed.iter().map(|v| v.as_str()).collect();
            let header = if removed.is_empty() {
                "没有悬挂顶点".to_string()
            } else {
                format!("已删除 {} 个悬挂顶点: {}", removed.len(), names.join(", "))
            };
            CommandResult::Message(format!(
                "{}\n{}",
                header,
                printer::adjacency_table(&session.graph)
            ))
        }

        "outdegree" | "od" => match args {
            [vertex] => match session.graph.compare_out_degree(vertex) {
                Ok(result) => CommandResult::Message(printer::out_degree_report(&result)),
                Err(e) => e.into(),
            },
            _ => usage("outdegree <顶点>"),
        },

        "loops" => CommandResult::Message(printer::loops_report(&session.graph.find_loops())),

        "acyclic" => match session.graph.is_acyclic() {
            Applicability::Applicable(true) => CommandResult::Message("图无环".to_string()),
            Applicability::Applicable(false) => CommandResult::Message("图中存在环".to_string()),
            Applicability::NotApplicable { reason } => CommandResult::Warning(reason),
        },

        "bfs" | "path" => match args {
            [source] => match session.graph.shortest_paths_from(source) {
                Ok(paths) => CommandResult::Message(printer::shortest_paths_table(&paths)),
                Err(e) => e.into(),
            },
            _ => usage("bfs <起点>"),
        },

        "apsp" => CommandResult::Message(printer::all_pairs_table(
            &session.graph.all_pairs_shortest_path_lengths(),
        )),

        "mst" => match session.graph.minimum_spanning_tree() {
            Applicability::Applicable(tree) => {
                CommandResult::Message(printer::spanning_tree_table(&tree))
            }
            Applicability::NotApplicable { reason } => CommandResult::Warning(reason),
        },

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

fn add_edge(args: &[&str], graph: &mut Graph) -> CommandResult {
    let overwrite = args.iter().any(|a| *a == "--force");
    let positional: Vec<&str> = args.iter().copied().filter(|a| *a != "--force").collect();

    let (u, v, weight) = match positional.as_slice() {
        [u, v] => (*u, *v, None),
        [u, v, w] => match w.parse::<f64>() {
            Ok(weight) => (*u, *v, Some(weight)),
            Err(_) => return CommandResult::Error(format!("权重格式错误: {}", w)),
        },
        _ => return usage("add-edge <u> <v> [权重] [--force]"),
    };

    match graph.add_edge(u, v, weight, overwrite) {
        Ok(EdgeInsertion::Added) => CommandResult::Message(format!("已添加边 {}-{}", u, v)),
        Ok(EdgeInsertion::Updated) => CommandResult::Message(format!("已更新边 {}-{}", u, v)),
        Err(e) => e.into(),
    }
}
