//! AdjGraph CLI 工具
//!
//! 交互式命令行界面

use adjgraph::cli::{execute_command, CommandResult, Session, ShellCompleter, ShellConfig};
use adjgraph::graph::Graph;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "AdjGraph 图命令行工具")]
struct Args {
    /// 启动时加载的图文件
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 新图为有向图（未指定文件或加载失败时生效）
    #[arg(long)]
    directed: bool,

    /// 新图为带权图（未指定文件或加载失败时生效）
    #[arg(long)]
    weighted: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 关闭彩色输出
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ShellConfig {
        color: !args.no_color,
        ..ShellConfig::default()
    };
    colored::control::set_override(config.color);

    let mut session = open_session(&args);

    // 单个命令模式
    if let Some(command) = &args.execute {
        return match execute_command(command, &mut session) {
            CommandResult::Error(message) => Err(anyhow::anyhow!(message)),
            result => {
                render(result);
                Ok(())
            }
        };
    }

    println!("AdjGraph CLI - 邻接表图工具");
    println!("===========================");
    println!("图类型: {}", session.graph().kind());
    println!("  顶点数: {}", session.graph().vertex_count());
    println!("  边数: {}", session.graph().edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    run_shell(&config, &mut session)?;

    println!("再见！");
    Ok(())
}

/// 打开初始会话；文件加载失败时退回到空图
fn open_session(args: &Args) -> Session {
    let empty = || Graph::new(args.directed, args.weighted);

    let Some(path) = &args.file else {
        return Session::new(empty());
    };

    match Graph::load_from_file(path) {
        Ok(graph) => {
            println!("已加载图文件: {}", path.display());
            Session::with_path(graph, path.clone())
        }
        Err(e) => {
            eprintln!(
                "{}",
                format!("加载 '{}' 失败: {}，已创建空图", path.display(), e).yellow()
            );
            Session::new(empty())
        }
    }
}

fn run_shell(config: &ShellConfig, session: &mut Session) -> anyhow::Result<()> {
    let mut rl: Editor<ShellCompleter, DefaultHistory> = Editor::new()?;
    let mut completer = ShellCompleter::new();
    completer.set_vertices(session.graph().vertices().map(|v| v.to_string()));
    rl.set_helper(Some(completer));

    if let Some(history) = &config.history_file {
        // 首次运行时历史文件不存在
        let _ = rl.load_history(history);
    }

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let result = execute_command(line, session);
        if result == CommandResult::Exit {
            break;
        }
        render(result);

        if let Some(helper) = rl.helper_mut() {
            helper.set_vertices(session.graph().vertices().map(|v| v.to_string()));
        }
    }

    if let Some(history) = &config.history_file {
        if let Err(e) = rl.save_history(history) {
            tracing::warn!(error = %e, "failed to save history");
        }
    }

    Ok(())
}

fn render(result: CommandResult) {
    match result {
        CommandResult::Continue | CommandResult::Exit => {}
        CommandResult::Message(message) => println!("{}", message.trim_end()),
        CommandResult::Warning(message) => println!("{}", message.yellow()),
        CommandResult::Error(message) => println!("{}", format!("错误: {}", message).red()),
    }
}
