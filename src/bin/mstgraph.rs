//! MstGraph 命令行工具
//!
//! 依次读取图文件，计算 MST 并报告边数、总权重、耗时和 find 次数

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mstgraph::cli::{PrintMode, ReportPrinter};
use mstgraph::import::read_graph;
use mstgraph::metrics::{timed, MstReport};
use mstgraph::{EdgeSort, Kruskal, Weight};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Precision {
    F32,
    F64,
}

#[derive(Parser, Debug)]
#[command(name = "mstgraph")]
#[command(about = "Kruskal 最小生成树计算工具", version)]
struct Args {
    /// 输入图文件
    #[arg(default_values = ["g1.txt", "g2.txt", "g3.txt"])]
    files: Vec<PathBuf>,

    /// 权重和坐标的数值类型
    #[arg(short, long, value_enum, default_value = "f64")]
    precision: Precision,

    /// 边排序方式: unstable, bubble
    #[arg(short, long, default_value = "unstable")]
    sort: EdgeSort,

    /// 输出格式: text, table, json
    #[arg(short, long, default_value = "text")]
    format: PrintMode,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.precision {
        Precision::F32 => run::<f32>(&args),
        Precision::F64 => run::<f64>(&args),
    }
}

fn run<W: Weight>(args: &Args) -> anyhow::Result<()> {
    let printer = ReportPrinter::new(args.format);
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        // 任一文件失败即终止整个运行
        let graph = read_graph::<W, _>(path)
            .with_context(|| format!("无法读取图文件 {}", path.display()))?;

        let (result, elapsed) = timed(|| Kruskal::new(&graph).with_sort(args.sort).run());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let report = MstReport::new(name, &graph, &result, elapsed);

        // 文本模式逐个输出
        if printer.mode() == PrintMode::Text {
            print!("{}", printer.print_reports(std::slice::from_ref(&report))?);
        }
        reports.push(report);
    }

    if printer.mode() != PrintMode::Text {
        println!("{}", printer.print_reports(&reports)?);
    }

    Ok(())
}
