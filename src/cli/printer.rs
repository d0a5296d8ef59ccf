//! 报告打印器
//!
//! 提供逐行文本、表格和 JSON 三种输出格式

use crate::metrics::MstReport;
use crate::types::Weight;
use prettytable::{format, row, Table};
use std::fmt;
use std::str::FromStr;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMode {
    /// 每个图一段文本
    #[default]
    Text,
    /// 表格模式
    Table,
    /// JSON 数组
    Json,
}

impl FromStr for PrintMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(PrintMode::Text),
            "table" => Ok(PrintMode::Table),
            "json" => Ok(PrintMode::Json),
            other => Err(format!("未知的输出格式: {}", other)),
        }
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrintMode::Text => "text",
            PrintMode::Table => "table",
            PrintMode::Json => "json",
        };
        f.write_str(name)
    }
}

/// 报告打印器
pub struct ReportPrinter {
    mode: PrintMode,
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(PrintMode::Text)
    }
}

impl ReportPrinter {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印一组报告
    pub fn print_reports<W: Weight>(&self, reports: &[MstReport<W>]) -> crate::Result<String> {
        match self.mode {
            PrintMode::Text => Ok(reports.iter().map(Self::format_text).collect()),
            PrintMode::Table => Ok(Self::format_table(reports)),
            PrintMode::Json => Ok(serde_json::to_string_pretty(reports)?),
        }
    }

    /// 文本格式
    fn format_text<W: Weight>(report: &MstReport<W>) -> String {
        let mut output = format!("图 {} 的实验结果:\n", report.source);
        output.push_str(&format!("MST 边数: {}\n", report.mst_edge_count));
        output.push_str(&format!("MST 总权重: {}\n", report.total_weight));
        output.push_str(&format!("Kruskal 算法耗时: {} 秒\n", report.build_seconds));
        output.push_str(&format!("find 操作次数: {}\n", report.find_operations));
        if !report.spanning_tree {
            output.push_str(&format!(
                "注意: 图不连通，结果为包含 {} 个分量的生成森林\n",
                report.component_count()
            ));
        }
        output.push('\n');
        output
    }

    /// 表格格式
    fn format_table<W: Weight>(reports: &[MstReport<W>]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row![
            "Source",
            "Vertices",
            "Edges",
            "MST Edges",
            "Total Weight",
            "Time (s)",
            "Find Ops",
            "Spanning"
        ]);

        for r in reports {
            table.add_row(row![
                r.source,
                r.vertex_count,
                r.edge_count,
                r.mst_edge_count,
                r.total_weight,
                format!("{:.6}", r.build_seconds),
                r.find_operations,
                if r.spanning_tree { "yes" } else { "no" }
            ]);
        }

        table.to_string()
    }
}
