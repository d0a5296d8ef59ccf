//! 数据导入模块
//!
//! 读取空白分隔的文本图描述：
//!
//! ```text
//! <vertex_count> <edge_count>
//! <x_1> <y_1>
//! ...
//! <source_1> <destination_1> <weight_1>
//! ...
//! ```

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Weight;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    /// 声明记录之后被忽略的记号数
    pub trailing_tokens: usize,
    pub duration_ms: u64,
}

/// 逐记号读取图描述
pub struct GraphLoader<'a> {
    tokens: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> GraphLoader<'a> {
    /// 创建读取器
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            position: 0,
        }
    }

    /// 读取下一个记号并解析为 T
    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        self.position += 1;
        let position = self.position;
        let token = self.tokens.next().ok_or_else(|| Error::ParseError {
            position,
            field,
            message: "输入提前结束".to_string(),
        })?;
        token.parse().map_err(|_| Error::ParseError {
            position,
            field,
            message: format!("无法解析记号 {:?}", token),
        })
    }

    /// 读取完整的图
    pub fn load<W: Weight>(mut self) -> Result<(Graph<W>, ImportStats)> {
        let start = std::time::Instant::now();
        let vertex_count: usize = self.next("vertex_count")?;
        let edge_count: usize = self.next("edge_count")?;

        let mut graph = Graph::with_edge_capacity(vertex_count, edge_count);
        let mut stats = ImportStats::default();

        for _ in 0..vertex_count {
            let x: W = self.next("x")?;
            let y: W = self.next("y")?;
            graph.add_vertex(x, y)?;
            stats.vertices_imported += 1;
        }

        for _ in 0..edge_count {
            let source: usize = self.next("source")?;
            let destination: usize = self.next("destination")?;
            let weight: W = self.next("weight")?;
            graph.add_edge(source, destination, weight)?;
            stats.edges_imported += 1;
        }

        stats.trailing_tokens = self.tokens.count();
        if stats.trailing_tokens > 0 {
            warn!(
                tokens = stats.trailing_tokens,
                "忽略声明记录之后的多余记号"
            );
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            precision = W::NAME,
            "图导入完成"
        );
        Ok((graph, stats))
    }
}

/// 从字符串解析图
pub fn parse_graph<W: Weight>(input: &str) -> Result<Graph<W>> {
    GraphLoader::new(input).load().map(|(graph, _)| graph)
}

/// 从文件读取图
pub fn read_graph<W: Weight, P: AsRef<Path>>(path: P) -> Result<Graph<W>> {
    import_file(path).map(|(graph, _)| graph)
}

/// 从文件读取图并返回导入统计
pub fn import_file<W: Weight, P: AsRef<Path>>(path: P) -> Result<(Graph<W>, ImportStats)> {
    let bytes = std::fs::read(path)?;
    let input = String::from_utf8(bytes).map_err(|e| Error::ParseError {
        position: 0,
        field: "input",
        message: format!("输入不是有效的 UTF-8: {}", e.utf8_error()),
    })?;
    GraphLoader::new(&input).load()
}
