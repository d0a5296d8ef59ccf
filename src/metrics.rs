//! 性能指标收集模块
//!
//! 记录 MST 构建阶段的耗时和 find 调用次数，生成可导出的报告

use crate::algorithm::MstResult;
use crate::graph::Graph;
use crate::types::Weight;
use serde::Serialize;
use std::time::{Duration, Instant};

/// 执行 f 并返回其结果和耗时
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// 单个图的 MST 报告
#[derive(Debug, Clone, Serialize)]
pub struct MstReport<W> {
    /// 输入来源（通常是文件名）
    pub source: String,
    /// 数值类型
    pub precision: &'static str,
    pub vertex_count: usize,
    /// 输入图的边数
    pub edge_count: usize,
    /// 实际接受的 MST 边数
    pub mst_edge_count: usize,
    pub total_weight: W,
    /// 构建耗时（秒）
    pub build_seconds: f64,
    pub find_operations: usize,
    pub edges_examined: usize,
    /// 是否为完整的生成树
    pub spanning_tree: bool,
}

impl<W: Weight> MstReport<W> {
    /// 从一次构建结果生成报告
    pub fn new(
        source: impl Into<String>,
        graph: &Graph<W>,
        result: &MstResult<W>,
        elapsed: Duration,
    ) -> Self {
        Self {
            source: source.into(),
            precision: W::NAME,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            mst_edge_count: result.len(),
            total_weight: result.total_weight(),
            build_seconds: elapsed.as_secs_f64(),
            find_operations: result.find_operations,
            edges_examined: result.edges_examined,
            spanning_tree: result.is_spanning_tree(graph.vertex_count()),
        }
    }

    /// 连通分量数
    pub fn component_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.mst_edge_count)
    }

    /// 导出为 JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Kruskal;

    fn path_graph() -> Graph<f64> {
        let mut graph = Graph::new(3);
        for i in 0..3 {
            graph.add_vertex(i as f64, 0.0).unwrap();
        }
        graph.add_edge(0, 1, 1.5).unwrap();
        graph.add_edge(1, 2, 2.5).unwrap();
        graph
    }

    #[test]
    fn test_report_from_result() {
        let graph = path_graph();
        let (result, elapsed) = timed(|| Kruskal::new(&graph).run());

        let report = MstReport::new("path.txt", &graph, &result, elapsed);

        assert_eq!(report.source, "path.txt");
        assert_eq!(report.precision, "f64");
        assert_eq!(report.mst_edge_count, 2);
        assert_eq!(report.total_weight, 4.0);
        assert_eq!(report.find_operations, 4);
        assert_eq!(report.component_count(), 1);
        assert!(report.spanning_tree);
        assert!(report.build_seconds >= 0.0);
    }

    #[test]
    fn test_report_json() {
        let graph = path_graph();
        let result = Kruskal::new(&graph).run();
        let report = MstReport::new("path.txt", &graph, &result, Duration::from_millis(5));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["mst_edge_count"], 2);
        assert_eq!(json["total_weight"], 4.0);
        assert_eq!(json["build_seconds"], 0.005);
        assert_eq!(json["spanning_tree"], true);
    }
}
