//! MstGraph - Kruskal 最小生成树
//!
//! 对带权无向图计算最小生成树（或生成森林）：
//! - 按秩合并、路径减半的并查集
//! - Kruskal 选边，返回结果边和 find 调用次数
//! - 文本格式的图导入与结果报告

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use algorithm::{build_mst, DisjointSet, EdgeSort, Kruskal, MstResult};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use metrics::MstReport;
pub use types::{Point, VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
