//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 容量受限的存储类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
    Vertex,
    Edge,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityKind::Vertex => write!(f, "顶点"),
            CapacityKind::Edge => write!(f, "边"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("解析错误: 第 {position} 个记号 ({field}): {message}")]
    ParseError {
        position: usize,
        field: &'static str,
        message: String,
    },

    #[error("{kind}容量已满: 上限 {capacity}")]
    OutOfCapacity { kind: CapacityKind, capacity: usize },

    #[error("无效的顶点索引: {index} (顶点数 {vertex_count})")]
    InvalidVertex { index: usize, vertex_count: usize },

    #[error("并查集大小不匹配: 期望 {expected}, 实际 {actual}")]
    DisjointSetSizeMismatch { expected: usize, actual: usize },

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::OutOfCapacity {
            kind: CapacityKind::Edge,
            capacity: 16,
        };
        assert_eq!(err.to_string(), "边容量已满: 上限 16");

        let err = Error::ParseError {
            position: 3,
            field: "weight",
            message: "缺少记号".to_string(),
        };
        assert!(err.to_string().contains("第 3 个记号"));
    }
}
