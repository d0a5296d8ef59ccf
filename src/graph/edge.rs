//! 边定义
//!
//! 无向带权边。存储时保留 (source, destination) 的顺序，
//! 但不要求 source < destination。

use crate::types::{VertexId, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    /// 源顶点
    source: VertexId,
    /// 目标顶点
    destination: VertexId,
    /// 权重
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// 创建新边
    pub fn new(source: VertexId, destination: VertexId, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// 获取源顶点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 获取目标顶点
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// 获取权重
    pub fn weight(&self) -> W {
        self.weight
    }

    /// 按权重比较
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.destination, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let e = Edge::new(2, 0, 3.5f64);

        assert_eq!(e.source(), 2);
        assert_eq!(e.destination(), 0);
        assert_eq!(e.weight(), 3.5);
    }

    #[test]
    fn test_edge_weight_order() {
        let light = Edge::new(0, 1, 1.0f32);
        let heavy = Edge::new(0, 2, 4.0f32);

        assert_eq!(light.cmp_weight(&heavy), Ordering::Less);
        assert_eq!(heavy.cmp_weight(&light), Ordering::Greater);
        assert_eq!(light.cmp_weight(&light), Ordering::Equal);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(0, 1, 1.5f64).to_string(), "(0, 1, 1.5)");
    }

    #[test]
    fn test_edge_serialization() {
        let json = serde_json::to_string(&Edge::new(0, 3, 2.0f64)).unwrap();
        assert_eq!(json, r#"{"source":0,"destination":3,"weight":2.0}"#);
    }
}
