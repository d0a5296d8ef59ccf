//! 图数据结构
//!
//! 顶点数在构造时确定，顶点和边按顺序追加，构建完成后只读

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{CapacityKind, Error, Result};
use crate::types::{VertexId, Weight};

/// 预分配上限（只影响预分配，不影响逻辑容量）
const MAX_VERTEX_RESERVE: usize = 1 << 20;
const MAX_EDGE_RESERVE: usize = 1 << 20;

/// 带权无向图
#[derive(Debug, Clone)]
pub struct Graph<W> {
    /// 声明的顶点数
    vertex_count: usize,
    /// 顶点（最多 vertex_count 个）
    vertices: Vec<Vertex<W>>,
    /// 边（最多 vertex_count² 条）
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    /// 创建图，按完全图的边数预留存储
    pub fn new(vertex_count: usize) -> Self {
        Self::with_edge_capacity(vertex_count, Self::edge_limit(vertex_count))
    }

    /// 创建图，按已知边数预留存储
    ///
    /// 计数来自未经校验的输入，预留量有上限，超出部分按需增长。
    pub fn with_edge_capacity(vertex_count: usize, expected_edges: usize) -> Self {
        let edge_reserve = expected_edges
            .min(Self::edge_limit(vertex_count))
            .min(MAX_EDGE_RESERVE);
        Self {
            vertex_count,
            vertices: Vec::with_capacity(vertex_count.min(MAX_VERTEX_RESERVE)),
            edges: Vec::with_capacity(edge_reserve),
        }
    }

    fn edge_limit(vertex_count: usize) -> usize {
        vertex_count.saturating_mul(vertex_count)
    }

    // ==================== 构建 ====================

    /// 追加顶点，返回其索引
    pub fn add_vertex(&mut self, x: W, y: W) -> Result<VertexId> {
        let id = self.vertices.len();
        if id >= self.vertex_count {
            return Err(Error::OutOfCapacity {
                kind: CapacityKind::Vertex,
                capacity: self.vertex_count,
            });
        }
        self.vertices.push(Vertex::new(id, x, y));
        Ok(id)
    }

    /// 追加边，返回其在边列表中的位置
    pub fn add_edge(&mut self, source: VertexId, destination: VertexId, weight: W) -> Result<usize> {
        let limit = Self::edge_limit(self.vertex_count);
        if self.edges.len() >= limit {
            return Err(Error::OutOfCapacity {
                kind: CapacityKind::Edge,
                capacity: limit,
            });
        }
        for index in [source, destination] {
            if index >= self.vertex_count {
                return Err(Error::InvalidVertex {
                    index,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(Edge::new(source, destination, weight));
        Ok(self.edges.len() - 1)
    }

    // ==================== 查询 ====================

    /// 声明的顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 已追加的边数（不是预留容量）
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<W>> {
        self.vertices.get(id)
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// 所有边的权重之和
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::default(), |acc, e| acc + e.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new(3);

        assert_eq!(graph.add_vertex(0.0f64, 0.0).unwrap(), 0);
        assert_eq!(graph.add_vertex(1.0, 0.0).unwrap(), 1);
        assert_eq!(graph.add_vertex(0.0, 1.0).unwrap(), 2);

        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 2.0).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex(1).unwrap().x(), 1.0);
        assert!(graph.vertex(3).is_none());
        assert_eq!(graph.edges()[1], Edge::new(1, 2, 2.0));
        assert_eq!(graph.total_weight(), 3.0);
    }

    #[test]
    fn test_vertex_capacity() {
        let mut graph = Graph::<f64>::new(1);
        graph.add_vertex(0.0, 0.0).unwrap();

        let err = graph.add_vertex(1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfCapacity {
                kind: CapacityKind::Vertex,
                capacity: 1
            }
        ));
        assert_eq!(graph.vertices().len(), 1);
    }

    #[test]
    fn test_edge_capacity() {
        let mut graph = Graph::<f32>::new(2);
        for _ in 0..4 {
            graph.add_edge(0, 1, 1.0).unwrap();
        }

        let err = graph.add_edge(1, 0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfCapacity {
                kind: CapacityKind::Edge,
                capacity: 4
            }
        ));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut graph = Graph::<f64>::with_edge_capacity(3, 2);

        let err = graph.add_edge(0, 3, 1.0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidVertex {
                index: 3,
                vertex_count: 3
            }
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_huge_declared_counts_reserve_bounded() {
        let graph = Graph::<f64>::with_edge_capacity(4_000_000_000, 4_000_000_000);

        assert_eq!(graph.vertex_count(), 4_000_000_000);
        assert!(graph.vertices.capacity() <= MAX_VERTEX_RESERVE);
        assert!(graph.edges.capacity() <= MAX_EDGE_RESERVE);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::<f64>::new(0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.total_weight(), 0.0);
        assert!(graph.add_vertex(0.0, 0.0).is_err());
        assert!(graph.add_edge(0, 0, 1.0).is_err());
    }
}
