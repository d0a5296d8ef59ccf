//! 顶点定义
//!
//! 顶点由索引和二维坐标组成，坐标只作描述信息

use crate::types::{Point, VertexId, Weight};
use serde::Serialize;

/// 顶点
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex<W> {
    /// 顶点索引
    id: VertexId,
    /// 坐标
    position: Point<W>,
}

impl<W: Weight> Vertex<W> {
    /// 创建新顶点
    pub fn new(id: VertexId, x: W, y: W) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }

    /// 获取顶点索引
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取坐标
    pub fn position(&self) -> Point<W> {
        self.position
    }

    pub fn x(&self) -> W {
        self.position.x
    }

    pub fn y(&self) -> W {
        self.position.y
    }
}
