//! 通用类型定义

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// 顶点索引（0..vertex_count）
pub type VertexId = usize;

/// 权重与坐标共用的数值类型
///
/// 由 `f32` 和 `f64` 实现。排序使用 [`Weight::total_cmp`]，
/// 因此即使出现 NaN 也能得到确定的全序（NaN 排在最后）。
pub trait Weight:
    Copy
    + PartialOrd
    + Default
    + Add<Output = Self>
    + FromStr
    + fmt::Display
    + fmt::Debug
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// 类型名，用于报告
    const NAME: &'static str;

    /// 全序比较
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl Weight for f64 {
    const NAME: &'static str = "f64";

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl Weight for f32 {
    const NAME: &'static str = "f32";

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

/// 二维坐标（仅作描述信息，不参与算法）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point<W> {
    pub x: W,
    pub y: W,
}

impl<W> Point<W> {
    pub fn new(x: W, y: W) -> Self {
        Self { x, y }
    }
}

impl<W: fmt::Display> fmt::Display for Point<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cmp_nan_last() {
        let mut values = vec![2.0f64, f64::NAN, 1.0];
        values.sort_by(Weight::total_cmp);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[1], 2.0);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.5f32, -2.0).to_string(), "(1.5, -2)");
    }
}
