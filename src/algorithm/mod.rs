//! 图算法模块
//!
//! 包含并查集和 Kruskal 最小生成树算法

mod kruskal;
mod sort;
mod union_find;

pub use kruskal::{build_mst, Kruskal, MstResult};
pub use sort::EdgeSort;
pub use union_find::DisjointSet;
