//! 并查集（不相交集合）
//!
//! 路径减半 + 按秩合并，用于 Kruskal 算法的环检测

use crate::types::VertexId;
use std::cmp::Ordering;

/// 并查集
///
/// `parent` 构成森林：每个元素沿父指针最终到达一个根（根的父指针指向自己）。
/// `rank` 是根所在树高度的上界，只在按秩合并时增长。
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// 创建 n 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// 元素个数
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 查找 x 所在集合的代表元
    ///
    /// 路径减半：遍历时把每个经过节点的父指针改为其祖父节点。
    /// 不会把整条路径直接挂到根上，但能让后续查找保持浅层。
    pub fn find(&mut self, mut x: VertexId) -> VertexId {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// 朴素合并：总是把 x 的根挂到 y 的根下，不考虑秩
    ///
    /// 仅用于对比基准；构建 MST 时应使用 [`DisjointSet::union_by_rank`]。
    pub fn union(&mut self, x: VertexId, y: VertexId) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        self.parent[root_x] = root_y;
    }

    /// 按秩合并，返回是否发生了合并
    ///
    /// 秩低的根挂到秩高的根下；秩相同时把 y 的根挂到 x 的根下，
    /// 并把 x 的根的秩加一。已在同一集合时不做任何事。
    pub fn union_by_rank(&mut self, x: VertexId, y: VertexId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    /// x 与 y 是否在同一集合
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    /// 当前集合个数
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    /// 根的秩（非根返回 None）
    pub fn rank(&self, x: VertexId) -> Option<u32> {
        (self.parent[x] == x).then(|| self.rank[x])
    }
}
