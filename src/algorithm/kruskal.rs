//! 最小生成树（Kruskal 算法）
//!
//! 边按权重升序排序后依次检查，用并查集判断两端是否已连通：
//! 未连通则接受该边并按秩合并，否则跳过（会成环）。
//! 接受 n - 1 条边后立即停止。图不连通时返回最小生成森林。

use super::sort::EdgeSort;
use super::union_find::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::Weight;
use serde::Serialize;
use tracing::{debug, warn};

/// MST 构建结果
#[derive(Debug, Clone, Serialize)]
pub struct MstResult<W> {
    /// 接受的边，按接受顺序（权重非降序）
    pub edges: Vec<Edge<W>>,
    /// find 调用次数（每条检查过的边计 2 次）
    pub find_operations: usize,
    /// 停止前检查过的边数
    pub edges_examined: usize,
}

impl<W: Weight> MstResult<W> {
    /// 接受的边数
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// 总权重
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::default(), |acc, e| acc + e.weight())
    }

    /// 结果是否为生成树（即原图连通）
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        self.edges.len() == vertex_count.saturating_sub(1)
    }

    /// 森林中的连通分量数
    pub fn component_count(&self, vertex_count: usize) -> usize {
        vertex_count.saturating_sub(self.edges.len())
    }
}

/// Kruskal 最小生成树算法
pub struct Kruskal<'a, W> {
    graph: &'a Graph<W>,
    sort: EdgeSort,
}

impl<'a, W: Weight> Kruskal<'a, W> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph<W>) -> Self {
        Self {
            graph,
            sort: EdgeSort::default(),
        }
    }

    /// 设置排序方式
    pub fn with_sort(mut self, sort: EdgeSort) -> Self {
        self.sort = sort;
        self
    }

    /// 使用新建的并查集构建 MST
    pub fn run(&self) -> MstResult<W> {
        let mut disjoint_set = DisjointSet::new(self.graph.vertex_count());
        self.select(&mut disjoint_set)
    }

    /// 使用调用方提供的并查集构建 MST
    ///
    /// 并查集大小必须等于图的顶点数。构建结束后并查集反映最终的连通分量。
    pub fn build(&self, disjoint_set: &mut DisjointSet) -> Result<MstResult<W>> {
        if disjoint_set.len() != self.graph.vertex_count() {
            return Err(Error::DisjointSetSizeMismatch {
                expected: self.graph.vertex_count(),
                actual: disjoint_set.len(),
            });
        }
        Ok(self.select(disjoint_set))
    }

    fn select(&self, disjoint_set: &mut DisjointSet) -> MstResult<W> {
        let vertex_count = self.graph.vertex_count();
        let target = vertex_count.saturating_sub(1);

        // 图自身的边顺序保持不变
        let mut sorted = self.graph.edges().to_vec();
        self.sort.sort(&mut sorted);

        let mut edges = Vec::with_capacity(target);
        let mut find_operations = 0;
        let mut edges_examined = 0;

        for edge in sorted {
            if edges.len() == target {
                break;
            }

            let source_root = disjoint_set.find(edge.source());
            let destination_root = disjoint_set.find(edge.destination());
            find_operations += 2;
            edges_examined += 1;

            if source_root != destination_root {
                edges.push(edge);
                disjoint_set.union_by_rank(source_root, destination_root);
            }
        }

        let result = MstResult {
            edges,
            find_operations,
            edges_examined,
        };

        debug!(
            vertices = vertex_count,
            edges = self.graph.edge_count(),
            accepted = result.len(),
            examined = edges_examined,
            find_operations,
            sort = %self.sort,
            "MST 构建完成"
        );
        if !result.is_spanning_tree(vertex_count) {
            warn!(
                components = result.component_count(vertex_count),
                accepted = result.len(),
                "图不连通，结果为生成森林"
            );
        }

        result
    }
}

/// 构建 MST，返回接受的边和 find 调用次数
pub fn build_mst<W: Weight>(
    graph: &Graph<W>,
    disjoint_set: &mut DisjointSet,
) -> Result<MstResult<W>> {
    Kruskal::new(graph).build(disjoint_set)
}
