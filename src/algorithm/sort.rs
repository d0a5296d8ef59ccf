//! 边排序策略

use crate::graph::Edge;
use crate::types::Weight;
use std::fmt;
use std::str::FromStr;

/// 按权重升序排序边的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeSort {
    /// 基于比较的不稳定排序，O(E log E)
    #[default]
    Unstable,
    /// 冒泡排序，O(E²)，只作为正确性基准
    Bubble,
}

impl EdgeSort {
    /// 就地排序
    pub fn sort<W: Weight>(self, edges: &mut [Edge<W>]) {
        match self {
            EdgeSort::Unstable => edges.sort_unstable_by(Edge::cmp_weight),
            EdgeSort::Bubble => bubble_sort(edges),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeSort::Unstable => "unstable",
            EdgeSort::Bubble => "bubble",
        }
    }
}

impl fmt::Display for EdgeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unstable" => Ok(EdgeSort::Unstable),
            "bubble" => Ok(EdgeSort::Bubble),
            other => Err(format!("未知的排序方式: {}", other)),
        }
    }
}

fn bubble_sort<W: Weight>(edges: &mut [Edge<W>]) {
    let n = edges.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if edges[j].cmp_weight(&edges[j + 1]).is_gt() {
                edges.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
