use std::fmt::{Display, Formatter};
use std::ops::Range;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

/// Identifier of a node. Nodes of a [`Graph`] with `N` nodes are exactly `0..N`.
pub type NodeId = usize;
/// Edge weight. Weights are strictly positive; unweighted graphs carry weight 1 on every edge.
pub type Weight = u64;

/// An undirected graph over the contiguous node range `0..node_count`.
///
/// Graphs are built with a [`GraphBuilder`](crate::builder::GraphBuilder) or produced by the
/// [`generate`](crate::generate) module. Everything downstream only reads from a graph.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) inner: UnGraphMap<NodeId, Weight>,
    pub(crate) node_count: usize,
    pub(crate) weighted: bool,
}

impl Graph {
    /// Number of nodes, `N`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// All node identifiers, in ascending order.
    #[inline]
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.node_count
    }

    /// Whether `node` names a node of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count
    }

    /// Whether the edge weights carry meaning, i.e. the graph was built with explicit weights.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Neighbours of `node`, in ascending order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item=NodeId> + '_ {
        self.inner.neighbors(node).sorted()
    }

    /// Whether `a` and `b` are joined by an edge.
    #[inline]
    pub fn is_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.inner.contains_edge(a, b)
    }

    /// Weight of the edge between `a` and `b`, or [`None`] if there is no such edge.
    #[inline]
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        self.inner.edge_weight(a, b).copied()
    }

    /// Every edge as `(lower, higher, weight)`, ordered by endpoints.
    pub fn edges(&self) -> impl Iterator<Item=(NodeId, NodeId, Weight)> + '_ {
        self.inner.all_edges()
            .map(|(a, b, w)| (a.min(b), a.max(b), *w))
            .sorted()
    }

    /// Sum of the weights of all edges. A [`GraphBuilder`](crate::builder::GraphBuilder) refuses graphs where this overflows.
    pub fn total_weight(&self) -> Weight {
        self.inner.all_edges().map(|(_, _, w)| *w).sum()
    }

    /// Heaviest single edge, or 0 for a graph without edges.
    pub fn max_weight(&self) -> Weight {
        self.inner.all_edges().map(|(_, _, w)| *w).max().unwrap_or(0)
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for node in self.nodes() {
            let neighbors = if self.weighted {
                self.neighbors(node)
                    .map(|other| format!("{} (w={})", other, self.inner[(node, other)]))
                    .join(", ")
            } else {
                self.neighbors(node).join(", ")
            };
            writeln!(f, "Node {}: Connected to [{}]", node, neighbors)?;
        }

        Ok(())
    }
}
