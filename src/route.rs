use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::graph::{Graph, NodeId, Weight};

/// A path through a graph: its nodes in order, and the sum of the weights of the edges taken.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Route {
    nodes: Vec<NodeId>,
    weight: Weight,
}

impl Route {
    /// Follow `nodes` through `graph`, summing edge weights.
    ///
    /// Returns [`None`] if `nodes` is empty, two consecutive nodes are not adjacent, or the total weight overflows.
    pub fn through(graph: &Graph, nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() || nodes.iter().any(|node| !graph.contains(*node)) {
            return None;
        }

        let weight = nodes.iter()
            .tuple_windows()
            .try_fold(0 as Weight, |total, (a, b)| total.checked_add(graph.weight(*a, *b)?))?;

        Some(Self { nodes, weight })
    }

    /// Nodes visited, source first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// First node.
    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    /// Last node.
    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges taken.
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Total weight; equal to [`hops`](Self::hops) on an unweighted graph.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Whether no node is visited twice.
    pub fn is_simple(&self) -> bool {
        self.nodes.iter().all_unique()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" -> "))
    }
}
