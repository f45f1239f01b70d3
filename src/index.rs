use varisat::Var;

use crate::graph::NodeId;

/// Bijection between "node `i` occupies position `j`" propositions and solver variables, for one path length `L`.
///
/// Variable index `i * L + j` (DIMACS `i * L + j + 1`). Indices at or above [`position_var_count`](Self::position_var_count)
/// are free for auxiliary variables. A different `L` gives a different layout, so variables never outlive their encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VarIndexer {
    path_length: usize,
    node_count: usize,
}

impl VarIndexer {
    /// Layout for paths of `path_length` positions over `node_count` nodes.
    pub fn new(path_length: usize, node_count: usize) -> Self {
        Self { path_length, node_count }
    }

    /// The path length `L` this layout was built for.
    #[inline]
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// The node count `N` this layout was built for.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of variables reserved for positions, `N * L`.
    #[inline]
    pub fn position_var_count(&self) -> usize {
        self.node_count * self.path_length
    }

    /// The variable stating that `node` occupies `position`.
    #[inline]
    pub fn position_var(&self, node: NodeId, position: usize) -> Var {
        debug_assert!(node < self.node_count && position < self.path_length);
        Var::from_index(node * self.path_length + position)
    }

    /// Invert [`position_var`](Self::position_var). Returns [`None`] for auxiliary variables.
    pub fn locate(&self, var: Var) -> Option<(NodeId, usize)> {
        if self.path_length == 0 || var.index() >= self.position_var_count() {
            return None;
        }

        Some((var.index() / self.path_length, var.index() % self.path_length))
    }
}
