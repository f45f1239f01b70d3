use std::collections::BTreeSet;

use strum::{Display, EnumString, VariantArray};

use crate::error::MalformedQuery;
use crate::graph::{Graph, NodeId};

/// How the encoder keeps a node from occupying more than one position.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum NodeExclusion {
    /// Forbid a node at any two positions. Decoded paths are always simple.
    #[default]
    Pairwise,
    /// Forbid a node only at two consecutive positions.
    ///
    /// Fewer clauses, but a decoded "path" may revisit a node after leaving it. Do not rely on it where a simple path matters.
    Consecutive,
}

/// What a weight bound handed to the encoder does.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum BoundPolicy {
    /// The bound is a hard constraint: a step counter over edge-selection literals refutes heavier paths.
    #[default]
    Enforced,
    /// The bound only schedules the binary search. The clause set carries an edge exclusion against the total graph weight,
    /// which never excludes anything, so each probe returns whatever path the oracle finds and weights are compared after decoding.
    Heuristic,
}

/// Which path lengths the weighted search visits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum LengthPolicy {
    /// Stop at the first length admitting any path. Fewest hops wins; the weight is only minimal among those.
    #[default]
    FirstFeasible,
    /// Try every length up to the node count and keep the lightest route found.
    Exhaustive,
}

/// Nodes that must, or must not, appear strictly between the source and the target.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViaNodes {
    /// Each of these occupies some intermediate position.
    pub required: BTreeSet<NodeId>,
    /// None of these occupies any intermediate position.
    pub forbidden: BTreeSet<NodeId>,
}

impl ViaNodes {
    /// Require every node of `nodes`.
    pub fn requiring(nodes: impl IntoIterator<Item=NodeId>) -> Self {
        Self { required: nodes.into_iter().collect(), forbidden: Default::default() }
    }

    /// Forbid every node of `nodes`.
    pub fn forbidding(nodes: impl IntoIterator<Item=NodeId>) -> Self {
        Self { required: Default::default(), forbidden: nodes.into_iter().collect() }
    }

    /// Whether no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.forbidden.is_empty()
    }

    pub(crate) fn validate(&self, graph: &Graph, source: NodeId, target: NodeId) -> Result<(), MalformedQuery> {
        for &node in self.required.iter().chain(self.forbidden.iter()) {
            if !graph.contains(node) {
                return Err(MalformedQuery::ViaOutOfRange { node, node_count: graph.node_count() });
            }
            if node == source || node == target {
                return Err(MalformedQuery::ViaIsEndpoint { node });
            }
        }

        match self.required.intersection(&self.forbidden).next() {
            Some(&node) => Err(MalformedQuery::ViaBothRequiredAndForbidden { node }),
            None => Ok(()),
        }
    }
}

/// Everything tunable about a shortest path search.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchOptions {
    /// See [`NodeExclusion`].
    pub node_exclusion: NodeExclusion,
    /// Optional via constraints; empty by default.
    pub via: ViaNodes,
    /// See [`BoundPolicy`]. Weighted search only.
    pub bound: BoundPolicy,
    /// See [`LengthPolicy`]. Weighted search only.
    pub lengths: LengthPolicy,
}
