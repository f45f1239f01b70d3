use thiserror::Error;

use crate::graph::NodeId;

/// A query that cannot be posed against the graph it names.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MalformedQuery {
    /// The source is not a node of the graph.
    #[error("source {node} is outside the node range 0..{node_count}")]
    SourceOutOfRange {
        /// Offending source.
        node: NodeId,
        /// Node count of the graph.
        node_count: usize,
    },
    /// The target is not a node of the graph.
    #[error("target {node} is outside the node range 0..{node_count}")]
    TargetOutOfRange {
        /// Offending target.
        node: NodeId,
        /// Node count of the graph.
        node_count: usize,
    },
    /// A via node is not a node of the graph.
    #[error("via node {node} is outside the node range 0..{node_count}")]
    ViaOutOfRange {
        /// Offending via node.
        node: NodeId,
        /// Node count of the graph.
        node_count: usize,
    },
    /// A via node coincides with the source or the target.
    #[error("via node {node} coincides with an endpoint")]
    ViaIsEndpoint {
        /// Offending via node.
        node: NodeId,
    },
    /// A node is both required and forbidden.
    #[error("node {node} is both required and forbidden")]
    ViaBothRequiredAndForbidden {
        /// Offending via node.
        node: NodeId,
    },
}

/// The satisfiability oracle itself failed. Never to be read as UNSAT.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("satisfiability oracle failed: {reason}")]
pub struct OracleFailure {
    /// Description reported by the oracle.
    pub reason: String,
}

/// Errors ending a shortest path search. Not finding a path is not an error;
/// see [`SearchOutcome::NoPath`](crate::search::SearchOutcome::NoPath).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SearchError {
    /// The query was rejected before any encoding took place.
    #[error(transparent)]
    Malformed(#[from] MalformedQuery),
    /// The oracle failed on some probe.
    #[error(transparent)]
    Oracle(#[from] OracleFailure),
    /// A model claimed to satisfy the encoding does not place exactly one node at `position`,
    /// or places two non-adjacent nodes next to each other.
    #[error("model is inconsistent with the encoding at position {position}")]
    InconsistentModel {
        /// First offending position.
        position: usize,
    },
}
