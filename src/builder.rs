use std::collections::HashMap;

use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::graph::{Graph, NodeId, Weight};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// An edge named a node outside `0..node_count`.
    NodeOutOfBounds,
    /// An edge joined a node to itself.
    SelfLoop,
    /// An edge was given weight 0; weights must be positive.
    ZeroWeight,
    /// The weights of all edges together no longer fit in a [`Weight`].
    WeightOverflow,
}

/// A builder for [`Graph`]s over a fixed number of nodes.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once any call invalidates the builder, further edits do nothing and [`build`](Self::build) reports why.
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    node_count: usize,
    edges: HashMap<UnorderedPair<NodeId>, Weight>,
    total_weight: Weight,
    weighted: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GraphBuilder {
    /// Start a graph with nodes `0..node_count` and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Default::default(),
            total_weight: 0,
            weighted: false,
            invalid_reasons: Default::default(),
        }
    }

    fn check(&mut self, endpoints: UnorderedPair<NodeId>) -> bool {
        let UnorderedPair(a, b) = endpoints;
        if a >= self.node_count || b >= self.node_count {
            self.invalid_reasons.push(BuilderInvalidReason::NodeOutOfBounds);
            return false;
        }
        if a == b {
            self.invalid_reasons.push(BuilderInvalidReason::SelfLoop);
            return false;
        }

        true
    }

    fn insert(&mut self, endpoints: UnorderedPair<NodeId>, weight: Weight) {
        let replaced = self.edges.get(&endpoints).copied().unwrap_or(0);
        match (self.total_weight - replaced).checked_add(weight) {
            Some(total_weight) => {
                self.total_weight = total_weight;
                self.edges.insert(endpoints, weight);
            }
            None => self.invalid_reasons.push(BuilderInvalidReason::WeightOverflow),
        }
    }

    /// Connect the two `endpoints` with an edge of weight 1. Connecting them again overwrites the weight.
    ///
    /// May cause the builder to enter a [`NodeOutOfBounds`](BuilderInvalidReason::NodeOutOfBounds) or
    /// [`SelfLoop`](BuilderInvalidReason::SelfLoop) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn connect(&mut self, endpoints: UnorderedPair<NodeId>) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.check(endpoints) {
            return self;
        }

        self.insert(endpoints, 1);
        self
    }

    /// Like [`connect`](Self::connect), but with an explicit `weight`. Marks the resulting graph as weighted.
    ///
    /// Additionally may cause a [`ZeroWeight`](BuilderInvalidReason::ZeroWeight) invalid state, or a
    /// [`WeightOverflow`](BuilderInvalidReason::WeightOverflow) one if the total weight of the graph would overflow.
    pub fn connect_weighted(&mut self, endpoints: UnorderedPair<NodeId>, weight: Weight) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.check(endpoints) {
            return self;
        }
        if weight == 0 {
            self.invalid_reasons.push(BuilderInvalidReason::ZeroWeight);
            return self;
        }

        self.weighted = true;
        self.insert(endpoints, weight);
        self
    }

    /// Shorthand for [`connect`](Self::connect) along consecutive nodes of `nodes`.
    pub fn connect_chain(&mut self, nodes: &[NodeId]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.connect(UnorderedPair::from((pair[0], pair[1])));
        }

        self
    }

    /// Remove the edge between `endpoints`, if present. Never invalidates the builder.
    pub fn disconnect(&mut self, endpoints: UnorderedPair<NodeId>) -> &mut Self {
        if let Some(weight) = self.edges.remove(&endpoints) {
            self.total_weight -= weight;
        }
        self
    }

    /// Whether `endpoints` are currently connected.
    pub fn is_connected(&self, endpoints: UnorderedPair<NodeId>) -> bool {
        self.edges.contains_key(&endpoints)
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Graph`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Graph, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut inner = UnGraphMap::with_capacity(self.node_count, self.edges.len());
        // isolated nodes still belong to the graph
        for node in 0..self.node_count {
            inner.add_node(node);
        }
        for (UnorderedPair(a, b), weight) in self.edges.iter() {
            inner.add_edge(*a, *b, *weight);
        }

        Ok(Graph {
            inner,
            node_count: self.node_count,
            weighted: self.weighted,
        })
    }
}
