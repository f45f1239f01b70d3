//! Random connected graphs, for experiments and test fixtures.
//!
//! Randomness always comes from a caller-supplied [`Rng`], so a seeded generator reproduces the same graph.

use rand::seq::index::sample;
use rand::seq::SliceRandom;
use rand::Rng;
use unordered_pair::UnorderedPair;

use crate::builder::GraphBuilder;
use crate::graph::{Graph, NodeId, Weight};

/// Generate a connected, unweighted graph on `node_count` nodes.
///
/// A spanning path over a shuffled node order guarantees connectivity; `node_count` further random node pairs
/// are then joined where not already adjacent.
pub fn connected<R: Rng>(node_count: usize, rng: &mut R) -> Graph {
    generate(node_count, None, rng)
}

/// Generate a connected graph as in [`connected`], with every edge weighted uniformly in `1..=max_weight`.
///
/// A `max_weight` of 0 is treated as 1.
pub fn connected_weighted<R: Rng>(node_count: usize, max_weight: Weight, rng: &mut R) -> Graph {
    generate(node_count, Some(max_weight.max(1)), rng)
}

fn generate<R: Rng>(node_count: usize, max_weight: Option<Weight>, rng: &mut R) -> Graph {
    let mut builder = GraphBuilder::with_nodes(node_count);
    let join = |builder: &mut GraphBuilder, a: NodeId, b: NodeId, rng: &mut R| {
        let endpoints = UnorderedPair::from((a, b));
        match max_weight {
            None => builder.connect(endpoints),
            Some(max) => builder.connect_weighted(endpoints, rng.gen_range(1..=max)),
        };
    };

    let mut order: Vec<NodeId> = (0..node_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        join(&mut builder, pair[0], pair[1], rng);
    }

    if node_count >= 2 {
        for _ in 0..node_count {
            let picked = sample(rng, node_count, 2);
            let (a, b) = (picked.index(0), picked.index(1));
            if !builder.is_connected(UnorderedPair::from((a, b))) {
                join(&mut builder, a, b, rng);
            }
        }
    }

    match builder.build() {
        Ok(graph) => graph,
        Err(reasons) => unreachable!("generated edges are always in bounds, got {:?}", reasons),
    }
}
