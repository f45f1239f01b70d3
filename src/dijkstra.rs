use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::MalformedQuery;
use crate::graph::{Graph, NodeId, Weight};
use crate::route::Route;

/// Tentative distance of a node from the source.
///
/// Every [`Reached`](Distance::Reached) distance orders before [`Unreached`](Distance::Unreached).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Distance {
    /// Reachable at this cost.
    Reached(Weight),
    /// Not reached (yet).
    Unreached,
}

/// Lightest route from `source` to `target` by Dijkstra's algorithm, independent of any SAT machinery.
///
/// Unweighted graphs carry weight 1 on every edge, so there this is the fewest-hop route.
/// Stops as soon as `target` is settled. Returns `Ok(None)` if `target` is unreachable.
pub fn dijkstra(graph: &Graph, source: NodeId, target: NodeId) -> Result<Option<Route>, MalformedQuery> {
    if !graph.contains(source) {
        return Err(MalformedQuery::SourceOutOfRange { node: source, node_count: graph.node_count() });
    }
    if !graph.contains(target) {
        return Err(MalformedQuery::TargetOutOfRange { node: target, node_count: graph.node_count() });
    }

    let mut distances = vec![Distance::Unreached; graph.node_count()];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut frontier = BinaryHeap::new();

    distances[source] = Distance::Reached(0);
    frontier.push(Reverse((0, source)));

    while let Some(Reverse((cost, node))) = frontier.pop() {
        if node == target {
            break;
        }
        // stale entry; a cheaper one was settled already
        if Distance::Reached(cost) > distances[node] {
            continue;
        }

        for neighbor in graph.neighbors(node) {
            let Some(weight) = graph.weight(node, neighbor) else { continue };
            let candidate = cost.saturating_add(weight);
            if Distance::Reached(candidate) < distances[neighbor] {
                distances[neighbor] = Distance::Reached(candidate);
                predecessors[neighbor] = Some(node);
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let mut nodes = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current] {
        nodes.push(previous);
        current = previous;
    }
    // the chain must lead back to the source
    if current != source {
        return Ok(None);
    }
    nodes.reverse();

    Ok(Route::through(graph, nodes))
}
