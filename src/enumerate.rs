//! Brute-force enumeration of simple paths, as a slow reference for small graphs.

use std::vec::IntoIter;

use itertools::Itertools;

use crate::graph::{Graph, NodeId};
use crate::route::Route;

/// Iterator over every simple path from a source to a target, depth first.
///
/// Keeps an explicit stack of pending neighbours per depth instead of recursing; a node is unmarked as visited when the
/// traversal backs out of it.
pub struct SimplePaths<'a> {
    graph: &'a Graph,
    target: NodeId,
    path: Vec<NodeId>,
    visited: Vec<bool>,
    pending: Vec<IntoIter<NodeId>>,
    trivial: bool,
}

impl<'a> SimplePaths<'a> {
    /// Enumerate simple paths from `source` to `target`. Yields nothing if either is not a node of `graph`.
    pub fn new(graph: &'a Graph, source: NodeId, target: NodeId) -> Self {
        if !graph.contains(source) || !graph.contains(target) {
            return Self { graph, target, path: vec![], visited: vec![], pending: vec![], trivial: false };
        }

        let mut visited = vec![false; graph.node_count()];
        visited[source] = true;

        Self {
            graph,
            target,
            path: vec![source],
            visited,
            pending: if source == target { vec![] } else { vec![graph.neighbors(source).collect_vec().into_iter()] },
            trivial: source == target,
        }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.trivial {
            self.trivial = false;
            return Some(self.path.clone());
        }

        loop {
            let step = self.pending.last_mut()?.next();
            match step {
                Some(next) if self.visited[next] => {}
                Some(next) if next == self.target => {
                    let mut found = self.path.clone();
                    found.push(next);
                    return Some(found);
                }
                Some(next) => {
                    self.visited[next] = true;
                    self.path.push(next);
                    self.pending.push(self.graph.neighbors(next).collect_vec().into_iter());
                }
                None => {
                    // back out of the deepest node
                    self.pending.pop();
                    if let Some(node) = self.path.pop() {
                        self.visited[node] = false;
                    }
                }
            }
        }
    }
}

/// Fewest-hop route by exhaustive enumeration. Returns [`None`] if there is none or an endpoint is not in `graph`.
pub fn fewest_hops(graph: &Graph, source: NodeId, target: NodeId) -> Option<Route> {
    best_by(graph, source, target, |route| (route.hops(), route.weight()))
}

/// Lightest route by exhaustive enumeration, ties broken by fewer hops.
pub fn lightest(graph: &Graph, source: NodeId, target: NodeId) -> Option<Route> {
    best_by(graph, source, target, |route| (route.weight(), route.hops()))
}

fn best_by<K: Ord>(graph: &Graph, source: NodeId, target: NodeId, key: impl Fn(&Route) -> K) -> Option<Route> {
    SimplePaths::new(graph, source, target)
        .filter_map(|nodes| Route::through(graph, nodes))
        .min_by_key(key)
}
