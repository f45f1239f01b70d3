use itertools::Itertools;
use ndarray::Array2;
use tracing::{debug, info, trace};

use crate::encoder::{Encoding, PathEncoder};
use crate::error::SearchError;
use crate::graph::{Graph, NodeId, Weight};
use crate::options::{BoundPolicy, LengthPolicy, SearchOptions};
use crate::oracle::{Assignment, Oracle, Verdict, VarisatOracle};
use crate::route::Route;

/// Result of a single oracle call at some path length.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Probe {
    /// The encoding was satisfiable; the decoded route.
    Sat(Route),
    /// No path of this many positions (within the bound, if any). The search moves on.
    UnsatisfiableAtLength(usize),
}

/// Final result of a search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchOutcome {
    /// A route was found.
    Found(Route),
    /// Every length up to `longest_tried` was refuted; the target is unreachable under the given constraints.
    NoPath {
        /// The last path length probed, i.e. the node count.
        longest_tried: usize,
    },
}

impl SearchOutcome {
    /// The route, if found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    /// Consume `self`, yielding the route if found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoPath { .. } => None,
        }
    }
}

/// Read the path off a model: for each position, the one node occupying it.
pub(crate) fn decode(graph: &Graph, encoding: &Encoding, assignment: &Assignment) -> Result<Route, SearchError> {
    let indexer = encoding.indexer();
    let occupancy = Array2::from_shape_fn((indexer.node_count(), indexer.path_length()), |(node, position)| {
        assignment.value(indexer.position_var(node, position))
    });

    let mut nodes = Vec::with_capacity(indexer.path_length());
    for (position, column) in occupancy.columns().into_iter().enumerate() {
        match column.iter().positions(|occupied| *occupied).exactly_one() {
            Ok(node) => nodes.push(node),
            Err(_) => return Err(SearchError::InconsistentModel { position }),
        }
    }

    let broken_at = nodes.iter()
        .tuple_windows()
        .position(|(a, b)| !graph.is_edge(*a, *b));
    if let Some(position) = broken_at {
        return Err(SearchError::InconsistentModel { position: position + 1 });
    }

    Route::through(graph, nodes).ok_or(SearchError::InconsistentModel { position: 0 })
}

/// Drives an [`Oracle`] over growing path lengths until a route turns up or the lengths run out.
///
/// Each probe encodes afresh; nothing is shared between probes but the graph.
pub struct PathSearch<'a, O: Oracle> {
    encoder: PathEncoder<'a>,
    options: &'a SearchOptions,
    oracle: O,
    probes: usize,
}

impl<'a, O: Oracle> PathSearch<'a, O> {
    /// Prepare a search from `source` to `target`, rejecting malformed queries up front.
    pub fn new(graph: &'a Graph, source: NodeId, target: NodeId, options: &'a SearchOptions, oracle: O) -> Result<Self, SearchError> {
        Ok(Self {
            encoder: PathEncoder::new(graph, source, target, options)?,
            options,
            oracle,
            probes: 0,
        })
    }

    /// Oracle calls made so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    /// The encoder this search feeds its oracle from.
    pub fn encoder(&self) -> &PathEncoder<'a> {
        &self.encoder
    }

    fn run_probe(&mut self, encoding: Encoding) -> Result<Probe, SearchError> {
        self.probes += 1;
        match self.oracle.solve(encoding.formula())? {
            Verdict::Sat(assignment) => Ok(Probe::Sat(decode(self.encoder.graph(), &encoding, &assignment)?)),
            Verdict::Unsat => Ok(Probe::UnsatisfiableAtLength(encoding.path_length())),
        }
    }

    /// Ask whether a path of exactly `path_length` positions exists, ignoring weights.
    pub fn probe(&mut self, path_length: usize) -> Result<Probe, SearchError> {
        let encoding = self.encoder.encode(path_length);
        let probe = self.run_probe(encoding)?;
        debug!(path_length, sat = matches!(probe, Probe::Sat(_)), "probed");
        Ok(probe)
    }

    /// Ask whether a path of exactly `path_length` positions and weight at most `bound` exists.
    ///
    /// Under [`BoundPolicy::Heuristic`] the bound is not part of the clause set and the route may be heavier.
    pub fn probe_weighted(&mut self, path_length: usize, bound: Weight) -> Result<Probe, SearchError> {
        let encoding = self.encoder.encode_weighted(path_length, bound);
        let probe = self.run_probe(encoding)?;
        debug!(path_length, bound, sat = matches!(probe, Probe::Sat(_)), "probed");
        Ok(probe)
    }

    /// Search for the route with the fewest hops.
    ///
    /// Lengths are tried in ascending order, so the first satisfiable one is minimal and is returned as soon as it is found.
    pub fn shortest(&mut self) -> Result<SearchOutcome, SearchError> {
        let longest = self.encoder.graph().node_count();
        for path_length in self.encoder.min_path_length()..=longest {
            if let Probe::Sat(route) = self.probe(path_length)? {
                info!(hops = route.hops(), probes = self.probes, "shortest route found");
                return Ok(SearchOutcome::Found(route));
            }
        }

        info!(longest, probes = self.probes, "no route");
        Ok(SearchOutcome::NoPath { longest_tried: longest })
    }

    fn upper_bound(&self, path_length: usize) -> Weight {
        let graph = self.encoder.graph();
        let total = graph.total_weight();
        match self.options.bound {
            // no path of L - 1 edges can weigh more
            BoundPolicy::Enforced => total.min((path_length as Weight).saturating_sub(1).saturating_mul(graph.max_weight())),
            BoundPolicy::Heuristic => total,
        }
    }

    /// The encoding the search hands its oracle first: the shortest admissible length for unweighted graphs, and for
    /// weighted ones length 1 at the midpoint of its bound range.
    pub fn first_encoding(&self) -> Encoding {
        if self.encoder.graph().is_weighted() {
            self.encoder.encode_weighted(1, self.upper_bound(1) / 2)
        } else {
            self.encoder.encode(self.encoder.min_path_length())
        }
    }

    /// Binary search the weight bound at one `path_length`, below `ceiling` if given.
    ///
    /// Returns the lightest route any probe produced.
    pub fn lightest_at(&mut self, path_length: usize, ceiling: Option<Weight>) -> Result<Option<Route>, SearchError> {
        let upper = self.upper_bound(path_length);
        let (mut low, mut high) = (0, ceiling.map_or(upper, |ceiling| ceiling.min(upper)));
        let mut best: Option<Route> = None;

        while low <= high {
            let bound = low + (high - low) / 2;
            match self.probe_weighted(path_length, bound)? {
                Probe::Sat(route) => {
                    trace!(path_length, bound, weight = route.weight(), "bound satisfiable");
                    let next_high = match self.options.bound {
                        BoundPolicy::Enforced => route.weight().min(bound),
                        BoundPolicy::Heuristic => bound,
                    };
                    if best.as_ref().map_or(true, |current| route.weight() < current.weight()) {
                        best = Some(route);
                    }
                    match next_high.checked_sub(1) {
                        Some(next_high) => high = next_high,
                        None => break,
                    }
                }
                Probe::UnsatisfiableAtLength(_) => {
                    trace!(path_length, bound, "bound unsatisfiable");
                    match bound.checked_add(1) {
                        Some(next_low) => low = next_low,
                        None => break,
                    }
                }
            }
        }

        Ok(best)
    }

    /// Search for a light route, trying lengths from 1 upward and binary searching the weight bound at each.
    ///
    /// Under [`LengthPolicy::FirstFeasible`] the first length with any route ends the search, so the result has the fewest
    /// hops but is not necessarily the lightest overall. [`LengthPolicy::Exhaustive`] compares every length.
    pub fn lightest(&mut self) -> Result<SearchOutcome, SearchError> {
        let longest = self.encoder.graph().node_count();
        let mut best: Option<Route> = None;

        for path_length in 1..=longest {
            let ceiling = match (self.options.lengths, self.options.bound, &best) {
                // only strictly lighter routes are of interest now
                (LengthPolicy::Exhaustive, BoundPolicy::Enforced, Some(route)) => match route.weight().checked_sub(1) {
                    Some(ceiling) => Some(ceiling),
                    None => break,
                },
                _ => None,
            };

            if let Some(route) = self.lightest_at(path_length, ceiling)? {
                debug!(path_length, weight = route.weight(), "lightest at length");
                if best.as_ref().map_or(true, |current| route.weight() < current.weight()) {
                    best = Some(route);
                }
                if self.options.lengths == LengthPolicy::FirstFeasible {
                    break;
                }
            }
        }

        match best {
            Some(route) => {
                info!(hops = route.hops(), weight = route.weight(), probes = self.probes, "light route found");
                Ok(SearchOutcome::Found(route))
            }
            None => {
                info!(longest, probes = self.probes, "no route");
                Ok(SearchOutcome::NoPath { longest_tried: longest })
            }
        }
    }

    /// [`lightest`](Self::lightest) on weighted graphs, [`shortest`](Self::shortest) otherwise.
    pub fn run(&mut self) -> Result<SearchOutcome, SearchError> {
        if self.encoder.graph().is_weighted() {
            self.lightest()
        } else {
            self.shortest()
        }
    }
}

/// Fewest-hop route from `source` to `target` with default options and a [`VarisatOracle`].
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Result<SearchOutcome, SearchError> {
    let options = SearchOptions::default();
    PathSearch::new(graph, source, target, &options, VarisatOracle)?.shortest()
}

/// Weighted route from `source` to `target` under `options`, with a [`VarisatOracle`].
pub fn lightest_path(graph: &Graph, source: NodeId, target: NodeId, options: &SearchOptions) -> Result<SearchOutcome, SearchError> {
    PathSearch::new(graph, source, target, options, VarisatOracle)?.lightest()
}
