use std::time::{Duration, Instant};

use strum::Display;
use tracing::{info, warn};

use crate::dijkstra::dijkstra;
use crate::error::SearchError;
use crate::graph::{Graph, NodeId};
use crate::options::{BoundPolicy, LengthPolicy, SearchOptions};
use crate::oracle::Oracle;
use crate::route::Route;
use crate::search::{PathSearch, SearchOutcome};

/// Whether the SAT route and the baseline route tell the same story.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Agreement {
    /// Same reachability, and the same optimum where both optimise the same quantity.
    Agree,
    /// They contradict each other.
    Disagree,
    /// Via constraints change the question, so the baseline does not answer it.
    NotComparable,
}

/// One query answered by both the SAT search and Dijkstra, with timings.
#[derive(Clone, Debug)]
pub struct Comparison {
    /// Outcome of the SAT search.
    pub sat: SearchOutcome,
    /// Wall time of the SAT search, encoding included.
    pub sat_elapsed: Duration,
    /// Oracle calls made by the SAT search.
    pub probes: usize,
    /// Dijkstra's route, if any.
    pub baseline: Option<Route>,
    /// Wall time of Dijkstra.
    pub baseline_elapsed: Duration,
    agreement: Agreement,
}

impl Comparison {
    /// See [`Agreement`].
    pub fn agreement(&self) -> Agreement {
        self.agreement
    }
}

fn judge(graph: &Graph, options: &SearchOptions, sat: Option<&Route>, baseline: Option<&Route>) -> Agreement {
    if !options.via.is_empty() {
        return Agreement::NotComparable;
    }

    let (sat, baseline) = match (sat, baseline) {
        (None, None) => return Agreement::Agree,
        (Some(sat), Some(baseline)) => (sat, baseline),
        _ => return Agreement::Disagree,
    };

    let consistent = if !graph.is_weighted() {
        sat.hops() == baseline.hops()
    } else if options.lengths == LengthPolicy::Exhaustive && options.bound == BoundPolicy::Enforced {
        sat.weight() == baseline.weight()
    } else {
        // fewest hops first: never more hops, never lighter
        sat.hops() <= baseline.hops() && sat.weight() >= baseline.weight()
    };

    if consistent { Agreement::Agree } else { Agreement::Disagree }
}

/// Answer one query with a [`PathSearch`] driving `oracle` and with [`dijkstra`], timing each.
pub fn compare<O: Oracle>(graph: &Graph, source: NodeId, target: NodeId, options: &SearchOptions, oracle: O) -> Result<Comparison, SearchError> {
    let start = Instant::now();
    let mut search = PathSearch::new(graph, source, target, options, oracle)?;
    let sat = search.run()?;
    let sat_elapsed = start.elapsed();

    let start = Instant::now();
    let baseline = dijkstra(graph, source, target)?;
    let baseline_elapsed = start.elapsed();

    let agreement = judge(graph, options, sat.route(), baseline.as_ref());
    match agreement {
        Agreement::Disagree => warn!(sat = ?sat.route().map(Route::to_string), baseline = ?baseline.as_ref().map(Route::to_string), "SAT search and Dijkstra disagree"),
        _ => info!(%agreement, ?sat_elapsed, ?baseline_elapsed, "compared"),
    }

    Ok(Comparison {
        sat,
        sat_elapsed,
        probes: search.probes(),
        baseline,
        baseline_elapsed,
        agreement,
    })
}
