//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use satpath::{BoundPolicy, LengthPolicy, NodeExclusion, NodeId, SearchOptions, ViaNodes, Weight};

/// Find a shortest path in a random connected graph by SAT, and check it against Dijkstra.
#[derive(Parser, Debug)]
#[command(name = "satpath")]
#[command(author, version, about, long_about = None)]
pub struct RunConfig {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of nodes [default: 500, or 100 with --weighted]
    #[arg(short, long)]
    pub nodes: Option<usize>,

    /// Give edges random positive weights and minimise total weight
    #[arg(short, long)]
    pub weighted: bool,

    /// Heaviest edge weight drawn with --weighted
    #[arg(long, default_value_t = 10)]
    pub max_weight: Weight,

    /// Source node (random if omitted)
    #[arg(short, long)]
    pub source: Option<NodeId>,

    /// Target node (random if omitted)
    #[arg(short, long)]
    pub target: Option<NodeId>,

    /// Nodes the path must pass through
    #[arg(long, value_delimiter = ',')]
    pub via: Vec<NodeId>,

    /// Nodes the path must not pass through
    #[arg(long, value_delimiter = ',')]
    pub avoid: Vec<NodeId>,

    /// Additionally require this many randomly chosen via nodes
    #[arg(long, default_value_t = 0)]
    pub random_via: usize,

    /// Seed for graph generation and random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the encoder keeps nodes from repeating
    #[arg(long, default_value_t = NodeExclusion::Pairwise)]
    pub node_exclusion: NodeExclusion,

    /// Whether the weight bound is a hard constraint or only schedules probes
    #[arg(long, default_value_t = BoundPolicy::Enforced)]
    pub bound: BoundPolicy,

    /// Stop at the first feasible path length, or compare all of them
    #[arg(long, default_value_t = LengthPolicy::FirstFeasible)]
    pub lengths: LengthPolicy,

    /// Print the generated graph
    #[arg(long)]
    pub print_graph: bool,

    /// Also enumerate every simple path (small graphs only)
    #[arg(long)]
    pub brute_force: bool,

    /// Write the CNF of the first probe to this file in DIMACS format
    #[arg(long)]
    pub dump_cnf: Option<PathBuf>,
}

impl RunConfig {
    pub fn node_count(&self) -> usize {
        self.nodes.unwrap_or(if self.weighted { 100 } else { 500 })
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn search_options(&self, required: impl IntoIterator<Item=NodeId>) -> SearchOptions {
        SearchOptions {
            node_exclusion: self.node_exclusion,
            via: ViaNodes {
                required: required.into_iter().collect(),
                forbidden: self.avoid.iter().copied().collect(),
            },
            bound: self.bound,
            lengths: self.lengths,
        }
    }
}
