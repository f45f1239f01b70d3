use std::io;
use std::io::Write;

use itertools::Itertools;
use tracing::debug;
use varisat::{CnfFormula, Lit};

use crate::error::MalformedQuery;
use crate::graph::{Graph, NodeId, Weight};
use crate::index::VarIndexer;
use crate::logic::{at_most_one, exactly_one, weighted_at_most, VarPool};
use crate::options::{BoundPolicy, NodeExclusion, SearchOptions};

/// One clause set for one path length, ready for an [`Oracle`](crate::oracle::Oracle).
///
/// Encodings are immutable once built and hold no reference to the graph.
#[derive(Debug)]
pub struct Encoding {
    pub(crate) formula: CnfFormula,
    pub(crate) indexer: VarIndexer,
    pub(crate) bound: Option<Weight>,
}

impl Encoding {
    /// The clause set.
    pub fn formula(&self) -> &CnfFormula {
        &self.formula
    }

    /// The position variable layout of this encoding.
    pub fn indexer(&self) -> VarIndexer {
        self.indexer
    }

    /// The path length `L` encoded.
    pub fn path_length(&self) -> usize {
        self.indexer.path_length()
    }

    /// The weight bound this encoding was built for, if weighted.
    pub fn bound(&self) -> Option<Weight> {
        self.bound
    }

    /// Number of clauses.
    pub fn clause_count(&self) -> usize {
        self.formula.len()
    }

    /// Number of variables, position and auxiliary.
    pub fn var_count(&self) -> usize {
        self.formula.var_count()
    }

    /// Every clause as signed DIMACS integers; `i * L + j + 1` states node `i` sits at position `j`.
    pub fn dimacs_clauses(&self) -> Vec<Vec<isize>> {
        self.formula.iter()
            .map(|clause| clause.iter().map(|lit| lit.to_dimacs()).collect_vec())
            .collect_vec()
    }

    /// Write the clause set in DIMACS CNF format.
    pub fn write_dimacs(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "p cnf {} {}", self.var_count(), self.clause_count())?;
        for clause in self.formula.iter() {
            for lit in clause {
                write!(target, "{} ", lit.to_dimacs())?;
            }
            writeln!(target, "0")?;
        }

        Ok(())
    }
}

/// Translates "is there a path of `L` positions from `source` to `target`?" into CNF, once per `L`.
///
/// Variable `x(i, j)` states node `i` occupies position `j`. The encoder asserts:
/// 1. every position holds exactly one node;
/// 2. no node holds two positions (all pairs, or only consecutive ones; see [`NodeExclusion`]);
/// 3. consecutive positions hold adjacent nodes;
/// 4. `source` sits at position 0 and `target` at position `L - 1`;
/// 5. optionally, via nodes are present in, or absent from, the intermediate positions.
///
/// The weighted variant adds, per step and per oriented edge, a literal equivalent to that edge being taken at that step,
/// and bounds the total weight according to the [`BoundPolicy`].
pub struct PathEncoder<'a> {
    graph: &'a Graph,
    source: NodeId,
    target: NodeId,
    options: &'a SearchOptions,
}

impl<'a> PathEncoder<'a> {
    /// Validate the query and prepare to encode it.
    pub fn new(graph: &'a Graph, source: NodeId, target: NodeId, options: &'a SearchOptions) -> Result<Self, MalformedQuery> {
        if !graph.contains(source) {
            return Err(MalformedQuery::SourceOutOfRange { node: source, node_count: graph.node_count() });
        }
        if !graph.contains(target) {
            return Err(MalformedQuery::TargetOutOfRange { node: target, node_count: graph.node_count() });
        }
        options.via.validate(graph, source, target)?;

        Ok(Self { graph, source, target, options })
    }

    /// The graph being encoded.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Shortest length any satisfiable encoding may have: room for the endpoints and every required via node.
    pub fn min_path_length(&self) -> usize {
        if self.source == self.target {
            1
        } else {
            2 + self.options.via.required.len()
        }
    }

    fn structure(&self, indexer: &VarIndexer, node_exclusion: NodeExclusion) -> Vec<Vec<Lit>> {
        let length = indexer.path_length();
        let x = |node: NodeId, position: usize| indexer.position_var(node, position);
        let mut clauses = Vec::new();

        for position in 0..length {
            // exactly one node at this position
            clauses.extend(exactly_one(self.graph.nodes().map(|node| x(node, position).positive()).collect_vec()));
        }

        for node in self.graph.nodes() {
            match node_exclusion {
                NodeExclusion::Pairwise => {
                    clauses.extend(at_most_one(&(0..length).map(|position| x(node, position).positive()).collect_vec()));
                }
                NodeExclusion::Consecutive => {
                    clauses.extend((1..length).map(|position| vec![x(node, position - 1).negative(), x(node, position).negative()]));
                }
            }
        }

        // let the nodes at positions j and j + 1 be I and K; unless I - K is an edge, they cannot both be there
        for position in 1..length {
            for (i, k) in self.graph.nodes().cartesian_product(self.graph.nodes()) {
                if !self.graph.is_edge(i, k) {
                    clauses.push(vec![x(i, position - 1).negative(), x(k, position).negative()]);
                }
            }
        }

        clauses.push(vec![x(self.source, 0).positive()]);
        clauses.push(vec![x(self.target, length - 1).positive()]);

        let intermediate = 1..length.saturating_sub(1);
        for &via in self.options.via.required.iter() {
            if intermediate.is_empty() {
                // no room for it; contradict the source pin
                clauses.push(vec![x(self.source, 0).negative()]);
            } else {
                clauses.push(intermediate.clone().map(|position| x(via, position).positive()).collect_vec());
            }
        }
        for &via in self.options.via.forbidden.iter() {
            clauses.extend(intermediate.clone().map(|position| vec![x(via, position).negative()]));
        }

        clauses
    }

    /// Encode paths of exactly `path_length` positions, ignoring weights.
    pub fn encode(&self, path_length: usize) -> Encoding {
        debug_assert!(path_length >= 1);
        let indexer = VarIndexer::new(path_length, self.graph.node_count());
        let clauses = self.structure(&indexer, self.options.node_exclusion);
        let formula = CnfFormula::from(clauses);

        debug!(path_length, clauses = formula.len(), vars = formula.var_count(), "encoded unweighted probe");
        Encoding { formula, indexer, bound: None }
    }

    /// Encode paths of exactly `path_length` positions whose total weight is at most `bound`.
    ///
    /// Node exclusion is always pairwise here. Whether `bound` constrains the clause set depends on [`BoundPolicy`].
    pub fn encode_weighted(&self, path_length: usize, bound: Weight) -> Encoding {
        debug_assert!(path_length >= 1);
        let indexer = VarIndexer::new(path_length, self.graph.node_count());
        let x = |node: NodeId, position: usize| indexer.position_var(node, position);
        let mut clauses = self.structure(&indexer, NodeExclusion::Pairwise);
        let mut pool = VarPool::starting_at(indexer.position_var_count());

        // one group of (edge taken at this step, its weight) per step
        let mut steps: Vec<Vec<(Lit, Weight)>> = Vec::with_capacity(path_length.saturating_sub(1));
        for position in 1..path_length {
            let mut taken = Vec::with_capacity(2 * self.graph.edge_count());
            for (a, b, weight) in self.graph.edges() {
                for (i, k) in [(a, b), (b, a)] {
                    // E <=> IK = (!E + I)(!E + K)(E + !I + !K)
                    let e = pool.fresh();
                    let (from, to) = (x(i, position - 1), x(k, position));
                    clauses.push(vec![e.negative(), from.positive()]);
                    clauses.push(vec![e.negative(), to.positive()]);
                    clauses.push(vec![e.positive(), from.negative(), to.negative()]);
                    taken.push((e.positive(), weight));
                }
            }
            steps.push(taken);
        }

        match self.options.bound {
            BoundPolicy::Enforced => {
                clauses.extend(weighted_at_most(&steps, bound, &mut pool));
            }
            BoundPolicy::Heuristic => {
                // compares each edge against the weight of the whole graph, so it never excludes one
                let total = self.graph.total_weight();
                clauses.extend(steps.iter()
                    .flatten()
                    .filter(|(_, weight)| *weight > total)
                    .map(|(e, _)| vec![!*e]));
            }
        }

        let formula = CnfFormula::from(clauses);
        debug!(path_length, bound, policy = %self.options.bound, clauses = formula.len(), vars = formula.var_count(), "encoded weighted probe");
        Encoding { formula, indexer, bound: Some(bound) }
    }
}
