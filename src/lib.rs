#![warn(missing_docs)]

//! # `satpath`
//!
//! Shortest paths on graphs, found by asking a Boolean satisfiability solver, and checked against Dijkstra's algorithm.
//! Begin by building a [`Graph`] with a [`GraphBuilder`] (or draw a random one from [`generate`]),
//! then run a [`PathSearch`] over it, or call [`shortest_path`] for the common case.
//! [`compare`](compare::compare) answers the same query both ways and times each.
//!
//! # Internals
//! The question "is there a path of `L` positions from `s` to `t`?" is expressed in conjunctive normal form over variables
//! `x(i, j)`, "node `i` occupies position `j`" (see [`VarIndexer`]). We assert, in SAT form:
//! 1. Every position is held by exactly one node: one at-least-one clause and pairwise at-most-one clauses.
//! 2. No node holds two positions.
//! 3. For every step `j -> j + 1` and every ordered pair `(i, k)` which is not an edge, `!x(i, j) + !x(k, j + 1)`.
//! This term dominates the clause count, `O(L * N^2)`.
//! 4. `x(s, 0)` and `x(t, L - 1)` as unit clauses.
//!
//! A [`PathSearch`] tries `L = 2, 3, ...` up to the node count and decodes the first model it gets back; since lengths only grow,
//! that route has the fewest hops. For weighted graphs each length is additionally binary searched over a weight bound,
//! which is either enforced in the clause set by a step counter or, as in earlier experiments, used only to schedule probes
//! (see [`BoundPolicy`]).

pub use builder::{BuilderInvalidReason, GraphBuilder};
pub use dijkstra::{dijkstra, Distance};
pub use encoder::{Encoding, PathEncoder};
pub use error::{MalformedQuery, OracleFailure, SearchError};
pub use graph::{Graph, NodeId, Weight};
pub use index::VarIndexer;
pub use options::{BoundPolicy, LengthPolicy, NodeExclusion, SearchOptions, ViaNodes};
pub use oracle::{Assignment, Oracle, VarisatOracle, Verdict};
pub use route::Route;
pub use search::{lightest_path, shortest_path, PathSearch, Probe, SearchOutcome};

pub mod builder;
pub mod compare;
pub(crate) mod dijkstra;
pub(crate) mod encoder;
pub mod enumerate;
pub(crate) mod error;
pub mod generate;
pub(crate) mod graph;
pub(crate) mod index;
pub(crate) mod logic;
pub(crate) mod options;
pub(crate) mod oracle;
pub(crate) mod route;
pub(crate) mod search;
mod tests;
