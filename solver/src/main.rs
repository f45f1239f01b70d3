//! Command line driver: generate a graph, search it by SAT, compare with Dijkstra.

mod config;

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use anyhow::{ensure, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use satpath::compare::compare;
use satpath::{enumerate, generate, NodeId, PathSearch, Route, VarisatOracle};
use tracing_subscriber::EnvFilter;

use crate::config::RunConfig;

fn describe(route: Option<&Route>, elapsed: Duration) -> String {
    match route {
        Some(route) => format!("{} ({} hops, weight {}) in {:.3}s", route, route.hops(), route.weight(), elapsed.as_secs_f64()),
        None => format!("no path, in {:.3}s", elapsed.as_secs_f64()),
    }
}

fn pick_endpoints(config: &RunConfig, node_count: usize, rng: &mut StdRng) -> anyhow::Result<(NodeId, NodeId)> {
    if let (Some(source), Some(target)) = (config.source, config.target) {
        return Ok((source, target));
    }
    ensure!(node_count >= 2, "need at least two nodes to choose random endpoints");

    Ok(match (config.source, config.target) {
        (Some(source), None) => (source, (source + rng.gen_range(1..node_count)) % node_count),
        (None, Some(target)) => ((target + rng.gen_range(1..node_count)) % node_count, target),
        _ => {
            let picked = sample(rng, node_count, 2);
            (picked.index(0), picked.index(1))
        }
    })
}

fn main() -> anyhow::Result<()> {
    let config = RunConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .init();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let node_count = config.node_count();
    ensure!(node_count >= 1, "the graph needs at least one node");
    let graph = if config.weighted {
        generate::connected_weighted(node_count, config.max_weight, &mut rng)
    } else {
        generate::connected(node_count, &mut rng)
    };
    tracing::info!(nodes = graph.node_count(), edges = graph.edge_count(), weighted = graph.is_weighted(), "generated graph");
    if config.print_graph {
        print!("\nGraph:\n{}", graph);
    }

    let (source, target) = pick_endpoints(&config, node_count, &mut rng)?;
    let mut via = config.via.clone();
    if config.random_via > 0 {
        let candidates = graph.nodes()
            .filter(|node| *node != source && *node != target && !via.contains(node) && !config.avoid.contains(node))
            .collect::<Vec<_>>();
        via.extend(candidates.choose_multiple(&mut rng, config.random_via).copied());
    }
    let options = config.search_options(via);

    println!("\nSource: {}, Target: {}", source, target);
    if !options.via.required.is_empty() {
        println!("Via: {:?}", options.via.required);
    }
    if !options.via.forbidden.is_empty() {
        println!("Avoiding: {:?}", options.via.forbidden);
    }

    if let Some(path) = &config.dump_cnf {
        let encoding = PathSearch::new(&graph, source, target, &options, VarisatOracle)?.first_encoding();
        let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
        encoding.write_dimacs(&mut out)?;
        println!("Wrote {} clauses over {} variables to {}", encoding.clause_count(), encoding.var_count(), path.display());
    }

    let comparison = compare(&graph, source, target, &options, VarisatOracle)?;

    println!("\nSAT search:  {} over {} probes", describe(comparison.sat.route(), comparison.sat_elapsed), comparison.probes);
    println!("Dijkstra:    {}", describe(comparison.baseline.as_ref(), comparison.baseline_elapsed));
    println!("Agreement:   {}", comparison.agreement());

    if config.brute_force {
        let brute = if graph.is_weighted() {
            enumerate::lightest(&graph, source, target)
        } else {
            enumerate::fewest_hops(&graph, source, target)
        };
        match brute {
            Some(route) => println!("Brute force: {} ({} hops, weight {})", route, route.hops(), route.weight()),
            None => println!("Brute force: no path"),
        }
    }

    Ok(())
}
