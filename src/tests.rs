#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use unordered_pair::UnorderedPair;
    use varisat::{CnfFormula, Var};

    use crate::builder::{BuilderInvalidReason, GraphBuilder};
    use crate::compare::{compare, Agreement};
    use crate::dijkstra::{dijkstra, Distance};
    use crate::enumerate::{self, SimplePaths};
    use crate::error::{MalformedQuery, OracleFailure, SearchError};
    use crate::generate;
    use crate::graph::{Graph, Weight};
    use crate::index::VarIndexer;
    use crate::logic::{exactly_one, weighted_at_most, VarPool};
    use crate::options::{BoundPolicy, LengthPolicy, NodeExclusion, SearchOptions, ViaNodes};
    use crate::oracle::{Assignment, Oracle, VarisatOracle, Verdict};
    use crate::route::Route;
    use crate::search::{lightest_path, shortest_path, PathSearch, Probe, SearchOutcome};
    use crate::PathEncoder;

    fn four_cycle() -> Graph {
        GraphBuilder::with_nodes(4)
            .connect_chain(&[0, 1, 2, 3, 0])
            .build()
            .unwrap()
    }

    fn weighted(node_count: usize, edges: &[(usize, usize, Weight)]) -> Graph {
        let mut builder = GraphBuilder::with_nodes(node_count);
        for &(a, b, w) in edges {
            builder.connect_weighted(UnorderedPair::from((a, b)), w);
        }
        builder.build().unwrap()
    }

    fn options(bound: BoundPolicy, lengths: LengthPolicy) -> SearchOptions {
        SearchOptions { bound, lengths, ..Default::default() }
    }

    fn assert_valid_walk(graph: &Graph, route: &Route) {
        for pair in route.nodes().windows(2) {
            assert!(graph.is_edge(pair[0], pair[1]), "{} - {} is not an edge", pair[0], pair[1]);
        }
    }

    fn assert_valid_route(graph: &Graph, route: &Route, source: usize, target: usize) {
        assert_eq!(route.source(), source);
        assert_eq!(route.target(), target);
        assert!(route.is_simple(), "{} revisits a node", route);
        assert_valid_walk(graph, route);
    }

    struct Failing;

    impl Oracle for Failing {
        fn solve(&mut self, _formula: &CnfFormula) -> Result<Verdict, OracleFailure> {
            Err(OracleFailure { reason: "resources exhausted".to_string() })
        }
    }

    // claims satisfiable but assigns nothing
    struct Liar;

    impl Oracle for Liar {
        fn solve(&mut self, _formula: &CnfFormula) -> Result<Verdict, OracleFailure> {
            Ok(Verdict::Sat(Assignment::default()))
        }
    }

    #[test]
    fn builder_rejects_bad_edges() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.connect(UnorderedPair::from((1, 1)));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::SelfLoop]));
        // already invalid; ignored
        builder.connect(UnorderedPair::from((0, 7)));
        assert_eq!(builder.build().unwrap_err(), &vec![BuilderInvalidReason::SelfLoop]);

        let mut builder = GraphBuilder::with_nodes(3);
        builder.connect(UnorderedPair::from((0, 3)));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::NodeOutOfBounds]));

        let mut builder = GraphBuilder::with_nodes(3);
        builder.connect_weighted(UnorderedPair::from((0, 1)), 0);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::ZeroWeight]));

        let mut builder = GraphBuilder::with_nodes(3);
        builder.connect_weighted(UnorderedPair::from((0, 1)), Weight::MAX / 2 + 1);
        // overwriting an edge replaces its weight in the total
        builder.connect_weighted(UnorderedPair::from((0, 1)), Weight::MAX / 2 + 1);
        assert_eq!(builder.is_valid(), None);
        builder.connect_weighted(UnorderedPair::from((1, 2)), Weight::MAX / 2 + 1);
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::WeightOverflow]));
    }

    #[test]
    fn builder_keeps_isolated_nodes() {
        let graph = GraphBuilder::with_nodes(5)
            .connect(UnorderedPair::from((0, 1)))
            .connect(UnorderedPair::from((1, 0)))
            .build()
            .unwrap();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_weighted());
        assert_eq!(graph.neighbors(4).count(), 0);
    }

    #[test]
    fn print_graph() {
        assert_eq!(format!("{}", four_cycle()), "Node 0: Connected to [1, 3]
Node 1: Connected to [0, 2]
Node 2: Connected to [1, 3]
Node 3: Connected to [0, 2]
");

        let graph = weighted(3, &[(0, 1, 4), (1, 2, 7)]);
        assert_eq!(format!("{}", graph), "Node 0: Connected to [1 (w=4)]
Node 1: Connected to [0 (w=4), 2 (w=7)]
Node 2: Connected to [1 (w=7)]
");
        assert_eq!(graph.total_weight(), 11);
        assert_eq!(graph.max_weight(), 7);
    }

    #[test]
    fn indexer_layout() {
        let indexer = VarIndexer::new(3, 4);
        assert_eq!(indexer.position_var(0, 0).to_dimacs(), 1);
        assert_eq!(indexer.position_var(2, 1).to_dimacs(), 2 * 3 + 1 + 1);
        assert_eq!(indexer.position_var_count(), 12);

        for node in 0..4 {
            for position in 0..3 {
                assert_eq!(indexer.locate(indexer.position_var(node, position)), Some((node, position)));
            }
        }
        assert_eq!(indexer.locate(Var::from_index(12)), None);
    }

    #[test]
    fn exactly_one_clauses() {
        let lits = (0..3).map(|index| Var::from_index(index).positive()).collect::<Vec<_>>();
        let dimacs = exactly_one(lits).into_iter()
            .map(|clause| clause.into_iter().map(|lit| lit.to_dimacs()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(dimacs, vec![vec![-1, -2], vec![-1, -3], vec![-2, -3], vec![1, 2, 3]]);
    }

    #[test]
    fn step_counter_bounds_total() {
        let cases: [(&[Weight], Weight, bool); 4] = [
            (&[2, 3], 4, false),
            (&[2, 3], 5, true),
            (&[3, 3, 3], 8, false),
            (&[3, 3, 3], 9, true),
        ];
        for (weights, bound, satisfiable) in cases {
            let lits = (0..weights.len()).map(|index| Var::from_index(index).positive()).collect::<Vec<_>>();
            let steps = lits.iter().zip(weights).map(|(lit, weight)| vec![(*lit, *weight)]).collect::<Vec<_>>();
            let mut pool = VarPool::starting_at(weights.len());
            let mut clauses = weighted_at_most(&steps, bound, &mut pool);
            clauses.extend(lits.iter().map(|lit| vec![*lit]));

            let verdict = VarisatOracle.solve(&CnfFormula::from(clauses)).unwrap();
            assert_eq!(matches!(verdict, Verdict::Sat(_)), satisfiable, "{:?} within {}", weights, bound);
        }
    }

    #[test]
    fn large_weights_stay_cheap() {
        let graph = weighted(6, &[(0, 1, 200_000), (1, 2, 200_000), (2, 3, 200_000), (3, 4, 200_000), (4, 5, 200_000), (5, 0, 200_000)]);
        let options = SearchOptions::default();
        let encoding = PathEncoder::new(&graph, 0, 3, &options).unwrap().encode_weighted(4, 300_000);

        // the counter only tracks sums a path can actually reach
        assert!(encoding.clause_count() < 1_000, "{} clauses", encoding.clause_count());
        assert!(encoding.var_count() < 100, "{} variables", encoding.var_count());

        let route = lightest_path(&graph, 0, 3, &options).unwrap().into_route().unwrap();
        assert_eq!(route.hops(), 3);
        assert_eq!(route.weight(), 600_000);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let graph = weighted(3, &[(0, 1, Weight::MAX / 2), (1, 2, Weight::MAX / 2)]);
        assert_eq!(graph.total_weight(), Weight::MAX - 1);

        assert_eq!(dijkstra(&graph, 0, 2).unwrap().unwrap().weight(), Weight::MAX - 1);
        let route = lightest_path(&graph, 0, 2, &SearchOptions::default()).unwrap().into_route().unwrap();
        assert_eq!(route.nodes(), &[0, 1, 2]);
        assert_eq!(route.weight(), Weight::MAX - 1);
    }

    #[test]
    fn first_encoding_starts_the_search() {
        let graph = four_cycle();
        let defaults = SearchOptions::default();
        let encoding = PathSearch::new(&graph, 0, 2, &defaults, VarisatOracle).unwrap().first_encoding();
        assert_eq!(encoding.path_length(), 2);
        assert_eq!(encoding.bound(), None);

        let graph = weighted(3, &[(0, 1, 4), (1, 2, 7)]);
        let enforced = options(BoundPolicy::Enforced, LengthPolicy::FirstFeasible);
        let encoding = PathSearch::new(&graph, 0, 2, &enforced, VarisatOracle).unwrap().first_encoding();
        assert_eq!(encoding.path_length(), 1);
        assert_eq!(encoding.bound(), Some(0));

        let heuristic = options(BoundPolicy::Heuristic, LengthPolicy::FirstFeasible);
        let encoding = PathSearch::new(&graph, 0, 2, &heuristic, VarisatOracle).unwrap().first_encoding();
        assert_eq!(encoding.path_length(), 1);
        assert_eq!(encoding.bound(), Some(11 / 2));
    }

    #[test]
    fn four_cycle_shortest() {
        let graph = four_cycle();
        let route = shortest_path(&graph, 0, 2).unwrap().into_route().unwrap();

        assert_eq!(route.hops(), 2);
        assert!(route.nodes() == [0, 1, 2] || route.nodes() == [0, 3, 2], "unexpected {}", route);
        assert_valid_route(&graph, &route, 0, 2);

        let baseline = dijkstra(&graph, 0, 2).unwrap().unwrap();
        assert_eq!(baseline.hops(), 2);
    }

    #[test]
    fn adjacent_and_trivial() {
        let graph = four_cycle();
        assert_eq!(shortest_path(&graph, 3, 0).unwrap().into_route().unwrap().nodes(), &[3, 0]);
        assert_eq!(shortest_path(&graph, 1, 1).unwrap().into_route().unwrap().nodes(), &[1]);
        assert_eq!(dijkstra(&graph, 1, 1).unwrap().unwrap().nodes(), &[1]);
    }

    #[test]
    fn disconnected_exhausts_lengths() {
        let graph = GraphBuilder::with_nodes(4)
            .connect(UnorderedPair::from((0, 1)))
            .connect(UnorderedPair::from((2, 3)))
            .build()
            .unwrap();
        let options = SearchOptions::default();
        let mut search = PathSearch::new(&graph, 0, 3, &options, VarisatOracle).unwrap();

        assert_eq!(search.shortest().unwrap(), SearchOutcome::NoPath { longest_tried: 4 });
        // L = 2, 3, 4
        assert_eq!(search.probes(), 3);
        assert_eq!(dijkstra(&graph, 0, 3).unwrap(), None);
    }

    #[test]
    fn satisfiable_length_need_not_extend() {
        let graph = GraphBuilder::with_nodes(3).connect_chain(&[0, 1, 2]).build().unwrap();
        let options = SearchOptions::default();
        let mut search = PathSearch::new(&graph, 0, 2, &options, VarisatOracle).unwrap();

        assert_eq!(search.probe(2).unwrap(), Probe::UnsatisfiableAtLength(2));
        assert!(matches!(search.probe(3).unwrap(), Probe::Sat(_)));
        assert_eq!(search.probe(4).unwrap(), Probe::UnsatisfiableAtLength(4));
    }

    #[test]
    fn consecutive_exclusion_admits_revisits() {
        let graph = GraphBuilder::with_nodes(3).connect_chain(&[0, 1, 2]).build().unwrap();

        let pairwise = SearchOptions::default();
        let mut search = PathSearch::new(&graph, 0, 2, &pairwise, VarisatOracle).unwrap();
        assert_eq!(search.probe(5).unwrap(), Probe::UnsatisfiableAtLength(5));

        let consecutive = SearchOptions { node_exclusion: NodeExclusion::Consecutive, ..Default::default() };
        let mut search = PathSearch::new(&graph, 0, 2, &consecutive, VarisatOracle).unwrap();
        match search.probe(5).unwrap() {
            Probe::Sat(route) => {
                // 0 -> 1 -> 0 -> 1 -> 2 or 0 -> 1 -> 2 -> 1 -> 2
                assert_eq!(route.hops(), 4);
                assert!(!route.is_simple());
                assert_valid_walk(&graph, &route);
            }
            other => panic!("expected a walk, got {:?}", other),
        }
    }

    #[test]
    fn clause_count() {
        let graph = four_cycle();
        let options = SearchOptions::default();
        let encoder = PathEncoder::new(&graph, 0, 2, &options).unwrap();
        let encoding = encoder.encode(3);

        // positions: 3 * (1 + 6), node exclusion: 4 * 3, non-edges: 2 * (16 - 8), pins: 2
        assert_eq!(encoding.clause_count(), 21 + 12 + 16 + 2);
        assert_eq!(encoding.var_count(), 12);
        assert!(encoding.dimacs_clauses().contains(&vec![1]));
        assert!(encoding.dimacs_clauses().contains(&vec![2 * 3 + 2 + 1]));
    }

    #[test]
    fn encoding_is_deterministic() {
        let graph = generate::connected(12, &mut StdRng::seed_from_u64(7));
        let options = SearchOptions::default();
        let encoder = PathEncoder::new(&graph, 0, 11, &options).unwrap();

        assert_eq!(encoder.encode(4).dimacs_clauses(), encoder.encode(4).dimacs_clauses());
        assert_eq!(encoder.encode_weighted(4, 3).dimacs_clauses(), encoder.encode_weighted(4, 3).dimacs_clauses());
    }

    #[test]
    fn dimacs_output() {
        let graph = GraphBuilder::with_nodes(2).connect(UnorderedPair::from((0, 1))).build().unwrap();
        let options = SearchOptions::default();
        let encoding = PathEncoder::new(&graph, 0, 1, &options).unwrap().encode(2);

        let mut out = Vec::new();
        encoding.write_dimacs(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("p cnf 4 "));
        assert_eq!(text.lines().count(), encoding.clause_count() + 1);
        assert!(text.lines().skip(1).all(|line| line.ends_with(" 0") || line == "0"));
    }

    #[test]
    fn malformed_queries() {
        let graph = four_cycle();
        let options = SearchOptions::default();

        assert_eq!(
            PathSearch::new(&graph, 4, 0, &options, VarisatOracle).err(),
            Some(SearchError::Malformed(MalformedQuery::SourceOutOfRange { node: 4, node_count: 4 })),
        );
        assert_eq!(
            PathSearch::new(&graph, 0, 9, &options, VarisatOracle).err(),
            Some(SearchError::Malformed(MalformedQuery::TargetOutOfRange { node: 9, node_count: 4 })),
        );

        let via_endpoint = SearchOptions { via: ViaNodes::requiring([2]), ..Default::default() };
        assert_eq!(
            PathSearch::new(&graph, 0, 2, &via_endpoint, VarisatOracle).err(),
            Some(SearchError::Malformed(MalformedQuery::ViaIsEndpoint { node: 2 })),
        );

        let conflicting = SearchOptions {
            via: ViaNodes { required: [1].into(), forbidden: [1, 3].into() },
            ..Default::default()
        };
        assert_eq!(
            PathSearch::new(&graph, 0, 2, &conflicting, VarisatOracle).err(),
            Some(SearchError::Malformed(MalformedQuery::ViaBothRequiredAndForbidden { node: 1 })),
        );

        let outside = SearchOptions { via: ViaNodes::forbidding([6]), ..Default::default() };
        assert_eq!(
            PathSearch::new(&graph, 0, 2, &outside, VarisatOracle).err(),
            Some(SearchError::Malformed(MalformedQuery::ViaOutOfRange { node: 6, node_count: 4 })),
        );

        assert_eq!(dijkstra(&graph, 0, 4), Err(MalformedQuery::TargetOutOfRange { node: 4, node_count: 4 }));
    }

    #[test]
    fn via_nodes() {
        let graph = four_cycle();

        let required = SearchOptions { via: ViaNodes::requiring([3]), ..Default::default() };
        let route = PathSearch::new(&graph, 0, 2, &required, VarisatOracle).unwrap().shortest().unwrap();
        assert_eq!(route.into_route().unwrap().nodes(), &[0, 3, 2]);

        let forbidden = SearchOptions { via: ViaNodes::forbidding([3]), ..Default::default() };
        let route = PathSearch::new(&graph, 0, 2, &forbidden, VarisatOracle).unwrap().shortest().unwrap();
        assert_eq!(route.into_route().unwrap().nodes(), &[0, 1, 2]);

        // 0 - 1 - 2 directly, or around through 3 - 4
        let graph = GraphBuilder::with_nodes(5).connect_chain(&[0, 1, 2, 3, 4, 0]).build().unwrap();
        let detour = SearchOptions { via: ViaNodes::requiring([3]), ..Default::default() };
        let route = PathSearch::new(&graph, 0, 2, &detour, VarisatOracle).unwrap().shortest().unwrap();
        assert_eq!(route.into_route().unwrap().nodes(), &[0, 4, 3, 2]);

        let cut = SearchOptions { via: ViaNodes::forbidding([1, 3]), ..Default::default() };
        let outcome = PathSearch::new(&graph, 0, 2, &cut, VarisatOracle).unwrap().shortest().unwrap();
        assert_eq!(outcome, SearchOutcome::NoPath { longest_tried: 5 });
    }

    #[test]
    fn oracle_failure_propagates() {
        let graph = four_cycle();
        let options = SearchOptions::default();

        let mut search = PathSearch::new(&graph, 0, 2, &options, Failing).unwrap();
        assert_eq!(search.shortest(), Err(SearchError::Oracle(OracleFailure { reason: "resources exhausted".to_string() })));

        let mut search = PathSearch::new(&graph, 0, 2, &options, Liar).unwrap();
        assert_eq!(search.shortest(), Err(SearchError::InconsistentModel { position: 0 }));
    }

    #[test]
    fn fewest_hops_before_weight() {
        // direct but heavy, or two light hops
        let graph = weighted(3, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]);

        let first = lightest_path(&graph, 0, 2, &options(BoundPolicy::Enforced, LengthPolicy::FirstFeasible)).unwrap();
        assert_eq!(first.route().unwrap().nodes(), &[0, 2]);
        assert_eq!(first.route().unwrap().weight(), 10);

        let heuristic = lightest_path(&graph, 0, 2, &options(BoundPolicy::Heuristic, LengthPolicy::FirstFeasible)).unwrap();
        assert_eq!(heuristic.route().unwrap().nodes(), &[0, 2]);

        let exhaustive = lightest_path(&graph, 0, 2, &options(BoundPolicy::Enforced, LengthPolicy::Exhaustive)).unwrap();
        assert_eq!(exhaustive.route().unwrap().nodes(), &[0, 1, 2]);
        assert_eq!(exhaustive.route().unwrap().weight(), dijkstra(&graph, 0, 2).unwrap().unwrap().weight());
    }

    #[test]
    fn enforced_bound_picks_lighter_route() {
        // two routes of two hops: through 1 (weight 10) or through 2 (weight 2)
        let graph = weighted(4, &[(0, 1, 5), (1, 3, 5), (0, 2, 1), (2, 3, 1)]);
        let enforced = options(BoundPolicy::Enforced, LengthPolicy::FirstFeasible);
        let mut search = PathSearch::new(&graph, 0, 3, &enforced, VarisatOracle).unwrap();

        assert_eq!(search.probe_weighted(3, 1).unwrap(), Probe::UnsatisfiableAtLength(3));
        match search.probe_weighted(3, 9).unwrap() {
            Probe::Sat(route) => assert_eq!(route.nodes(), &[0, 2, 3]),
            other => panic!("expected the light route, got {:?}", other),
        }
        assert_eq!(search.lightest().unwrap().into_route().unwrap().weight(), 2);

        // the heuristic bound constrains nothing
        let heuristic = options(BoundPolicy::Heuristic, LengthPolicy::FirstFeasible);
        let mut search = PathSearch::new(&graph, 0, 3, &heuristic, VarisatOracle).unwrap();
        assert!(matches!(search.probe_weighted(3, 0).unwrap(), Probe::Sat(_)));
        let route = search.lightest().unwrap().into_route().unwrap();
        assert_eq!(route.hops(), 2);
        assert!(route.weight() == 2 || route.weight() == 10);
    }

    #[test]
    fn weighted_disconnected() {
        let graph = weighted(4, &[(0, 1, 3), (2, 3, 3)]);
        for bound in [BoundPolicy::Enforced, BoundPolicy::Heuristic] {
            let outcome = lightest_path(&graph, 0, 3, &options(bound, LengthPolicy::Exhaustive)).unwrap();
            assert_eq!(outcome, SearchOutcome::NoPath { longest_tried: 4 });
        }
    }

    #[test]
    fn distance_ordering() {
        assert!(Distance::Reached(0) < Distance::Reached(5));
        assert!(Distance::Reached(Weight::MAX) < Distance::Unreached);
    }

    #[test]
    fn dijkstra_weighted() {
        let graph = weighted(5, &[(0, 1, 2), (1, 2, 2), (0, 3, 1), (3, 4, 1), (4, 2, 1)]);
        let route = dijkstra(&graph, 0, 2).unwrap().unwrap();

        assert_eq!(route.nodes(), &[0, 3, 4, 2]);
        assert_eq!(route.weight(), 3);
        assert_eq!(format!("{}", route), "0 -> 3 -> 4 -> 2");
    }

    #[test]
    fn enumerate_simple_paths() {
        let graph = four_cycle();
        let mut paths = SimplePaths::new(&graph, 0, 2).collect::<Vec<_>>();
        paths.sort();
        assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 3, 2]]);

        assert_eq!(SimplePaths::new(&graph, 1, 1).collect::<Vec<_>>(), vec![vec![1]]);
        assert_eq!(SimplePaths::new(&graph, 9, 0).count(), 0);
        assert_eq!(SimplePaths::new(&graph, 0, 9).count(), 0);

        let graph = weighted(3, &[(0, 2, 10), (0, 1, 1), (1, 2, 1)]);
        assert_eq!(enumerate::fewest_hops(&graph, 0, 2).unwrap().nodes(), &[0, 2]);
        assert_eq!(enumerate::lightest(&graph, 0, 2).unwrap().nodes(), &[0, 1, 2]);
    }

    #[test]
    fn generated_graphs_are_reproducible_and_connected() {
        let first = generate::connected_weighted(30, 10, &mut StdRng::seed_from_u64(42));
        let second = generate::connected_weighted(30, 10, &mut StdRng::seed_from_u64(42));

        assert_eq!(first.edges().collect::<Vec<_>>(), second.edges().collect::<Vec<_>>());
        assert!(first.is_weighted());
        assert!(first.edges().all(|(_, _, w)| (1..=10).contains(&w)));
        for node in first.nodes() {
            assert!(dijkstra(&first, 0, node).unwrap().is_some(), "{} unreachable", node);
        }
    }

    #[test]
    fn compare_reports_agreement() {
        let graph = generate::connected(20, &mut StdRng::seed_from_u64(3));
        let comparison = compare(&graph, 0, 19, &SearchOptions::default(), VarisatOracle).unwrap();
        assert_eq!(comparison.agreement(), Agreement::Agree);
        assert!(comparison.probes >= 1);

        let with_via = SearchOptions { via: ViaNodes::requiring([3]), ..Default::default() };
        let comparison = compare(&four_cycle(), 0, 2, &with_via, VarisatOracle).unwrap();
        assert_eq!(comparison.agreement(), Agreement::NotComparable);
        assert_eq!(comparison.sat.route().unwrap().nodes(), &[0, 3, 2]);
    }

    mod properties {
        use proptest::prelude::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        use crate::dijkstra::dijkstra;
        use crate::enumerate;
        use crate::generate;
        use crate::options::{BoundPolicy, LengthPolicy, SearchOptions};
        use crate::search::{lightest_path, shortest_path};

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn sat_hops_match_dijkstra(node_count in 2usize..10, seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
                let graph = generate::connected(node_count, &mut StdRng::seed_from_u64(seed));
                let (source, target) = (a % node_count, b % node_count);

                let route = shortest_path(&graph, source, target).unwrap().into_route().unwrap();
                let baseline = dijkstra(&graph, source, target).unwrap().unwrap();

                prop_assert_eq!(route.hops(), baseline.hops());
                prop_assert_eq!(route.source(), source);
                prop_assert_eq!(route.target(), target);
                prop_assert!(route.is_simple());
                for pair in route.nodes().windows(2) {
                    prop_assert!(graph.is_edge(pair[0], pair[1]));
                }
            }

            #[test]
            fn exhaustive_enforced_weight_matches_dijkstra(node_count in 2usize..7, seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
                let graph = generate::connected_weighted(node_count, 4, &mut StdRng::seed_from_u64(seed));
                let (source, target) = (a % node_count, b % node_count);
                let options = SearchOptions { bound: BoundPolicy::Enforced, lengths: LengthPolicy::Exhaustive, ..Default::default() };

                let route = lightest_path(&graph, source, target, &options).unwrap().into_route().unwrap();
                let baseline = dijkstra(&graph, source, target).unwrap().unwrap();
                let brute = enumerate::lightest(&graph, source, target).unwrap();

                prop_assert_eq!(route.weight(), baseline.weight());
                prop_assert_eq!(route.weight(), brute.weight());
                prop_assert!(route.is_simple());
            }

            #[test]
            fn first_feasible_has_fewest_hops(node_count in 2usize..7, seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
                let graph = generate::connected_weighted(node_count, 5, &mut StdRng::seed_from_u64(seed));
                let (source, target) = (a % node_count, b % node_count);
                let options = SearchOptions::default();

                let route = lightest_path(&graph, source, target, &options).unwrap().into_route().unwrap();
                let fewest = enumerate::fewest_hops(&graph, source, target).unwrap();
                let lightest_of_fewest = enumerate::SimplePaths::new(&graph, source, target)
                    .filter(|nodes| nodes.len() == fewest.nodes().len())
                    .filter_map(|nodes| crate::Route::through(&graph, nodes))
                    .map(|route| route.weight())
                    .min()
                    .unwrap();

                prop_assert_eq!(route.hops(), fewest.hops());
                prop_assert_eq!(route.weight(), lightest_of_fewest);
            }
        }
    }
}
