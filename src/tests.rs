#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use petgraph::visit::Bfs;

    use crate::builder::{BuildError, BuilderInvalidReason, GridBuilder};
    use crate::color::{ColorCode, ColorCodeError};
    use crate::graph::{Graph, GraphError};
    use crate::location::Location;
    use crate::parse::{parse_puzzle, parse_rows, ParseError, SAMPLE_PUZZLE};
    use crate::puzzle::{Puzzle, ORIGIN};
    use crate::shape::{BoardShape, SquareStep, Step};
    use crate::solver::{candidates, FloodSolver, Outcome, SolverConfig, SolverConfigError};
    use crate::traverse::{is_unified, survey, taint, Survey};

    fn grid(rows: &[&[&'static str]]) -> Puzzle<&'static str> {
        GridBuilder::from_rows(rows.iter()
            .map(|row| row.iter().map(|c| if c.is_empty() { None } else { Some(*c) }).collect())
            .collect())
            .build()
            .unwrap()
    }

    fn path(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for v in 1..n {
            graph.add_edge(v - 1, v).unwrap();
        }
        graph
    }

    #[test]
    fn edges_are_symmetric() {
        let mut graph = Graph::new(5);
        for (v, w) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 4)] {
            graph.add_edge(v, w).unwrap();
        }

        assert_eq!(graph.edge_count(), 5);
        for v in 0..graph.vertex_count() {
            for &w in graph.neighbors(v) {
                assert!(graph.neighbors(w).contains(&v), "{} lists {} but not the reverse", v, w);
            }
        }
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = Graph::new(3);
        assert_eq!(graph.add_edge(0, 3), Err(GraphError::VertexOutOfRange { vertex: 3, vertex_count: 3 }));
        assert_eq!(graph.add_edge(7, 1), Err(GraphError::VertexOutOfRange { vertex: 7, vertex_count: 3 }));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(1).is_empty());

        assert_eq!(Graph::new(0).add_edge(0, 0), Err(GraphError::VertexOutOfRange { vertex: 0, vertex_count: 0 }));
    }

    #[test]
    fn full_square_adjacency() {
        let puzzle = grid(&[
            &["a", "b", "c"],
            &["d", "e", "f"],
            &["g", "h", "i"],
        ]);
        let graph = puzzle.graph();

        assert_eq!(graph.vertex_count(), 9);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.edges().len(), 12);
        assert_eq!(graph.degrees(), vec![2, 3, 2, 3, 4, 3, 2, 3, 2]);

        // right edges are added before down edges, scanning row-major
        assert_eq!(graph.neighbors(0), &[1, 3]);
        assert_eq!(graph.neighbors(4), &[1, 3, 5, 7]);
        assert_eq!(graph.neighbors(8), &[5, 7]);
    }

    #[test]
    fn adjacency_matches_geometry() {
        let puzzle = grid(&[
            &["a", "", "c", "d"],
            &["e", "f"],
            &["", "h", "i", "j"],
        ]);

        for (v, dot) in puzzle.dots().iter().enumerate() {
            assert_eq!(dot.index, v);
            let expected = SquareStep::neighbors_of(dot.location).into_iter()
                .filter(|(_, location)| puzzle.dots().iter().any(|other| other.location == *location))
                .count();
            assert_eq!(puzzle.graph().neighbors(v).len(), expected, "degree of {:?}", dot.location);

            for &w in puzzle.graph().neighbors(v) {
                assert!(SquareStep::direction_to(dot.location, puzzle.dots()[w].location).is_some());
            }
        }
    }

    #[test]
    fn jagged_rows_leave_holes() {
        let puzzle = grid(&[
            &["a", "b"],
            &["c"],
        ]);

        assert_eq!(puzzle.dims(), (2, 2));
        assert_eq!(puzzle.len(), 3);
        assert_eq!(puzzle.dots()[2].location, Location(0, 1));
        assert_eq!(puzzle.graph().edge_count(), 2);
        assert_eq!(puzzle.graph().neighbors(0), &[1, 2]);
        assert_eq!(puzzle.graph().neighbors(1), &[0]);
    }

    #[test]
    fn no_edges_through_holes() {
        let puzzle = grid(&[&["a", "", "b"]]);
        assert_eq!(puzzle.len(), 2);
        assert_eq!(puzzle.graph().edge_count(), 0);

        let mut bfs = Bfs::new(puzzle.graph(), ORIGIN);
        let mut reached = 0;
        while bfs.next(puzzle.graph()).is_some() {
            reached += 1;
        }
        assert_eq!(reached, 1);
    }

    #[test]
    fn petgraph_walks_full_grid() {
        let puzzle = grid(&[
            &["a", "a", "a", "a"],
            &["a", "a", "a", "a"],
        ]);

        let mut bfs = Bfs::new(puzzle.graph(), ORIGIN);
        let mut order = Vec::new();
        while let Some(v) = bfs.next(puzzle.graph()) {
            order.push(v);
        }
        assert_eq!(order, vec![0, 1, 4, 2, 5, 3, 6, 7]);
    }

    #[test]
    fn builder_edits() {
        let dims = (NonZero::new(2).unwrap(), NonZero::new(2).unwrap());
        let puzzle = GridBuilder::with_dims(dims)
            .set_color(Location(0, 0), "a")
            .set_color(Location(1, 0), "b")
            .set_color(Location(1, 1), "a")
            .build()
            .unwrap();
        assert_eq!(puzzle.colors(), vec!["a", "b", "a"]);
        assert_eq!(puzzle.graph().edge_count(), 2);

        let mut builder = GridBuilder::from_rows(vec![vec![Some("a"); 3]; 3]);
        builder.drop_location(Location(1, 1));
        let holed = builder.build().unwrap();
        assert_eq!(holed.len(), 8);
        assert_eq!(holed.graph().edge_count(), 8);

        let mut builder = GridBuilder::with_dims(dims);
        builder.set_color(Location(2, 0), "a").set_color(Location(0, 0), "b");
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::FeatureOutOfBounds]));
        assert_eq!(builder.build().unwrap_err(), BuildError::Invalid(vec![BuilderInvalidReason::FeatureOutOfBounds]));
    }

    #[test]
    fn square_steps() {
        assert_eq!(SquareStep::Down.attempt_from(Location(1, 1)), Location(1, 2));
        assert_eq!(SquareStep::Up.invert(), SquareStep::Down);
        assert_eq!(SquareStep::Left.ensure_forward(), SquareStep::Right);
        assert_eq!(SquareStep::direction_to(Location(0, 0), Location(2, 0)), None);
    }

    #[test]
    fn taint_stops_at_other_colors() {
        let graph = path(3);
        let mut colors = vec!["A", "B", "A"];
        taint(&graph, &mut colors, ORIGIN, &"A", &"C");
        assert_eq!(colors, vec!["C", "B", "A"]);
    }

    #[test]
    fn taint_uniform_region() {
        let puzzle = grid(&[
            &["a", "a", "a"],
            &["a", "a", "a"],
            &["a", "a", "a"],
        ]);
        let mut colors = puzzle.colors();
        taint(puzzle.graph(), &mut colors, ORIGIN, &"a", &"b");
        assert!(colors.iter().all(|c| *c == "b"));
    }

    #[test]
    fn taint_blocked_origin_only() {
        let puzzle = grid(&[
            &["a", "b"],
            &["c", "a"],
        ]);
        let mut colors = puzzle.colors();
        taint(puzzle.graph(), &mut colors, ORIGIN, &"a", &"d");
        assert_eq!(colors, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn taint_recolors_origin_regardless() {
        let graph = path(4);
        let mut colors = vec!["X", "A", "A", "B"];
        taint(&graph, &mut colors, ORIGIN, &"A", &"C");
        assert_eq!(colors, vec!["C", "C", "C", "B"]);
    }

    #[test]
    fn taint_empty_graph() {
        let mut colors: Vec<&str> = vec![];
        taint(&Graph::new(0), &mut colors, ORIGIN, &"A", &"B");
        assert!(colors.is_empty());
    }

    #[test]
    fn checker_uniform() {
        let graph = path(4);
        let colors = vec!["A"; 4];
        assert!(is_unified(&graph, &colors, ORIGIN, &"A"));
        assert!(!is_unified(&graph, &colors, ORIGIN, &"B"));
        assert_eq!(survey(&graph, &colors, ORIGIN, &"A"), Survey { reached: 4, mismatched: false, uniform: true });
    }

    #[test]
    fn checker_mismatch() {
        let graph = path(2);
        let verdict = survey(&graph, &["A", "B"], ORIGIN, &"A");
        assert_eq!(verdict, Survey { reached: 1, mismatched: true, uniform: false });
        assert!(!verdict.passed());
    }

    #[test]
    fn checker_ignores_reachability_when_uniform() {
        let puzzle = grid(&[&["a", "", "a"]]);
        let verdict = survey(puzzle.graph(), &puzzle.colors(), ORIGIN, &"a");
        assert_eq!(verdict, Survey { reached: 1, mismatched: false, uniform: true });
        assert!(puzzle.is_solved());
    }

    #[test]
    fn candidates_in_first_appearance_order() {
        assert_eq!(candidates(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
        assert!(candidates::<&str>(&[]).is_empty());
    }

    #[test]
    fn config_bounds() {
        assert_eq!(SolverConfig::default().max_steps(), 6);
        assert_eq!(SolverConfig::with_max_steps(64).unwrap().max_steps(), 64);
        assert_eq!(SolverConfig::with_max_steps(65), Err(SolverConfigError::MaxStepsTooLarge { requested: 65, limit: 64 }));
    }

    #[test]
    fn solve_single_cell() {
        let puzzle = grid(&[&["a"]]);
        assert_eq!(puzzle.solve(&SolverConfig::default()), Outcome::Found(vec!["a"]));
        assert_eq!(puzzle.solve(&SolverConfig::with_max_steps(0).unwrap()), Outcome::Found(vec!["a"]));
    }

    #[test]
    fn solve_empty_puzzle() {
        let puzzle: Puzzle<&str> = GridBuilder::from_rows(vec![]).build().unwrap();
        assert_eq!(puzzle.solve(&SolverConfig::default()), Outcome::NotFound { last_explored: vec![] });
    }

    #[test]
    fn first_success_is_not_shortest() {
        let puzzle = grid(&[&["a", "b"]]);

        let outcome = puzzle.solve(&SolverConfig::with_max_steps(0).unwrap());
        assert_eq!(outcome, Outcome::Found(vec!["b"]));

        // "a" is tried first at every depth, so the search only wins on the last step
        let outcome = puzzle.solve(&SolverConfig::default());
        assert_eq!(outcome.steps(), &["a", "a", "a", "a", "a", "a", "b"]);
    }

    #[test]
    fn solve_within_bound() {
        let puzzle = grid(&[&["a", "b", "c", "d"]]);
        let outcome = puzzle.solve(&SolverConfig::with_max_steps(2).unwrap());
        assert_eq!(outcome, Outcome::Found(vec!["b", "c", "d"]));
        assert!(puzzle.play(outcome.steps()).is_solved());
    }

    #[test]
    fn exhaustion_is_not_an_error() {
        let puzzle = grid(&[&["a", "b", "c", "d"]]);
        let solver = FloodSolver::new(puzzle.graph(), &SolverConfig::with_max_steps(1).unwrap());
        let (outcome, stats) = solver.solve_with_stats(&puzzle.colors());

        assert!(!outcome.passed());
        assert_eq!(outcome.steps(), &["d", "c"]);
        assert_eq!(outcome.into_solution(), None);
        assert_eq!(stats.branches, 17);
        assert_eq!(stats.deepest_step, 1);
    }

    #[test]
    fn depth_never_exceeds_bound() {
        let puzzle = parse_puzzle::<ColorCode>(SAMPLE_PUZZLE).unwrap();
        for max_steps in 0..=3 {
            let solver = FloodSolver::new(puzzle.graph(), &SolverConfig::with_max_steps(max_steps).unwrap());
            let (outcome, stats) = solver.solve_with_stats(&puzzle.colors());
            assert!(stats.deepest_step <= max_steps);
            assert!(outcome.steps().len() <= max_steps + 1);
        }
    }

    #[test]
    fn parse_orientation() {
        let rows = parse_rows::<ColorCode>("\n a, b\n\nc ,\n").unwrap();
        let code = |s: &str| Some(s.parse::<ColorCode>().unwrap());
        assert_eq!(rows, vec![vec![code("c"), None], vec![code("a"), code("b")]]);
    }

    #[test]
    fn parse_malformed_token() {
        let err = parse_puzzle::<ColorCode>("\ngr, p!u\n").unwrap_err();
        assert_eq!(err, ParseError::MalformedToken {
            line: 2,
            column: 2,
            token: "p!u".to_owned(),
            reason: ColorCodeError::InvalidCharacter('!').to_string(),
        });
    }

    #[test]
    fn sample_layout() {
        let puzzle = parse_puzzle::<ColorCode>(SAMPLE_PUZZLE).unwrap();

        assert_eq!(puzzle.len(), 13);
        assert_eq!(puzzle.origin_color().map(ColorCode::as_str), Some("pu"));
        assert_eq!(puzzle.dots()[ORIGIN].location, Location(1, 0));
        assert_eq!(puzzle.distinct_colors().iter().map(ColorCode::as_str).collect::<Vec<_>>(), vec!["pu", "bk", "pi", "tu", "gr"]);
        assert_eq!(format!("{}", puzzle), "gr pu gr
tu bk tu
bk pi bk
pu bk pu
.  pu .
");
    }

    #[test]
    fn solve_sample() {
        let puzzle = parse_puzzle::<ColorCode>(SAMPLE_PUZZLE).unwrap();
        let outcome = puzzle.solve(&SolverConfig::default());

        assert!(outcome.passed());
        let steps = outcome.steps().to_vec();
        assert!(!steps.is_empty() && steps.len() <= 7);

        let solved = puzzle.play(&steps);
        assert!(solved.is_solved());
        assert!(solved.colors().iter().all(|c| c == steps.last().unwrap()));
    }

    #[test]
    fn known_sample_line() {
        let puzzle = parse_puzzle::<ColorCode>(SAMPLE_PUZZLE).unwrap();
        let moves = ["bk", "pi", "bk", "pu", "tu", "gr"].map(|s| s.parse::<ColorCode>().unwrap());

        let partial = puzzle.clone().play(&moves[..5]);
        assert!(!partial.is_solved());
        assert_eq!(format!("{}", partial), "gr tu gr
tu tu tu
tu tu tu
tu tu tu
.  tu .
");
        assert!(puzzle.play(&moves).is_solved());
    }
}
