//! Pattern resolution on the board's relation list.

mod common;

use common::{dir, init_tracing, line_board, relation, ring_board, tile};
use strictly_board::{
    Board, BoardError, BoardResolver, Direction, DistanceConstraint, Pattern, ResolveTilePath,
    ShortestPaths, resolve_tile_path, resolve_tile_path_with_distance,
};

fn north_line() -> Board {
    Board::new(vec![relation("A", "B", "north", 1), relation("B", "C", "north", 1)])
        .expect("board")
}

#[test]
fn test_any_pattern_follows_shortest_route() {
    init_tracing();
    let board = north_line();
    let path = resolve_tile_path(&board, &Pattern::Any, &tile("A"), &tile("C")).expect("route");

    assert_eq!(path.distance(), 2);
    assert_eq!(
        path.relations(),
        &[relation("A", "B", "north", 1), relation("B", "C", "north", 1)]
    );
}

#[test]
fn test_fixed_pattern_must_consume_whole_sequence() {
    let board = north_line();
    let pattern = Pattern::Fixed(vec![dir("north"), dir("north")]);

    let path = resolve_tile_path(&board, &pattern, &tile("A"), &tile("C")).expect("match");
    assert_eq!(path.distance(), 2);
    assert!(resolve_tile_path(&board, &pattern, &tile("A"), &tile("B")).is_none());
}

#[test]
fn test_fixed_pattern_with_missing_step_fails() {
    let board = north_line();
    let pattern = Pattern::Fixed(vec![dir("north"), dir("east")]);
    assert!(resolve_tile_path(&board, &pattern, &tile("A"), &tile("C")).is_none());
}

#[test]
fn test_single_step_only_reaches_neighbour() {
    let board = line_board(5);
    let step = Pattern::step(dir("e"));

    assert!(resolve_tile_path(&board, &step, &tile("t0"), &tile("t1")).is_some());
    assert!(resolve_tile_path(&board, &step, &tile("t0"), &tile("t2")).is_none());
}

#[test]
fn test_slide_stops_on_destination() {
    let board = line_board(5);
    let path = resolve_tile_path(&board, &Pattern::slide(dir("e")), &tile("t0"), &tile("t3"))
        .expect("slide");

    assert_eq!(path.distance(), 3);
    assert_eq!(path.intermediate_tiles(), &[tile("t1"), tile("t2")]);
}

#[test]
fn test_slide_in_wrong_direction_fails() {
    let board = line_board(5);
    assert!(
        resolve_tile_path(&board, &Pattern::slide(dir("w")), &tile("t0"), &tile("t3")).is_none()
    );
}

#[test]
fn test_walk_never_returns_to_start() {
    let board = ring_board(5);
    let slide = Pattern::slide(dir("cw"));

    assert!(resolve_tile_path(&board, &slide, &tile("c0"), &tile("c0")).is_none());
    let around = resolve_tile_path(&board, &slide, &tile("c1"), &tile("c0")).expect("wraps");
    assert_eq!(around.distance(), 4);
}

#[test]
fn test_walk_terminates_on_inner_cycle() {
    let board = Board::new(vec![
        relation("a", "b", "n", 1),
        relation("b", "c", "n", 1),
        relation("c", "b", "n", 1),
        relation("a", "z", "e", 1),
    ])
    .expect("board");

    assert!(resolve_tile_path(&board, &Pattern::slide(dir("n")), &tile("a"), &tile("z")).is_none());
}

#[test]
fn test_multi_direction_keeps_shortest_candidate() {
    let board = Board::new(vec![
        relation("a", "d", "x", 5),
        relation("a", "b", "y", 1),
        relation("b", "d", "y", 1),
    ])
    .expect("board");
    let pattern = Pattern::MultiDirection {
        directions: vec![dir("x"), dir("y")],
        repeatable: true,
    };

    let path = resolve_tile_path(&board, &pattern, &tile("a"), &tile("d")).expect("match");
    assert_eq!(path.distance(), 2);
    assert!(path.directions().iter().all(|d| d.id() == "y"));
}

#[test]
fn test_multi_direction_ties_go_to_first_candidate() {
    let board = Board::new(vec![
        relation("a", "b", "x", 1),
        relation("b", "d", "x", 1),
        relation("a", "c", "y", 1),
        relation("c", "d", "y", 1),
    ])
    .expect("board");
    let pattern = Pattern::MultiDirection {
        directions: vec![dir("y"), dir("x")],
        repeatable: true,
    };

    let path = resolve_tile_path(&board, &pattern, &tile("a"), &tile("d")).expect("match");
    assert_eq!(path.tiles()[1], tile("c"));
}

#[test]
fn test_multi_direction_never_mixes_directions() {
    let board = Board::new(vec![relation("a", "b", "x", 1), relation("b", "c", "y", 1)])
        .expect("board");
    let pattern = Pattern::MultiDirection {
        directions: vec![dir("x"), dir("y")],
        repeatable: true,
    };
    assert!(resolve_tile_path(&board, &pattern, &tile("a"), &tile("c")).is_none());
}

#[test]
fn test_wildcard_step_takes_first_relation() {
    let board = Board::new(vec![relation("a", "b", "x", 1), relation("a", "c", "y", 1)])
        .expect("board");
    let step = Pattern::step(Direction::Any);

    assert!(resolve_tile_path(&board, &step, &tile("a"), &tile("b")).is_some());
    assert!(resolve_tile_path(&board, &step, &tile("a"), &tile("c")).is_none());
}

#[test]
fn test_null_and_degenerate_any_resolve_to_none() {
    let board = north_line();
    assert!(resolve_tile_path(&board, &Pattern::Null, &tile("A"), &tile("B")).is_none());
    assert!(resolve_tile_path(&board, &Pattern::Any, &tile("A"), &tile("A")).is_none());
    assert!(resolve_tile_path(&board, &Pattern::Any, &tile("C"), &tile("A")).is_none());
    assert!(resolve_tile_path(&board, &Pattern::Any, &tile("A"), &tile("nowhere")).is_none());
}

#[test]
fn test_shortest_paths_distances() {
    let board = Board::new(vec![
        relation("a", "b", "n", 1),
        relation("b", "c", "n", 1),
        relation("a", "c", "x", 5),
    ])
    .expect("board");
    let shortest = ShortestPaths::compute(&board);

    assert_eq!(shortest.distance(&tile("a"), &tile("c")), Some(2));
    assert_eq!(shortest.distance(&tile("a"), &tile("a")), Some(0));
    assert_eq!(shortest.distance(&tile("c"), &tile("a")), None);
    let path = shortest.path(&board, &tile("a"), &tile("c")).expect("route");
    assert_eq!(path.tiles(), &[tile("a"), tile("b"), tile("c")]);
}

#[test]
fn test_resolve_first_reports_matching_pattern_index() {
    let board = line_board(5);
    let resolver = BoardResolver::new(&board);
    let patterns = [
        Pattern::Null,
        Pattern::step(dir("e")),
        Pattern::slide(dir("e")),
    ];

    let (index, path) = resolver
        .resolve_first(&patterns, &tile("t0"), &tile("t3"))
        .expect("slide matches");
    assert_eq!(index, 2);
    assert_eq!(path.distance(), 3);

    let (index, _) = resolver
        .resolve_first(&patterns, &tile("t0"), &tile("t1"))
        .expect("step matches");
    assert_eq!(index, 1);
    assert!(resolver.resolve_first(&patterns, &tile("t3"), &tile("t0")).is_none());
}

mod distance {
    use super::*;

    fn constraint(distance: u64, allow_overshoot: bool) -> DistanceConstraint {
        DistanceConstraint::new(distance, allow_overshoot).expect("positive")
    }

    #[test]
    fn test_zero_target_rejected() {
        assert_eq!(
            DistanceConstraint::new(0, false),
            Err(BoardError::NonPositiveTarget)
        );
    }

    #[test]
    fn test_exact_distance_to_destination() {
        let board = line_board(6);
        let path = resolve_tile_path_with_distance(
            &board,
            &Pattern::slide(dir("e")),
            &tile("t0"),
            &tile("t2"),
            constraint(2, false),
        )
        .expect("supported")
        .expect("match");
        assert_eq!(path.to(), &tile("t2"));
    }

    #[test]
    fn test_destination_reached_early_fails_without_overshoot() {
        let board = line_board(6);
        let result = resolve_tile_path_with_distance(
            &board,
            &Pattern::slide(dir("e")),
            &tile("t0"),
            &tile("t2"),
            constraint(3, false),
        )
        .expect("supported");
        assert!(result.is_none());
    }

    #[test]
    fn test_overshoot_walks_past_destination() {
        let board = line_board(6);
        let path = resolve_tile_path_with_distance(
            &board,
            &Pattern::slide(dir("e")),
            &tile("t0"),
            &tile("t2"),
            constraint(3, true),
        )
        .expect("supported")
        .expect("match");
        assert_eq!(path.to(), &tile("t3"));
        assert_eq!(path.distance(), 3);
    }

    #[test]
    fn test_walk_stops_when_distance_used_up() {
        let board = line_board(6);
        let path = resolve_tile_path_with_distance(
            &board,
            &Pattern::slide(dir("e")),
            &tile("t0"),
            &tile("t4"),
            constraint(1, false),
        )
        .expect("supported")
        .expect("match");
        assert_eq!(path.to(), &tile("t1"));
    }

    #[test]
    fn test_exceeding_target_fails() {
        let board = Board::new(vec![relation("a", "b", "e", 2), relation("b", "c", "e", 2)])
            .expect("board");
        let result = resolve_tile_path_with_distance(
            &board,
            &Pattern::slide(dir("e")),
            &tile("a"),
            &tile("c"),
            constraint(3, true),
        )
        .expect("supported");
        assert!(result.is_none());
    }

    #[test]
    fn test_fixed_requires_exact_total_distance() {
        let board = line_board(4);
        let pattern = Pattern::Fixed(vec![dir("e"), dir("e")]);

        let hit = resolve_tile_path_with_distance(
            &board,
            &pattern,
            &tile("t0"),
            &tile("t2"),
            constraint(2, false),
        )
        .expect("supported");
        assert!(hit.is_some());

        let miss = resolve_tile_path_with_distance(
            &board,
            &pattern,
            &tile("t0"),
            &tile("t2"),
            constraint(3, false),
        )
        .expect("supported");
        assert!(miss.is_none());
    }

    #[test]
    fn test_any_pattern_unsupported() {
        let board = line_board(3);
        let result = resolve_tile_path_with_distance(
            &board,
            &Pattern::Any,
            &tile("t0"),
            &tile("t2"),
            constraint(2, false),
        );
        assert!(matches!(
            result,
            Err(BoardError::UnsupportedPattern { pattern: "any", .. })
        ));
    }
}
