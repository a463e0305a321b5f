//! Board builders shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use strictly_board::{Board, Direction, Tile, TileRelation};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn tile(id: &str) -> Tile {
    Tile::new(id)
}

pub fn dir(id: &str) -> Direction {
    Direction::new(id)
}

pub fn relation(from: &str, to: &str, direction: &str, distance: u32) -> TileRelation {
    TileRelation::new(tile(from), tile(to), dir(direction), distance)
        .expect("valid relation")
}

/// `t0 -> t1 -> ... -> t{len-1}` going "e", and back going "w".
pub fn line_board(len: usize) -> Board {
    let mut relations = Vec::new();
    for i in 0..len - 1 {
        let (a, b) = (format!("t{}", i), format!("t{}", i + 1));
        relations.push(relation(&a, &b, "e", 1));
        relations.push(relation(&b, &a, "w", 1));
    }
    Board::new(relations).expect("line board")
}

pub fn grid_tile(x: usize, y: usize) -> String {
    format!("x{}y{}", x, y)
}

/// `width` by `height` grid with n/s/e/w relations of distance 1 and,
/// when `diagonals` is set, ne/nw/se/sw relations of distance 2.
pub fn grid_board(width: usize, height: usize, diagonals: bool) -> Board {
    let mut steps: Vec<(&str, isize, isize, u32)> =
        vec![("north", 0, 1, 1), ("south", 0, -1, 1), ("east", 1, 0, 1), ("west", -1, 0, 1)];
    if diagonals {
        steps.extend([
            ("northeast", 1, 1, 2),
            ("northwest", -1, 1, 2),
            ("southeast", 1, -1, 2),
            ("southwest", -1, -1, 2),
        ]);
    }

    let mut relations = Vec::new();
    for y in 0..height {
        for x in 0..width {
            for &(name, dx, dy, distance) in &steps {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                relations.push(relation(
                    &grid_tile(x, y),
                    &grid_tile(nx as usize, ny as usize),
                    name,
                    distance,
                ));
            }
        }
    }
    Board::new(relations).expect("grid board")
}

/// Single directed cycle `c0 -> c1 -> ... -> c0` going "cw".
pub fn ring_board(len: usize) -> Board {
    let relations = (0..len)
        .map(|i| relation(&format!("c{}", i), &format!("c{}", (i + 1) % len), "cw", 1))
        .collect();
    Board::new(relations).expect("ring board")
}

pub fn shared(board: Board) -> Arc<Board> {
    Arc::new(board)
}
