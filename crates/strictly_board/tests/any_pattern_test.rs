//! `Any` resolution checked against a brute-force shortest-path oracle.

mod common;

use common::{relation, tile};
use proptest::prelude::*;
use strictly_board::{Board, Pattern, ShortestPaths, resolve_tile_path};

/// Floyd-Warshall over tile ids `n0..n{count}`.
fn oracle(count: usize, edges: &[(usize, usize, u32)]) -> Vec<Vec<Option<u64>>> {
    let mut dist = vec![vec![None; count]; count];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for &(u, v, w) in edges {
        let w = u64::from(w);
        dist[u][v] = Some(dist[u][v].map_or(w, |d: u64| d.min(w)));
    }
    for k in 0..count {
        for i in 0..count {
            for j in 0..count {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (2usize..8).prop_flat_map(|count| {
        let edge = (0..count, 0..count, 1u32..10).prop_filter("no self relations", |(u, v, _)| u != v);
        (Just(count), prop::collection::vec(edge, 1..20))
    })
}

fn build(edges: &[(usize, usize, u32)]) -> Board {
    let relations = edges
        .iter()
        .enumerate()
        .map(|(k, &(u, v, w))| relation(&format!("n{}", u), &format!("n{}", v), &format!("d{}", k), w))
        .collect();
    Board::new(relations).expect("non-empty")
}

proptest! {
    #[test]
    fn prop_any_pattern_matches_oracle((count, edges) in edges_strategy()) {
        let board = build(&edges);
        let expected = oracle(count, &edges);
        let shortest = ShortestPaths::compute(&board);

        for u in 0..count {
            for v in 0..count {
                let (from, to) = (tile(&format!("n{}", u)), tile(&format!("n{}", v)));
                if !board.contains_tile(&from) || !board.contains_tile(&to) {
                    continue;
                }
                prop_assert_eq!(shortest.distance(&from, &to), expected[u][v]);

                let resolved = resolve_tile_path(&board, &Pattern::Any, &from, &to);
                match expected[u][v] {
                    Some(d) if u != v => {
                        let path = resolved.expect("reachable pair resolves");
                        prop_assert_eq!(path.distance(), d);
                        prop_assert_eq!(path.from(), &from);
                        prop_assert_eq!(path.to(), &to);
                    }
                    _ => prop_assert!(resolved.is_none()),
                }
            }
        }
    }
}
