//! All-pairs shortest paths over a board (Johnson's algorithm).

use crate::{Board, Tile, TilePath};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, error, instrument};

/// Shortest distances and predecessors between every pair of tiles.
///
/// Node `i` is `board.tiles()[i]`. Edges are relaxed in sorted order, so
/// the same board always yields the same paths.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    index: HashMap<Tile, usize>,
    node_count: usize,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Runs Johnson's algorithm over the whole board.
    ///
    /// Cost grows roughly with `tiles * relations * log(tiles)`; callers
    /// should cache the result per board.
    #[instrument(skip(board), fields(tiles = board.tiles().len(), relations = board.relations().len()))]
    pub fn compute(board: &Board) -> Self {
        let index: HashMap<Tile, usize> = board
            .tiles()
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        let n = board.tiles().len();

        // Parallel relations collapse to their cheapest member.
        let mut weights: HashMap<(usize, usize), i64> = HashMap::new();
        for relation in board.relations() {
            let u = index[relation.from()];
            let v = index[relation.to()];
            let w = i64::from(relation.distance());
            weights
                .entry((u, v))
                .and_modify(|e| *e = (*e).min(w))
                .or_insert(w);
        }
        let mut edges: Vec<(usize, usize, i64)> =
            weights.into_iter().map(|((u, v), w)| (u, v, w)).collect();
        edges.sort_unstable();

        let potentials = bellman_ford(n, &edges).unwrap_or_else(|| {
            error!("Negative cycle in board graph; distances are unreliable");
            vec![0; n]
        });

        let mut adjacency: Vec<Vec<(usize, i64)>> = vec![Vec::new(); n];
        for &(u, v, w) in &edges {
            adjacency[u].push((v, w + potentials[u] - potentials[v]));
        }

        let mut distances = vec![None; n * n];
        let mut predecessors = vec![None; n * n];
        for source in 0..n {
            let (dist, pred) = dijkstra(source, &adjacency);
            for target in 0..n {
                if let Some(d) = dist[target] {
                    let real = d - potentials[source] + potentials[target];
                    distances[source * n + target] = u64::try_from(real).ok();
                }
                predecessors[source * n + target] = pred[target];
            }
        }

        debug!(nodes = n, edges = edges.len(), "All-pairs shortest paths computed");
        Self {
            index,
            node_count: n,
            distances,
            predecessors,
        }
    }

    /// Shortest distance from `from` to `to`, `None` when unreachable.
    ///
    /// The distance from a tile to itself is zero.
    pub fn distance(&self, from: &Tile, to: &Tile) -> Option<u64> {
        let (u, v) = (*self.index.get(from)?, *self.index.get(to)?);
        self.distances[u * self.node_count + v]
    }

    /// Reconstructs the shortest route as a [`TilePath`].
    ///
    /// Each hop is mapped back through [`Board::relation_between`]. `None`
    /// when the tiles are unknown, equal, or unreachable.
    #[instrument(level = "trace", skip_all, fields(from = %from, to = %to))]
    pub fn path(&self, board: &Board, from: &Tile, to: &Tile) -> Option<TilePath> {
        let (u, v) = (*self.index.get(from)?, *self.index.get(to)?);
        if u == v {
            return None;
        }
        self.distances[u * self.node_count + v]?;

        let mut hops = vec![v];
        let mut current = v;
        while current != u {
            current = self.predecessors[u * self.node_count + current]?;
            hops.push(current);
        }
        hops.reverse();

        let tiles = board.tiles();
        let mut relations = Vec::with_capacity(hops.len() - 1);
        for pair in hops.windows(2) {
            let (a, b) = (&tiles[pair[0]], &tiles[pair[1]]);
            match board.relation_between(a, b) {
                Some(relation) => relations.push(relation.clone()),
                None => {
                    error!(from = %a, to = %b, "Shortest-path hop has no matching relation");
                    return None;
                }
            }
        }
        TilePath::new(relations).ok()
    }
}

/// Potentials from a synthetic source joined to every node by a zero edge.
///
/// `None` when a negative cycle is reachable.
fn bellman_ford(n: usize, edges: &[(usize, usize, i64)]) -> Option<Vec<i64>> {
    // Every node starts at the synthetic source's zero-weight edge.
    let mut h = vec![0i64; n];
    for _ in 0..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            if h[u] + w < h[v] {
                h[v] = h[u] + w;
                changed = true;
            }
        }
        if !changed {
            return Some(h);
        }
    }
    let relaxes = edges.iter().any(|&(u, v, w)| h[u] + w < h[v]);
    (!relaxes).then_some(h)
}

/// Single-source shortest paths over non-negative reweighted edges.
fn dijkstra(source: usize, adjacency: &[Vec<(usize, i64)>]) -> (Vec<Option<i64>>, Vec<Option<usize>>) {
    let n = adjacency.len();
    let mut dist: Vec<Option<i64>> = vec![None; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse((0i64, source)));
    while let Some(Reverse((d, u))) = heap.pop() {
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        for &(v, w) in &adjacency[u] {
            let candidate = d + w;
            if dist[v].is_none_or(|best| candidate < best) {
                dist[v] = Some(candidate);
                pred[v] = Some(u);
                heap.push(Reverse((candidate, v)));
            }
        }
    }
    (dist, pred)
}
