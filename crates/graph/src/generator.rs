use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::Graph;

const W_MAX: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    Grid,
    AlmostLine,
    Disconnected,
}

pub const ALL_CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::Grid,
    GraphCase::AlmostLine,
    GraphCase::Disconnected,
];

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::Grid => "grid",
            Self::AlmostLine => "almost_line",
            Self::Disconnected => "disconnected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: usize,
}

/// Seeded weighted graph with roughly `size` vertices. Edge weights are in `1..=1_000_000`.
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> Result<GeneratedGraph> {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(8), seed, 3),
        GraphCase::DenseRandom => dense_random_case(size.max(8), seed),
        GraphCase::Grid => grid_case(size.max(16), seed),
        GraphCase::AlmostLine => almost_line_case(size.max(8), seed),
        GraphCase::Disconnected => disconnected_case(size.max(8), seed),
    }
}

fn sparse_random_case(n: usize, seed: u64, edge_factor: usize) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(1..=W_MAX));
    }

    let source = rng.random_range(0..n);
    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

fn dense_random_case(n: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v, rng.random_range(1..=W_MAX)));
        }
    }

    let source = rng.random_range(0..n);
    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

fn grid_case(size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 2);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            if j + 1 < len {
                edges.push((index(i, j), index(i, j + 1), rng.random_range(1..=W_MAX)));
            }
            if i + 1 < len {
                edges.push((index(i, j), index(i + 1, j), rng.random_range(1..=W_MAX)));
            }
        }
    }

    edges.shuffle(&mut rng);
    let source = rng.random_range(0..n);
    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

fn almost_line_case(n: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(1..=W_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        push_unique_edge(&mut edges, &mut used, a, b, rng.random_range(1..=W_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    let source = perm[0];
    for edge in &mut edges {
        edge.0 = perm[edge.0];
        edge.1 = perm[edge.1];
    }

    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

/// Two random components with no edge between them; the source lies in the first.
fn disconnected_case(n: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = n / 2;
    let mut edges = Vec::with_capacity(n * 3);
    let mut used = HashSet::with_capacity(n * 6);

    for (lo, hi) in [(0, half), (half, n)] {
        let m_target = (hi - lo).saturating_mul(3).min(complete_edges(hi - lo));
        let mut added = 0;
        while added < m_target {
            let u = rng.random_range(lo..hi);
            let v = rng.random_range(lo..hi);
            if push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(1..=W_MAX)) {
                added += 1;
            }
        }
    }

    let source = rng.random_range(0..half);
    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

/// Undirected pairs on `n` vertices.
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1)) / 2
}

fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

fn push_unique_edge(
    edges: &mut Vec<(usize, usize, i64)>,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    weight: i64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u.min(v), u.max(v))) {
        edges.push((u, v, weight));
        true
    } else {
        false
    }
}
