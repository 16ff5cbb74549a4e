use std::fmt;

use crate::MAX_WEIGHT;
use crate::error::GraphError;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

/// Undirected graph over an adjacency matrix.
///
/// `W[u][v] == W[v][u]` always holds, the diagonal stays zero, and a zero entry means "no edge".
/// Unweighted edges carry weight 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    // Row-major `vertex_count * vertex_count`.
    matrix: Vec<u64>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidSize { vertex_count });
        }
        Ok(Self {
            vertex_count,
            matrix: vec![0; vertex_count * vertex_count],
            edge_count: 0,
        })
    }

    /// Builds a weighted graph, stopping at the first rejected edge.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &(u, v, weight) in edges {
            graph.add_weighted_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_weighted_edge(u, v, 1)
    }

    /// Sets `W[u][v] = W[v][u] = weight`; the last write wins and weight 0 clears the edge.
    ///
    /// Weights above [`MAX_WEIGHT`] are rejected.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: i64) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            tracing::debug!(vertex = u, "rejected self-loop");
            return Err(GraphError::SelfLoop { vertex: u });
        }
        let Ok(stored) = u64::try_from(weight) else {
            tracing::debug!(from = u, to = v, weight, "rejected negative weight");
            return Err(GraphError::NegativeWeight {
                from: u,
                to: v,
                weight,
            });
        };
        if stored > MAX_WEIGHT {
            tracing::debug!(from = u, to = v, weight, "rejected oversized weight");
            return Err(GraphError::WeightTooLarge {
                from: u,
                to: v,
                weight,
                max: MAX_WEIGHT,
            });
        }

        self.set(u, v, stored);
        Ok(())
    }

    /// Returns whether an edge was present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let present = self.matrix[u * self.vertex_count + v] != 0;
        if present {
            self.set(u, v, 0);
        }
        Ok(present)
    }

    /// Appends an isolated vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        let old = self.vertex_count;
        let new = old + 1;
        let mut matrix = vec![0; new * new];
        for u in 0..old {
            matrix[u * new..u * new + old].copy_from_slice(self.row(u));
        }
        self.matrix = matrix;
        self.vertex_count = new;
        old
    }

    pub fn weight(&self, u: usize, v: usize) -> Result<Option<u64>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let w = self.matrix[u * self.vertex_count + v];
        Ok((w != 0).then_some(w))
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        Ok(self.weight(u, v)?.is_some())
    }

    pub fn degree(&self, u: usize) -> Result<usize> {
        Ok(self.neighbors(u)?.count())
    }

    /// Neighbors of `u` with their weights, in ascending vertex order.
    pub fn neighbors(&self, u: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(u)?;
        Ok(self.neighbors_unchecked(u))
    }

    /// Every edge once, as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> Vec<(usize, usize, u64)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in 0..self.vertex_count {
            for edge in self.neighbors_unchecked(u) {
                if u < edge.to {
                    edges.push((u, edge.to, edge.weight));
                }
            }
        }
        edges
    }

    #[inline]
    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    #[inline]
    pub(crate) fn neighbors_unchecked(&self, u: usize) -> Neighbors<'_> {
        let row = self.row(u);
        Neighbors {
            row,
            front: 0,
            back: row.len(),
        }
    }

    #[inline]
    fn row(&self, u: usize) -> &[u64] {
        let start = u * self.vertex_count;
        &self.matrix[start..start + self.vertex_count]
    }

    fn set(&mut self, u: usize, v: usize, weight: u64) {
        let n = self.vertex_count;
        let had = self.matrix[u * n + v] != 0;
        match (had, weight != 0) {
            (false, true) => self.edge_count += 1,
            (true, false) => self.edge_count -= 1,
            _ => {}
        }
        self.matrix[u * n + v] = weight;
        self.matrix[v * n + u] = weight;
    }
}

/// Renders the adjacency matrix; absent off-diagonal entries print as `-`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for v in 0..self.vertex_count {
            write!(f, " {v:>3}")?;
        }
        writeln!(f)?;

        for u in 0..self.vertex_count {
            write!(f, "{u:>3}")?;
            for (v, &w) in self.row(u).iter().enumerate() {
                if w == 0 && u != v {
                    write!(f, " {:>3}", "-")?;
                } else {
                    write!(f, " {w:>3}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct Neighbors<'a> {
    row: &'a [u64],
    front: usize,
    back: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let to = self.front;
            self.front += 1;
            let weight = self.row[to];
            if weight != 0 {
                return Some(Edge { to, weight });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            self.back -= 1;
            let weight = self.row[self.back];
            if weight != 0 {
                return Some(Edge {
                    to: self.back,
                    weight,
                });
            }
        }
        None
    }
}
