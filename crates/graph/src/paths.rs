use std::fmt;

use crate::INF;
use crate::error::GraphError;
use crate::error::Result;

/// Distances and predecessor links from one source, indexed by vertex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distance: Vec<u64>,
    predecessor: Vec<Option<usize>>,
    settle_order: Vec<usize>,
}

impl ShortestPaths {
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut distance = vec![INF; vertex_count];
        distance[source] = 0;
        Self {
            source,
            distance,
            predecessor: vec![None; vertex_count],
            settle_order: Vec::with_capacity(vertex_count),
        }
    }

    #[inline]
    pub(crate) fn relax(&mut self, v: usize, candidate: u64, via: usize) -> bool {
        if candidate < self.distance[v] {
            self.distance[v] = candidate;
            self.predecessor[v] = Some(via);
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn record_settled(&mut self, u: usize) {
        self.settle_order.push(u);
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.distance.len()
    }

    /// Raw distances; unreachable vertices hold [`INF`].
    #[inline]
    pub fn distances(&self) -> &[u64] {
        &self.distance
    }

    pub fn distance(&self, v: usize) -> Option<u64> {
        self.distance.get(v).copied().filter(|&d| d < INF)
    }

    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessor.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices in the order the search finalized them, source first.
    pub fn settle_order(&self) -> &[usize] {
        &self.settle_order
    }

    /// Follows predecessor links from `target` back to the source. `Ok(None)` when unreachable.
    pub fn path_to(&self, target: usize) -> Result<Option<Path>> {
        let vertex_count = self.vertex_count();
        if target >= vertex_count {
            return Err(GraphError::InvalidVertex {
                vertex: target,
                vertex_count,
            });
        }
        if !self.is_reachable(target) {
            return Ok(None);
        }

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor[current] {
            // A chain longer than V - 1 links would mean a cycle in the predecessor tree.
            if vertices.len() >= vertex_count {
                return Ok(None);
            }
            vertices.push(prev);
            current = prev;
        }
        debug_assert_eq!(current, self.source);
        vertices.reverse();
        Ok(Some(Path { vertices }))
    }
}

/// A source-to-target vertex sequence; renders as `0 -> 3 -> 4`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
