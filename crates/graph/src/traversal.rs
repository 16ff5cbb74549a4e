use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::Result;
use crate::graph::Graph;

/// Breadth-first visitation from a start vertex.
///
/// Vertices are marked when enqueued, so each one enters the queue at most once.
pub struct Bfs<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    queue: VecDeque<(usize, usize)>,
}

impl<'a> Bfs<'a> {
    pub fn new(graph: &'a Graph, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = vec![false; graph.vertex_count()];
        visited[start] = true;
        let mut queue = VecDeque::with_capacity(graph.vertex_count());
        queue.push_back((start, 0));
        tracing::trace!(start, "bfs started");
        Ok(Self {
            graph,
            visited,
            queue,
        })
    }

    /// Next vertex with its hop count from the start.
    pub fn next_with_depth(&mut self) -> Option<(usize, usize)> {
        let (u, depth) = self.queue.pop_front()?;
        for edge in self.graph.neighbors_unchecked(u) {
            if !self.visited[edge.to] {
                self.visited[edge.to] = true;
                self.queue.push_back((edge.to, depth + 1));
            }
        }
        Some((u, depth))
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(v, _)| v)
    }
}

impl FusedIterator for Bfs<'_> {}

/// Depth-first visitation driven by an explicit stack.
///
/// Neighbors are pushed in descending order so the smallest is explored first, which yields the
/// same order as [`dfs_recursive`]. A vertex may sit on the stack several times; only the first
/// pop emits it.
pub struct DfsStack<'a> {
    graph: &'a Graph,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a> DfsStack<'a> {
    pub fn new(graph: &'a Graph, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;
        tracing::trace!(start, "dfs started");
        Ok(Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            stack: vec![start],
        })
    }
}

impl Iterator for DfsStack<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;
            for edge in self.graph.neighbors_unchecked(u).rev() {
                if !self.visited[edge.to] {
                    self.stack.push(edge.to);
                }
            }
            return Some(u);
        }
        None
    }
}

impl FusedIterator for DfsStack<'_> {}

/// Recursive depth-first visitation. Recursion depth is bounded by the vertex count.
pub fn dfs_recursive(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    graph.check_vertex(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn visit(graph: &Graph, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
    visited[u] = true;
    order.push(u);
    for edge in graph.neighbors_unchecked(u) {
        if !visited[edge.to] {
            visit(graph, edge.to, visited, order);
        }
    }
}
