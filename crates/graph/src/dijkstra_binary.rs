use heap::MinHeap;

use crate::INF;
use crate::error::Result;
use crate::graph::Graph;
use crate::paths::ShortestPaths;

/// Dijkstra over a min-heap of `(distance, vertex)` with lazy deletion.
///
/// Every successful relaxation pushes a fresh pair; pops for settled vertices or stale distances
/// are skipped. The tuple order settles equal distances by lowest vertex index, matching
/// [`dijkstra_linear_scan`](crate::dijkstra_linear_scan).
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_binary_heap(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::new(n, source);
    let mut settled = vec![false; n];

    let mut heap: MinHeap<(u64, usize)> = MinHeap::with_capacity(n);
    heap.insert((0, source));

    while !heap.is_empty() {
        let (d, u) = heap.extract_root()?;
        if settled[u] || d != paths.distances()[u] {
            continue;
        }
        settled[u] = true;
        paths.record_settled(u);
        tracing::debug!(
            step = paths.settle_order().len(),
            vertex = u,
            distance = d,
            "settled"
        );

        for edge in graph.neighbors_unchecked(u) {
            let v = edge.to;
            if settled[v] {
                continue;
            }
            let cand = d.saturating_add(edge.weight).min(INF);
            if paths.relax(v, cand, u) {
                tracing::trace!(vertex = v, distance = cand, via = u, "relaxed");
                heap.insert((cand, v));
            }
        }
    }

    Ok(paths)
}
