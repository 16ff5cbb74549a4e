use crate::INF;
use crate::error::Result;
use crate::graph::Graph;
use crate::paths::ShortestPaths;

/// O(V^2) Dijkstra: each round scans for the closest unsettled vertex.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra_linear_scan(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    let mut paths = ShortestPaths::new(n, source);
    let mut settled = vec![false; n];

    for step in 1..n {
        let Some(u) = closest_unsettled(paths.distances(), &settled) else {
            break;
        };
        settled[u] = true;
        paths.record_settled(u);

        let d = paths.distances()[u];
        tracing::debug!(step, vertex = u, distance = d, "settled");

        for edge in graph.neighbors_unchecked(u) {
            let v = edge.to;
            if settled[v] {
                continue;
            }
            let cand = d.saturating_add(edge.weight).min(INF);
            if paths.relax(v, cand, u) {
                tracing::trace!(vertex = v, distance = cand, via = u, "relaxed");
            }
        }
    }

    // After V - 1 rounds the one vertex left over is already final.
    if let Some(last) = closest_unsettled(paths.distances(), &settled) {
        paths.record_settled(last);
        tracing::debug!(step = n, vertex = last, distance = paths.distances()[last], "settled");
    }

    Ok(paths)
}

/// Lowest finite distance among unsettled vertices; ties go to the lower index.
fn closest_unsettled(distance: &[u64], settled: &[bool]) -> Option<usize> {
    let mut best = None;
    let mut best_dist = INF;
    for (v, (&d, &done)) in distance.iter().zip(settled).enumerate() {
        if !done && d < best_dist {
            best = Some(v);
            best_dist = d;
        }
    }
    best
}
