//! Bellman–Ford shortest paths (spec §4.11), with negative-cycle detection
//! and extraction.
//!
//! Grounded on the teacher's own `algo::bellman_ford`, generalised from a
//! `NodeIndexable + IntoEdges` petgraph graph to this crate's
//! [`IntoVertices`] + [`IntoEdges`] + [`VertexIndexable`] trait family, and
//! extended with the visitor hooks and the explicit negative-cycle witness
//! the specification calls for (the teacher's version only ever reports
//! `NegativeCycle(())`, with no way to recover which vertices are on it).

use crate::error::GraphError;
use crate::graph::{IntoEdges, IntoVertices, SourcedEdgeRef, VertexIndexable};
use crate::shortest_paths::common::{check_buffer_len, shortest_path_invalid_distance, shortest_path_zero, FloatMeasure, NullPredecessors, PredecessorSink};
use crate::views::edgelist::edgelist;
use crate::visitor::{EmptyVisitor, Visitor};

/// Run Bellman–Ford from one or more `sources`, driving `visitor`'s hooks and
/// recording predecessors into `predecessors`.
///
/// Returns `(distances, None)` if no negative-weight cycle is reachable from
/// any source; `(distances, Some(u))` if relaxation did not converge after
/// `num_vertices - 1` passes, where `u` is a vertex whose incoming edge on
/// the final verification pass still relaxes — pass it to
/// [`find_negative_cycle`] to recover the cycle itself. `distances` is not
/// meaningful for vertices downstream of the cycle in that case.
pub fn bellman_ford_core<G, D, P, Vis>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: impl Fn(G::EdgeRef) -> D,
    mut predecessors: P,
    mut visitor: Vis,
) -> Result<(Vec<D>, Option<G::VertexId>), GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
    D: FloatMeasure,
    P: PredecessorSink<G::VertexId>,
    Vis: Visitor<G>,
{
    let n = g.vertex_bound();
    let mut distances = vec![shortest_path_invalid_distance::<D>(); n];
    for s in sources {
        let sidx = g.to_index(s);
        if sidx >= n {
            return Err(GraphError::SourceOutOfRange {
                source: sidx,
                num_vertices: n,
            });
        }
        distances[sidx] = shortest_path_zero();
        visitor.on_discover_vertex(g, s);
    }

    for _ in 1..n {
        let mut relaxed_any = false;
        for edge in edgelist(g) {
            visitor.on_examine_edge(g, edge.edge_ref());
            let u = edge.source_id();
            let v = edge.target_id();
            let uidx = g.to_index(u);
            let vidx = g.to_index(v);
            let candidate = distances[uidx] + weight(edge.edge_ref());
            if candidate < distances[vidx] {
                distances[vidx] = candidate;
                predecessors.set(vidx, u);
                relaxed_any = true;
                visitor.on_edge_relaxed(g, edge.edge_ref());
            } else {
                visitor.on_edge_not_relaxed(g, edge.edge_ref());
            }
        }
        if !relaxed_any {
            break;
        }
    }

    let mut witness = None;
    for edge in edgelist(g) {
        let u = edge.source_id();
        let v = edge.target_id();
        let uidx = g.to_index(u);
        let vidx = g.to_index(v);
        let candidate = distances[uidx] + weight(edge.edge_ref());
        if candidate < distances[vidx] {
            predecessors.set(vidx, u);
            visitor.on_edge_not_minimized(g, edge.edge_ref());
            witness = Some(u);
            break;
        }
        visitor.on_edge_minimized(g, edge.edge_ref());
    }
    Ok((distances, witness))
}

/// Shortest distances from `source`, Bellman–Ford style: negative edge
/// weights are permitted as long as no reachable cycle sums negative.
/// `predecessors` must be at least `vertex_bound()` long.
pub fn bellman_ford<G, D>(
    g: G,
    source: G::VertexId,
    weight: impl Fn(G::EdgeRef) -> D,
    predecessors: &mut [G::VertexId],
) -> Result<(Vec<D>, Option<G::VertexId>), GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
    D: FloatMeasure,
{
    check_buffer_len(g, predecessors.len())?;
    bellman_ford_core(g, std::iter::once(source), weight, predecessors, EmptyVisitor)
}

/// Shortest distances-only from `source`: no predecessor buffer, no visitor.
pub fn bellman_ford_distances<G, D>(g: G, source: G::VertexId, weight: impl Fn(G::EdgeRef) -> D) -> Result<(Vec<D>, Option<G::VertexId>), GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
    D: FloatMeasure,
{
    bellman_ford_core(g, std::iter::once(source), weight, NullPredecessors, EmptyVisitor)
}

/// Multi-source Bellman–Ford: every source starts the search at distance
/// zero. `predecessors` must be at least `vertex_bound()` long.
pub fn bellman_ford_multi_source<G, D>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: impl Fn(G::EdgeRef) -> D,
    predecessors: &mut [G::VertexId],
) -> Result<(Vec<D>, Option<G::VertexId>), GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
    D: FloatMeasure,
{
    check_buffer_len(g, predecessors.len())?;
    bellman_ford_core(g, sources, weight, predecessors, EmptyVisitor)
}

/// Run Bellman–Ford from `source`, driving `visitor`'s hooks. Predecessors
/// are not recorded.
pub fn bellman_ford_with_visitor<G, D, Vis>(
    g: G,
    source: G::VertexId,
    weight: impl Fn(G::EdgeRef) -> D,
    visitor: Vis,
) -> Result<(Vec<D>, Option<G::VertexId>), GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
    D: FloatMeasure,
    Vis: Visitor<G>,
{
    bellman_ford_core(g, std::iter::once(source), weight, NullPredecessors, visitor)
}

/// Walk predecessors from `start` until `start` is revisited, returning the
/// cycle as a sequence of ids starting and ending at `start`.
///
/// Per spec §9's open question about the original's ambiguous termination
/// condition, the walk is capped at `num_vertices(g)` steps; if it has not
/// revisited `start` by then, this returns [`GraphError::InternalInvariant`]
/// rather than looping forever.
pub fn find_negative_cycle<G>(g: G, predecessors: &[G::VertexId], start: G::VertexId) -> Result<Vec<G::VertexId>, GraphError>
where
    G: VertexIndexable,
{
    let n = g.vertex_bound();
    let mut cycle = vec![start];
    let mut current = start;
    for _ in 0..n {
        let idx = g.to_index(current);
        current = predecessors[idx];
        cycle.push(current);
        if current == start {
            return Ok(cycle);
        }
    }
    Err(GraphError::InternalInvariant(
        "negative-cycle walk did not revisit its start within num_vertices steps",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WithEdgeValue;
    use crate::tests_support::VecGraph;

    #[test]
    fn matches_dijkstra_on_a_non_negative_graph() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0)]);
        let mut pred = vec![usize::MAX; 4];
        let (d, witness) = bellman_ford(&g, 0, |e| *e.value(), &mut pred).unwrap();
        assert_eq!(witness, None);
        assert_eq!(d, vec![0.0, 2.0, 1.0, 3.0]);
        assert_eq!(pred[1], 2);
    }

    #[test]
    fn negative_edges_are_fine_without_a_negative_cycle() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 2.0), (1, 2, -1.0)]);
        let (d, witness) = bellman_ford_distances(&g, 0, |e| *e.value()).unwrap();
        assert_eq!(witness, None);
        assert_eq!(d, vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn negative_cycle_is_detected_and_extracted() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (1, 2, -1.0), (2, 1, -1.0)]);
        let mut pred = vec![usize::MAX; 3];
        let (_, witness) = bellman_ford(&g, 0, |e| *e.value(), &mut pred).unwrap();
        let u = witness.expect("negative cycle reachable from source");
        let cycle = find_negative_cycle(&g, &pred, u).unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert!(cycle.len() >= 2);
    }

    #[test]
    fn source_out_of_range_is_reported() {
        let g = VecGraph::from_arcs(2, &[]);
        let err = bellman_ford_distances(&g, 9, |e| *e.value()).unwrap_err();
        assert_eq!(
            err,
            GraphError::SourceOutOfRange {
                source: 9,
                num_vertices: 2
            }
        );
    }
}
