//! The `edgelist` view (spec §4.7): every edge of a graph, visiting vertices
//! in sequence order and flattening their outgoing-edge sequences.
//!
//! Vertices with no outgoing edges contribute nothing and are skipped
//! without a vacant step in the output, the same "skip empty buckets without
//! emitting a marker" shape as `std::iter::Iterator::flatten`.

use crate::descriptor::EdgeInfo;
use crate::graph::{IntoEdges, IntoVertices, VertexRef};

/// A lazy sequence over every edge of `g`, in vertex-then-edge order.
pub struct EdgeList<G: IntoVertices + IntoEdges> {
    graph: G,
    vertices: G::Vertices,
    current: Option<G::Edges>,
}

impl<G: IntoVertices + IntoEdges> Iterator for EdgeList<G> {
    type Item = EdgeInfo<G, G::EdgeRef>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edges) = self.current.as_mut() {
                if let Some(e) = edges.next() {
                    return Some(EdgeInfo::new(self.graph, e));
                }
                self.current = None;
            }
            let v = self.vertices.next()?;
            self.current = Some(self.graph.edges(v.id()));
        }
    }
}

/// Build an [`EdgeList`] over every edge of `g`.
pub fn edgelist<G: IntoVertices + IntoEdges>(g: G) -> EdgeList<G> {
    EdgeList {
        graph: g,
        vertices: g.vertices(),
        current: None,
    }
}

#[cfg(test)]
mod tests {
    use super::edgelist;
    use crate::tests_support::VecGraph;

    #[test]
    fn visits_every_edge_in_vertex_order() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (2, 0, 1.0), (2, 1, 1.0)]);
        let targets: Vec<usize> = edgelist(&g).map(|e| e.target_id()).collect();
        assert_eq!(targets, vec![1, 0, 1]);
    }

    #[test]
    fn skips_vertices_with_no_outgoing_edges() {
        let g = VecGraph::from_arcs(3, &[(0, 2, 1.0)]);
        let targets: Vec<usize> = edgelist(&g).map(|e| e.target_id()).collect();
        assert_eq!(targets, vec![2]);
    }

    #[test]
    fn empty_graph_yields_no_edges() {
        let g = VecGraph::from_arcs(0, &[]);
        assert_eq!(edgelist(&g).count(), 0);
    }
}
