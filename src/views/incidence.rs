//! The `incidence` view (spec §4.5): the edges incident to one vertex.
//!
//! For a directed (or otherwise sourced-and-ordered) graph this is exactly
//! `edges(g, u)`. For an [`UnorderedEdges`](crate::graph::UnorderedEdges)
//! graph an edge's `(source, target)` pair may have been stored from either
//! endpoint's perspective, so [`IncidenceEdge::other_id`] resolves "the
//! endpoint that isn't `u`" instead of always trusting `target_id`.

use crate::graph::{EdgeRef, GraphBase, IntoEdges, SourcedEdgeRef};

/// One edge incident to the vertex an [`Incidence`] view was built for.
#[derive(Clone, Copy)]
pub struct IncidenceEdge<G: GraphBase, E: EdgeRef<VertexId = G::VertexId>> {
    graph: G,
    from: G::VertexId,
    edge: E,
}

impl<G: GraphBase, E: EdgeRef<VertexId = G::VertexId>> IncidenceEdge<G, E> {
    /// The graph this edge belongs to.
    pub fn graph(&self) -> G {
        self.graph
    }

    /// The vertex this incidence view was built around.
    pub fn from(&self) -> G::VertexId {
        self.from
    }

    /// The edge's target endpoint, as reported by the graph directly.
    pub fn target_id(&self) -> G::VertexId {
        self.edge.target_id()
    }

    /// The underlying edge reference.
    pub fn edge_ref(&self) -> E {
        self.edge
    }
}

impl<G, E> IncidenceEdge<G, E>
where
    G: GraphBase,
    E: SourcedEdgeRef<VertexId = G::VertexId>,
{
    /// The endpoint that is not [`from`](Self::from).
    ///
    /// For a directed graph `edge.source_id() == from` always holds, so this
    /// is equivalent to [`target_id`](Self::target_id); for an unordered
    /// graph, where a single stored edge may be handed back from either
    /// endpoint's adjacency list, this picks whichever endpoint the caller
    /// did not already know.
    pub fn other_id(&self) -> G::VertexId {
        if self.edge.source_id() == self.from {
            self.edge.target_id()
        } else {
            self.edge.source_id()
        }
    }
}

impl<G, E> IncidenceEdge<G, E>
where
    G: GraphBase,
    E: crate::graph::WithEdgeValue<VertexId = G::VertexId>,
{
    /// The edge's projected value.
    pub fn value(&self) -> &E::Value {
        self.edge.value()
    }
}

/// A lazy sequence over the edges incident to one vertex.
pub struct Incidence<G: IntoEdges> {
    graph: G,
    from: G::VertexId,
    inner: G::Edges,
}

impl<G: IntoEdges> Iterator for Incidence<G> {
    type Item = IncidenceEdge<G, G::EdgeRef>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|edge| IncidenceEdge {
            graph: self.graph,
            from: self.from,
            edge,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Build an [`Incidence`] view over the edges of vertex `u`.
pub fn incidence<G: IntoEdges>(g: G, u: G::VertexId) -> Incidence<G> {
    Incidence {
        graph: g,
        from: u,
        inner: g.edges(u),
    }
}

#[cfg(test)]
mod tests {
    use super::incidence;
    use crate::tests_support::VecGraph;

    #[test]
    fn yields_outgoing_edges_of_one_vertex() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 4.0), (0, 2, 9.0), (1, 2, 1.0)]);
        let targets: Vec<usize> = incidence(&g, 0).map(|e| e.target_id()).collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn other_id_resolves_the_far_endpoint_on_undirected_storage() {
        let g = VecGraph::from_undirected_arcs(3, &[(0, 1, 4.0)]);
        let from_0: Vec<usize> = incidence(&g, 0).map(|e| e.other_id()).collect();
        let from_1: Vec<usize> = incidence(&g, 1).map(|e| e.other_id()).collect();
        assert_eq!(from_0, vec![1]);
        assert_eq!(from_1, vec![0]);
    }

    #[test]
    fn vertex_with_no_edges_yields_empty_sequence() {
        let g = VecGraph::from_arcs(2, &[]);
        assert_eq!(incidence(&g, 1).count(), 0);
    }
}
