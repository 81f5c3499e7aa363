//! The `neighbors` view (spec §4.6): the vertices reachable from one vertex
//! in a single step, as plain ids rather than edges.
//!
//! This is [`incidence`](super::incidence) with the edge projected away,
//! using the same far-endpoint resolution so an unordered graph's neighbor
//! list is correct regardless of which endpoint an edge happened to be
//! stored under.

use crate::graph::{IntoEdges, SourcedEdgeRef};
use crate::views::incidence::{incidence, Incidence, IncidenceEdge};

/// A lazy sequence over the ids of the vertices adjacent to one vertex.
pub struct Neighbors<G: IntoEdges>
where
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
{
    inner: Incidence<G>,
}

impl<G: IntoEdges> Iterator for Neighbors<G>
where
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e: IncidenceEdge<G, G::EdgeRef>| e.other_id())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Build a [`Neighbors`] view over the vertices adjacent to `u`.
pub fn neighbors<G: IntoEdges>(g: G, u: G::VertexId) -> Neighbors<G>
where
    G::EdgeRef: SourcedEdgeRef<VertexId = G::VertexId>,
{
    Neighbors {
        inner: incidence(g, u),
    }
}

#[cfg(test)]
mod tests {
    use super::neighbors;
    use crate::tests_support::VecGraph;

    #[test]
    fn yields_adjacent_vertex_ids() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (0, 2, 1.0)]);
        let ids: Vec<usize> = neighbors(&g, 0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn undirected_storage_yields_the_far_endpoint() {
        let g = VecGraph::from_undirected_arcs(2, &[(0, 1, 1.0)]);
        assert_eq!(neighbors(&g, 0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(neighbors(&g, 1).collect::<Vec<_>>(), vec![0]);
    }
}
