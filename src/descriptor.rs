//! Vertex/edge descriptor types (spec §4.2).
//!
//! A descriptor pairs a vertex or edge reference with the graph it came from, so
//! that view iterators can yield a single self-describing item instead of asking
//! callers to thread the graph reference through separately. This mirrors the
//! teacher's `NodeRef`/`EdgeRef`-plus-graph pattern used throughout `visit.rs`'s
//! `IntoNodeReferences`/`IntoEdgeReferences` adaptors.

use crate::graph::{EdgeRef, GraphBase, SourcedEdgeRef, VertexRef, WithEdgeValue, WithVertexValue};

/// A vertex together with the graph it belongs to, as yielded by the
/// `vertexlist` view.
#[derive(Clone, Copy)]
pub struct VertexInfo<G: GraphBase, V: VertexRef<VertexId = G::VertexId>> {
    graph: G,
    vertex: V,
}

impl<G: GraphBase, V: VertexRef<VertexId = G::VertexId>> VertexInfo<G, V> {
    /// Pair a graph with one of its vertex references.
    pub fn new(graph: G, vertex: V) -> Self {
        VertexInfo { graph, vertex }
    }

    /// The graph this vertex belongs to.
    pub fn graph(&self) -> G {
        self.graph
    }

    /// The vertex's id.
    pub fn id(&self) -> G::VertexId {
        self.vertex.id()
    }

    /// The underlying vertex reference.
    pub fn vertex_ref(&self) -> V {
        self.vertex
    }
}

impl<G, V> VertexInfo<G, V>
where
    G: GraphBase,
    V: WithVertexValue<VertexId = G::VertexId>,
{
    /// The vertex's projected value. Only callable when `V: WithVertexValue`,
    /// i.e. when a vertex value actually exists.
    pub fn value(&self) -> &V::Value {
        self.vertex.value()
    }
}

/// An edge together with the graph it belongs to, as yielded by the
/// `incidence` and `edgelist` views.
#[derive(Clone, Copy)]
pub struct EdgeInfo<G: GraphBase, E: EdgeRef<VertexId = G::VertexId>> {
    graph: G,
    edge: E,
}

impl<G: GraphBase, E: EdgeRef<VertexId = G::VertexId>> EdgeInfo<G, E> {
    /// Pair a graph with one of its edge references.
    pub fn new(graph: G, edge: E) -> Self {
        EdgeInfo { graph, edge }
    }

    /// The graph this edge belongs to.
    pub fn graph(&self) -> G {
        self.graph
    }

    /// The edge's target vertex id.
    pub fn target_id(&self) -> G::VertexId {
        self.edge.target_id()
    }

    /// The underlying edge reference.
    pub fn edge_ref(&self) -> E {
        self.edge
    }
}

impl<G, E> EdgeInfo<G, E>
where
    G: GraphBase,
    E: SourcedEdgeRef<VertexId = G::VertexId>,
{
    /// The edge's source vertex id. Only callable when `E: SourcedEdgeRef`.
    pub fn source_id(&self) -> G::VertexId {
        self.edge.source_id()
    }
}

impl<G, E> EdgeInfo<G, E>
where
    G: GraphBase,
    E: WithEdgeValue<VertexId = G::VertexId>,
{
    /// The edge's projected value. Only callable when `E: WithEdgeValue`.
    pub fn value(&self) -> &E::Value {
        self.edge.value()
    }
}
