//! The graph abstraction contract (spec §4.1).
//!
//! A type is a graph for the purposes of this crate by implementing [`GraphBase`] plus
//! whichever of [`IntoVertices`] / [`IntoEdges`] / [`VertexIndexable`] / [`FindVertex`]
//! it can support. Algorithms are generic over these traits and pick up exactly the
//! capabilities they need; a graph missing an optional capability simply fails to
//! satisfy an algorithm's bound, which is the compile-time "the accessor does not
//! exist" the specification calls for.
//!
//! The trait family mirrors the teacher's `visit` module: capabilities are
//! implemented for `&'a Container` so that a borrow's lifetime flows through the
//! blanket `impl<'a, G> Trait for &'a G where G: Trait` below, exactly as
//! `IntoNeighbors`/`Visitable`/`NodeIndexable` do there.

use std::fmt::Debug;
use std::hash::Hash;

/// Base trait every graph implements.
///
/// `VertexId` must be totally ordered and cheap to copy; for an indexed adjacency
/// list it is usually (but not required to be) `usize`.
pub trait GraphBase: Copy {
    /// The vertex identity type.
    type VertexId: Copy + Eq + Ord + Hash + Debug;
}

impl<'a, G: GraphBase> GraphBase for &'a G {
    type VertexId = G::VertexId;
}

/// A reference to a vertex, yielded by [`IntoVertices::vertices`].
///
/// Implementations are small `Copy` values that have already captured whatever
/// borrow they need from the underlying container; the borrow's lifetime lives
/// inside the concrete type, not in this trait's methods (the same trick the
/// teacher's `NodeRef`/`EdgeRef` use).
pub trait VertexRef: Copy {
    /// The vertex identity type.
    type VertexId: Copy;
    /// This vertex's id.
    fn id(&self) -> Self::VertexId;
}

/// A reference to an edge, yielded by [`IntoEdges::edges`].
pub trait EdgeRef: Copy {
    /// The vertex identity type.
    type VertexId: Copy;
    /// The edge's target endpoint. Total: never fails for a well-formed edge.
    fn target_id(&self) -> Self::VertexId;
}

/// An [`EdgeRef`] that additionally carries its source endpoint.
///
/// A graph whose edges implement this is a **sourced** graph: the source is
/// derivable from the edge alone, without tracking it separately during
/// traversal (spec §3, "Sourced edge").
pub trait SourcedEdgeRef: EdgeRef {
    /// The vertex this edge was reached from.
    fn source_id(&self) -> Self::VertexId;
}

/// A [`VertexRef`] that additionally carries a projected value.
///
/// Presence of this trait on `G::VertexRef` is the compile-time property the
/// specification calls "vertex value exists"; there is no runtime no-op form.
pub trait WithVertexValue: VertexRef {
    /// The payload type.
    type Value;
    /// The vertex's value.
    fn value(&self) -> &Self::Value;
}

/// An [`EdgeRef`] that additionally carries a projected value.
pub trait WithEdgeValue: EdgeRef {
    /// The payload type.
    type Value;
    /// The edge's value.
    fn value(&self) -> &Self::Value;
}

/// The whole-graph payload, if any. Lifetime-parameterised because, unlike vertex
/// and edge values, nothing in §4.4–§4.11 consumes it through a reference-wrapping
/// descriptor type.
pub trait GraphValue<'g>: GraphBase {
    /// The payload type.
    type Value: 'g;
    /// The graph's whole-graph value.
    fn graph_value(self) -> &'g Self::Value;
}

/// A graph that can enumerate its vertices.
///
/// If `Vertices` is additionally a [`DoubleEndedIterator`] + `ExactSizeIterator`,
/// callers may treat the range as random access and the graph as an **indexed**
/// adjacency list (spec §3) when paired with [`VertexIndexable`].
pub trait IntoVertices: GraphBase {
    /// The vertex reference type.
    type VertexRef: VertexRef<VertexId = Self::VertexId>;
    /// The iterator type returned by [`vertices`].
    type Vertices: Iterator<Item = Self::VertexRef>;
    /// A forward sequence over every vertex, in sequence order.
    fn vertices(self) -> Self::Vertices;
    /// The number of vertices; equal to the size of [`vertices`](Self::vertices).
    fn num_vertices(self) -> usize;
}

/// A graph that can enumerate a vertex's outgoing edges.
pub trait IntoEdges: GraphBase {
    /// The edge reference type.
    type EdgeRef: EdgeRef<VertexId = Self::VertexId>;
    /// The iterator type returned by [`edges`](Self::edges).
    type Edges: Iterator<Item = Self::EdgeRef>;
    /// The outgoing-edge sequence for the vertex with the given id.
    fn edges(self, id: Self::VertexId) -> Self::Edges;
    /// The cardinality of `edges(id)`. Defaults to counting the sequence; graphs
    /// that track degree directly should override this.
    fn degree(self, id: Self::VertexId) -> usize {
        self.edges(id).count()
    }
}

/// A graph whose `VertexId`s are integral indices usable as array offsets — an
/// **indexed adjacency list** (spec §3).
pub trait VertexIndexable: GraphBase {
    /// The number of ids in `0..vertex_bound()`; an upper bound suitable for
    /// sizing a distance/predecessor buffer.
    fn vertex_bound(self) -> usize;
    /// Map an id to its array offset.
    fn to_index(self, id: Self::VertexId) -> usize;
    /// Map an array offset back to an id.
    fn from_index(self, index: usize) -> Self::VertexId;
}

/// A graph that can look a vertex reference up by id.
pub trait FindVertex: IntoVertices {
    /// The vertex with the given id, if any.
    fn find_vertex(self, id: Self::VertexId) -> Option<Self::VertexRef>;
}

/// A graph that assigns every vertex to a partition (defaults to zero when the
/// graph carries no partitioning).
pub trait PartitionId: GraphBase {
    /// The partition the given vertex belongs to.
    fn partition_id(self, id: Self::VertexId) -> usize;
}

/// Marker capability: the graph declares that edges are **unordered** — the
/// `(source, target)` pair on an edge may appear in either order, and views must
/// pick whichever endpoint is not the traversal's current vertex (spec §4.1).
///
/// Only meaningful for graphs whose edges are also [`SourcedEdgeRef`]; the
/// `incidence` view uses this to decide whether to swap endpoints.
pub trait UnorderedEdges: IntoEdges {}

/// `true` if the graph's vertex sequence is an indexed adjacency list: both
/// [`VertexIndexable`] and [`IntoVertices`] are implemented.
pub trait IndexAdjacencyList: VertexIndexable + IntoVertices {}
impl<G> IndexAdjacencyList for G where G: VertexIndexable + IntoVertices {}

/// Free function form of [`IntoVertices::vertices`], matching the specification's
/// `vertices(g)` naming.
pub fn vertices<G: IntoVertices>(g: G) -> G::Vertices {
    g.vertices()
}

/// Free function form of [`IntoEdges::edges`], matching the specification's
/// `edges(g, u)` naming.
pub fn edges<G: IntoEdges>(g: G, id: G::VertexId) -> G::Edges {
    g.edges(id)
}

/// Free function form of [`EdgeRef::target_id`], matching the specification's
/// `target_id(g, e)` naming (the graph argument is only needed by the
/// specification's call convention; the edge reference already knows its target).
pub fn target_id<G: GraphBase, E: EdgeRef<VertexId = G::VertexId>>(_g: G, e: &E) -> G::VertexId {
    e.target_id()
}

/// Free function form of [`SourcedEdgeRef::source_id`].
pub fn source_id<G: GraphBase, E: SourcedEdgeRef<VertexId = G::VertexId>>(_g: G, e: &E) -> G::VertexId {
    e.source_id()
}

/// Free function form of [`IntoVertices::num_vertices`].
pub fn num_vertices<G: IntoVertices>(g: G) -> usize {
    g.num_vertices()
}

/// Free function form of [`IntoEdges::degree`].
pub fn degree<G: IntoEdges>(g: G, id: G::VertexId) -> usize {
    g.degree(id)
}

/// Free function form of [`FindVertex::find_vertex`].
pub fn find_vertex<G: FindVertex>(g: G, id: G::VertexId) -> Option<G::VertexRef> {
    g.find_vertex(id)
}

/// Free function form of [`VertexRef::id`], matching the specification's
/// `vertex_id(g, ui)` naming (for an indexed adjacency list this is the same
/// id [`VertexIndexable::to_index`] would turn into an array offset).
pub fn vertex_id<G: GraphBase, V: VertexRef<VertexId = G::VertexId>>(_g: G, ui: &V) -> G::VertexId {
    ui.id()
}

/// Free function form of [`WithVertexValue::value`], matching the
/// specification's `vertex_value(g, u)` naming. Only callable when
/// `V: WithVertexValue` — calling it on a vertex reference with no value is a
/// compile error, not a runtime no-op, as the specification requires.
pub fn vertex_value<V: WithVertexValue>(v: &V) -> &V::Value {
    v.value()
}

/// Free function form of [`WithEdgeValue::value`], matching the
/// specification's `edge_value(g, e)` naming.
pub fn edge_value<E: WithEdgeValue>(e: &E) -> &E::Value {
    e.value()
}

/// Free function form of [`GraphValue::graph_value`], matching the
/// specification's `graph_value(g)` naming.
pub fn graph_value<'g, G: GraphValue<'g>>(g: G) -> &'g G::Value {
    g.graph_value()
}

/// The vertex reference for an edge's target endpoint, matching the
/// specification's `target(g, e)` naming. Requires [`FindVertex`] since, for
/// a graph that is not index-adjacency, looking a vertex reference up by id
/// may require more than arithmetic.
pub fn target<G: FindVertex, E: EdgeRef<VertexId = G::VertexId>>(g: G, e: &E) -> Option<G::VertexRef> {
    g.find_vertex(e.target_id())
}

/// The vertex reference for an edge's source endpoint, matching the
/// specification's `source(g, e)` naming. Only callable when `E: SourcedEdgeRef`.
pub fn source<G: FindVertex, E: SourcedEdgeRef<VertexId = G::VertexId>>(g: G, e: &E) -> Option<G::VertexRef> {
    g.find_vertex(e.source_id())
}

/// Free function form of the specification's `partition_id(g, uid)`: `0` for
/// every graph (spec §4.1, "for partitioned graphs; defaults to zero").
///
/// Stable Rust has no way to ask, at a bare `G: GraphBase` call site, whether
/// some other trait also happens to be implemented for `G` — there is no
/// specialization to fall back from "the real answer" to "the default"
/// within a single generic function. A graph that tracks real partitions
/// implements [`PartitionId`] directly and callers that know this (algorithms
/// written against `G: PartitionId`) call `g.partition_id(id)` on that trait
/// instead of this free function; this one is the "no partitioning
/// information available" default every other graph gets for free.
pub fn partition_id<G: GraphBase>(_g: G, _id: G::VertexId) -> usize {
    0
}

/// Convenience lookup: does `g` contain an edge from `uid` to `vid`?
///
/// Not used by any core algorithm (spec §4.1 lists it as a convenience only); the
/// default implementation does a linear scan of `edges(g, uid)` rather than
/// relying on any storage-backed fast path, since a fast path belongs to a
/// concrete container and containers are out of scope for this crate.
pub fn contains_edge<G: IntoEdges>(g: G, uid: G::VertexId, vid: G::VertexId) -> bool {
    g.edges(uid).any(|e| e.target_id() == vid)
}

/// Convenience lookup: the first edge from `uid` to `vid`, if any.
pub fn find_vertex_edge<G: IntoEdges>(g: G, uid: G::VertexId, vid: G::VertexId) -> Option<G::EdgeRef> {
    g.edges(uid).find(|e| e.target_id() == vid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_support::VecGraph;

    #[test]
    fn contains_edge_and_find_vertex_edge_agree() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert!(contains_edge(&g, 0, 1));
        assert!(!contains_edge(&g, 0, 2));
        assert_eq!(find_vertex_edge(&g, 0, 1).map(|e| e.target_id()), Some(1));
        assert_eq!(find_vertex_edge(&g, 0, 2), None);
    }

    #[test]
    fn partition_id_defaults_to_zero() {
        let g = VecGraph::from_arcs(2, &[(0, 1, 1.0)]);
        assert_eq!(partition_id(&g, 0), 0);
        assert_eq!(partition_id(&g, 1), 0);
    }

    #[test]
    fn target_and_source_resolve_vertex_refs_from_an_edge() {
        let g = VecGraph::from_arcs(3, &[(0, 2, 1.0)]);
        let e = g.edges(0).next().unwrap();
        assert_eq!(target(&g, &e).map(|v| v.id()), Some(2));
        assert_eq!(source(&g, &e).map(|v| v.id()), Some(0));
    }

    #[test]
    fn edge_value_reads_the_projected_payload() {
        let g = VecGraph::from_arcs(2, &[(0, 1, 4.5)]);
        let e = g.edges(0).next().unwrap();
        assert_eq!(*edge_value(&e), 4.5);
    }
}
