//! The visitor protocol (spec §4.3, §5) and the event vocabulary used by the
//! coroutine-rendered Dijkstra variant.
//!
//! The original expresses "the visitor may ignore any hook" via the C++
//! concept machinery and CRTP defaults in `dijkstra_clrs.hpp`; the idiomatic
//! Rust rendition is a trait with every method defaulted to a no-op, the same
//! shape the teacher uses nowhere by name but that is the standard library
//! analogue (compare `std::fmt::Write`'s provided methods, or the teacher's
//! own `Control<B>`-returning callback closures in `depth_first_search`).

use crate::graph::{EdgeRef, GraphBase};

/// Whether a traversal should continue, skip the rest of the current branch,
/// or stop entirely. Mirrors the teacher's `Control<B>` used by
/// `depth_first_search`'s closure-based callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Abandon the current branch (DFS: do not descend into this vertex's
    /// remaining subtree; BFS: do not enqueue this vertex's neighbors).
    CancelBranch,
    /// Abandon the whole traversal immediately.
    CancelAll,
}

impl Control {
    /// `true` unless this is [`Control::CancelAll`].
    pub fn should_continue(self) -> bool {
        !matches!(self, Control::CancelAll)
    }
}

/// Callback hooks for a graph traversal or shortest-path search.
///
/// Every method defaults to doing nothing and returning [`Control::Continue`],
/// so a visitor only needs to override the hooks it cares about — the
/// compile-time equivalent of the original's "optional" visitor members.
#[allow(unused_variables)]
pub trait Visitor<G: GraphBase> {
    /// Called once per vertex before a traversal begins, in vertex-sequence
    /// order.
    fn on_initialize_vertex(&mut self, g: G, v: G::VertexId) -> Control {
        Control::Continue
    }

    /// Called the first time a vertex is reached.
    fn on_discover_vertex(&mut self, g: G, v: G::VertexId) -> Control {
        Control::Continue
    }

    /// Called when a vertex is popped for processing (its outgoing edges are
    /// about to be examined).
    fn on_examine_vertex(&mut self, g: G, v: G::VertexId) -> Control {
        Control::Continue
    }

    /// Called after all of a vertex's outgoing edges have been examined.
    fn on_finish_vertex(&mut self, g: G, v: G::VertexId) -> Control {
        Control::Continue
    }

    /// Called for every outgoing edge of the vertex currently being examined,
    /// before any relaxation decision is made.
    fn on_examine_edge<E: EdgeRef<VertexId = G::VertexId>>(&mut self, g: G, e: E) -> Control {
        Control::Continue
    }

    /// Called when an edge strictly improves the distance to its target.
    fn on_edge_relaxed<E: EdgeRef<VertexId = G::VertexId>>(&mut self, g: G, e: E) -> Control {
        Control::Continue
    }

    /// Called when an edge does not improve the distance to its target.
    fn on_edge_not_relaxed<E: EdgeRef<VertexId = G::VertexId>>(&mut self, g: G, e: E) -> Control {
        Control::Continue
    }

    /// Called, during the final relaxation pass of an algorithm that performs
    /// one, when an edge is on a shortest path (Bellman–Ford's terminology
    /// for "relaxed" during verification).
    fn on_edge_minimized<E: EdgeRef<VertexId = G::VertexId>>(&mut self, g: G, e: E) -> Control {
        Control::Continue
    }

    /// The counterpart of [`on_edge_minimized`](Self::on_edge_minimized).
    fn on_edge_not_minimized<E: EdgeRef<VertexId = G::VertexId>>(&mut self, g: G, e: E) -> Control {
        Control::Continue
    }
}

/// A [`Visitor`] that does nothing; the default when a caller has no hooks to
/// install.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyVisitor;

impl<G: GraphBase> Visitor<G> for EmptyVisitor {}

/// The events an event-driven (coroutine-style) Dijkstra run can report.
///
/// Matches one-to-one with [`Visitor`]'s vertex/edge hooks; the event-iterator
/// variant in `shortest_paths::dijkstra` exists so a caller can consume the
/// search as a lazy sequence of these instead of installing a visitor (spec
/// §9's design note: "coroutine-based sequences become iterator adaptors").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DijkstraEvent {
    /// A vertex's initial bookkeeping was set up, before any source is
    /// discovered (spec §4.4 protocol step 1).
    InitializeVertex,
    /// A vertex was reached for the first time.
    DiscoverVertex,
    /// A vertex was popped off the frontier for processing.
    ExamineVertex,
    /// An outgoing edge of the vertex being processed was examined.
    ExamineEdge,
    /// An edge strictly improved its target's distance.
    EdgeRelaxed,
    /// An edge did not improve its target's distance.
    EdgeNotRelaxed,
    /// A vertex's final distance was settled (all outgoing edges examined).
    FinishVertex,
}

/// A bitmask of which [`DijkstraEvent`]s the caller is interested in.
///
/// The event-driven Dijkstra variant consults this before constructing an
/// event tuple at all, so disabling an event category is not merely filtered
/// out after the fact — it is never allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DijkstraEvents {
    initialize_vertex: bool,
    discover_vertex: bool,
    examine_vertex: bool,
    examine_edge: bool,
    edge_relaxed: bool,
    edge_not_relaxed: bool,
    finish_vertex: bool,
}

impl DijkstraEvents {
    /// No events enabled.
    pub fn none() -> Self {
        DijkstraEvents {
            initialize_vertex: false,
            discover_vertex: false,
            examine_vertex: false,
            examine_edge: false,
            edge_relaxed: false,
            edge_not_relaxed: false,
            finish_vertex: false,
        }
    }

    /// Every event enabled.
    pub fn all() -> Self {
        DijkstraEvents {
            initialize_vertex: true,
            discover_vertex: true,
            examine_vertex: true,
            examine_edge: true,
            edge_relaxed: true,
            edge_not_relaxed: true,
            finish_vertex: true,
        }
    }

    /// Enable [`DijkstraEvent::InitializeVertex`].
    pub fn with_initialize_vertex(mut self, on: bool) -> Self {
        self.initialize_vertex = on;
        self
    }

    /// Enable [`DijkstraEvent::DiscoverVertex`].
    pub fn with_discover_vertex(mut self, on: bool) -> Self {
        self.discover_vertex = on;
        self
    }

    /// Enable [`DijkstraEvent::ExamineVertex`].
    pub fn with_examine_vertex(mut self, on: bool) -> Self {
        self.examine_vertex = on;
        self
    }

    /// Enable [`DijkstraEvent::ExamineEdge`].
    pub fn with_examine_edge(mut self, on: bool) -> Self {
        self.examine_edge = on;
        self
    }

    /// Enable [`DijkstraEvent::EdgeRelaxed`].
    pub fn with_edge_relaxed(mut self, on: bool) -> Self {
        self.edge_relaxed = on;
        self
    }

    /// Enable [`DijkstraEvent::EdgeNotRelaxed`].
    pub fn with_edge_not_relaxed(mut self, on: bool) -> Self {
        self.edge_not_relaxed = on;
        self
    }

    /// Enable [`DijkstraEvent::FinishVertex`].
    pub fn with_finish_vertex(mut self, on: bool) -> Self {
        self.finish_vertex = on;
        self
    }

    pub(crate) fn wants(&self, event: DijkstraEvent) -> bool {
        match event {
            DijkstraEvent::InitializeVertex => self.initialize_vertex,
            DijkstraEvent::DiscoverVertex => self.discover_vertex,
            DijkstraEvent::ExamineVertex => self.examine_vertex,
            DijkstraEvent::ExamineEdge => self.examine_edge,
            DijkstraEvent::EdgeRelaxed => self.edge_relaxed,
            DijkstraEvent::EdgeNotRelaxed => self.edge_not_relaxed,
            DijkstraEvent::FinishVertex => self.finish_vertex,
        }
    }
}

impl Default for DijkstraEvents {
    fn default() -> Self {
        DijkstraEvents::all()
    }
}

/// Describes the vertex or edge an emitted [`DijkstraEvent`] pertains to.
///
/// Vertex events carry a vertex reference; edge events carry the edge
/// reference (from which both endpoints are recoverable if the edges are
/// sourced).
#[derive(Clone, Copy, Debug)]
pub enum EventDescriptor<V, E> {
    /// A vertex-scoped event.
    Vertex(V),
    /// An edge-scoped event.
    Edge(E),
}
