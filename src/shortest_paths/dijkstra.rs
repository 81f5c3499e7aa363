//! Dijkstra's algorithm (spec §4.10), in three renderings of one core:
//!
//! - [`dijkstra`] / [`dijkstra_with_predecessors`]: the CLRS textbook form,
//!   returning distances (and, optionally, predecessors).
//! - [`dijkstra_with_visitor`]: the same search driving a [`Visitor`]'s
//!   hooks, for callers who want to observe (and possibly cancel) the search.
//! - [`DijkstraEvents`]-driven [`dijkstra_event_iter`]: the search rendered as
//!   a lazy `Iterator<Item = (DijkstraEvent, EventDescriptor<..>)>`, the
//!   Rust counterpart of the original's coroutine-based event sequence
//!   (`dijkstra_clrs.hpp`'s visitor is itself optional there; here the
//!   equivalent of "don't generate an event category nobody asked for" is
//!   the `DijkstraEvents` mask checked before a tuple is ever constructed).
//!
//! All three share [`dijkstra_core`], parameterised over a [`PredecessorSink`]
//! and a [`Visitor`] — the null-predecessor / empty-visitor combination costs
//! nothing at the call site that doesn't need it, the idiomatic analogue of
//! the original's `if constexpr` branch on `null_range_type`.

use crate::error::GraphError;
use crate::graph::{EdgeRef, IntoEdges, IntoVertices, VertexIndexable, VertexRef};
use crate::scored::MinScored;
use crate::shortest_paths::common::{check_buffer_len, shortest_path_invalid_distance, shortest_path_zero, FloatMeasure, NullPredecessors, PredecessorSink};
use crate::visitor::{Control, DijkstraEvent, DijkstraEvents, EmptyVisitor, EventDescriptor, Visitor};
use fixedbitset::FixedBitSet;
use std::collections::{BinaryHeap, VecDeque};

/// Run Dijkstra's algorithm from one or more `sources`, driving `visitor`'s
/// hooks and recording predecessors in `predecessors`.
///
/// Implements the full protocol of spec §4.4: `on_initialize_vertex` fires
/// once per vertex in `vertices(g)` order before any source is considered
/// (step 1); each source is then seeded at distance zero and reported via
/// `on_discover_vertex` (step 2) before the usual relaxation loop (step 3).
/// This is the core every other entry point in this module calls into.
pub fn dijkstra_core<G, D, P, Vis>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: impl Fn(G::EdgeRef) -> D,
    mut predecessors: P,
    mut visitor: Vis,
) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    P: PredecessorSink<G::VertexId>,
    Vis: Visitor<G>,
{
    let n = g.vertex_bound();
    let mut distances = vec![shortest_path_invalid_distance::<D>(); n];
    let mut settled = FixedBitSet::with_capacity(n);
    let mut discovered = FixedBitSet::with_capacity(n);
    let mut heap = BinaryHeap::new();

    'setup: {
        for v in g.vertices() {
            if !visitor.on_initialize_vertex(g, v.id()).should_continue() {
                break 'setup;
            }
        }

        for s in sources {
            let sidx = g.to_index(s);
            if sidx >= n {
                return Err(GraphError::SourceOutOfRange {
                    source: sidx,
                    num_vertices: n,
                });
            }
            distances[sidx] = shortest_path_zero();
            predecessors.set(sidx, s);
            if !discovered.put(sidx) {
                if !visitor.on_discover_vertex(g, s).should_continue() {
                    break 'setup;
                }
            }
            heap.push(MinScored(D::zero(), s));
        }
    }

    'search: while let Some(MinScored(dist, u)) = heap.pop() {
        let uidx = g.to_index(u);
        if settled.contains(uidx) {
            continue;
        }
        settled.insert(uidx);
        if !visitor.on_examine_vertex(g, u).should_continue() {
            break 'search;
        }

        for e in g.edges(u) {
            match visitor.on_examine_edge(g, e) {
                Control::CancelAll => break 'search,
                Control::CancelBranch => continue,
                Control::Continue => {}
            }
            let w = weight(e);
            if w < D::zero() {
                return Err(GraphError::NegativeWeight);
            }
            let v = e.target_id();
            let vidx = g.to_index(v);
            let candidate = dist + w;
            if candidate < distances[vidx] {
                distances[vidx] = candidate;
                predecessors.set(vidx, u);
                let was_undiscovered = !discovered.put(vidx);
                if !visitor.on_edge_relaxed(g, e).should_continue() {
                    break 'search;
                }
                if was_undiscovered && !visitor.on_discover_vertex(g, v).should_continue() {
                    break 'search;
                }
                heap.push(MinScored(candidate, v));
            } else if !visitor.on_edge_not_relaxed(g, e).should_continue() {
                break 'search;
            }
        }

        if !visitor.on_finish_vertex(g, u).should_continue() {
            break 'search;
        }
    }

    Ok(distances)
}

/// Shortest distances from `source` to every vertex, CLRS-style: no
/// predecessors recorded, no visitor installed.
///
/// # Example
///
/// ```ignore
/// let d = dijkstra(&g, 0, |e| *e.value())?;
/// assert_eq!(d[target], 487.0);
/// ```
pub fn dijkstra<G, D>(g: G, source: G::VertexId, weight: impl Fn(G::EdgeRef) -> D) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
{
    dijkstra_core(g, std::iter::once(source), weight, NullPredecessors, EmptyVisitor)
}

/// Shortest distances from `source`, additionally filling `predecessors[v]`
/// with the vertex immediately preceding `v` on its shortest path.
///
/// `predecessors` must be at least `vertex_bound()` long; entries for
/// unreached vertices (including `source` itself) are left untouched by this
/// call, so callers should pre-fill with a sentinel if they need to
/// distinguish "never written" from "predecessor is this value".
pub fn dijkstra_with_predecessors<G, D>(
    g: G,
    source: G::VertexId,
    weight: impl Fn(G::EdgeRef) -> D,
    predecessors: &mut [G::VertexId],
) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
{
    check_buffer_len(g, predecessors.len())?;
    dijkstra_core(g, std::iter::once(source), weight, predecessors, EmptyVisitor)
}

/// Shortest distances from `source`, driving `visitor`'s hooks as the search
/// proceeds. Predecessors are not recorded; a visitor that needs them can
/// capture `on_edge_relaxed`'s edge itself.
pub fn dijkstra_with_visitor<G, D, Vis>(
    g: G,
    source: G::VertexId,
    weight: impl Fn(G::EdgeRef) -> D,
    visitor: Vis,
) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    Vis: Visitor<G>,
{
    dijkstra_core(g, std::iter::once(source), weight, NullPredecessors, visitor)
}

/// Shortest distances from whichever of `sources` is nearest — the
/// multi-source form of Dijkstra spec §4.4 describes ("for each source s").
/// Every source starts the search at distance zero.
pub fn dijkstra_multi_source<G, D>(g: G, sources: impl IntoIterator<Item = G::VertexId>, weight: impl Fn(G::EdgeRef) -> D) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
{
    dijkstra_core(g, sources, weight, NullPredecessors, EmptyVisitor)
}

/// Multi-source Dijkstra, additionally filling `predecessors[v]` with the
/// vertex immediately preceding `v` on its shortest path from whichever
/// source reaches it first.
pub fn dijkstra_multi_source_with_predecessors<G, D>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: impl Fn(G::EdgeRef) -> D,
    predecessors: &mut [G::VertexId],
) -> Result<Vec<D>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
{
    check_buffer_len(g, predecessors.len())?;
    dijkstra_core(g, sources, weight, predecessors, EmptyVisitor)
}

/// A single step of an event-driven Dijkstra search: which hook fired, and
/// what vertex or edge it fired for.
pub type DijkstraStep<G> = (DijkstraEvent, EventDescriptor<<G as crate::graph::GraphBase>::VertexId, <G as IntoEdges>::EdgeRef>);

/// The search state backing [`dijkstra_event_iter`].
///
/// Each call to `next` advances the underlying search by exactly the amount
/// of work needed to produce one more requested event, buffering any
/// same-step events the caller also asked for. An event category the caller
/// did not request in [`DijkstraEvents`] is never constructed, not merely
/// filtered out afterward.
pub struct DijkstraEventIter<G, D, F>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    graph: G,
    weight: F,
    events: DijkstraEvents,
    heap: BinaryHeap<MinScored<D, G::VertexId>>,
    distances: Vec<D>,
    settled: FixedBitSet,
    discovered: FixedBitSet,
    current_vertex: Option<G::VertexId>,
    current_edges: Option<G::Edges>,
    pending: VecDeque<DijkstraStep<G>>,
    done: bool,
    error: Option<GraphError>,
}

impl<G, D, F> DijkstraEventIter<G, D, F>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    fn push_event(&mut self, event: DijkstraEvent, descriptor: EventDescriptor<G::VertexId, G::EdgeRef>) {
        if self.events.wants(event) {
            self.pending.push_back((event, descriptor));
        }
    }

    /// The distances computed so far; final once the iterator is exhausted.
    pub fn distances(&self) -> &[D] {
        &self.distances
    }

    /// `Some` if the search ended early because a weight function produced a
    /// negative value, rather than because every reachable vertex was
    /// settled.
    pub fn error(&self) -> Option<&GraphError> {
        self.error.as_ref()
    }

    fn drive_until_event_or_exhausted(&mut self) {
        loop {
            if !self.pending.is_empty() || self.done {
                return;
            }
            if let Some(mut edges) = self.current_edges.take() {
                let u = self.current_vertex.expect("current_edges implies current_vertex");
                match edges.next() {
                    Some(e) => {
                        self.current_edges = Some(edges);
                        self.push_event(DijkstraEvent::ExamineEdge, EventDescriptor::Edge(e));
                        let w = (self.weight)(e);
                        if w < D::zero() {
                            // A negative weight cannot be reported through this
                            // iterator's infallible `Item`; stop the search rather
                            // than silently mis-relax.
                            self.current_edges = None;
                            self.heap.clear();
                            self.done = true;
                            self.error = Some(GraphError::NegativeWeight);
                            return;
                        }
                        let v = e.target_id();
                        let vidx = self.graph.to_index(v);
                        let candidate = self.distances[self.graph.to_index(u)] + w;
                        if candidate < self.distances[vidx] {
                            self.distances[vidx] = candidate;
                            let was_undiscovered = !self.discovered.put(vidx);
                            self.push_event(DijkstraEvent::EdgeRelaxed, EventDescriptor::Edge(e));
                            if was_undiscovered {
                                self.push_event(DijkstraEvent::DiscoverVertex, EventDescriptor::Vertex(v));
                            }
                            self.heap.push(MinScored(candidate, v));
                        } else {
                            self.push_event(DijkstraEvent::EdgeNotRelaxed, EventDescriptor::Edge(e));
                        }
                    }
                    None => {
                        self.push_event(DijkstraEvent::FinishVertex, EventDescriptor::Vertex(u));
                        self.current_vertex = None;
                    }
                }
                continue;
            }

            match self.heap.pop() {
                Some(MinScored(_, u)) => {
                    let uidx = self.graph.to_index(u);
                    if self.settled.contains(uidx) {
                        continue;
                    }
                    self.settled.insert(uidx);
                    self.current_vertex = Some(u);
                    self.current_edges = Some(self.graph.edges(u));
                    self.push_event(DijkstraEvent::ExamineVertex, EventDescriptor::Vertex(u));
                }
                None => {
                    self.done = true;
                    return;
                }
            }
        }
    }
}

impl<G, D, F> Iterator for DijkstraEventIter<G, D, F>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    type Item = DijkstraStep<G>;

    fn next(&mut self) -> Option<Self::Item> {
        self.drive_until_event_or_exhausted();
        self.pending.pop_front()
    }
}

fn dijkstra_event_iter_from_sources<G, D, F>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: F,
    events: DijkstraEvents,
) -> Result<DijkstraEventIter<G, D, F>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    let n = g.vertex_bound();
    let mut distances = vec![shortest_path_invalid_distance::<D>(); n];
    let mut discovered = FixedBitSet::with_capacity(n);
    let mut heap = BinaryHeap::new();
    let mut pending = VecDeque::new();

    if events.wants(DijkstraEvent::InitializeVertex) {
        for v in g.vertices() {
            pending.push_back((DijkstraEvent::InitializeVertex, EventDescriptor::Vertex(v.id())));
        }
    }

    for s in sources {
        let sidx = g.to_index(s);
        if sidx >= n {
            return Err(GraphError::SourceOutOfRange {
                source: sidx,
                num_vertices: n,
            });
        }
        distances[sidx] = shortest_path_zero();
        if !discovered.put(sidx) && events.wants(DijkstraEvent::DiscoverVertex) {
            pending.push_back((DijkstraEvent::DiscoverVertex, EventDescriptor::Vertex(s)));
        }
        heap.push(MinScored(D::zero(), s));
    }

    Ok(DijkstraEventIter {
        graph: g,
        weight,
        events,
        heap,
        distances,
        settled: FixedBitSet::with_capacity(n),
        discovered,
        current_vertex: None,
        current_edges: None,
        pending,
        done: false,
        error: None,
    })
}

/// Build an event-driven Dijkstra search from `source`, reporting only the
/// event categories enabled in `events`.
pub fn dijkstra_event_iter<G, D, F>(g: G, source: G::VertexId, weight: F, events: DijkstraEvents) -> Result<DijkstraEventIter<G, D, F>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    dijkstra_event_iter_from_sources(g, std::iter::once(source), weight, events)
}

/// Build a multi-source event-driven Dijkstra search, reporting only the
/// event categories enabled in `events`.
pub fn dijkstra_event_iter_multi_source<G, D, F>(
    g: G,
    sources: impl IntoIterator<Item = G::VertexId>,
    weight: F,
    events: DijkstraEvents,
) -> Result<DijkstraEventIter<G, D, F>, GraphError>
where
    G: IntoVertices + IntoEdges + VertexIndexable,
    D: FloatMeasure,
    F: Fn(G::EdgeRef) -> D,
{
    dijkstra_event_iter_from_sources(g, sources, weight, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WithEdgeValue;
    use crate::tests_support::VecGraph;

    #[test]
    fn shortest_distances_on_a_small_weighted_graph() {
        // 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (1), 1 -> 3 (1)
        let g = VecGraph::from_arcs(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0)]);
        let d = dijkstra(&g, 0, |e| *e.value()).unwrap();
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], 2.0);
        assert_eq!(d[2], 1.0);
        assert_eq!(d[3], 3.0);
    }

    #[test]
    fn predecessors_trace_back_a_shortest_path() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0)]);
        let mut pred = vec![usize::MAX; 3];
        let d = dijkstra_with_predecessors(&g, 0, |e| *e.value(), &mut pred).unwrap();
        assert_eq!(d[1], 2.0);
        assert_eq!(pred[1], 2);
        assert_eq!(pred[2], 0);
    }

    #[test]
    fn unreachable_vertex_keeps_infinite_distance() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0)]);
        let d = dijkstra(&g, 0, |e| *e.value()).unwrap();
        assert_eq!(d[2], f64::INFINITY);
    }

    #[test]
    fn source_out_of_range_is_reported() {
        let g = VecGraph::from_arcs(2, &[]);
        let err = dijkstra(&g, 9, |e| *e.value()).unwrap_err();
        assert_eq!(
            err,
            GraphError::SourceOutOfRange {
                source: 9,
                num_vertices: 2
            }
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let g = VecGraph::from_arcs(2, &[(0, 1, -1.0)]);
        let err = dijkstra(&g, 0, |e| *e.value()).unwrap_err();
        assert_eq!(err, GraphError::NegativeWeight);
    }

    #[test]
    fn event_iterator_reports_only_requested_categories() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let events = DijkstraEvents::none().with_examine_vertex(true);
        let iter = dijkstra_event_iter(&g, 0, |e| *e.value(), events).unwrap();
        let seen: Vec<DijkstraEvent> = iter.map(|(ev, _)| ev).collect();
        assert!(seen.iter().all(|ev| *ev == DijkstraEvent::ExamineVertex));
        assert_eq!(seen.len(), 3);
    }
}
