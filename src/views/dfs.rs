//! The depth-first-search view (spec §4.8), with branch/whole-search
//! cancellation.
//!
//! Grounded on the teacher's `Dfs` iterator in `visit.rs`, which also
//! separates "discovered" bookkeeping from the stack and exposes a move-based
//! `next(graph)` rather than borrowing the graph for the struct's lifetime.
//! Cancellation is rendered by deferring a vertex's neighbor expansion to the
//! *following* call to `next`: that gives a caller a window, between two
//! `next()` calls, to call [`Dfs::cancel_branch`] before this vertex's
//! remaining subtree would otherwise be pushed.

use crate::graph::{EdgeRef, IntoEdges, VertexIndexable};
use fixedbitset::FixedBitSet;

/// A lazy depth-first traversal starting from one vertex.
pub struct Dfs<G: IntoEdges + VertexIndexable> {
    graph: G,
    stack: Vec<G::VertexId>,
    discovered: FixedBitSet,
    pending_expand: Option<G::VertexId>,
}

impl<G: IntoEdges + VertexIndexable> Dfs<G> {
    /// Start a depth-first traversal from `start`.
    pub fn new(g: G, start: G::VertexId) -> Self {
        let mut discovered = FixedBitSet::with_capacity(g.vertex_bound());
        discovered.insert(g.to_index(start));
        Dfs {
            graph: g,
            stack: vec![start],
            discovered,
            pending_expand: None,
        }
    }

    fn expand_pending(&mut self) {
        let Some(v) = self.pending_expand.take() else {
            return;
        };
        for e in self.graph.edges(v) {
            let t = e.target_id();
            let idx = self.graph.to_index(t);
            if !self.discovered.contains(idx) {
                self.discovered.insert(idx);
                self.stack.push(t);
            }
        }
    }

    /// Abandon the branch rooted at the vertex most recently returned by
    /// [`next`](Iterator::next): its remaining unvisited neighbors will not
    /// be pushed onto the frontier.
    pub fn cancel_branch(&mut self) {
        self.pending_expand = None;
    }

    /// Abandon the whole traversal: no further vertices will be yielded.
    pub fn cancel_all(&mut self) {
        self.pending_expand = None;
        self.stack.clear();
    }
}

impl<G: IntoEdges + VertexIndexable> Iterator for Dfs<G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.expand_pending();
        let v = self.stack.pop()?;
        self.pending_expand = Some(v);
        Some(v)
    }
}

/// Build a [`Dfs`] over `g`, starting from `start`.
pub fn dfs<G: IntoEdges + VertexIndexable>(g: G, start: G::VertexId) -> Dfs<G> {
    Dfs::new(g, start)
}

#[cfg(test)]
mod tests {
    use super::dfs;
    use crate::tests_support::VecGraph;

    #[test]
    fn visits_reachable_vertices_depth_first() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
        let order: Vec<usize> = dfs(&g, 0).collect();
        assert_eq!(order[0], 0);
        assert!(order.contains(&1));
        assert!(order.contains(&2));
        assert!(order.contains(&3));
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn does_not_revisit_a_vertex_reached_twice() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
        let order: Vec<usize> = dfs(&g, 0).collect();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn cancel_branch_skips_the_last_returned_vertexs_subtree() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
        let mut search = dfs(&g, 0);
        let mut visited = Vec::new();
        while let Some(v) = search.next() {
            visited.push(v);
            if v == 1 {
                search.cancel_branch();
            }
        }
        assert!(!visited.contains(&3));
        assert!(visited.contains(&2));
    }

    #[test]
    fn cancel_all_stops_the_traversal_immediately() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        let mut search = dfs(&g, 0);
        let mut visited = Vec::new();
        while let Some(v) = search.next() {
            visited.push(v);
            if v == 1 {
                search.cancel_all();
            }
        }
        assert_eq!(visited, vec![0, 1]);
    }

    #[test]
    fn single_vertex_graph_yields_just_the_start() {
        let g = VecGraph::from_arcs(1, &[]);
        assert_eq!(dfs(&g, 0).collect::<Vec<_>>(), vec![0]);
    }
}
