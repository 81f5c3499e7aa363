//! The breadth-first-search view (spec §4.9), with branch/whole-search
//! cancellation, mirrored from [`super::dfs`] but over a FIFO queue with
//! discovery marked at enqueue time, matching the teacher's `Bfs` iterator.

use crate::graph::{EdgeRef, IntoEdges, VertexIndexable};
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

/// A lazy breadth-first traversal starting from one vertex.
pub struct Bfs<G: IntoEdges + VertexIndexable> {
    graph: G,
    queue: VecDeque<G::VertexId>,
    discovered: FixedBitSet,
    pending_expand: Option<G::VertexId>,
}

impl<G: IntoEdges + VertexIndexable> Bfs<G> {
    /// Start a breadth-first traversal from `start`.
    pub fn new(g: G, start: G::VertexId) -> Self {
        let mut discovered = FixedBitSet::with_capacity(g.vertex_bound());
        discovered.insert(g.to_index(start));
        let mut queue = VecDeque::new();
        queue.push_back(start);
        Bfs {
            graph: g,
            queue,
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
                self.queue.push_back(t);
            }
        }
    }

    /// Abandon the branch rooted at the vertex most recently returned by
    /// [`next`](Iterator::next): its unvisited neighbors will not be
    /// enqueued.
    pub fn cancel_branch(&mut self) {
        self.pending_expand = None;
    }

    /// Abandon the whole traversal: no further vertices will be yielded.
    pub fn cancel_all(&mut self) {
        self.pending_expand = None;
        self.queue.clear();
    }
}

impl<G: IntoEdges + VertexIndexable> Iterator for Bfs<G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.expand_pending();
        let v = self.queue.pop_front()?;
        self.pending_expand = Some(v);
        Some(v)
    }
}

/// Build a [`Bfs`] over `g`, starting from `start`.
pub fn bfs<G: IntoEdges + VertexIndexable>(g: G, start: G::VertexId) -> Bfs<G> {
    Bfs::new(g, start)
}

#[cfg(test)]
mod tests {
    use super::bfs;
    use crate::tests_support::VecGraph;

    #[test]
    fn visits_level_by_level() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
        let order: Vec<usize> = bfs(&g, 0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn does_not_revisit_a_vertex_reached_twice() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
        assert_eq!(bfs(&g, 0).count(), 3);
    }

    #[test]
    fn cancel_branch_skips_the_last_returned_vertexs_children() {
        let g = VecGraph::from_arcs(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0)]);
        let mut search = bfs(&g, 0);
        let mut visited = Vec::new();
        while let Some(v) = search.next() {
            visited.push(v);
            if v == 1 {
                search.cancel_branch();
            }
        }
        assert!(!visited.contains(&3));
    }

    #[test]
    fn seed_with_no_outgoing_edges_yields_just_itself() {
        let g = VecGraph::from_arcs(3, &[(0, 1, 1.0)]);
        assert_eq!(bfs(&g, 2).collect::<Vec<_>>(), vec![2]);
    }
}
