//! Generic adjacency-list graph contract, lazy views, and a handful of
//! shortest-path and auxiliary algorithms over it.
//!
//! The crate is organised the way the teacher this was built from organises
//! itself: a core trait family describing what a graph can do
//! ([`graph`]), zero-copy lazy [`views`] built on top of it, a
//! [`visitor`] protocol shared by traversals and searches, and algorithm
//! modules under [`shortest_paths`] and [`algo`] that are generic over the
//! trait family rather than over any one concrete container.
//!
//! Start with the [`prelude`] for the traits and types most call sites need.

pub mod algo;
pub mod descriptor;
pub mod error;
pub mod graph;
pub mod scored;
pub mod shortest_paths;
pub mod unionfind;
pub mod views;
pub mod visitor;

/// The traits and types most callers need in scope.
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graph::{
        degree, edge_value, edges, find_vertex, graph_value, num_vertices, partition_id, source,
        source_id, target, target_id, vertex_id, vertex_value, vertices, EdgeRef, FindVertex,
        GraphBase, GraphValue, IndexAdjacencyList, IntoEdges, IntoVertices, PartitionId,
        SourcedEdgeRef, UnorderedEdges, VertexIndexable, VertexRef, WithEdgeValue, WithVertexValue,
    };
    pub use crate::unionfind::UnionFind;
    pub use crate::visitor::{Control, DijkstraEvent, DijkstraEvents, EmptyVisitor, Visitor};
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! A minimal `Vec<Vec<Arc>>` adjacency list implementing the full graph
    //! contract, used only to exercise the trait family and algorithms in
    //! this crate's own unit tests. Not part of the public API: real callers
    //! bring their own container.

    use crate::graph::{EdgeRef, FindVertex, GraphBase, IntoEdges, IntoVertices, SourcedEdgeRef, VertexIndexable, VertexRef, WithEdgeValue};

    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Arc {
        source: usize,
        target: usize,
        weight: f64,
    }

    impl EdgeRef for Arc {
        type VertexId = usize;
        fn target_id(&self) -> usize {
            self.target
        }
    }

    impl SourcedEdgeRef for Arc {
        fn source_id(&self) -> usize {
            self.source
        }
    }

    impl WithEdgeValue for Arc {
        type Value = f64;
        fn value(&self) -> &f64 {
            &self.weight
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Vtx(pub usize);

    impl VertexRef for Vtx {
        type VertexId = usize;
        fn id(&self) -> usize {
            self.0
        }
    }

    #[derive(Clone, Debug, Default)]
    pub struct VecGraph {
        adj: Vec<Vec<Arc>>,
    }

    impl VecGraph {
        pub fn from_arcs(n: usize, arcs: &[(usize, usize, f64)]) -> Self {
            let mut adj = vec![Vec::new(); n];
            for &(u, v, w) in arcs {
                adj[u].push(Arc {
                    source: u,
                    target: v,
                    weight: w,
                });
            }
            VecGraph { adj }
        }

        pub fn from_undirected_arcs(n: usize, arcs: &[(usize, usize, f64)]) -> Self {
            let mut adj = vec![Vec::new(); n];
            for &(u, v, w) in arcs {
                adj[u].push(Arc { source: u, target: v, weight: w });
                adj[v].push(Arc { source: v, target: u, weight: w });
            }
            VecGraph { adj }
        }
    }

    impl<'a> GraphBase for &'a VecGraph {
        type VertexId = usize;
    }

    impl<'a> IntoVertices for &'a VecGraph {
        type VertexRef = Vtx;
        type Vertices = std::iter::Map<std::ops::Range<usize>, fn(usize) -> Vtx>;
        fn vertices(self) -> Self::Vertices {
            (0..self.adj.len()).map(Vtx)
        }
        fn num_vertices(self) -> usize {
            self.adj.len()
        }
    }

    impl<'a> IntoEdges for &'a VecGraph {
        type EdgeRef = Arc;
        type Edges = std::iter::Cloned<std::slice::Iter<'a, Arc>>;
        fn edges(self, id: usize) -> Self::Edges {
            self.adj[id].iter().cloned()
        }
        fn degree(self, id: usize) -> usize {
            self.adj[id].len()
        }
    }

    impl<'a> VertexIndexable for &'a VecGraph {
        fn vertex_bound(self) -> usize {
            self.adj.len()
        }
        fn to_index(self, id: usize) -> usize {
            id
        }
        fn from_index(self, index: usize) -> usize {
            index
        }
    }

    impl<'a> FindVertex for &'a VecGraph {
        fn find_vertex(self, id: usize) -> Option<Vtx> {
            if id < self.adj.len() {
                Some(Vtx(id))
            } else {
                None
            }
        }
    }
}
