//! Lazy views over a graph (spec §4.4–§4.9).
//!
//! Every view here is an iterator adaptor built directly on the [`crate::graph`]
//! trait family: constructing one does no work and allocates nothing beyond
//! whatever the graph's own `vertices`/`edges` iterators need, mirroring the
//! teacher's range-adaptor style (`Dfs`, `DfsPostOrder`, `Bfs`, `Topo` in
//! `visit.rs` all separate "algorithm state" from "the thing you iterate").

pub mod bfs;
pub mod dfs;
pub mod edgelist;
pub mod incidence;
pub mod neighbors;
pub mod vertexlist;

pub use bfs::{bfs, Bfs};
pub use dfs::{dfs, Dfs};
pub use edgelist::{edgelist, EdgeList};
pub use incidence::{incidence, Incidence};
pub use neighbors::{neighbors, Neighbors};
pub use vertexlist::{vertexlist, VertexList};
