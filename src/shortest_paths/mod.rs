//! Shortest-path engines (spec §4.10–§4.11): Dijkstra in three renderings,
//! and Bellman–Ford with negative-cycle detection.
//!
//! Split the way the teacher splits `dijkstra.rs` and `algo/mod.rs`'s
//! `bellman_ford` into separate translation units rather than one large module:
//! each engine gets its own file, with [`common`] holding the distance-arithmetic
//! and null-predecessor scaffolding both engines share.

pub mod bellman_ford;
pub mod common;
pub mod dijkstra;

pub use bellman_ford::{
    bellman_ford, bellman_ford_distances, bellman_ford_multi_source, bellman_ford_with_visitor, find_negative_cycle,
};
pub use common::{init_shortest_paths, shortest_path_invalid_distance, shortest_path_zero, FloatMeasure, Measure, NullPredecessors, PredecessorSink};
pub use dijkstra::{
    dijkstra, dijkstra_core, dijkstra_event_iter, dijkstra_event_iter_multi_source, dijkstra_multi_source,
    dijkstra_multi_source_with_predecessors, dijkstra_with_predecessors, dijkstra_with_visitor, DijkstraEventIter, DijkstraStep,
};
