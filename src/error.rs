use std::error::Error;
use std::fmt;

/// An error returned by an algorithm entry point.
///
/// The core never panics on malformed input that it can cheaply detect; instead it
/// reports one of these variants. Invariant violations that the core assumes but
/// cannot cheaply pre-check (see [`GraphError::InternalInvariant`]) are the one
/// exception carved out by the specification itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A source vertex id passed to a shortest-path algorithm was outside
    /// `0..num_vertices(g)`.
    SourceOutOfRange {
        /// The offending id, as a plain index.
        source: usize,
        /// The number of vertices in the graph.
        num_vertices: usize,
    },
    /// A distance or predecessor buffer was shorter than the vertex count.
    BufferTooSmall {
        /// The buffer's actual length.
        len: usize,
        /// The number of vertices in the graph.
        num_vertices: usize,
    },
    /// A Dijkstra weight function produced a negative value for a signed weight type.
    NegativeWeight,
    /// An invariant the algorithm relies on, but cannot cheaply pre-check, failed at
    /// runtime (for example: an edge to a previously undiscovered vertex in Dijkstra
    /// did not relax, or a Bellman–Ford negative-cycle walk never revisited its start).
    InternalInvariant(&'static str),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::SourceOutOfRange {
                source,
                num_vertices,
            } => write!(
                f,
                "source vertex id {source} is out of range for a graph with {num_vertices} vertices"
            ),
            GraphError::BufferTooSmall { len, num_vertices } => write!(
                f,
                "buffer of length {len} is smaller than the vertex count {num_vertices}"
            ),
            GraphError::NegativeWeight => write!(f, "edge weight was negative"),
            GraphError::InternalInvariant(what) => write!(f, "internal invariant violated: {what}"),
        }
    }
}

impl Error for GraphError {}
