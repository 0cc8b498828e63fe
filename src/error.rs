use thiserror::Error;

/// Errors reported by graph construction and mutation.
///
/// Mutations that fail leave the graph exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// One or more referenced vertices are not part of the graph.
    #[error("vertices {vertices:?} are not in the graph")]
    Membership { vertices: Vec<usize> },

    /// The edge is already present, nothing was changed.
    #[error("edge ({u}, {v}) already exists")]
    DuplicateEdge { u: usize, v: usize },

    /// The adjacency input lists a neighbor that is not one of its keys.
    #[error("vertex {vertex} lists neighbor {neighbor} which is not a vertex of the graph")]
    MalformedInput { vertex: usize, neighbor: usize },

    /// The attribute input does not cover every vertex.
    #[error("no attribute supplied for vertex {vertex}")]
    MissingAttribute { vertex: usize },

    /// The largest vertex id leaves no room for a fresh one.
    #[error("no vertex id left after {last}")]
    IdsExhausted { last: usize },
}

impl GraphError {
    /// Returns true for errors that only signal a no-op.
    ///
    /// Batch callers can safely skip soft errors and continue.
    pub fn is_soft(&self) -> bool {
        matches!(self, GraphError::DuplicateEdge { .. })
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
