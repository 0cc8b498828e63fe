use crate::graphs::{edges::ReadEdges, vertices::Vertices};

/// High level abstraction for a finite graph.
///
/// Graph composes two separate components, a vertex store and an edge store.
/// The vertex store describes the vertex set, the edge store describes
/// the edge set and its structural properties.
///
/// Concrete graph types can use a single structure for both roles or use
/// separate structures for vertex data and edge data.
pub trait Graph {
    /// Vertex storage component.
    type VertexStore: Vertices;

    /// Edge storage component.
    type EdgeStore: ReadEdges;

    /// Returns a shared reference to the edge storage.
    fn edge_store(&self) -> &Self::EdgeStore;

    /// Returns a shared reference to the vertex storage.
    fn vertex_store(&self) -> &Self::VertexStore;

    /// Size measure for the whole graph, the number of vertices
    /// plus the number of edges.
    fn size(&self) -> usize {
        self.vertex_store().vertex_count() + self.edge_store().edge_count()
    }

    /// Returns true when the graph has neither vertices nor edges.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
