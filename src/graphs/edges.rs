/// Common vertex identifier type used by edge-related traits.
///
/// Graphs described here are simple: an edge is identified by its two
/// endpoints, so no separate edge identifier is needed.
pub trait Edges {
    /// Type used to identify vertices.
    ///
    /// Typically a small copyable value such as `usize`.
    type Vertex: Eq + Copy;
}

/// A graph that supports read-only access to its edges.
///
/// Each edge is yielded once as a pair `(u, v)`. For undirected graphs the
/// orientation of the pair is implementation-defined, and membership
/// queries ignore it.
pub trait ReadEdges: Edges {
    /// Iterator over all edges in the graph.
    ///
    /// The order of edges depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Edges<'a>: Iterator<Item = (Self::Vertex, Self::Vertex)>
    where
        Self: 'a;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns true when an edge joins `a` and `b`, in either orientation.
    fn has_edge(&self, a: Self::Vertex, b: Self::Vertex) -> bool {
        self.edges()
            .any(|(u, v)| (u == a && v == b) || (u == b && v == a))
    }
}

/// A graph that supports insertion of edges.
pub trait InsertEdge: Edges {
    /// Error reported when an edge cannot be inserted.
    type Error;

    /// Inserts an edge between the two endpoints.
    ///
    /// For an undirected graph, the order of the vertices is ignored.
    /// Whether parallel edges or edges to unknown vertices are rejected
    /// is left to the implementation, but a rejected insertion must not
    /// change the graph.
    fn insert_edge(&mut self, endpoints: (Self::Vertex, Self::Vertex)) -> Result<(), Self::Error>;
}
