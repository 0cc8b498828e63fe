/// Read access to the vertex set of a graph.
pub trait Vertices {
    /// Type used to identify vertices.
    type Vertex: Eq + Copy;

    /// Iterator over all vertices in the graph.
    ///
    /// The order of vertices depends on the implementation, but should be stable
    /// for a given graph instance unless the graph is mutated.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true when `vertex` belongs to the graph.
    fn has_vertex(&self, vertex: Self::Vertex) -> bool {
        self.vertices().any(|v| v == vertex)
    }

    /// Returns true when every vertex yielded by `vertices` belongs to the graph.
    ///
    /// An empty input is trivially contained.
    fn has_all_vertices<I>(&self, vertices: I) -> bool
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        vertices.into_iter().all(|v| self.has_vertex(v))
    }
}
