use crate::graphs::edges::ReadEdges;

/// Core abstraction for finite undirected graphs.
///
/// Vertices are identified by small copyable values and edges represent
/// unordered connections between two (not necessarily distinct) vertices.
///
/// The trait focuses on structural access to neighborhoods.
/// Algorithms such as traversal, connectivity, or coloring are written as
/// generic helper functions built on top of this interface.
///
/// Iteration uses associated iterator types, so implementations can avoid
/// extra allocation and avoid dynamic dispatch.
pub trait Undirected: ReadEdges {
    /// Iterator over the neighbors of a vertex.
    type Neighbors<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: Self::Vertex) -> Self::Neighbors<'_>;

    /// Returns the degree of the given vertex.
    ///
    /// This is the length of the neighbor list, so a loop counts once.
    fn degree(&self, vertex: Self::Vertex) -> usize {
        self.neighbors(vertex).count()
    }

    /// Returns the number of loop edges incident to the given vertex.
    fn loop_degree(&self, vertex: Self::Vertex) -> usize {
        self.neighbors(vertex).filter(|&n| n == vertex).count()
    }

    /// Returns true when `b` is listed as a neighbor of `a`.
    ///
    /// This checks for a single-step edge only,
    /// it does not perform a reachability query through longer paths.
    fn is_connected(&self, a: Self::Vertex, b: Self::Vertex) -> bool {
        self.neighbors(a).any(|n| n == b)
    }
}
