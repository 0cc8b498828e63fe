use crate::graphs::undirected::Undirected;
use crate::graphs::visited::Visited;

/// Depth-first preorder traversal from a single root.
///
/// Yields vertices in the order a recursive depth-first search would first
/// reach them: neighbors are explored in the order returned by
/// [`Undirected::neighbors`], descending into each unvisited neighbor
/// immediately. The recursion is replaced by an explicit stack of neighbor
/// iterators, so deep graphs cannot overflow the call stack.
///
/// The visited store can be handed in and taken back out, which lets
/// several traversals share one store.
pub struct GraphDFS<'g, G, V>
where
    G: Undirected + 'g,
    V: Visited<G::Vertex>,
{
    graph: &'g G,
    visited: V,
    root: Option<G::Vertex>,
    stack: Vec<G::Neighbors<'g>>,
}

impl<'g, G, V> GraphDFS<'g, G, V>
where
    G: Undirected + 'g,
    V: Visited<G::Vertex> + Default,
{
    pub fn new(graph: &'g G, root: G::Vertex) -> Self {
        Self::with_visited(graph, root, V::default())
    }
}

impl<'g, G, V> GraphDFS<'g, G, V>
where
    G: Undirected + 'g,
    V: Visited<G::Vertex>,
{
    /// Starts a traversal that skips every vertex already marked in `visited`.
    ///
    /// When the root itself is marked, the traversal yields nothing.
    pub fn with_visited(graph: &'g G, root: G::Vertex, visited: V) -> Self {
        Self {
            graph,
            visited,
            root: Some(root),
            stack: Vec::new(),
        }
    }

    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<'g, G, V> Iterator for GraphDFS<'g, G, V>
where
    G: Undirected + 'g,
    V: Visited<G::Vertex>,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if self.visited.visit(root) {
                self.stack.push(self.graph.neighbors(root));
                return Some(root);
            }
            return None;
        }

        while let Some(neighbors) = self.stack.last_mut() {
            match neighbors.next() {
                Some(next) => {
                    if self.visited.visit(next) {
                        self.stack.push(self.graph.neighbors(next));
                        return Some(next);
                    }
                }
                // All neighbors explored, backtrack.
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}
