use tracing::debug;

use crate::graphs::{
    adjacency::AdjacencyGraph,
    dfs::GraphDFS,
    undirected::Undirected,
    vertices::Vertices,
    visited::{IndexedVisited, Visited},
};

/// Partitions the vertices of `graph` into connected components.
///
/// Roots are taken in ascending id order, and each component lists its
/// vertices in depth-first visitation order from its root. Every vertex
/// appears in exactly one component. Neighbor ids that are not vertices of
/// `graph` are not followed.
pub fn component_vertices<G>(graph: &G) -> Vec<Vec<usize>>
where
    G: Undirected<Vertex = usize> + Vertices<Vertex = usize>,
{
    let mut ids: Vec<usize> = graph.vertices().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut visited = IndexedVisited::new(&ids);
    let mut components = Vec::new();

    for &root in &ids {
        if visited.is_visited(&root) {
            continue;
        }

        let mut dfs = GraphDFS::with_visited(graph, root, visited);
        let component: Vec<usize> = dfs.by_ref().collect();
        visited = dfs.into_visited();

        components.push(component);
    }

    components
}

/// Splits `graph` into one subgraph per connected component.
///
/// Subgraphs come in the order of [`component_vertices`], are independent
/// of `graph`, and carry over the attributes of their vertices.
pub fn connected_components<A>(graph: &AdjacencyGraph<A>) -> Vec<AdjacencyGraph<A>>
where
    A: Clone,
{
    let components: Vec<AdjacencyGraph<A>> = component_vertices(graph)
        .iter()
        .map(|component| graph.subgraph(component))
        .collect();

    debug!(
        vertices = graph.vertex_count(),
        components = components.len(),
        "found connected components"
    );

    components
}
