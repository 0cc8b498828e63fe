//! Undirected graphs stored as adjacency maps, with connected-component
//! discovery, greedy vertex coloring, and their composition into the
//! selection of a large independent set across all components.
//!
//! ```
//! use friendgraph::prelude::*;
//!
//! let mut graph = AdjacencyGraph::with_attributes(
//!     [(0, vec![1]), (1, vec![0]), (2, vec![])],
//!     [(0, "Ann"), (1, "Bob"), (2, "Cid")],
//! )?;
//! graph.add_edge(1, 2)?;
//!
//! let selection = independent_set(&graph);
//! assert_eq!(selection.attributes(&graph), vec![Some(&"Ann"), Some(&"Cid")]);
//! # Ok::<(), friendgraph::GraphError>(())
//! ```

pub mod error;
pub mod graphs;

pub use error::GraphError;

/// Graph type, traits and algorithms in one import.
pub mod prelude {
    pub use crate::error::GraphError;
    pub use crate::graphs::{
        adjacency::AdjacencyGraph,
        coloring::{greedy_coloring, Coloring},
        components::{component_vertices, connected_components},
        dfs::GraphDFS,
        edges::{Edges, InsertEdge, ReadEdges},
        graph::Graph,
        independent::{independent_set, IndependentSet},
        random::RandomGraphConfig,
        undirected::Undirected,
        vertices::Vertices,
        visited::{IndexedVisited, Visited},
    };
}
