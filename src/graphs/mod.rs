pub mod adjacency;
pub mod coloring;
pub mod components;
pub mod dfs;
pub mod edges;
pub mod graph;
pub mod independent;
pub mod random;
pub mod undirected;
pub mod vertices;
pub mod visited;
