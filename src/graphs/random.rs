use std::collections::BTreeMap;

use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graphs::adjacency::AdjacencyGraph;

/// Defaults used by [`AdjacencyGraph::random`] when a count is not given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Smallest vertex count drawn when none is requested.
    pub min_vertices: usize,
    /// Largest vertex count drawn when none is requested.
    pub max_vertices: usize,
    /// Decimal places kept in the random vertex weights.
    pub weight_decimals: i32,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            min_vertices: 2,
            max_vertices: 10,
            weight_decimals: 2,
        }
    }
}

/// Number of edges of the complete graph on `vertices` vertices.
#[inline]
fn complete_edge_count(vertices: usize) -> usize {
    vertices * vertices.saturating_sub(1) / 2
}

impl AdjacencyGraph<f64> {
    /// Creates a random simple graph with the default [`RandomGraphConfig`].
    ///
    /// See [`AdjacencyGraph::random_with_config`].
    pub fn random<R>(rng: &mut R, vertex_count: Option<usize>, edge_count: Option<usize>) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::random_with_config(rng, vertex_count, edge_count, &RandomGraphConfig::default())
    }

    /// Creates a random simple graph on the vertices `0..vertex_count`.
    ///
    /// A missing `vertex_count` is drawn uniformly from the configured range.
    /// A missing `edge_count` is drawn uniformly from one up to the edge count
    /// of the complete graph, or zero when fewer than two vertices exist.
    ///
    /// Each of the `edge_count` draws picks two endpoints uniformly with
    /// replacement. Draws with equal endpoints are discarded and repeated
    /// pairs collapse, so the realized edge count can be smaller than
    /// requested.
    ///
    /// Every vertex gets a weight drawn uniformly from `[0, 1]`, rounded to
    /// the configured number of decimals.
    pub fn random_with_config<R>(
        rng: &mut R,
        vertex_count: Option<usize>,
        edge_count: Option<usize>,
        config: &RandomGraphConfig,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let vertex_count = vertex_count.unwrap_or_else(|| {
            let low = config.min_vertices.min(config.max_vertices);
            let high = config.min_vertices.max(config.max_vertices);
            rng.random_range(low..=high)
        });

        let edge_count = edge_count.unwrap_or_else(|| match complete_edge_count(vertex_count) {
            0 => 0,
            bound => rng.random_range(1..=bound),
        });

        let mut adjacency: BTreeMap<usize, Vec<usize>> =
            (0..vertex_count).map(|vertex| (vertex, Vec::new())).collect();

        if vertex_count > 0 {
            for _ in 0..edge_count {
                let u = rng.random_range(0..vertex_count);
                let v = rng.random_range(0..vertex_count);

                // No loops in random graphs.
                if u == v {
                    continue;
                }

                adjacency.entry(u).or_default().push(v);
                adjacency.entry(v).or_default().push(u);
            }
        }

        for neighbors in adjacency.values_mut() {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        let scale = 10f64.powi(config.weight_decimals);
        let attributes: FxHashMap<usize, Option<f64>> = adjacency
            .keys()
            .map(|&vertex| {
                let weight: f64 = rng.random_range(0.0..=1.0);
                (vertex, Some((weight * scale).round() / scale))
            })
            .collect();

        debug!(vertex_count, edge_count, "generated random graph");

        Self::from_validated(adjacency, attributes)
    }
}
