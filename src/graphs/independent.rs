use std::collections::BTreeMap;

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::graphs::{
    adjacency::AdjacencyGraph,
    coloring::{greedy_coloring, Coloring},
    components::connected_components,
};

/// Component count from which components are colored in parallel.
const PARALLEL_THRESHOLD: usize = 1024;

/// Vertices chosen by [`independent_set`], along with the coloring they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndependentSet {
    /// Selected vertices, grouped by component and ascending within each.
    pub vertices: Vec<usize>,
    /// Merged coloring of every component, labels are unique per component.
    pub colors: BTreeMap<usize, String>,
}

impl IndependentSet {
    /// Attributes of the selected vertices, in selection order.
    pub fn attributes<'g, A>(&self, graph: &'g AdjacencyGraph<A>) -> Vec<Option<&'g A>> {
        self.vertices
            .iter()
            .map(|&vertex| graph.attribute(vertex))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Label prefix of the `index`-th component.
#[inline]
fn component_prefix(index: usize) -> String {
    format!("c_{index}_")
}

/// Selects a large set of pairwise non-adjacent vertices.
///
/// The graph is split into connected components, each component is colored
/// greedily with its own label prefix, and the largest color class of each
/// component is kept. Ties between classes go to the lowest color index.
/// The union of the kept classes is independent because no edge joins two
/// components.
pub fn independent_set<A>(graph: &AdjacencyGraph<A>) -> IndependentSet
where
    A: Clone + Sync,
{
    let components = connected_components(graph);

    let colorings: Vec<Coloring<usize>> = if components.len() < PARALLEL_THRESHOLD {
        components
            .iter()
            .enumerate()
            .map(|(i, component)| greedy_coloring(component, &component_prefix(i)))
            .collect()
    } else {
        components
            .par_iter()
            .enumerate()
            .map(|(i, component)| greedy_coloring(component, &component_prefix(i)))
            .collect()
    };

    let mut selection = IndependentSet {
        vertices: Vec::new(),
        colors: BTreeMap::new(),
    };

    for coloring in &colorings {
        selection.colors.extend(
            coloring
                .iter()
                .map(|(vertex, label)| (vertex, label.to_owned())),
        );

        if let Some((_, class)) = coloring.largest_class() {
            selection.vertices.extend(class);
        }
    }

    debug!(
        components = components.len(),
        selected = selection.vertices.len(),
        "selected independent set"
    );

    selection
}
