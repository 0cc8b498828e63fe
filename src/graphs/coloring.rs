use std::{collections::BTreeMap, hash::Hash, mem};

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use crate::graphs::{edges::Edges, undirected::Undirected, vertices::Vertices};

/// Assignment of color labels to the vertices of a graph.
///
/// Colors are indices into a palette of labels. A label is the prefix given
/// to [`greedy_coloring`] followed by the color index, so colorings made with
/// distinct prefixes can be merged without clashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring<V> {
    palette: Vec<String>,
    colors: BTreeMap<V, usize>,
}

impl<V> Coloring<V>
where
    V: Ord + Copy,
{
    /// Labels available to this coloring, indexed by color.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Color index of `vertex`.
    pub fn color(&self, vertex: V) -> Option<usize> {
        self.colors.get(&vertex).copied()
    }

    /// Color label of `vertex`.
    pub fn label(&self, vertex: V) -> Option<&str> {
        self.color(vertex).map(|color| self.palette[color].as_str())
    }

    /// Iterates `(vertex, label)` in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (V, &str)> + '_ {
        self.colors
            .iter()
            .map(|(&vertex, &color)| (vertex, self.palette[color].as_str()))
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Vertices grouped by color, ascending by color index.
    ///
    /// Only colors that are actually used appear. Vertices within a class
    /// are ascending.
    pub fn classes(&self) -> Vec<(usize, Vec<V>)> {
        let mut classes: BTreeMap<usize, Vec<V>> = BTreeMap::new();
        for (&vertex, &color) in &self.colors {
            classes.entry(color).or_default().push(vertex);
        }
        classes.into_iter().collect()
    }

    /// Number of distinct colors in use.
    pub fn used_colors(&self) -> usize {
        self.classes().len()
    }

    /// The largest color class.
    ///
    /// Ties go to the lowest color index. Returns `None` for an empty coloring.
    pub fn largest_class(&self) -> Option<(usize, Vec<V>)> {
        self.classes()
            .into_iter()
            .reduce(|best, class| if class.1.len() > best.1.len() { class } else { best })
    }

    /// Returns true when no edge of `graph` joins two vertices of the same color.
    ///
    /// Loops are ignored, they cannot be properly colored.
    pub fn is_proper<G>(&self, graph: &G) -> bool
    where
        G: Undirected<Vertex = V>,
    {
        graph
            .edges()
            .filter(|(u, v)| u != v)
            .all(|(u, v)| self.color(u) != self.color(v))
    }
}

/// Greedy vertex coloring ordered by descending degree.
///
/// Vertices are visited by non-increasing degree, ties keeping the order of
/// [`Vertices::vertices`]. Each vertex takes the lowest color index still
/// available to it, and that color is then removed from the available colors
/// of its uncolored neighbors.
///
/// The palette holds `max_degree + 1` labels named `{prefix}{index}`, which
/// is enough for any symmetric adjacency. Loops are ignored.
pub fn greedy_coloring<G>(graph: &G, prefix: &str) -> Coloring<<G as Edges>::Vertex>
where
    G: Undirected + Vertices<Vertex = <G as Edges>::Vertex>,
    <G as Edges>::Vertex: Ord + Hash,
{
    type V<G> = <G as Edges>::Vertex;

    // Working copy of the adjacency, pruned as vertices get colored.
    let mut working: FxHashMap<V<G>, Vec<V<G>>> = graph
        .vertices()
        .map(|vertex| (vertex, graph.neighbors(vertex).collect()))
        .collect();

    let mut order: Vec<(V<G>, usize)> = graph
        .vertices()
        .map(|vertex| (vertex, graph.degree(vertex)))
        .collect();
    // Stable, so equal degrees keep vertex order.
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let max_degree = order.first().map_or(0, |&(_, degree)| degree);
    let mut palette: Vec<String> = (0..=max_degree).map(|i| format!("{prefix}{i}")).collect();
    if order.is_empty() {
        palette.clear();
    }

    let mut available: FxHashMap<V<G>, Vec<usize>> = order
        .iter()
        .map(|&(vertex, _)| (vertex, (0..palette.len()).collect()))
        .collect();

    let mut colors: BTreeMap<V<G>, usize> = BTreeMap::new();

    for &(vertex, degree) in &order {
        let first = available.get(&vertex).and_then(|colors| colors.first().copied());
        let color = match first {
            Some(color) => color,
            None => {
                // Only reachable when neighbor lists are not symmetric.
                let color = palette.len();
                palette.push(format!("{prefix}{color}"));
                warn!(color, "palette exhausted, adding a color");
                color
            }
        };
        colors.insert(vertex, color);
        trace!(degree, color, "colored vertex");

        for neighbor in mem::take(working.entry(vertex).or_default()) {
            if neighbor == vertex {
                continue;
            }

            let Some(choices) = available.get_mut(&neighbor) else {
                continue;
            };
            if let Some(at) = choices.iter().position(|&c| c == color) {
                choices.remove(at);
                if let Some(list) = working.get_mut(&neighbor) {
                    if let Some(at) = list.iter().position(|&n| n == vertex) {
                        list.remove(at);
                    }
                }
            }
        }
    }

    Coloring { palette, colors }
}
