use std::{collections::BTreeMap, fmt, iter::Copied, slice::Iter};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::graphs::{
    edges::{Edges, InsertEdge, ReadEdges},
    graph::Graph,
    undirected::Undirected,
    vertices::Vertices,
};

/// Undirected graph stored as an adjacency map with per-vertex attributes.
///
/// Vertices are non-negative integers kept in ascending order. Every vertex
/// owns a sorted, duplicate free neighbor list. Each vertex carries an
/// optional attribute of type `A`, `None` marks an absent attribute.
///
/// The edge list is derived once at construction and then maintained by
/// the mutation operations. Each unordered pair is stored once, in the
/// orientation it was first encountered, while membership queries ignore
/// orientation.
///
/// Construction does not symmetrize the adjacency input: callers supplying
/// a raw map are expected to list every edge from both endpoints. The
/// mutation operations keep the map symmetric.
///
/// Mutation requires exclusive access; sharing a graph between threads
/// that mutate it needs external locking.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph<A = ()> {
    /// Vertex ids in ascending order.
    vertices: Vec<usize>,
    /// Sorted neighbor list for each vertex.
    adjacency: FxHashMap<usize, Vec<usize>>,
    /// Attribute of each vertex, `None` when absent.
    attributes: FxHashMap<usize, Option<A>>,
    /// Edges in first-seen orientation.
    edges: Vec<(usize, usize)>,
    /// Edges with their endpoints sorted, for membership queries.
    edge_set: FxHashSet<(usize, usize)>,
}

impl<A> Default for AdjacencyGraph<A> {
    /// Empty graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: FxHashMap::default(),
            attributes: FxHashMap::default(),
            edges: Vec::new(),
            edge_set: FxHashSet::default(),
        }
    }
}

#[inline]
fn normalized(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Inserts `value` into an ascending list, keeping it sorted.
#[inline]
fn insert_sorted(list: &mut Vec<usize>, value: usize) {
    let at = list.partition_point(|&x| x < value);
    list.insert(at, value);
}

/// Collects raw adjacency input into sorted, deduplicated neighbor lists.
///
/// Repeated keys have their neighbor lists merged.
fn collect_adjacency<I, N>(adjacency: I) -> BTreeMap<usize, Vec<usize>>
where
    I: IntoIterator<Item = (usize, N)>,
    N: IntoIterator<Item = usize>,
{
    let mut map: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (vertex, neighbors) in adjacency {
        map.entry(vertex).or_default().extend(neighbors);
    }

    for neighbors in map.values_mut() {
        neighbors.sort_unstable();
        neighbors.dedup();
    }

    map
}

impl<A> AdjacencyGraph<A> {
    /// Builds a graph from an adjacency map, with every attribute absent.
    ///
    /// The vertex set is the key set of `adjacency`. Fails with
    /// [`GraphError::MalformedInput`] when a neighbor list names an id that
    /// is not a key.
    pub fn new<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, N)>,
        N: IntoIterator<Item = usize>,
    {
        let adjacency = collect_adjacency(adjacency);
        let attributes = adjacency.keys().map(|&vertex| (vertex, None)).collect();
        Self::build(adjacency, attributes)
    }

    /// Builds a graph from an adjacency map and an attribute map.
    ///
    /// Every vertex must have an attribute, otherwise construction fails with
    /// [`GraphError::MissingAttribute`]. Attributes of ids that are not
    /// vertices are dropped.
    pub fn with_attributes<I, N, W>(adjacency: I, attributes: W) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, N)>,
        N: IntoIterator<Item = usize>,
        W: IntoIterator<Item = (usize, A)>,
    {
        let adjacency = collect_adjacency(adjacency);
        let mut supplied: FxHashMap<usize, A> = attributes.into_iter().collect();

        let mut attributes =
            FxHashMap::with_capacity_and_hasher(adjacency.len(), Default::default());
        for &vertex in adjacency.keys() {
            let value = supplied
                .remove(&vertex)
                .ok_or(GraphError::MissingAttribute { vertex })?;
            attributes.insert(vertex, Some(value));
        }

        if !supplied.is_empty() {
            debug!(dropped = supplied.len(), "ignoring attributes of unknown vertices");
        }

        Self::build(adjacency, attributes)
    }

    fn build(
        adjacency: BTreeMap<usize, Vec<usize>>,
        attributes: FxHashMap<usize, Option<A>>,
    ) -> Result<Self> {
        for (&vertex, neighbors) in &adjacency {
            if let Some(&neighbor) = neighbors.iter().find(|n| !adjacency.contains_key(n)) {
                return Err(GraphError::MalformedInput { vertex, neighbor });
            }
        }

        let graph = Self::from_validated(adjacency, attributes);
        if let Some((vertex, neighbor)) = graph.asymmetric_entry() {
            // Accepted as given, edges still come from either list.
            debug!(vertex, neighbor, "neighbor lists are not symmetric");
        }

        Ok(graph)
    }

    /// First `(vertex, neighbor)` entry whose reverse entry is missing.
    fn asymmetric_entry(&self) -> Option<(usize, usize)> {
        self.vertices.iter().find_map(|&vertex| {
            self.adjacent(vertex)
                .iter()
                .find(|&&neighbor| self.adjacent(neighbor).binary_search(&vertex).is_err())
                .map(|&neighbor| (vertex, neighbor))
        })
    }

    /// Returns true when every neighbor entry has its reverse entry.
    ///
    /// Construction trusts the caller on symmetry. An asymmetric input keeps
    /// its one-sided lists, while the edge list still holds the pair.
    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_entry().is_none()
    }

    /// Assembles a graph from an adjacency map whose neighbors are all keys.
    pub(crate) fn from_validated(
        adjacency: BTreeMap<usize, Vec<usize>>,
        attributes: FxHashMap<usize, Option<A>>,
    ) -> Self {
        let mut graph = Self::default();
        graph.vertices = adjacency.keys().copied().collect();

        for (&vertex, neighbors) in &adjacency {
            for &neighbor in neighbors {
                if graph.edge_set.insert(normalized(vertex, neighbor)) {
                    graph.edges.push((vertex, neighbor));
                }
            }
        }

        graph.adjacency = adjacency.into_iter().collect();
        graph.attributes = attributes;

        debug!(
            vertices = graph.vertices.len(),
            edges = graph.edges.len(),
            "constructed graph"
        );

        graph
    }

    /// Vertex ids in ascending order.
    pub fn vertex_ids(&self) -> &[usize] {
        &self.vertices
    }

    /// Sorted neighbor list of `vertex`, empty for unknown vertices.
    pub fn adjacent(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates `(vertex, neighbors)` in ascending vertex order.
    pub fn adjacency(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.vertices
            .iter()
            .map(move |&vertex| (vertex, self.adjacent(vertex)))
    }

    /// Edges in stored orientation and insertion order.
    pub fn edge_list(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Attribute of `vertex`, `None` when absent or when the vertex is unknown.
    pub fn attribute(&self, vertex: usize) -> Option<&A> {
        self.attributes.get(&vertex).and_then(Option::as_ref)
    }

    /// Iterates `(vertex, attribute)` in ascending vertex order.
    pub fn attributes(&self) -> impl Iterator<Item = (usize, Option<&A>)> + '_ {
        self.vertices
            .iter()
            .map(move |&vertex| (vertex, self.attribute(vertex)))
    }

    /// Sets the attribute of an existing vertex.
    ///
    /// Unknown vertices are reported with [`GraphError::Membership`] and the
    /// graph is left unchanged.
    pub fn set_attribute(&mut self, vertex: usize, value: A) -> Result<()> {
        match self.attributes.get_mut(&vertex) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => {
                warn!(vertex, "cannot set attribute, vertex is not in the graph");
                Err(GraphError::Membership {
                    vertices: vec![vertex],
                })
            }
        }
    }

    /// Adds a new vertex adjacent to every vertex in `neighbors`.
    ///
    /// The new id is one past the largest existing id, or `0` for an empty
    /// graph. Returns the new id. Fails with [`GraphError::Membership`]
    /// when a neighbor is unknown and with [`GraphError::IdsExhausted`] when
    /// the largest id is `usize::MAX`. Either way the graph is left unchanged.
    pub fn add_vertex<I>(&mut self, neighbors: I, attribute: Option<A>) -> Result<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut neighbors: Vec<usize> = neighbors.into_iter().collect();
        neighbors.sort_unstable();
        neighbors.dedup();

        if !self.has_all_vertices(neighbors.iter().copied()) {
            let missing: Vec<usize> = neighbors
                .iter()
                .copied()
                .filter(|&n| !self.has_vertex(n))
                .collect();
            warn!(?missing, "cannot add vertex, neighbors are not in the graph");
            return Err(GraphError::Membership { vertices: missing });
        }

        // Vertices are sorted, so the last one is the largest id.
        let vertex = match self.vertices.last() {
            None => 0,
            Some(&last) => last.checked_add(1).ok_or_else(|| {
                warn!(last, "cannot add vertex, ids are exhausted");
                GraphError::IdsExhausted { last }
            })?,
        };

        for &neighbor in &neighbors {
            if let Some(list) = self.adjacency.get_mut(&neighbor) {
                // `vertex` exceeds every existing id, pushing keeps the list sorted.
                list.push(vertex);
            }
            self.edges.push((neighbor, vertex));
            self.edge_set.insert((neighbor, vertex));
        }

        debug!(vertex, degree = neighbors.len(), "added vertex");

        self.adjacency.insert(vertex, neighbors);
        self.vertices.push(vertex);
        self.attributes.insert(vertex, attribute);

        Ok(vertex)
    }

    /// Connects `u` and `v` with an edge.
    ///
    /// Fails with [`GraphError::Membership`] when an endpoint is unknown and
    /// with the soft [`GraphError::DuplicateEdge`] when the edge exists.
    /// Either way the graph is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        if !self.has_all_vertices([u, v]) {
            let mut missing: Vec<usize> = [u, v]
                .into_iter()
                .filter(|&x| !self.has_vertex(x))
                .collect();
            missing.dedup();
            warn!(u, v, "cannot add edge, endpoints are not in the graph");
            return Err(GraphError::Membership { vertices: missing });
        }

        let edge = normalized(u, v);
        if self.edge_set.contains(&edge) {
            warn!(u, v, "edge already exists");
            return Err(GraphError::DuplicateEdge {
                u: edge.0,
                v: edge.1,
            });
        }

        self.edge_set.insert(edge);
        self.edges.push(edge);

        if let Some(list) = self.adjacency.get_mut(&u) {
            insert_sorted(list, v);
        }
        if u != v {
            if let Some(list) = self.adjacency.get_mut(&v) {
                insert_sorted(list, u);
            }
        }

        Ok(())
    }

    /// Builds the subgraph induced by `vertices`.
    ///
    /// Ids that are not vertices are ignored. Neighbor lists are restricted
    /// to the kept vertices and attributes are carried over.
    pub fn subgraph(&self, vertices: &[usize]) -> Self
    where
        A: Clone,
    {
        let keep: FxHashSet<usize> = vertices
            .iter()
            .copied()
            .filter(|v| self.adjacency.contains_key(v))
            .collect();

        let adjacency: BTreeMap<usize, Vec<usize>> = keep
            .iter()
            .map(|&vertex| {
                let neighbors = self
                    .adjacent(vertex)
                    .iter()
                    .copied()
                    .filter(|n| keep.contains(n))
                    .collect();
                (vertex, neighbors)
            })
            .collect();

        let attributes = keep
            .iter()
            .map(|&vertex| (vertex, self.attributes.get(&vertex).cloned().flatten()))
            .collect();

        Self::from_validated(adjacency, attributes)
    }
}

impl<A> Vertices for AdjacencyGraph<A> {
    type Vertex = usize;

    type Vertices<'a>
        = Copied<Iter<'a, usize>>
    where
        Self: 'a;

    fn vertices(&self) -> Copied<Iter<'_, usize>> {
        self.vertices.iter().copied()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }
}

impl<A> Edges for AdjacencyGraph<A> {
    type Vertex = usize;
}

impl<A> ReadEdges for AdjacencyGraph<A> {
    type Edges<'a>
        = Copied<Iter<'a, (usize, usize)>>
    where
        Self: 'a;

    fn edges(&self) -> Copied<Iter<'_, (usize, usize)>> {
        self.edges.iter().copied()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_set.contains(&normalized(a, b))
    }
}

impl<A> InsertEdge for AdjacencyGraph<A> {
    type Error = GraphError;

    fn insert_edge(&mut self, (u, v): (usize, usize)) -> Result<()> {
        self.add_edge(u, v)
    }
}

impl<A> Undirected for AdjacencyGraph<A> {
    type Neighbors<'a>
        = Copied<Iter<'a, usize>>
    where
        Self: 'a;

    fn neighbors(&self, vertex: usize) -> Copied<Iter<'_, usize>> {
        self.adjacent(vertex).iter().copied()
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adjacent(vertex).len()
    }
}

impl<A> Graph for AdjacencyGraph<A> {
    type VertexStore = Self;
    type EdgeStore = Self;

    fn edge_store(&self) -> &Self {
        self
    }

    fn vertex_store(&self) -> &Self {
        self
    }
}

/// Human readable dump, `(vertex, attribute): [neighbors]` entries joined by `"; "`.
impl<A: fmt::Display> fmt::Display for AdjacencyGraph<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (vertex, neighbors)) in self.adjacency().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match self.attribute(vertex) {
                Some(attribute) => write!(f, "({vertex}, {attribute}): {neighbors:?}")?,
                None => write!(f, "({vertex}, None): {neighbors:?}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn friends() -> AdjacencyGraph<char> {
        AdjacencyGraph::with_attributes(
            [
                (0, vec![4]),
                (1, vec![4, 3]),
                (4, vec![0, 1, 3]),
                (5, vec![3]),
                (2, vec![]),
                (3, vec![1, 5, 4]),
            ],
            [(0, 'A'), (1, 'B'), (2, 'C'), (3, 'D'), (4, 'E'), (5, 'F')],
        )
        .expect("well formed input")
    }

    #[test]
    fn construction_sorts_vertices_and_derives_edges() {
        let g = friends();

        assert_eq!(g.vertex_ids(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(g.adjacent(1), &[3, 4]);
        assert_eq!(g.adjacent(3), &[1, 4, 5]);

        assert_eq!(g.edge_list(), &[(0, 4), (1, 3), (1, 4), (3, 4), (3, 5)]);
        for (a, b) in [(0, 4), (1, 4), (1, 3), (4, 3), (3, 5)] {
            assert!(g.has_edge(a, b), "missing edge {{{a}, {b}}}");
            assert!(g.has_edge(b, a), "membership must ignore orientation");
        }

        // Vertex 2 is isolated.
        assert!(g.adjacent(2).is_empty());
        assert!(g.edges().all(|(u, v)| u != 2 && v != 2));
        assert_eq!(g.size(), 11);
    }

    #[test]
    fn empty_and_single_vertex_graphs_are_valid() {
        let empty = AdjacencyGraph::<()>::new(Vec::<(usize, Vec<usize>)>::new()).unwrap();
        assert_eq!(empty, AdjacencyGraph::default());
        assert_eq!(empty.vertex_count(), 0);
        assert_eq!(empty.edge_count(), 0);
        assert!(empty.is_empty());
        assert_eq!(AdjacencyGraph::<u8>::default().to_string(), "");

        let single = AdjacencyGraph::<()>::new([(0, vec![])]).unwrap();
        assert_eq!(single.vertex_ids(), &[0]);
        assert_eq!(single.edge_count(), 0);
        assert_eq!(single.attribute(0), None);
        assert!(!single.is_empty());
    }

    #[test]
    fn construction_rejects_unknown_neighbors() {
        let err = AdjacencyGraph::<()>::new([(0, vec![1]), (1, vec![0, 9])]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MalformedInput {
                vertex: 1,
                neighbor: 9
            }
        );
    }

    #[test]
    fn construction_requires_an_attribute_per_vertex() {
        let err =
            AdjacencyGraph::with_attributes([(0, vec![1]), (1, vec![0])], [(0, "a")]).unwrap_err();
        assert_eq!(err, GraphError::MissingAttribute { vertex: 1 });

        // Extra attributes are dropped.
        let g = AdjacencyGraph::with_attributes([(0, vec![])], [(0, "a"), (7, "z")]).unwrap();
        assert_eq!(g.attribute(0), Some(&"a"));
        assert_eq!(g.attribute(7), None);
    }

    #[test]
    fn construction_deduplicates_and_merges_neighbor_lists() {
        let g = AdjacencyGraph::<()>::new([(0, vec![1, 1, 2]), (1, vec![0]), (2, vec![0]), (1, vec![0])])
            .unwrap();
        assert_eq!(g.adjacent(0), &[1, 2]);
        assert_eq!(g.adjacent(1), &[0]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    #[traced_test]
    fn asymmetric_input_is_kept_as_given() {
        let g = AdjacencyGraph::<()>::new([(0, vec![]), (1, vec![0])]).unwrap();

        assert!(!g.is_symmetric());
        assert!(g.has_edge(0, 1));
        assert_eq!(g.edge_list(), &[(1, 0)]);
        assert!(g.adjacent(0).is_empty());
        assert_eq!(g.adjacent(1), &[0]);
        assert!(logs_contain("neighbor lists are not symmetric"));

        assert!(friends().is_symmetric());
    }

    #[test]
    fn self_loops_are_kept_when_listed() {
        let g = AdjacencyGraph::<()>::new([(0, vec![0, 1]), (1, vec![0])]).unwrap();
        assert!(g.has_edge(0, 0));
        assert_eq!(g.loop_degree(0), 1);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn add_vertex_links_new_id_to_neighbors() {
        let mut g = friends();
        let edges_before = g.edge_count();

        let id = g.add_vertex([0, 5], Some('G')).unwrap();

        assert_eq!(id, 6);
        assert_eq!(g.vertex_count(), 7);
        assert_eq!(g.adjacent(6), &[0, 5]);
        assert_eq!(g.adjacent(0), &[4, 6]);
        assert_eq!(g.adjacent(5), &[3, 6]);
        assert_eq!(g.edge_count(), edges_before + 2);
        assert!(g.has_edge(6, 0) && g.has_edge(5, 6));
        assert_eq!(g.attribute(6), Some(&'G'));

        let id = g.add_vertex([3, 1, 0], Some('H')).unwrap();
        assert_eq!(id, 7);
        assert_eq!(g.adjacent(7), &[0, 1, 3]);
    }

    #[test]
    fn add_vertex_to_empty_graph_starts_at_zero() {
        let mut g = AdjacencyGraph::<()>::default();
        assert_eq!(g.add_vertex([], None).unwrap(), 0);
        assert_eq!(g.add_vertex([0], None).unwrap(), 1);
        assert_eq!(g.edge_list(), &[(0, 1)]);
    }

    #[test]
    #[traced_test]
    fn add_vertex_with_unknown_neighbor_changes_nothing() {
        let mut g = friends();
        let before = g.clone();

        let err = g.add_vertex([0, 42], Some('X')).unwrap_err();

        assert_eq!(err, GraphError::Membership { vertices: vec![42] });
        assert_eq!(g, before);
        assert!(logs_contain("cannot add vertex"));
    }

    #[test]
    #[traced_test]
    fn add_vertex_after_max_id_fails_without_change() {
        let mut g = AdjacencyGraph::<()>::new([(usize::MAX, vec![])]).unwrap();
        let before = g.clone();

        let err = g.add_vertex([usize::MAX], None).unwrap_err();

        assert_eq!(err, GraphError::IdsExhausted { last: usize::MAX });
        assert!(!err.is_soft());
        assert_eq!(g, before);
        assert!(logs_contain("ids are exhausted"));
    }

    #[test]
    fn add_edge_updates_both_neighbor_lists() {
        let mut g = friends();
        g.add_edge(2, 0).unwrap();

        assert!(g.has_edge(0, 2));
        assert_eq!(g.adjacent(0), &[2, 4]);
        assert_eq!(g.adjacent(2), &[0]);
        assert_eq!(g.edge_list().last(), Some(&(0, 2)));
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut once = friends();
        once.add_edge(0, 2).unwrap();

        let mut twice = once.clone();
        let err = twice.add_edge(2, 0).unwrap_err();

        assert_eq!(err, GraphError::DuplicateEdge { u: 0, v: 2 });
        assert!(err.is_soft());
        assert_eq!(once, twice);
    }

    #[test]
    #[traced_test]
    fn add_edge_to_unknown_vertex_is_reported() {
        let mut g = friends();
        let edges_before = g.edge_count();

        let err = g.add_edge(5, 7).unwrap_err();

        assert_eq!(err, GraphError::Membership { vertices: vec![7] });
        assert_eq!(g.edge_count(), edges_before);
        assert!(logs_contain("endpoints are not in the graph"));
    }

    #[test]
    fn insert_edge_goes_through_add_edge() {
        let mut g = friends();
        assert!(g.insert_edge((2, 5)).is_ok());
        assert!(g.insert_edge((5, 2)).unwrap_err().is_soft());
    }

    #[test]
    fn set_attribute_only_touches_known_vertices() {
        let mut g = friends();
        g.set_attribute(0, 'N').unwrap();
        assert_eq!(g.attribute(0), Some(&'N'));

        let before = g.clone();
        let err = g.set_attribute(99, 'Z').unwrap_err();
        assert_eq!(err, GraphError::Membership { vertices: vec![99] });
        assert_eq!(g, before);
    }

    #[test]
    fn display_dumps_vertices_attributes_and_neighbors() {
        let g = AdjacencyGraph::with_attributes(
            [(1, vec![0]), (0, vec![1]), (2, vec![])],
            [(0, "Ann"), (1, "Bob"), (2, "Cid")],
        )
        .unwrap();
        assert_eq!(
            g.to_string(),
            "(0, Ann): [1]; (1, Bob): [0]; (2, Cid): []"
        );

        let bare = AdjacencyGraph::<u8>::new([(0, vec![])]).unwrap();
        assert_eq!(bare.to_string(), "(0, None): []");
    }

    #[test]
    fn subgraph_is_induced_and_keeps_attributes() {
        let g = friends();
        let sub = g.subgraph(&[4, 1, 3, 99]);

        assert_eq!(sub.vertex_ids(), &[1, 3, 4]);
        assert_eq!(sub.adjacent(3), &[1, 4]);
        assert_eq!(sub.adjacent(4), &[1, 3]);
        assert_eq!(sub.edge_count(), 3);
        assert_eq!(sub.attribute(4), Some(&'E'));
    }

    prop_compose! {
        // Symmetric adjacency over `0..n` built from random pairs.
        fn symmetric_adjacency()
            (n in 1usize..16)
            (pairs in proptest::collection::vec((0..n, 0..n), 0..48), n in Just(n))
            -> Vec<(usize, Vec<usize>)>
        {
            let mut adjacency: Vec<(usize, Vec<usize>)> = (0..n).map(|v| (v, Vec::new())).collect();
            for (u, v) in pairs {
                adjacency[u].1.push(v);
                adjacency[v].1.push(u);
            }
            adjacency
        }
    }

    proptest! {
        // Edges are unique and every edge is listed from both endpoints.
        #[test]
        fn prop_edges_are_unique_and_symmetric(adjacency in symmetric_adjacency()) {
            let g = AdjacencyGraph::<()>::new(adjacency).unwrap();

            let mut seen = FxHashSet::default();
            for (u, v) in g.edges() {
                prop_assert!(seen.insert(normalized(u, v)), "edge ({}, {}) listed twice", u, v);
                prop_assert!(g.adjacent(u).contains(&v));
                prop_assert!(g.adjacent(v).contains(&u));
            }
        }

        // add_vertex grows the graph by one vertex and one edge per neighbor.
        #[test]
        fn prop_add_vertex_adds_one_vertex_and_its_edges(
            adjacency in symmetric_adjacency(),
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
        ) {
            let mut g = AdjacencyGraph::<()>::new(adjacency).unwrap();
            let mut neighbors: Vec<usize> = picks
                .iter()
                .map(|index| g.vertex_ids()[index.index(g.vertex_count())])
                .collect();
            neighbors.sort_unstable();
            neighbors.dedup();

            let vertices_before = g.vertex_count();
            let edges_before = g.edge_count();

            let id = g.add_vertex(neighbors.iter().copied(), None).unwrap();

            prop_assert_eq!(g.vertex_count(), vertices_before + 1);
            prop_assert_eq!(g.edge_count(), edges_before + neighbors.len());
            prop_assert_eq!(g.adjacent(id), neighbors.as_slice());
            for n in neighbors {
                prop_assert!(g.adjacent(n).contains(&id));
                prop_assert!(g.adjacent(n).windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
