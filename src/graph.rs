//! A module for working with graphs.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{bfs, edge::Edge};

/// The vertex type produced when reading edge lists.
pub type NodeId = u64;

/// An undirected, unweighted graph, made up of edges.
///
/// Vertices are created implicitly by the edges that reference them and keep the order in
/// which they first appeared. That order is the one [`vertices`](Graph::vertices) returns and
/// the one regions are cut from.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    /// The edges in the graph.
    edges: HashSet<Edge<T>>,
    /// Vertices in first-appearance order.
    vertices: Vec<T>,
    /// A mapping of vertices to their position in `vertices` and `adjacency`.
    index: HashMap<T, usize>,
    /// Neighbour indices per vertex, in the order the edges were inserted.
    adjacency: Vec<Vec<usize>>,
}

impl<T> Default for Graph<T>
where
    Edge<T>: Eq + Hash,
    T: Copy + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T>
where
    Edge<T>: Eq + Hash,
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::graph::Graph;
    ///
    /// let graph: Graph<u64> = Graph::new();
    /// assert_eq!(graph.vertex_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            edges: Default::default(),
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Builds a graph from a sequence of edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    /// use pathscope::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(3, 1), Edge::new(1, 2), Edge::new(2, 1)]);
    ///
    /// assert_eq!(graph.vertices(), &[3, 1, 2]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert(edge);
        }

        graph
    }

    /// Inserts an edge into the graph, returns whether it wasn't already present.
    ///
    /// Unknown endpoints are appended to the vertex order, source first.
    pub fn insert(&mut self, edge: Edge<T>) -> bool {
        if !self.edges.insert(edge) {
            return false;
        }

        let i = self.index_or_insert(*edge.source());
        let j = self.index_or_insert(*edge.target());

        self.adjacency[i].push(j);
        if i != j {
            self.adjacency[j].push(i);
        }

        true
    }

    /// Checks if the graph contains an edge.
    pub fn contains(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Checks if the graph contains a vertex.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the set of edges.
    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    /// Returns the vertices in first-appearance order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Returns the vertex count of the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the neighbours of a vertex in the order their edges were inserted, or `None`
    /// if the vertex isn't in the graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    /// use pathscope::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 3), Edge::new(2, 1)]);
    /// let neighbours: Vec<u64> = graph.neighbours(&1).unwrap().copied().collect();
    ///
    /// assert_eq!(neighbours, vec![3, 2]);
    /// ```
    pub fn neighbours(&self, vertex: &T) -> Option<impl Iterator<Item = &T> + '_> {
        let i = *self.index.get(vertex)?;

        Some(self.adjacency[i].iter().map(|&j| &self.vertices[j]))
    }

    /// Returns the degree of a vertex, a self-loop counting twice.
    pub fn degree(&self, vertex: &T) -> Option<usize> {
        self.index.get(vertex).map(|&i| self.degree_at(i))
    }

    /// Returns a mapping of vertices to their degree centrality (number of connections) in the
    /// graph.
    pub fn degree_centrality(&self) -> HashMap<T, u32> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (*vertex, self.degree_at(i) as u32))
            .collect()
    }

    /// Computes the hop distance from `source` to every vertex it can reach, or `None` if the
    /// source isn't in the graph.
    ///
    /// The source itself is never part of the result and vertices in other components are
    /// simply absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathscope::edge::Edge;
    /// use pathscope::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3), Edge::new(7, 8)]);
    /// let distances = graph.distances(&1).unwrap();
    ///
    /// assert_eq!(distances.get(&3), Some(2));
    /// assert_eq!(distances.get(&7), None);
    /// assert!(!distances.contains(&1));
    /// ```
    pub fn distances(&self, source: &T) -> Option<DistanceMap<T>> {
        let s = self.index_of(source)?;
        let levels = bfs::levels(&self.adjacency, s);

        let distances = levels
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != s)
            .filter_map(|(i, level)| level.map(|hops| (self.vertices[i], hops)))
            .collect();

        Some(DistanceMap {
            source: *source,
            distances,
        })
    }

    //
    // Crate
    //

    pub(crate) fn index_of(&self, vertex: &T) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    //
    // Private
    //

    fn index_or_insert(&mut self, vertex: T) -> usize {
        if let Some(&i) = self.index.get(&vertex) {
            return i;
        }

        let i = self.vertices.len();
        self.vertices.push(vertex);
        self.index.insert(vertex, i);
        self.adjacency.push(Vec::new());

        i
    }

    fn degree_at(&self, i: usize) -> usize {
        let neighbours = &self.adjacency[i];
        let loops = neighbours.iter().filter(|&&j| j == i).count();

        neighbours.len() + loops
    }
}

/// Hop distances from one source vertex to every vertex it reaches.
#[derive(Clone, Debug)]
pub struct DistanceMap<T> {
    source: T,
    distances: HashMap<T, u32>,
}

impl<T: Eq + Hash> PartialEq for DistanceMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.distances == other.distances
    }
}

impl<T: Eq + Hash> Eq for DistanceMap<T> {}

impl<T: Eq + Hash> DistanceMap<T> {
    /// Returns the vertex the distances were measured from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the hop count to `target`, `None` if it is unreachable or the source itself.
    pub fn get(&self, target: &T) -> Option<u32> {
        self.distances.get(target).copied()
    }

    /// Returns whether `target` is reachable from the source.
    pub fn contains(&self, target: &T) -> bool {
        self.distances.contains_key(target)
    }

    /// Returns the number of reachable vertices, excluding the source.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over `(target, hops)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u32)> + '_ {
        self.distances.iter().map(|(target, hops)| (target, *hops))
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &HashMap<T, u32> {
        &self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! graph {
          ($($path:expr),*) => {{
              let mut graph: Graph<u64> = Graph::new();

              $(
                  let mut iter = $path.into_iter().peekable();
                  while let (Some(a), Some(b)) = (iter.next(), iter.peek()) {
                      graph.insert(Edge::new(a, *b));
                  }

              )*

              graph
          }}
      }

    #[test]
    fn new() {
        let graph: Graph<u64> = Graph::new();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn insert() {
        let mut graph = Graph::new();
        let edge = Edge::new(1u64, 2);

        assert!(graph.insert(edge));
        assert!(!graph.insert(edge));
        assert!(!graph.insert(Edge::new(2, 1)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn insert_keeps_first_appearance_order() {
        let graph = graph!([5, 3], [3, 9], [1, 5]);

        assert_eq!(graph.vertices(), &[5, 3, 9, 1]);
    }

    #[test]
    fn duplicate_edge_adds_no_neighbour() {
        let mut graph = graph!([1, 2]);
        graph.insert(Edge::new(2, 1));

        let neighbours: Vec<u64> = graph.neighbours(&1).unwrap().copied().collect();
        assert_eq!(neighbours, vec![2]);
    }

    #[test]
    fn self_loop_is_preserved() {
        let graph = Graph::from_edges([Edge::new(4u64, 4)]);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains(&Edge::new(4, 4)));
        assert_eq!(graph.degree(&4), Some(2));
    }

    #[test]
    fn contains() {
        let graph = graph!([1, 2]);

        assert!(graph.contains(&Edge::new(2, 1)));
        assert!(!graph.contains(&Edge::new(2, 3)));
        assert!(graph.contains_vertex(&2));
        assert!(!graph.contains_vertex(&3));
    }

    #[test]
    fn neighbours_follow_insertion_order() {
        let graph = graph!([1, 4], [1, 2], [3, 1]);

        let neighbours: Vec<u64> = graph.neighbours(&1).unwrap().copied().collect();
        assert_eq!(neighbours, vec![4, 2, 3]);
        assert!(graph.neighbours(&8).is_none());
    }

    #[test]
    fn degree_centrality() {
        let mut graph = Graph::new();
        assert!(graph.degree_centrality().is_empty());

        graph.insert(Edge::new(1u64, 2));
        graph.insert(Edge::new(1, 3));
        let degree_centrality = graph.degree_centrality();

        assert_eq!(degree_centrality.get(&1), Some(&2));
        assert_eq!(degree_centrality.get(&2), Some(&1));
        assert_eq!(degree_centrality.get(&3), Some(&1));
        assert_eq!(degree_centrality.len(), 3);
    }

    #[test]
    fn distances_on_chain() {
        let graph = graph!([1, 2, 3, 4]);
        let distances = graph.distances(&1).unwrap();

        let expected: HashMap<u64, u32> = [(2, 1), (3, 2), (4, 3)].into_iter().collect();
        assert_eq!(distances.as_map(), &expected);
        assert_eq!(distances.source(), &1);
    }

    #[test]
    fn distances_exclude_source() {
        let graph = graph!([1, 2, 3, 1]);

        for vertex in graph.vertices() {
            let distances = graph.distances(vertex).unwrap();
            assert!(!distances.contains(vertex));
            assert_eq!(distances.len(), 2);
        }
    }

    #[test]
    fn distances_skip_other_components() {
        let graph = graph!([1, 2], [3, 4]);
        let distances = graph.distances(&3).unwrap();

        assert_eq!(distances.get(&4), Some(1));
        assert!(!distances.contains(&1));
        assert!(!distances.contains(&2));
    }

    #[test]
    fn distances_from_isolated_loop() {
        let graph = Graph::from_edges([Edge::new(7u64, 7)]);

        assert!(graph.distances(&7).unwrap().is_empty());
    }

    #[test]
    fn distances_from_unknown_source() {
        let graph = graph!([1, 2]);

        assert!(graph.distances(&3).is_none());
    }

    #[test]
    fn distance_maps_compare_by_source_and_hops() {
        let graph = graph!([1, 2, 3]);
        let reordered = graph!([3, 2], [2, 1]);

        assert_eq!(graph.distances(&1), reordered.distances(&1));
        assert_ne!(graph.distances(&1), graph.distances(&3));
    }

    //
    // Private
    //

    #[test]
    fn index_or_insert() {
        let mut graph: Graph<u64> = Graph::new();

        assert_eq!(graph.index_or_insert(10), 0);
        assert_eq!(graph.index_or_insert(20), 1);
        assert_eq!(graph.index_or_insert(10), 0);

        assert_eq!(graph.index_of(&20), Some(1));
        assert_eq!(graph.adjacency().len(), 2);
    }
}
