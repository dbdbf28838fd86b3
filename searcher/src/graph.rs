//! Graphs with an explicit list of vertices and edges.
//!
//! Vertices are stored in insertion order and edges refer to them
//! by index. Every edge is undirected: adding an edge stores it in
//! both directions. Searches run over vertex indices and translate
//! the resulting path back into vertices.

use std::fmt::{self, Debug, Display};

use thiserror::Error;

mod edge;

pub use edge::{Edge, UnweightedEdge, WeightedEdge};

use crate::algorithm::astar::astar_weighted;
use crate::algorithm::basic::{bfs, dfs};
use crate::path::Path;
use crate::traits::Weight;

/// Error produced when building a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("{0} is not a vertex in this graph")]
    UnknownVertex(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone)]
pub struct Graph<V, E = UnweightedEdge> {
    vertices: Vec<V>,
    edges: Vec<E>,
}

impl<V, E> Graph<V, E>
where
    V: Debug + PartialEq,
    E: Edge,
{
    /// Create a graph with these vertices and no edges.
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Add a vertex to the graph, returning its index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Add an edge in both directions.
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, edge: E) -> bool {
        assert!(
            edge.u() < self.vertices.len() && edge.v() < self.vertices.len(),
            "edge {:?} refers to a vertex outside this graph",
            edge
        );

        if self.edges.contains(&edge) {
            return false;
        }

        let reverse = edge.reversed();
        self.edges.push(edge);
        self.edges.push(reverse);
        true
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Index of the first vertex equal to this one.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub(crate) fn index_or_error(&self, vertex: &V) -> Result<usize> {
        self.index_of(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", vertex)))
    }

    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Iterate through the edges which leave the vertex at this index.
    pub fn edges_from(&self, index: usize) -> impl Iterator<Item = &E> {
        self.edges.iter().filter(move |e| e.u() == index)
    }

    /// Iterate through the vertices adjacent to the vertex at this index.
    pub fn neighbors_of(&self, index: usize) -> impl Iterator<Item = &V> {
        self.edges_from(index).map(move |e| &self.vertices[e.v()])
    }

    /// Edges leaving this vertex, or nothing if it is not in the graph.
    pub fn edges_for(&self, vertex: &V) -> Vec<&E> {
        match self.index_of(vertex) {
            Some(index) => self.edges_from(index).collect(),
            None => Vec::new(),
        }
    }

    /// Vertices adjacent to this vertex, or nothing if it is not in the graph.
    pub fn neighbors_for(&self, vertex: &V) -> Vec<&V> {
        match self.index_of(vertex) {
            Some(index) => self.neighbors_of(index).collect(),
            None => Vec::new(),
        }
    }

    fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges_from(index).map(|e| e.v())
    }

    fn vertex_path<W>(&self, path: Path<usize, W>) -> Path<V, W>
    where
        V: Clone,
        W: Copy,
    {
        path.map(|i| self.vertices[i].clone())
    }
}

impl<V, E> Display for Graph<V, E>
where
    V: Display + Debug + PartialEq,
    E: Edge,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            let neighbors: Vec<String> = self
                .neighbors_of(index)
                .map(|n| n.to_string())
                .collect();
            writeln!(f, "{} -> [{}]", vertex, neighbors.join(", "))?;
        }
        Ok(())
    }
}

/// A graph where every edge has the same cost.
#[derive(Debug, Clone)]
pub struct UnweightedGraph<V> {
    graph: Graph<V, UnweightedEdge>,
}

impl<V> UnweightedGraph<V>
where
    V: Debug + Clone + PartialEq,
{
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            graph: Graph::new(vertices),
        }
    }

    pub fn graph(&self) -> &Graph<V, UnweightedEdge> {
        &self.graph
    }

    /// Connect two vertices which are already in the graph.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<()> {
        let u = self.graph.index_or_error(from)?;
        let v = self.graph.index_or_error(to)?;
        self.graph.add_edge(UnweightedEdge::new(u, v));
        Ok(())
    }

    pub fn add_edges<'e, I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = &'e (V, V)>,
        V: 'e,
    {
        for (from, to) in edges {
            self.add_edge(from, to)?;
        }
        Ok(())
    }

    /// Find a route with the fewest edges from `start` to a
    /// vertex accepted by `goal_test`.
    pub fn bfs<G>(&self, start: &V, goal_test: G) -> Option<Path<V>>
    where
        G: Fn(&V) -> bool,
    {
        let origin = self.graph.index_of(start)?;
        let graph = &self.graph;
        bfs(
            origin,
            |&i| goal_test(&graph.vertices[i]),
            |&i| graph.neighbor_indices(i),
        )
        .map(|path| graph.vertex_path(path))
    }

    /// Find any route from `start` to a vertex accepted by `goal_test`.
    pub fn dfs<G>(&self, start: &V, goal_test: G) -> Option<Path<V>>
    where
        G: Fn(&V) -> bool,
    {
        let origin = self.graph.index_of(start)?;
        let graph = &self.graph;
        dfs(
            origin,
            |&i| goal_test(&graph.vertices[i]),
            |&i| graph.neighbor_indices(i),
        )
        .map(|path| graph.vertex_path(path))
    }
}

impl<V> Display for UnweightedGraph<V>
where
    V: Display + Debug + PartialEq,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.graph, f)
    }
}

/// A graph where every edge carries a cost.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W = u32> {
    graph: Graph<V, WeightedEdge<W>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Debug + Clone + PartialEq,
    W: Weight,
{
    pub fn new(vertices: Vec<V>) -> Self {
        Self {
            graph: Graph::new(vertices),
        }
    }

    pub fn graph(&self) -> &Graph<V, WeightedEdge<W>> {
        &self.graph
    }

    /// Connect two vertices which are already in the graph.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<()> {
        let u = self.graph.index_or_error(from)?;
        let v = self.graph.index_or_error(to)?;
        self.graph.add_edge(WeightedEdge::new(u, v, weight));
        Ok(())
    }

    pub fn add_edges<'e, I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = &'e (V, V, W)>,
        V: 'e,
        W: 'e,
    {
        for (from, to, weight) in edges {
            self.add_edge(from, to, *weight)?;
        }
        Ok(())
    }

    /// Find the cheapest route from `start` to a vertex
    /// accepted by `goal_test`.
    pub fn shortest_path<G>(&self, start: &V, goal_test: G) -> Option<Path<V, W>>
    where
        G: Fn(&V) -> bool,
    {
        let origin = self.graph.index_of(start)?;
        let graph = &self.graph;
        astar_weighted(
            origin,
            |&i| goal_test(&graph.vertices[i]),
            |&i| graph.edges_from(i).map(|e| (e.v, e.weight)),
        )
        .map(|path| graph.vertex_path(path))
    }
}

impl<V, W> Display for WeightedGraph<V, W>
where
    V: Display + Debug + PartialEq,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, vertex) in self.graph.vertices.iter().enumerate() {
            let neighbors: Vec<String> = self
                .graph
                .edges_from(index)
                .map(|e| format!("({}, {:?})", self.graph.vertices[e.v], e.weight))
                .collect();
            writeln!(f, "{} -> [{}]", vertex, neighbors.join(", "))?;
        }
        Ok(())
    }
}

/// Sum the weights of a sequence of edges.
pub fn total_weight<'e, W, I>(edges: I) -> W
where
    W: Weight + 'e,
    I: IntoIterator<Item = &'e WeightedEdge<W>>,
{
    edges
        .into_iter()
        .fold(W::default(), |total, edge| total + edge.weight)
}

#[cfg(test)]
mod test {
    use super::*;

    fn square() -> UnweightedGraph<&'static str> {
        let mut g = UnweightedGraph::new(vec!["a", "b", "c", "d"]);
        g.add_edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")])
            .unwrap();
        g
    }

    #[test]
    fn edges_both_directions() {
        let mut g = square();
        assert_eq!(g.graph().vertex_count(), 4);
        assert_eq!(g.graph().edge_count(), 4);
        assert_eq!(g.graph().neighbors_for(&"a"), vec![&"b", &"d"]);
        assert_eq!(g.graph().neighbors_for(&"c"), vec![&"b", &"d"]);

        // Re-adding an edge is a no-op.
        g.add_edge(&"a", &"b").unwrap();
        assert_eq!(g.graph().edge_count(), 4);
    }

    #[test]
    fn unknown_vertex() {
        let mut g = square();
        assert_eq!(
            g.add_edge(&"a", &"z"),
            Err(GraphError::UnknownVertex("\"z\"".to_string()))
        );
        assert!(g.graph().neighbors_for(&"z").is_empty());
        assert_eq!(g.bfs(&"z", |v| *v == "a"), None);
    }

    #[test]
    fn display() {
        let g = square();
        assert_eq!(
            g.to_string(),
            "a -> [b, d]\nb -> [a, c]\nc -> [b, d]\nd -> [c, a]\n"
        );
    }

    #[test]
    fn display_shares_adjacency_listing() {
        let g = square();
        assert_eq!(g.to_string(), g.graph().to_string());
        assert!(format!("{:?}", g.graph()).contains("UnweightedEdge"));
    }

    #[test]
    fn search_vertices() {
        let g = square();
        let path = g.bfs(&"a", |v| *v == "c").unwrap();
        assert_eq!(&path[..], &["a", "b", "c"]);

        let path = g.dfs(&"a", |v| *v == "c").unwrap();
        assert_eq!(&path[..], &["a", "d", "c"]);
    }

    #[test]
    fn weighted_shortest() {
        let mut g = WeightedGraph::new(vec!["a", "b", "c"]);
        g.add_edges(&[("a", "b", 5u32), ("b", "c", 5), ("a", "c", 20)])
            .unwrap();

        let path = g.shortest_path(&"a", |v| *v == "c").unwrap();
        assert_eq!(&path[..], &["a", "b", "c"]);
        assert_eq!(path.cost(), 10);

        let edges: Vec<_> = g.graph().edges_for(&"a").into_iter().cloned().collect();
        assert_eq!(total_weight(&edges), 25);
    }
}
