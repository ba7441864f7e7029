use std::{borrow::Borrow, hash::Hash, iter::FusedIterator, ops::Index, path::Path, slice};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    core::{
        error::{LoadError, VertexNotFound},
        id::IdType,
        GraphBase, IntoEdge, Neighbors, Weight,
    },
    io::EdgeListReader,
    visit::{Bfs, Dfs, VisitSet, Visitor},
};

use super::vertex::{NeighborIds, NeighborsWeighted, Vertex};

/// Directed graph with vertices identified by caller-chosen ids.
///
/// The graph remembers the order in which vertices were created and, for
/// each vertex, the order in which its outgoing edges were added. All
/// enumerations and traversals follow these orders, which makes their results
/// deterministic.
///
/// Every endpoint of an edge is guaranteed to be a vertex of the graph;
/// [`add_edge`](Graph::add_edge) creates missing endpoints. There is no
/// removal of vertices or edges.
///
/// # Examples
///
/// ```
/// use digraph::Graph;
///
/// let mut graph = Graph::new();
/// graph.extend_with_edges([(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]);
///
/// assert_eq!(graph.bfs(&2).unwrap(), vec![2, 0, 3, 1]);
/// assert_eq!(graph.dfs(&2, &mut Vec::new()).unwrap(), vec![2, 0, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<I: IdType> {
    vertices: Vec<Vertex<I>>,
    slots: FxHashMap<I, usize>,
    edge_count: usize,
}

impl<I: IdType> Graph<I> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            slots: FxHashMap::default(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(vertex_count);

        Self {
            vertices: Vec::with_capacity(vertex_count),
            slots,
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Creates a new vertex with given id and returns it.
    ///
    /// If a vertex with the id already exists, it is **replaced** by a fresh
    /// one. The replacement keeps the position of the original vertex in the
    /// enumeration order, but all its outgoing edges are discarded. Edges
    /// from other vertices to this id are kept. Use
    /// [`add_edge`](Graph::add_edge) to create vertices without this
    /// hazard.
    pub fn add_vertex(&mut self, id: I) -> &Vertex<I> {
        let slot = match self.slots.get(&id) {
            Some(&slot) => {
                let dropped = self.vertices[slot].degree();
                log::trace!("replacing vertex {id:?}, dropping {dropped} outgoing edges");

                self.edge_count -= dropped;
                self.vertices[slot] = Vertex::new(id);
                slot
            }
            None => self.insert_vertex(id),
        };

        &self.vertices[slot]
    }

    /// Adds a directed edge from `src` to `dst`.
    ///
    /// Missing endpoints are created, `src` before `dst`. Existing vertices
    /// are left untouched. If the edge already exists, only its weight is
    /// updated. The reverse edge is never added.
    pub fn add_edge(&mut self, src: I, dst: I, weight: Weight) {
        let src = self.ensure_vertex(src);
        self.ensure_vertex(dst.clone());

        if self.vertices[src].add_neighbor(dst, weight).is_none() {
            self.edge_count += 1;
        }
    }

    /// Same as [`add_edge`](Graph::add_edge) with weight `0`.
    pub fn add_edge_unweighted(&mut self, src: I, dst: I) {
        self.add_edge(src, dst, 0);
    }

    pub fn extend_with_edges<T, It>(&mut self, iter: It)
    where
        T: IntoEdge<I>,
        It: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (src, dst, weight) = edge.unpack();
            self.add_edge(src, dst, weight);
        }
    }

    /// Returns the vertex with given id, `None` if it does not exist.
    pub fn get_vertex<Q>(&self, id: &Q) -> Option<&Vertex<I>>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(id).map(|&slot| &self.vertices[slot])
    }

    pub fn contains_vertex<Q>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(id)
    }

    /// Returns the vertex ids in the order in which the vertices were created.
    pub fn vertices(&self) -> VertexIds<'_, I> {
        VertexIds {
            inner: self.vertices.iter(),
        }
    }

    /// Returns all edges as `(src, dst)` pairs.
    ///
    /// The edges are grouped by source in the vertex order and, within a
    /// source, ordered as they were added.
    pub fn edges(&self) -> Edges<'_, I> {
        Edges {
            inner: self.edges_weighted(),
        }
    }

    /// Returns all edges as `(src, dst, weight)` triples in the same order as
    /// [`edges`](Graph::edges).
    pub fn edges_weighted(&self) -> EdgesWeighted<'_, I> {
        EdgesWeighted {
            vertices: self.vertices.iter(),
            current: None,
        }
    }

    pub fn iter(&self) -> Iter<'_, I> {
        Iter {
            inner: self.vertices.iter(),
        }
    }

    /// Returns all vertices reachable from `start` in breadth-first order.
    ///
    /// Neighbors are enqueued in the order of their edges, so the result is
    /// fully determined by the order of edge insertion.
    pub fn bfs(&self, start: &I) -> Result<Vec<I>, VertexNotFound<I>> {
        if !self.slots.contains_key(start) {
            return Err(VertexNotFound(start.clone()));
        }

        let mut bfs = Bfs::new(self);
        let order = bfs.start(start.clone()).iter(self).collect();
        Ok(order)
    }

    /// Returns the vertices reachable from `start` that are not in `visited`,
    /// in depth-first pre-order.
    ///
    /// The visited set is owned by the caller and is extended with every
    /// reported vertex, so consecutive calls sharing it never report a vertex
    /// twice. Passing a [`Vec`] preserves the visiting order in the set
    /// itself.
    ///
    /// If `start` is already visited, nothing is reported and no error is
    /// returned, regardless of whether `start` is in the graph.
    pub fn dfs<S>(&self, start: &I, visited: &mut S) -> Result<Vec<I>, VertexNotFound<I>>
    where
        S: VisitSet<I>,
    {
        if visited.is_visited(start) {
            return Ok(Vec::new());
        }

        if !self.slots.contains_key(start) {
            return Err(VertexNotFound(start.clone()));
        }

        let mut dfs = Dfs::<Self, _>::with_visited(visited);
        let order = dfs.start(start.clone()).iter(self).collect();
        Ok(order)
    }

    /// Shorthand for [`dfs`](Graph::dfs) with a fresh visited set.
    pub fn dfs_from(&self, start: &I) -> Result<Vec<I>, VertexNotFound<I>> {
        let mut visited = FxHashSet::default();
        self.dfs(start, &mut visited)
    }

    fn ensure_vertex(&mut self, id: I) -> usize {
        match self.slots.get(&id) {
            Some(&slot) => slot,
            None => self.insert_vertex(id),
        }
    }

    fn insert_vertex(&mut self, id: I) -> usize {
        let slot = self.vertices.len();
        self.slots.insert(id.clone(), slot);
        self.vertices.push(Vertex::new(id));
        slot
    }
}

impl Graph<String> {
    /// Loads a graph from a text file with one `src,dst[,weight]` record per
    /// line. See [`EdgeListReader`] for the format and further options.
    pub fn from_txt<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        EdgeListReader::new().read_file(path)
    }
}

impl<I: IdType> Default for Graph<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, Q> Index<&Q> for Graph<I>
where
    I: IdType + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = Vertex<I>;

    fn index(&self, id: &Q) -> &Self::Output {
        self.get_vertex(id).expect("vertex does not exist")
    }
}

impl<'a, I: IdType> IntoIterator for &'a Graph<I> {
    type Item = &'a Vertex<I>;
    type IntoIter = Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: IntoEdge<I>, I: IdType> FromIterator<T> for Graph<I> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }
}

impl<I: IdType> GraphBase for Graph<I> {
    type VertexId = I;

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count())
    }
}

impl<I: IdType> Neighbors for Graph<I> {
    type NeighborsIter<'a> = NeighborIds<'a, I>
    where
        Self: 'a;

    fn neighbors(&self, id: &I) -> Option<Self::NeighborsIter<'_>> {
        self.get_vertex(id).map(Vertex::neighbors)
    }

    fn neighbor_at(&self, id: &I, position: usize) -> Option<&I> {
        self.get_vertex(id)?.neighbor_at(position)
    }

    fn contains_vertex(&self, id: &I) -> bool {
        self.slots.contains_key(id)
    }
}

#[derive(Debug, Clone)]
pub struct VertexIds<'a, I: IdType> {
    inner: slice::Iter<'a, Vertex<I>>,
}

impl<'a, I: IdType> Iterator for VertexIds<'a, I> {
    type Item = &'a I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vertex::id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: IdType> ExactSizeIterator for VertexIds<'_, I> {}
impl<I: IdType> FusedIterator for VertexIds<'_, I> {}

#[derive(Debug, Clone)]
pub struct Iter<'a, I: IdType> {
    inner: slice::Iter<'a, Vertex<I>>,
}

impl<'a, I: IdType> Iterator for Iter<'a, I> {
    type Item = &'a Vertex<I>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: IdType> ExactSizeIterator for Iter<'_, I> {}
impl<I: IdType> FusedIterator for Iter<'_, I> {}

#[derive(Debug, Clone)]
pub struct EdgesWeighted<'a, I: IdType> {
    vertices: slice::Iter<'a, Vertex<I>>,
    current: Option<(&'a I, NeighborsWeighted<'a, I>)>,
}

impl<'a, I: IdType> Iterator for EdgesWeighted<'a, I> {
    type Item = (&'a I, &'a I, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((src, neighbors)) = &mut self.current {
                if let Some((dst, weight)) = neighbors.next() {
                    return Some((*src, dst, weight));
                }
            }

            let vertex = self.vertices.next()?;
            self.current = Some((vertex.id(), vertex.neighbors_weighted()));
        }
    }
}

impl<I: IdType> FusedIterator for EdgesWeighted<'_, I> {}

#[derive(Debug, Clone)]
pub struct Edges<'a, I: IdType> {
    inner: EdgesWeighted<'a, I>,
}

impl<'a, I: IdType> Iterator for Edges<'a, I> {
    type Item = (&'a I, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(src, dst, _)| (src, dst))
    }
}

impl<I: IdType> FusedIterator for Edges<'_, I> {}
