use std::{borrow::Borrow, fmt, hash::Hash, iter::FusedIterator, mem, slice};

use rustc_hash::FxHashMap;

use crate::core::{id::IdType, Weight};

/// A vertex of a [`Graph`](super::Graph) with its outgoing adjacency.
///
/// Vertices are created and owned by the graph. The adjacency maps neighbor
/// ids to edge weights and remembers the order in which the neighbors were
/// added.
#[derive(Debug, Clone)]
pub struct Vertex<I: IdType> {
    id: I,
    adjacency: Vec<(I, Weight)>,
    positions: FxHashMap<I, usize>,
}

impl<I: IdType> Vertex<I> {
    pub(crate) fn new(id: I) -> Self {
        Self {
            id,
            adjacency: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    /// Registers the directed edge from this vertex to `id`, or updates its
    /// weight if the edge already exists. An updated neighbor keeps its
    /// position in the adjacency.
    ///
    /// Returns the previous weight if the edge existed.
    pub(crate) fn add_neighbor(&mut self, id: I, weight: Weight) -> Option<Weight> {
        match self.positions.get(&id) {
            Some(&position) => Some(mem::replace(&mut self.adjacency[position].1, weight)),
            None => {
                self.positions.insert(id.clone(), self.adjacency.len());
                self.adjacency.push((id, weight));
                None
            }
        }
    }

    /// Returns the ids of the neighbors in the order in which they were added.
    pub fn neighbors(&self) -> NeighborIds<'_, I> {
        NeighborIds {
            inner: self.adjacency.iter(),
        }
    }

    pub fn neighbors_weighted(&self) -> NeighborsWeighted<'_, I> {
        NeighborsWeighted {
            inner: self.adjacency.iter(),
        }
    }

    pub fn neighbor_at(&self, position: usize) -> Option<&I> {
        self.adjacency.get(position).map(|(id, _)| id)
    }

    /// Returns the weight of the edge to given neighbor, `None` if there is no
    /// such edge.
    pub fn weight<Q>(&self, id: &Q) -> Option<Weight>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(id)
            .map(|&position| self.adjacency[position].1)
    }

    pub fn has_neighbor<Q>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(id)
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

// The position index is derived from the adjacency.
impl<I: IdType> PartialEq for Vertex<I> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.adjacency == other.adjacency
    }
}

impl<I: IdType> Eq for Vertex<I> {}

impl<I: IdType + fmt::Display> fmt::Display for Vertex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> [", self.id)?;

        for (i, neighbor) in self.neighbors().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{neighbor}")?;
        }

        f.write_str("]")
    }
}

#[derive(Debug, Clone)]
pub struct NeighborIds<'a, I> {
    inner: slice::Iter<'a, (I, Weight)>,
}

impl<'a, I> Iterator for NeighborIds<'a, I> {
    type Item = &'a I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, _)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for NeighborIds<'_, I> {}
impl<I> FusedIterator for NeighborIds<'_, I> {}

#[derive(Debug, Clone)]
pub struct NeighborsWeighted<'a, I> {
    inner: slice::Iter<'a, (I, Weight)>,
}

impl<'a, I> Iterator for NeighborsWeighted<'a, I> {
    type Item = (&'a I, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, weight)| (id, *weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for NeighborsWeighted<'_, I> {}
impl<I> FusedIterator for NeighborsWeighted<'_, I> {}
