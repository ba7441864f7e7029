use super::{id::IdType, Weight};

/// Base trait for a directed graph whose vertices are identified by
/// [`IdType`] values.
pub trait GraphBase {
    type VertexId: IdType;

    /// Returns the number of vertices if it is cheap to determine. Used for
    /// preallocation of traversal state.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

/// Access to the outgoing neighbors of vertices.
///
/// Neighbors are always reported in the order in which their edges were
/// first added.
pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::VertexId>
    where
        Self: 'a;

    /// Returns an iterator over the outgoing neighbors of the vertex, `None`
    /// if the vertex does not exist.
    fn neighbors(&self, id: &Self::VertexId) -> Option<Self::NeighborsIter<'_>>;

    /// Returns the neighbor on given position in the adjacency of the vertex.
    ///
    /// Used by traversals that need to resume the neighbor enumeration without
    /// holding a borrow of the graph.
    fn neighbor_at(&self, id: &Self::VertexId, position: usize) -> Option<&Self::VertexId>;

    fn contains_vertex(&self, id: &Self::VertexId) -> bool;
}

/// Conversion of a tuple into the endpoints and weight of an edge.
///
/// Implemented for `(src, dst)`, which gets weight `0`, and
/// `(src, dst, weight)`, both by value and by reference.
pub trait IntoEdge<I> {
    fn unpack(self) -> (I, I, Weight);
}

mod imp {
    use super::*;

    impl<I> IntoEdge<I> for (I, I, Weight) {
        fn unpack(self) -> (I, I, Weight) {
            self
        }
    }

    impl<I: Clone> IntoEdge<I> for &(I, I, Weight) {
        fn unpack(self) -> (I, I, Weight) {
            (self.0.clone(), self.1.clone(), self.2)
        }
    }

    impl<I> IntoEdge<I> for (I, I) {
        fn unpack(self) -> (I, I, Weight) {
            (self.0, self.1, 0)
        }
    }

    impl<I: Clone> IntoEdge<I> for &(I, I) {
        fn unpack(self) -> (I, I, Weight) {
            (self.0.clone(), self.1.clone(), 0)
        }
    }
}
