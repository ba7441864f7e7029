//! Implementations of graph traversal methods.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself, allowing
//!   mutations during traversal,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! Neighbors of a vertex are discovered in the order in which their edges
//! were first added, so the visiting order is deterministic.

pub mod bfs;
pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{bfs::Bfs, dfs::Dfs, visit_set::VisitSet};

use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use crate::core::GraphBase;

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and thus allows modifications to the graph
    /// between individual visitor steps or passing the visitor around without
    /// lifetime problems.
    ///
    /// # Examples
    ///
    /// ```
    /// use digraph::{
    ///     visit::{Bfs, Visitor},
    ///     Graph,
    /// };
    ///
    /// let mut graph = Graph::new();
    /// graph.extend_with_edges([("a", "b"), ("b", "c")]);
    ///
    /// let mut bfs = Bfs::new(&graph);
    /// let mut visitor = bfs.start("a");
    ///
    /// while let Some(vertex) = visitor.visit_next(&graph) {
    ///     if vertex == "b" {
    ///         // "c" is discovered but not expanded yet, so "d" is visited too.
    ///         graph.add_edge("c", "d", 0);
    ///     }
    /// }
    ///
    /// assert!(bfs.visited().contains("d"));
    /// ```
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Returns an [iterator](Iterator) that uses the visitor to iterate over
    /// the elements in given graph.
    fn iter<'a>(&'a mut self, graph: &'a G) -> Iter<'a, Self, G>
    where
        Self: Sized,
    {
        Iter {
            visitor: self,
            graph,
        }
    }

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::iter`].
pub struct Iter<'a, V, G> {
    visitor: &'a mut V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for Iter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<'a, V, G> Iterator for IntoIter<'a, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

fn default_visit_set<G: GraphBase>(graph: &G) -> FxHashSet<G::VertexId> {
    graph
        .vertex_count_hint()
        .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
        .unwrap_or_default()
}
