use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// Set of visited vertices maintained by a traversal.
///
/// Besides the hash and tree sets, it is implemented for [`Vec`], which keeps
/// the order in which the vertices were visited at the cost of linear
/// membership checks.
pub trait VisitSet<I> {
    /// Marks the vertex as visited. Returns `true` if the vertex was not
    /// visited before.
    fn visit(&mut self, id: I) -> bool;
    fn is_visited(&self, id: &I) -> bool;
    fn visited_count(&self) -> usize;
    fn reset_visited(&mut self);
}

impl<I: Eq + Hash, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl<I: Ord> VisitSet<I> for BTreeSet<I> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<I: PartialEq> VisitSet<I> for Vec<I> {
    fn visit(&mut self, id: I) -> bool {
        if self.contains(&id) {
            false
        } else {
            self.push(id);
            true
        }
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<I, S: VisitSet<I> + ?Sized> VisitSet<I> for &mut S {
    fn visit(&mut self, id: I) -> bool {
        (**self).visit(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        (**self).is_visited(id)
    }

    fn visited_count(&self) -> usize {
        (**self).visited_count()
    }

    fn reset_visited(&mut self) {
        (**self).reset_visited()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn exercise<S: VisitSet<u32>>(mut set: S) {
        assert!(set.visit(3));
        assert!(set.visit(1));
        assert!(!set.visit(3));

        assert!(set.is_visited(&1));
        assert!(!set.is_visited(&2));
        assert_eq!(set.visited_count(), 2);

        set.reset_visited();
        assert_eq!(set.visited_count(), 0);
        assert!(!set.is_visited(&3));
    }

    #[test]
    fn hash_set() {
        exercise(FxHashSet::default());
    }

    #[test]
    fn btree_set() {
        exercise(BTreeSet::new());
    }

    #[test]
    fn vec() {
        exercise(Vec::new());
    }

    #[test]
    fn vec_keeps_visit_order() {
        let mut visited = Vec::new();
        visited.visit("c");
        visited.visit("a");
        visited.visit("c");
        visited.visit("b");

        assert_eq!(visited, vec!["c", "a", "b"]);
    }

    #[test]
    fn mutable_reference() {
        let mut visited = Vec::new();
        exercise(&mut visited);
        assert!(visited.is_empty());
    }
}
