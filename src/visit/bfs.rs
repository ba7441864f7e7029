use rustc_hash::FxHashSet;

use super::*;
use crate::core::Neighbors;
use super::raw::{RawBfs, RawVisit};

/// Breadth-first traversal.
///
/// A vertex is marked as visited when it is enqueued, not when it is
/// dequeued. Every vertex reachable from the root is therefore reported
/// exactly once, even if it has several predecessors in the same layer.
pub struct Bfs<G, S = FxHashSet<<G as GraphBase>::VertexId>>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawBfs, S>,
}

pub struct BfsRooted<'a, G, S>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawBfs, S>,
}

impl<G> Bfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(default_visit_set(graph)),
        }
    }
}

impl<G, S> Bfs<G, S>
where
    G: GraphBase,
    S: VisitSet<G::VertexId>,
{
    /// Creates the traversal with a custom visited set. Vertices already in
    /// the set are not reported.
    pub fn with_visited(visited: S) -> Self {
        Self {
            raw: RawVisit::new(visited),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> BfsRooted<'_, G, S> {
        self.raw.start(root);
        BfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &S {
        &self.raw.visited
    }

    pub fn into_visited(self) -> S {
        self.raw.visited
    }
}

impl<'a, G, S> Visitor<G> for BfsRooted<'a, G, S>
where
    G: Neighbors,
    S: VisitSet<G::VertexId>,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn create_graph() -> Graph<u32> {
        let mut graph = Graph::new();
        graph.extend_with_edges([(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]);
        graph
    }

    #[test]
    fn visit_order() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        let order = bfs.start(2).iter(&graph).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 0, 3, 1]);
    }

    #[test]
    fn layers_before_depth() {
        let mut graph = Graph::new();
        graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "d"), ("a", "e"), ("e", "f")]);

        let mut bfs = Bfs::new(&graph);
        let order = bfs.start("a").iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec!["a", "b", "e", "c", "f", "d"]);
    }

    #[test]
    fn shared_successor_reported_once() {
        let mut graph = Graph::new();
        graph.extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);

        let mut bfs = Bfs::new(&graph);
        let order = bfs.start(0).iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn restart_skips_visited() {
        let mut graph = create_graph();
        graph.add_edge(4, 5, 0);

        let mut bfs = Bfs::new(&graph);
        assert_eq!(bfs.start(3).iter(&graph).collect::<Vec<_>>(), vec![3]);
        assert_eq!(bfs.start(2).iter(&graph).collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(bfs.start(4).iter(&graph).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(bfs.start(0).iter(&graph).count(), 0);

        bfs.reset();
        assert_eq!(bfs.start(0).iter(&graph).count(), 4);
    }

    #[test]
    fn custom_visited_set() {
        let graph = create_graph();

        let mut bfs = Bfs::<Graph<u32>, _>::with_visited(vec![0]);
        let order = bfs.start(2).iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec![2, 3]);
        assert_eq!(bfs.into_visited(), vec![0, 2, 3]);
    }

    #[test]
    fn missing_root() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        assert_eq!(bfs.start(42).iter(&graph).next(), None);
        assert_eq!(bfs.visited().len(), 0);

        let mut bfs = Bfs::<Graph<u32>, _>::with_visited(Vec::new());
        assert_eq!(bfs.start(42).iter(&graph).next(), None);
        assert_eq!(bfs.into_visited(), Vec::<u32>::new());
    }

    #[test]
    fn into_iter() {
        let graph = create_graph();
        let mut bfs = Bfs::new(&graph);

        let order = bfs.start(0).into_iter(&graph).collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(bfs.visited().len(), 4);
    }
}
