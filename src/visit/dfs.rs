use rustc_hash::FxHashSet;

use super::*;
use crate::core::Neighbors;
use super::raw::{RawDfs, RawVisit};

/// Depth-first traversal reporting vertices in pre-order.
///
/// The order is the same as in the recursive formulation, where a vertex is
/// reported and then each of its neighbors is recursively explored unless
/// already visited. The implementation keeps an explicit stack, so the depth
/// of the traversal is not bounded by the call stack.
pub struct Dfs<G, S = FxHashSet<<G as GraphBase>::VertexId>>
where
    G: GraphBase,
{
    raw: RawVisit<G, RawDfs, S>,
}

pub struct DfsRooted<'a, G, S>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G, RawDfs, S>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    pub fn new(graph: &G) -> Self {
        Self {
            raw: RawVisit::new(default_visit_set(graph)),
        }
    }
}

impl<G, S> Dfs<G, S>
where
    G: GraphBase,
    S: VisitSet<G::VertexId>,
{
    /// Creates the traversal with a custom visited set. Vertices already in
    /// the set are neither reported nor explored.
    pub fn with_visited(visited: S) -> Self {
        Self {
            raw: RawVisit::new(visited),
        }
    }

    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G, S> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
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

impl<'a, G, S> Visitor<G> for DfsRooted<'a, G, S>
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

    fn dfs_recursive(graph: &Graph<u32>, id: u32, visited: &mut Vec<u32>) {
        if !visited.contains(&id) {
            visited.push(id);
            for n in graph[&id].neighbors() {
                dfs_recursive(graph, *n, visited);
            }
        }
    }

    #[test]
    fn visit_order() {
        let graph = create_graph();
        let mut dfs = Dfs::new(&graph);

        let order = dfs.start(2).iter(&graph).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 0, 1, 3]);
    }

    #[test]
    fn backtracks_to_remaining_neighbors() {
        let mut graph = Graph::new();
        graph.extend_with_edges([
            ("a", "b"),
            ("a", "e"),
            ("b", "c"),
            ("b", "d"),
            ("c", "a"),
            ("e", "d"),
        ]);

        let mut dfs = Dfs::new(&graph);
        let order = dfs.start("a").iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn matches_recursive_order() {
        let mut graph = Graph::new();
        graph.extend_with_edges([
            (0, 5),
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 5),
            (3, 4),
            (4, 0),
            (5, 4),
            (5, 2),
        ]);

        for root in 0..6 {
            let mut expected = Vec::new();
            dfs_recursive(&graph, root, &mut expected);

            let mut dfs = Dfs::new(&graph);
            let order = dfs.start(root).iter(&graph).collect::<Vec<_>>();

            assert_eq!(order, expected, "root {root}");
        }
    }

    #[test]
    fn long_path_does_not_overflow() {
        let mut graph = Graph::with_capacity(100_000);
        graph.extend_with_edges((0..99_999u32).map(|i| (i, i + 1)));

        let mut dfs = Dfs::new(&graph);
        assert_eq!(dfs.start(0).iter(&graph).count(), 100_000);
    }

    #[test]
    fn visited_root_is_noop() {
        let graph = create_graph();

        let mut dfs = Dfs::<Graph<u32>, _>::with_visited(vec![2]);
        assert_eq!(dfs.start(2).iter(&graph).next(), None);
        assert_eq!(dfs.visited(), &vec![2]);
    }

    #[test]
    fn custom_visited_set() {
        let graph = create_graph();

        let mut dfs = Dfs::<Graph<u32>, _>::with_visited(vec![0]);
        let order = dfs.start(2).iter(&graph).collect::<Vec<_>>();

        assert_eq!(order, vec![2, 3]);
        assert_eq!(dfs.into_visited(), vec![0, 2, 3]);
    }

    #[test]
    fn restart_skips_visited() {
        let mut graph = create_graph();
        graph.add_edge(4, 5, 0);

        let mut dfs = Dfs::new(&graph);
        assert_eq!(dfs.start(3).iter(&graph).collect::<Vec<_>>(), vec![3]);
        assert_eq!(dfs.start(2).iter(&graph).collect::<Vec<_>>(), vec![2, 0, 1]);
        assert_eq!(dfs.start(4).iter(&graph).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(dfs.start(0).iter(&graph).count(), 0);

        dfs.reset();
        assert_eq!(dfs.visited().len(), 0);
        assert_eq!(
            dfs.start(0).into_iter(&graph).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn missing_root() {
        let graph = create_graph();
        let mut dfs = Dfs::new(&graph);

        assert_eq!(dfs.start(42).iter(&graph).next(), None);
        assert_eq!(dfs.visited().len(), 0);
    }
}
