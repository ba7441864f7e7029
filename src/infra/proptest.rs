use proptest::{collection::vec, prelude::*, sample::select};

use crate::{core::Weight, graph::Graph};

/// Edge lists over vertex ids in `0..vertex_bound` with at most `max_edges`
/// records, including self-loops and repeated edges.
pub fn edge_list(
    vertex_bound: u32,
    max_edges: usize,
) -> impl Strategy<Value = Vec<(u32, u32, Weight)>> {
    vec(
        (0..vertex_bound, 0..vertex_bound, -100 as Weight..100),
        0..=max_edges,
    )
}

pub fn graph_directed(vertex_bound: u32, max_edges: usize) -> impl Strategy<Value = Graph<u32>> {
    edge_list(vertex_bound, max_edges).prop_map(|edges| edges.into_iter().collect::<Graph<_>>())
}

/// Non-empty graph together with one of its vertices.
pub fn graph_with_root(
    vertex_bound: u32,
    max_edges: usize,
) -> impl Strategy<Value = (Graph<u32>, u32)> {
    vec(
        (0..vertex_bound, 0..vertex_bound, -100 as Weight..100),
        1..=max_edges.max(1),
    )
    .prop_flat_map(|edges| {
        let graph = edges.into_iter().collect::<Graph<_>>();
        let ids = graph.vertices().copied().collect::<Vec<_>>();
        (Just(graph), select(ids))
    })
}
