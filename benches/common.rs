#![allow(dead_code)]

use digraph::Graph;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Generator of random edges `(v, w)` with `w < v`, each present with
/// probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        // Skip a geometrically distributed number of candidate pairs.
        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n { Some((*v, *w)) } else { None }
    }
}

pub fn digraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph<u32> {
    let mut graph = Graph::with_capacity(vertex_count);

    for id in 0..vertex_count {
        graph.add_vertex(id as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u as u32, v as u32, rng.i64(-100..100));
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, i64, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for id in 0..vertex_count {
        graph.add_node(id as u32);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.i64(-100..100));
    }

    graph
}
