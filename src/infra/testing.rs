use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{core::id::IdType, graph::Graph};

/// Verifies the internal invariants of the graph using its public interface
/// only.
pub fn check_consistency<I: IdType>(graph: &Graph<I>) -> Result<(), ConsistencyCheckError> {
    let vertex_count = graph.vertex_count();

    if graph.vertices().count() != vertex_count {
        return Err(ConsistencyCheckError::VerticesVertexCountMismatch(
            graph.vertices().count(),
            vertex_count,
        ));
    }

    let mut ids = FxHashSet::default();
    let mut degree_sum = 0;

    for vertex in graph {
        let id = vertex.id();

        if !ids.insert(id) {
            return Err(ConsistencyCheckError::DuplicateVertex(format!("{id:?}")));
        }

        match graph.get_vertex(id) {
            Some(found) if found.id() == id => {}
            _ => return Err(ConsistencyCheckError::LookupMismatch(format!("{id:?}"))),
        }

        let mut neighbors = FxHashSet::default();

        for (neighbor, weight) in vertex.neighbors_weighted() {
            if !graph.contains_vertex(neighbor) {
                return Err(ConsistencyCheckError::DanglingEdge(
                    format!("{id:?}"),
                    format!("{neighbor:?}"),
                ));
            }

            if !neighbors.insert(neighbor) {
                return Err(ConsistencyCheckError::DuplicateNeighbor(
                    format!("{id:?}"),
                    format!("{neighbor:?}"),
                ));
            }

            if vertex.weight(neighbor) != Some(weight) {
                return Err(ConsistencyCheckError::WeightMismatch(
                    format!("{id:?}"),
                    format!("{neighbor:?}"),
                ));
            }
        }

        if neighbors.len() != vertex.degree() {
            return Err(ConsistencyCheckError::DegreeMismatch(
                format!("{id:?}"),
                neighbors.len(),
                vertex.degree(),
            ));
        }

        degree_sum += vertex.degree();
    }

    let edge_count = graph.edge_count();

    if graph.edges().count() != edge_count {
        return Err(ConsistencyCheckError::EdgesEdgeCountMismatch(
            graph.edges().count(),
            edge_count,
        ));
    }

    if degree_sum != edge_count {
        return Err(ConsistencyCheckError::HandshakingLemma(degree_sum, edge_count));
    }

    Ok(())
}

/// Computes the set of vertices reachable from `start`, including `start`,
/// by a fixpoint over the edge list. Independent on the traversal
/// implementations so that it can serve as their oracle.
pub fn reachable<I: IdType>(graph: &Graph<I>, start: &I) -> FxHashSet<I> {
    let mut reached = FxHashSet::default();
    reached.insert(start.clone());

    loop {
        let mut changed = false;

        for (src, dst) in graph.edges() {
            if reached.contains(src) && !reached.contains(dst) {
                reached.insert(dst.clone());
                changed = true;
            }
        }

        if !changed {
            return reached;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex {0} is enumerated more than once")]
    DuplicateVertex(String),
    #[error("lookup of vertex {0} does not return the vertex")]
    LookupMismatch(String),
    #[error("edge {0} -> {1} points to a vertex that does not exist")]
    DanglingEdge(String, String),
    #[error("neighbor {1} is recorded more than once in vertex {0}")]
    DuplicateNeighbor(String, String),
    #[error("weight of edge {0} -> {1} differs between adjacency and lookup")]
    WeightMismatch(String, String),
    #[error("vertex {0} has {1} distinct neighbors but reports degree {2}")]
    DegreeMismatch(String, usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemma(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_follows_direction() {
        let mut graph = Graph::new();
        graph.extend_with_edges([(0, 1), (1, 2), (3, 1)]);

        assert_eq!(reachable(&graph, &0), FxHashSet::from_iter([0, 1, 2]));
        assert_eq!(reachable(&graph, &2), FxHashSet::from_iter([2]));
        assert_eq!(reachable(&graph, &3), FxHashSet::from_iter([3, 1, 2]));
    }

    #[test]
    fn consistent_after_mutation() {
        let mut graph = Graph::new();
        graph.extend_with_edges([("a", "b", 1), ("b", "a", 2), ("a", "b", 3)]);
        graph.add_vertex("c");
        graph.add_vertex("a");

        assert_eq!(check_consistency(&graph), Ok(()));
    }
}
