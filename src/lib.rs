//! Directed graph with ordered adjacency.
//!
//! Vertices are identified by user-chosen ids and every directed edge carries
//! an integer weight. Neighbors of a vertex keep the order in which their
//! edges were first added, which makes [breadth-first](Graph::bfs) and
//! [depth-first](Graph::dfs) traversals deterministic.
//!
//! ```
//! use digraph::Graph;
//!
//! let graph = Graph::from_iter([("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
//!
//! assert_eq!(graph.bfs(&"a"), Ok(vec!["a", "b", "c", "d"]));
//! assert_eq!(graph.dfs_from(&"c"), Ok(vec!["c", "d"]));
//! ```
//!
//! Graphs can be loaded from an edge list file with [`Graph::from_txt`] or
//! more generally with [`io::EdgeListReader`].

pub mod core;
pub mod graph;
pub mod infra;
pub mod io;
pub mod visit;

pub use crate::{
    core::{
        error::{LoadError, VertexNotFound},
        Weight,
    },
    graph::{Graph, Vertex},
};

pub mod prelude {
    pub use crate::{
        core::{GraphBase, IntoEdge, Neighbors},
        graph::Graph,
        visit::{VisitSet, Visitor},
    };
}
