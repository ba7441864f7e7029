//! The directed graph and its vertices.

mod directed;
mod vertex;

pub use directed::{Edges, EdgesWeighted, Graph, Iter, VertexIds};
pub use vertex::{NeighborIds, NeighborsWeighted, Vertex};
