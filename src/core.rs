pub mod error;
pub mod id;

mod base;

pub use base::*;

/// Signed weight of a directed edge.
///
/// Edges added without an explicit weight get `0`.
pub type Weight = i64;
