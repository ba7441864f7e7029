//! Trait for types that are used for identifying vertices in graphs.
//!
//! Vertex identifiers are opaque to the graph. They are only hashed and
//! compared for equality, never interpreted or ordered.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// The identifier is chosen by the caller when an edge or vertex is added. It
/// is implemented for strings and primitive integers.
pub trait IdType: Clone + Eq + Hash + Debug {}

macro_rules! impl_id_type {
    ($($ty:ty),* $(,)?) => {
        $(impl IdType for $ty {})*
    };
}

impl_id_type!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);
impl_id_type!(String, Box<str>);

impl IdType for &str {}
