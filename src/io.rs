//! Reading and writing graphs as text.
//!
//! The only supported format is the edge list, one `src,dst[,weight]` record
//! per line. See [`EdgeListReader`] for the details.

mod edge_list;

pub use edge_list::{EdgeListReader, EdgeListWriter};

use std::io::{self, Write};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}
