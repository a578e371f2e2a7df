//! Blocking I/O adapter for line splitting.
//!
//! - [`lines`] - Creates an iterator of lines from a [`std::io::Read`] source

mod iter;

pub use iter::{LineIter, lines};
