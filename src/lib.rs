//! splitrs
//!
//! Streaming line splitting for Rust.
//!
//! `splitrs` accumulates arbitrary-sized chunks of text or raw bytes and
//! emits complete lines to a caller-supplied sink as soon as a terminator is
//! recognized, retaining the unterminated tail until more data arrives or
//! the stream is flushed. It is designed as a small, composable primitive
//! for:
//!
//! - subprocess stdout/stderr capture
//! - socket and protocol plumbing
//! - incremental log processing
//! - any transport that delivers data in chunks that ignore line boundaries
//!
//! The crate intentionally:
//! - does NOT manage processes, sockets, or files
//! - does NOT manage concurrency
//! - does NOT apply backpressure
//! - does NOT decode anything beyond UTF-8
//!
//! It only does one thing: **chunks in → lines out**
//!
//! Separators are either exact literal strings or regex patterns, fixed at
//! construction. The default pattern matches CRLF, lone CR, or lone LF, in
//! that order of preference, and a CRLF pair split across two chunks is
//! recognized as a single terminator.
//!
//! # Sink-driven
//!
//! ```
//! use splitrs::LineBuffer;
//!
//! let mut lines = Vec::new();
//! {
//!     let mut buffer = LineBuffer::new(|line: &str| lines.push(line.to_owned()));
//!     buffer.append("foo\nba");
//!     buffer.append("r\nbaz");
//!     buffer.flush();
//! }
//! assert_eq!(lines, vec!["foo", "bar", "baz"]);
//! ```
//!
//! # Reader-driven
//!
//! ```no_run
//! use std::fs::File;
//! use splitrs::{Separator, SplitError, lines};
//!
//! fn main() -> Result<(), SplitError> {
//!     let file = File::open("app.log")?;
//!     for line in lines(file, Separator::default()) {
//!         println!("{}", line?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use splitrs::{Separator, lines_async};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), splitrs::SplitError> {
//!     let mut stream = lines_async(reader, Separator::default());
//!
//!     while let Some(line) = stream.next().await {
//!         println!("{}", line?);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod error;
mod input;
mod reader;
mod separator;

mod splitter; // internal strategy engine

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use buffer::LineBuffer;
pub use error::SplitError;
pub use input::Input;
pub use reader::{LineIter, lines};
pub use separator::{DEFAULT_SEPARATOR, Separator};

#[cfg(feature = "async-io")]
pub use async_stream::{LineStream, lines_async};
