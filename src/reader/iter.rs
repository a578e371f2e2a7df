//! Line iterator over a blocking reader.
//!
//! Reads from any [`std::io::Read`] source incrementally and yields complete
//! lines as terminators are recognized, with the unterminated tail emitted
//! once at end of stream.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use splitrs::{Separator, lines};
//!
//! let input = Cursor::new("foo\nbar\r\nbaz");
//! let collected: Vec<String> =
//!     lines(input, Separator::default()).collect::<Result<_, _>>()?;
//! assert_eq!(collected, vec!["foo", "bar", "baz"]);
//! # Ok::<(), splitrs::SplitError>(())
//! ```

use std::collections::VecDeque;
use std::io::Read;

use crate::error::SplitError;
use crate::separator::Separator;
use crate::splitter::Splitter;

/// Read granularity for the blocking adapter.
const READ_CHUNK_SIZE: usize = 8192;

/// Creates a line iterator from a reader.
///
/// The iterator is lazy: it reads up to 8 KiB at a time and yields each line
/// as soon as its terminator has been seen, making it suitable for streaming
/// large sources. Each read is decoded as UTF-8 independently, so a
/// multi-byte scalar falling exactly on a read boundary decodes as
/// replacement characters (the same per-chunk decoding rule as
/// [`crate::LineBuffer::append`]).
///
/// # Arguments
///
/// * `reader` - Any type implementing [`std::io::Read`]
/// * `separator` - Anything convertible to [`Separator`]
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use splitrs::{Separator, SplitError, lines};
///
/// fn main() -> Result<(), SplitError> {
///     let file = File::open("app.log")?;
///     for line in lines(file, Separator::default()) {
///         println!("{}", line?);
///     }
///     Ok(())
/// }
/// ```
pub fn lines<R: Read>(reader: R, separator: impl Into<Separator>) -> LineIter<R> {
    LineIter {
        reader,
        splitter: Splitter::new(separator.into()),
        queue: VecDeque::new(),
        buf: vec![0u8; READ_CHUNK_SIZE],
        finished: false,
    }
}

/// An iterator that yields lines from a reader.
///
/// Created by [`lines`]. Yields `Result<String, SplitError>`; after an I/O
/// error or end of stream the iterator is fused and keeps returning `None`.
pub struct LineIter<R> {
    reader: R,
    splitter: Splitter,
    queue: VecDeque<String>,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: Read> Iterator for LineIter<R> {
    type Item = Result<String, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.queue.pop_front() {
                return Some(Ok(line));
            }
            if self.finished {
                return None;
            }

            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    let queue = &mut self.queue;
                    self.splitter.finish(&mut |line| queue.push_back(line.to_owned()));
                }
                Ok(n) => {
                    let text = String::from_utf8_lossy(&self.buf[..n]);
                    let queue = &mut self.queue;
                    self.splitter.append(&text, &mut |line| queue.push_back(line.to_owned()));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str, separator: Separator) -> Vec<String> {
        lines(Cursor::new(input.to_owned()), separator)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_default_separator() {
        let got = collect("foo\nbar\r\nbaz\r", Separator::default());
        assert_eq!(got, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_literal_separator() {
        let got = collect("a;b;c", Separator::literal(";"));
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        let got = collect("", Separator::default());
        assert!(got.is_empty());
    }

    #[test]
    fn test_no_terminator_yields_single_line() {
        let got = collect("just one line", Separator::default());
        assert_eq!(got, vec!["just one line"]);
    }

    #[test]
    fn test_spans_read_boundaries() {
        // One line longer than the internal read granularity.
        let long = "x".repeat(3 * READ_CHUNK_SIZE);
        let input = format!("{long}\nshort");
        let got = collect(&input, Separator::default());
        assert_eq!(got, vec![long, "short".to_owned()]);
    }

    #[test]
    fn test_io_error_is_surfaced_then_fused() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "down"))
            }
        }

        let mut iter = lines(Failing, Separator::default());
        assert!(matches!(iter.next(), Some(Err(SplitError::Io(_)))));
        assert!(iter.next().is_none());
    }
}
