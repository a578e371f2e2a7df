//! Core line buffering engine - LineBuffer with streaming API.
//!
//! This module implements the synchronous sink-driven API. It provides a
//! pure streaming interface:
//!
//! - [`LineBuffer`] - Stateful engine that accumulates streaming text
//! - `append()` - Feed data in any size (1 byte, a line, a whole file)
//! - `flush()` - Emit the unterminated tail when the stream ends
//!
//! # Example
//!
//! ```
//! use splitrs::LineBuffer;
//!
//! let mut lines = Vec::new();
//! {
//!     let mut buffer = LineBuffer::new(|line: &str| lines.push(line.to_owned()));
//!
//!     // Feed data in any size
//!     buffer.append("fir");
//!     buffer.append("st\nsecond\nthi");
//!     buffer.append("rd");
//!
//!     // When the stream ends, emit the remainder
//!     buffer.flush();
//! }
//! assert_eq!(lines, vec!["first", "second", "third"]);
//! ```

use crate::input::Input;
use crate::separator::Separator;
use crate::splitter::Splitter;

/// A line buffer that splits streaming text into complete lines.
///
/// `LineBuffer` decouples "data arrives in arbitrary-sized chunks" (a
/// subprocess's stdout, a socket, a file read loop) from "consumers want
/// whole lines". It owns the sink closure and invokes it synchronously, once
/// per completed line, from inside `append` and `flush`.
///
/// # Streaming API
///
/// - Call `append()` with text or bytes in any size
/// - Each call emits zero or more completed lines to the sink
/// - The trailing unterminated segment is retained across calls
/// - Call `flush()` when the stream ends to emit the remainder
///
/// # Chunk-boundary invariance
///
/// Identical input produces identical lines regardless of how it is
/// partitioned across `append` calls. With the default separator this
/// includes a CRLF pair delivered as `"\r"` then `"\n"`: the CR is held in
/// the pending tail until the next chunk (or `flush`) settles whether an LF
/// follows.
///
/// # Memory Considerations
///
/// The pending tail is bounded only by the longest unterminated run of
/// input. A stream that never contains a terminator grows the buffer without
/// limit; callers with bounded-memory requirements must bound their input.
///
/// # Threading
///
/// The engine is synchronous and single-threaded; it performs no locking and
/// no I/O. Sharing one instance across threads requires external
/// serialization. The sink cannot call back into the buffer that owns it:
/// `append` and `flush` hold the exclusive borrow.
///
/// # Example
///
/// ```
/// use splitrs::{LineBuffer, Separator};
///
/// let mut records = Vec::new();
/// {
///     let mut buffer =
///         LineBuffer::with_separator(|r: &str| records.push(r.to_owned()), "--break--");
///     buffer.append("alpha--break--beta--bre");
///     buffer.append("ak--gamma");
///     buffer.flush();
/// }
/// assert_eq!(records, vec!["alpha", "beta", "gamma"]);
/// ```
#[derive(Debug)]
pub struct LineBuffer<F> {
    splitter: Splitter,
    sink: F,
}

impl<F: FnMut(&str)> LineBuffer<F> {
    /// Creates a line buffer with the default separator (CRLF, CR, or LF).
    ///
    /// # Example
    ///
    /// ```
    /// use splitrs::LineBuffer;
    ///
    /// let buffer = LineBuffer::new(|line: &str| println!("{line}"));
    /// assert_eq!(buffer.size(), 0);
    /// ```
    pub fn new(sink: F) -> Self {
        Self::with_separator(sink, Separator::default())
    }

    /// Creates a line buffer with an explicit separator.
    ///
    /// The splitting strategy (literal scan vs. pattern walk) is fixed here
    /// for the buffer's lifetime by the kind of separator supplied. An empty
    /// literal falls back to the default pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use splitrs::{LineBuffer, Separator};
    ///
    /// let on_line = |line: &str| println!("{line}");
    /// let nul_delimited = LineBuffer::with_separator(on_line, "\0");
    /// assert!(nul_delimited.separator().is_literal());
    /// ```
    pub fn with_separator(sink: F, separator: impl Into<Separator>) -> Self {
        Self {
            splitter: Splitter::new(separator.into()),
            sink,
        }
    }

    /// Appends a chunk of text or bytes, emitting each completed line to the
    /// sink before returning.
    ///
    /// Accepts anything convertible to [`Input`]: `&str`, `&String`, byte
    /// slices, `&Vec<u8>`, [`&bytes::Bytes`](bytes::Bytes), or an `Option`
    /// of any of those. `None` and empty chunks are no-ops. Byte input is
    /// decoded as UTF-8 per call (see [`Input`] for the multi-byte boundary
    /// caveat).
    ///
    /// After this returns, the pending tail contains no complete terminator
    /// other than a held-back trailing CR awaiting a possible LF.
    ///
    /// # Example
    ///
    /// ```
    /// use splitrs::LineBuffer;
    ///
    /// let mut count = 0usize;
    /// {
    ///     let mut buffer = LineBuffer::new(|_line: &str| count += 1);
    ///     buffer.append("one\ntwo\nthree");
    ///     buffer.append(None::<&str>); // documented no-op
    /// }
    /// assert_eq!(count, 2); // "three" is still pending
    /// ```
    pub fn append<'a>(&mut self, data: impl Into<Input<'a>>) {
        let text = data.into().decode();
        if text.is_empty() {
            return;
        }
        self.splitter.append(&text, &mut self.sink);
    }

    /// Emits the unterminated tail to the sink, if any, and clears it.
    ///
    /// A held-back trailing CR is resolved as a final terminator first, so
    /// input ending in `"\r"` flushes the line before it rather than a line
    /// with a stray CR appended. Idempotent: a second `flush` with no
    /// intervening `append` emits nothing, and flushing an empty buffer
    /// never emits a spurious empty line.
    pub fn flush(&mut self) {
        self.splitter.finish(&mut self.sink);
    }

    /// Returns the number of characters (Unicode scalar values) currently
    /// pending. Pure query, no emission.
    ///
    /// The byte length is available as `pending().len()`.
    pub fn size(&self) -> usize {
        self.splitter.pending().chars().count()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.splitter.pending().is_empty()
    }

    /// Returns the text received but not yet emitted.
    pub fn pending(&self) -> &str {
        self.splitter.pending()
    }

    /// Returns the separator this buffer was built with.
    pub fn separator(&self) -> &Separator {
        self.splitter.separator()
    }

    /// Discards the pending tail without emitting it, for reusing the buffer
    /// on a new stream.
    pub fn reset(&mut self) {
        self.splitter.reset();
    }
}
