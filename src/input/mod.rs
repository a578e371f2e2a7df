//! Input types for feeding the line buffer.
//!
//! - [`Input`] - Borrowed text or raw bytes handed to `append`

use std::borrow::Cow;

use bytes::Bytes;

/// A single chunk of input: borrowed text or raw bytes.
///
/// [`crate::LineBuffer::append`] takes anything convertible into an `Input`,
/// so call sites pass `&str`, `&String`, `&[u8]`, `&Vec<u8>`, or
/// [`&bytes::Bytes`](bytes::Bytes) directly. An `Option` of any of those also
/// converts; `None` becomes an empty chunk, making an absent value a true
/// no-op rather than an error.
///
/// Byte input is decoded as UTF-8 independently per chunk. A multi-byte
/// scalar whose bytes are split across two chunks therefore decodes as
/// replacement characters; callers that slice inside scalar boundaries must
/// reassemble bytes themselves before appending.
///
/// # Example
///
/// ```
/// use splitrs::Input;
///
/// let text: Input = "foo".into();
/// assert_eq!(text.len(), 3);
///
/// let bytes: Input = (&b"bar"[..]).into();
/// assert_eq!(bytes.decode(), "bar");
///
/// let absent: Input = None::<&str>.into();
/// assert!(absent.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// Already-decoded text.
    Text(&'a str),

    /// Raw bytes, decoded as UTF-8 when processed.
    Bytes(&'a [u8]),
}

impl<'a> Input<'a> {
    /// Decodes this chunk to text.
    ///
    /// Text input is returned as-is; byte input goes through a lossy UTF-8
    /// decode, mapping invalid sequences to U+FFFD.
    pub fn decode(self) -> Cow<'a, str> {
        match self {
            Input::Text(s) => Cow::Borrowed(s),
            Input::Bytes(b) => String::from_utf8_lossy(b),
        }
    }

    /// Returns the length of the chunk in bytes, before decoding.
    pub fn len(&self) -> usize {
        match self {
            Input::Text(s) => s.len(),
            Input::Bytes(b) => b.len(),
        }
    }

    /// Returns true if the chunk carries no data.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(b: &'a [u8]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Bytes> for Input<'a> {
    fn from(b: &'a Bytes) -> Self {
        Input::Bytes(b)
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    /// `None` converts to an empty chunk, which `append` ignores.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Input::Text(""),
        }
    }
}
