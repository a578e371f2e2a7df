//! Pattern splitting strategy.
//!
//! The pending tail is prefixed onto each newly arrived chunk and the
//! combined text is walked with the pattern; every fully delimited segment is
//! emitted and the text after the last terminator becomes the new tail.
//! Emitted data is never re-matched: only the (typically tiny) unterminated
//! remainder is ever scanned again, not the whole history of the stream.
//!
//! Prefixing the remainder is what makes a terminator that straddles two
//! chunks resolve as one match. The remaining ambiguity is a chunk that ends
//! in `"\r"` under a pattern that folds CRLF into a single terminator: the
//! CR may be a complete terminator or the first half of a CRLF pair. Such a
//! match is held back in the tail until the next chunk (or the final flush)
//! settles it.

use regex::Regex;

/// Appends `data` and emits every segment whose terminator is certain.
///
/// A match of exactly `"\r"` ending at the end of the combined text is not
/// consumed when `folds_crlf` is set; it stays in `pending` so that an LF
/// arriving next completes a single CRLF terminator.
pub(crate) fn split_into<F: FnMut(&str)>(
    pending: &mut String,
    regex: &Regex,
    folds_crlf: bool,
    data: &str,
    sink: &mut F,
) {
    if data.is_empty() {
        return;
    }

    let mut text = std::mem::take(pending);
    text.push_str(data);

    let mut start = 0;
    for m in regex.find_iter(&text) {
        if m.is_empty() {
            // Zero-width separators are unsupported; treat as no terminator.
            continue;
        }
        if folds_crlf && m.as_str() == "\r" && m.end() == text.len() {
            // Possibly the first half of a CRLF pair.
            break;
        }
        sink(&text[start..m.start()]);
        start = m.end();
    }

    text.drain(..start);
    *pending = text;
}

/// Emits whatever the tail holds at end of stream.
///
/// A held-back CR is now known to be a complete terminator: the segment
/// before it is emitted and the CR consumed. Otherwise the non-empty tail is
/// emitted as the final line. An empty tail emits nothing.
pub(crate) fn finish<F: FnMut(&str)>(pending: &mut String, folds_crlf: bool, sink: &mut F) {
    if folds_crlf && pending.ends_with('\r') {
        pending.pop();
        let line = std::mem::take(pending);
        sink(&line);
        return;
    }
    if !pending.is_empty() {
        let line = std::mem::take(pending);
        sink(&line);
    }
}
