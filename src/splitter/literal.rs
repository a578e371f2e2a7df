//! Fixed-string splitting strategy.
//!
//! Leftmost-first repeated scan: append the new text to the pending tail,
//! then keep finding the first occurrence of the literal separator, emitting
//! the prefix before it and dropping prefix plus separator from the front.
//! Fixed-length literal matching is unambiguous, so a separator can never be
//! found inside a partially consumed separator.

/// Appends `data` to `pending` and emits every fully delimited segment.
///
/// The separator must be non-empty; [`crate::Separator`] guarantees this at
/// construction.
pub(crate) fn split_into<F: FnMut(&str)>(
    pending: &mut String,
    separator: &str,
    data: &str,
    sink: &mut F,
) {
    debug_assert!(!separator.is_empty());

    pending.push_str(data);

    while let Some(idx) = pending.find(separator) {
        sink(&pending[..idx]);
        pending.drain(..idx + separator.len());
    }
}
