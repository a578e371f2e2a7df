//! Internal splitting engine shared by the buffer and the I/O adapters.
//!
//! - [`Splitter`] - Separator plus the unterminated tail, with the two
//!   strategy algorithms in sibling modules
//!
//! This is an implementation detail and not part of the public API. The
//! public surfaces ([`crate::LineBuffer`], [`crate::lines`], and the async
//! stream) all drive the same `Splitter`, so their emitted lines agree for
//! identical input.

mod literal;
mod pattern;

use crate::separator::{Separator, SeparatorKind};

/// Stateful splitting core: a separator fixed at construction and the text
/// received but not yet emitted as a complete line.
#[derive(Debug)]
pub(crate) struct Splitter {
    separator: Separator,
    pending: String,
}

impl Splitter {
    pub(crate) fn new(separator: Separator) -> Self {
        Self {
            separator,
            pending: String::new(),
        }
    }

    /// Processes one chunk of decoded text, invoking `sink` once per
    /// completed line.
    pub(crate) fn append<F: FnMut(&str)>(&mut self, data: &str, sink: &mut F) {
        match &self.separator.kind {
            SeparatorKind::Literal(sep) => {
                literal::split_into(&mut self.pending, sep, data, sink);
            }
            SeparatorKind::Pattern { regex, folds_crlf } => {
                pattern::split_into(&mut self.pending, regex, *folds_crlf, data, sink);
            }
        }
    }

    /// Emits the unterminated tail at end of stream, if any, and clears it.
    pub(crate) fn finish<F: FnMut(&str)>(&mut self, sink: &mut F) {
        match &self.separator.kind {
            SeparatorKind::Literal(_) => {
                if !self.pending.is_empty() {
                    let line = std::mem::take(&mut self.pending);
                    sink(&line);
                }
            }
            SeparatorKind::Pattern { folds_crlf, .. } => {
                pattern::finish(&mut self.pending, *folds_crlf, sink);
            }
        }
    }

    /// Drops the unterminated tail without emitting it.
    pub(crate) fn reset(&mut self) {
        self.pending.clear();
    }

    /// The text received but not yet emitted.
    pub(crate) fn pending(&self) -> &str {
        &self.pending
    }

    /// The separator this splitter was built with.
    pub(crate) fn separator(&self) -> &Separator {
        &self.separator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(splitter: &mut Splitter, chunks: &[&str], flush: bool) -> Vec<String> {
        let mut lines = Vec::new();
        let mut sink = |line: &str| lines.push(line.to_owned());
        for chunk in chunks {
            splitter.append(chunk, &mut sink);
        }
        if flush {
            splitter.finish(&mut sink);
        }
        lines
    }

    #[test]
    fn test_dispatch_literal() {
        let mut splitter = Splitter::new(Separator::literal(";"));
        let lines = collect(&mut splitter, &["a;b;c"], true);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dispatch_pattern() {
        let mut splitter = Splitter::new(Separator::default());
        let lines = collect(&mut splitter, &["a\r\nb\nc"], true);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_literal_finish_emits_tail_once() {
        let mut splitter = Splitter::new(Separator::literal("\n"));
        let mut lines = Vec::new();
        let mut sink = |line: &str| lines.push(line.to_owned());
        splitter.append("tail", &mut sink);
        splitter.finish(&mut sink);
        splitter.finish(&mut sink);
        assert_eq!(lines, vec!["tail"]);
    }

    #[test]
    fn test_reset_discards_tail() {
        let mut splitter = Splitter::new(Separator::default());
        let mut sink = |_line: &str| {};
        splitter.append("partial", &mut sink);
        assert_eq!(splitter.pending(), "partial");
        splitter.reset();
        assert_eq!(splitter.pending(), "");
    }
}
