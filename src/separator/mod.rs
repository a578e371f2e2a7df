//! Separator configuration for line splitting.
//!
//! - [`Separator`] - Literal or pattern terminator, fixed at construction
//! - [`DEFAULT_SEPARATOR`] - The default terminator pattern source
//!
//! The splitting strategy is selected once, when the separator is built, by
//! tagging it as literal or pattern. The engine dispatches on the tag with a
//! plain `match`; there is no runtime type inspection.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SplitError;

/// Source of the default terminator pattern.
///
/// At each position the alternation prefers a two-character CRLF over a lone
/// CR, and a lone CR over a lone LF, so `"\r\n"` is consumed as a single
/// terminator rather than a CR followed by an empty LF-terminated line.
pub const DEFAULT_SEPARATOR: &str = r"\r\n|\r|\n";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_SEPARATOR).expect("default separator pattern is valid"));

/// A line separator: an exact literal sequence or a regex pattern.
///
/// Chosen once at construction of a [`crate::LineBuffer`] (or a reader
/// adapter) and immutable thereafter. An empty literal is substituted with
/// the default pattern, so there is no way to construct a separator that
/// matches nothing.
///
/// # Example
///
/// ```
/// use splitrs::Separator;
///
/// let newline = Separator::default();
/// assert!(newline.is_pattern());
///
/// let record = Separator::literal("--break--");
/// assert!(record.is_literal());
///
/// let blank_line = Separator::pattern(r"\n\n+")?;
/// assert!(blank_line.is_pattern());
/// # Ok::<(), splitrs::SplitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Separator {
    pub(crate) kind: SeparatorKind,
}

/// Strategy tag. Private: callers pick a strategy by how they construct the
/// [`Separator`], never by inspecting it afterwards.
#[derive(Debug, Clone)]
pub(crate) enum SeparatorKind {
    /// Exact literal sequence, always non-empty.
    Literal(String),

    /// Compiled pattern. `folds_crlf` records whether the pattern treats
    /// `"\r\n"` as a single terminator while also matching a lone `"\r"`;
    /// when it does, a trailing CR must be held back until the next chunk
    /// can rule out a following LF.
    Pattern { regex: Regex, folds_crlf: bool },
}

impl Separator {
    /// Creates a literal separator.
    ///
    /// An empty string falls back to the default pattern, matching the
    /// contract that an absent or empty separator means "split on newlines".
    ///
    /// # Example
    ///
    /// ```
    /// use splitrs::Separator;
    ///
    /// assert!(Separator::literal("\n").is_literal());
    /// assert!(Separator::literal("").is_pattern()); // default substituted
    /// ```
    pub fn literal(separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if separator.is_empty() {
            return Self::default();
        }
        Self {
            kind: SeparatorKind::Literal(separator),
        }
    }

    /// Compiles a pattern separator from a regex source.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidPattern`] if the source does not compile.
    pub fn pattern(source: &str) -> Result<Self, SplitError> {
        Ok(Self::from(Regex::new(source)?))
    }

    /// Returns true if this separator is an exact literal sequence.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, SeparatorKind::Literal(_))
    }

    /// Returns true if this separator is a compiled pattern.
    pub fn is_pattern(&self) -> bool {
        matches!(self.kind, SeparatorKind::Pattern { .. })
    }

    /// Returns the literal text or the pattern source.
    pub fn as_str(&self) -> &str {
        match &self.kind {
            SeparatorKind::Literal(s) => s,
            SeparatorKind::Pattern { regex, .. } => regex.as_str(),
        }
    }
}

impl Default for Separator {
    /// The default separator: CRLF, then lone CR, then lone LF.
    fn default() -> Self {
        Self {
            kind: SeparatorKind::Pattern {
                regex: DEFAULT_REGEX.clone(),
                folds_crlf: true,
            },
        }
    }
}

impl From<Regex> for Separator {
    fn from(regex: Regex) -> Self {
        let folds_crlf = folds_crlf(&regex);
        Self {
            kind: SeparatorKind::Pattern { regex, folds_crlf },
        }
    }
}

impl From<&str> for Separator {
    /// Literal separator; empty input substitutes the default pattern.
    fn from(separator: &str) -> Self {
        Self::literal(separator)
    }
}

impl From<String> for Separator {
    /// Literal separator; empty input substitutes the default pattern.
    fn from(separator: String) -> Self {
        Self::literal(separator)
    }
}

/// Probes whether a pattern consumes `"\r\n"` as one two-character terminator
/// while also accepting a lone `"\r"`. Only such patterns make a trailing CR
/// ambiguous at a chunk boundary.
fn folds_crlf(regex: &Regex) -> bool {
    let crlf = regex
        .find("\r\n")
        .is_some_and(|m| m.start() == 0 && m.end() == 2);
    let lone_cr = regex.find("\r").is_some_and(|m| m.start() == 0 && m.end() == 1);
    crlf && lone_cr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pattern() {
        let sep = Separator::default();
        assert!(sep.is_pattern());
        assert_eq!(sep.as_str(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_literal() {
        let sep = Separator::literal("--break--");
        assert!(sep.is_literal());
        assert_eq!(sep.as_str(), "--break--");
    }

    #[test]
    fn test_empty_literal_substitutes_default() {
        let sep = Separator::literal("");
        assert!(sep.is_pattern());
        assert_eq!(sep.as_str(), DEFAULT_SEPARATOR);

        let sep: Separator = "".into();
        assert!(sep.is_pattern());
    }

    #[test]
    fn test_pattern_compiles() {
        let sep = Separator::pattern(r"\n\n+").unwrap();
        assert!(sep.is_pattern());
        assert_eq!(sep.as_str(), r"\n\n+");
    }

    #[test]
    fn test_pattern_rejects_bad_source() {
        assert!(Separator::pattern("(").is_err());
    }

    #[test]
    fn test_default_folds_crlf() {
        match Separator::default().kind {
            SeparatorKind::Pattern { folds_crlf, .. } => assert!(folds_crlf),
            SeparatorKind::Literal(_) => panic!("default must be a pattern"),
        }
    }

    #[test]
    fn test_lf_only_pattern_does_not_fold() {
        let sep = Separator::pattern(r"\n").unwrap();
        match sep.kind {
            SeparatorKind::Pattern { folds_crlf, .. } => assert!(!folds_crlf),
            SeparatorKind::Literal(_) => unreachable!(),
        }
    }

    #[test]
    fn test_explicit_newline_pattern_folds() {
        let sep = Separator::pattern(r"\r\n|\r|\n").unwrap();
        match sep.kind {
            SeparatorKind::Pattern { folds_crlf, .. } => assert!(folds_crlf),
            SeparatorKind::Literal(_) => unreachable!(),
        }
    }

    #[test]
    fn test_from_regex() {
        let sep: Separator = Regex::new(";").unwrap().into();
        assert!(sep.is_pattern());
    }
}
