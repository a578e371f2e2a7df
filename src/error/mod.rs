//! Error types for splitrs.

use std::fmt;

/// Errors that can occur while splitting a stream into lines.
///
/// The in-memory engine itself never fails: [`crate::LineBuffer`] methods do
/// not return errors. This type covers the edges around it: compiling a
/// separator pattern and reading from an I/O source.
#[derive(Debug)]
pub enum SplitError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// A separator pattern failed to compile.
    InvalidPattern(regex::Error),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Io(e) => write!(f, "io error: {}", e),
            SplitError::InvalidPattern(e) => write!(f, "invalid separator pattern: {}", e),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e) => Some(e),
            SplitError::InvalidPattern(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        SplitError::Io(e)
    }
}

impl From<regex::Error> for SplitError {
    fn from(e: regex::Error) -> Self {
        SplitError::InvalidPattern(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: SplitError = io_err.into();
        matches!(err, SplitError::Io(_));
    }

    #[test]
    fn test_pattern_error_conversion() {
        let bad = regex::Regex::new("(").unwrap_err();
        let err: SplitError = bad.into();
        assert!(err.to_string().contains("invalid separator pattern"));
    }

    #[test]
    fn test_display() {
        let err = SplitError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert!(err.to_string().contains("io error"));
    }
}
