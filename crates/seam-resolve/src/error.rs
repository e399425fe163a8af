//! Error types for the resolution pass.

use std::path::PathBuf;

use thiserror::Error;

/// A directive whose quoted argument cannot be parsed.
///
/// These never abort a scan; the collector logs them and treats the line as
/// carrying no reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// The line ended before a closing quote was seen.
    #[error("unterminated quote in directive argument")]
    UnterminatedQuote,

    /// The argument does not carry an opening and a closing quote.
    #[error("directive argument is not quoted")]
    MissingQuote,

    /// The quoted path is empty.
    #[error("directive references an empty path")]
    EmptyReference,
}

/// Errors that abort a resolution run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested root does not exist or is not a directory.
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The dependency graph contains a cycle, so no valid order exists.
    #[error("dependency cycle detected: {cycle}")]
    CycleDetected {
        /// Rendered as `a -> b -> a`.
        cycle: String,
    },

    /// An I/O failure outside the per-file recovery paths.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn cycle_message_carries_the_path() {
        let err = ResolveError::CycleDetected {
            cycle: "a.txt -> b.txt -> a.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dependency cycle detected: a.txt -> b.txt -> a.txt"
        );
    }

    #[test]
    fn root_not_found_names_the_root() {
        let err = ResolveError::RootNotFound(Path::new("missing").to_path_buf());
        assert!(err.to_string().contains("missing"));
    }
}
