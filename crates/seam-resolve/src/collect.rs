//! Per-file dependency collection.

use std::path::{Path, PathBuf};

use seam_graph::{DependencyRecord, FileTable};
use tracing::{debug, warn};

use crate::directive::DirectiveParser;
use crate::source;

/// A reference whose resolved target does not exist on disk.
///
/// Missing targets are diagnostics, not failures; the referencing file is
/// still resolved and emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    /// File whose directive named the target.
    pub file: PathBuf,
    /// Resolved path with nothing behind it.
    pub target: PathBuf,
}

/// Collects the dependencies declared inside one file.
///
/// Scanning registers the file, parses every line for directives and
/// records a reference for each target that exists on disk, registering the
/// target as it goes. Malformed directives are logged and their lines
/// skipped; an unreadable file keeps its registration but contributes no
/// record entry.
#[derive(Debug)]
pub struct Collector {
    parser: DirectiveParser,
    base: PathBuf,
}

impl Collector {
    /// Creates a collector resolving references against `base`.
    pub fn new(parser: DirectiveParser, base: impl Into<PathBuf>) -> Self {
        Self {
            parser,
            base: base.into(),
        }
    }

    /// Scans `path` and records what it requires.
    pub fn scan(
        &self,
        path: &Path,
        table: &mut FileTable,
        record: &mut DependencyRecord,
        missing: &mut Vec<MissingDependency>,
    ) {
        let file = table.register(path);
        let lines = match source::read_lines(path) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("skipping unreadable file '{}': {err}", path.display());
                return;
            }
        };
        record.add_file(file);
        for line in &lines {
            match self.parser.parse_line(line, &self.base) {
                Ok(Some(target)) => {
                    if target.is_file() {
                        let dependency = table.register(&target);
                        record.add_dependency(file, dependency);
                        debug!(
                            "'{}' requires '{}'",
                            path.display(),
                            target.display()
                        );
                    } else {
                        debug!(
                            "'{}' requires missing '{}'",
                            path.display(),
                            target.display()
                        );
                        missing.push(MissingDependency {
                            file: path.to_path_buf(),
                            target,
                        });
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        "malformed directive in '{}' ({err}); line skipped",
                        path.display()
                    );
                }
            }
        }
    }
}
