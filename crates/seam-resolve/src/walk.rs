//! Bounded enumeration of candidate source files.

use std::path::PathBuf;

use tracing::warn;
use walkdir::WalkDir;

/// Default directory-nesting bound.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Walks a source tree for candidate files.
///
/// `max_depth` bounds directory nesting below the root: files directly in
/// the root sit at nesting 0, and directories nested deeper than the bound
/// are skipped silently. Files directly inside a directory at the bound are
/// still yielded. Symlinks are not followed, and the excluded path (the
/// output destination) never appears as a candidate.
#[derive(Debug)]
pub struct SourceWalker {
    root: PathBuf,
    max_depth: usize,
    exclude: Option<PathBuf>,
}

impl SourceWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: None,
        }
    }

    /// Overrides the nesting bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Hides `path` from the walk.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    /// Candidate files in directory order.
    ///
    /// Unreadable entries are logged and dropped; the walk continues.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        // walkdir counts the entry itself, so a file inside a directory at
        // the nesting bound sits one walkdir level deeper.
        WalkDir::new(&self.root)
            .follow_links(false)
            .max_depth(self.max_depth + 1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("unreadable entry during walk: {err}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(move |path| self.exclude.as_deref() != Some(path.as_path()))
    }
}
