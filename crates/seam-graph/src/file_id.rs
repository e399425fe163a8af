//! Stable integer handles for discovered files.

use std::fmt;

/// Identity of a discovered file within one resolution run.
///
/// Identities are assigned by [`FileTable`](crate::table::FileTable) in
/// first-seen order starting at zero and are never reused, so a `FileId`
/// doubles as a vertex index into the [`DependencyGraph`](crate::graph::DependencyGraph)
/// built over the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// The identity as a vertex index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
