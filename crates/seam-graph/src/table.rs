//! First-seen identity assignment for discovered files.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::file_id::FileId;

/// Bijective registry between file paths and their identities.
///
/// Identities are handed out in first-seen order starting at zero.
/// Registration is idempotent: registering a path again returns the identity
/// it already has. Paths are compared verbatim, so callers must normalize
/// them before registration if two spellings should share an identity.
#[derive(Debug, Default)]
pub struct FileTable {
    paths: Vec<PathBuf>,
    ids: FxHashMap<PathBuf, FileId>,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identity for `path`, assigning the next unused one if the
    /// path has not been seen before.
    pub fn register(&mut self, path: &Path) -> FileId {
        if let Some(&id) = self.ids.get(path) {
            return id;
        }
        let id = FileId::new(self.paths.len() as u32);
        self.paths.push(path.to_path_buf());
        self.ids.insert(path.to_path_buf(), id);
        id
    }

    /// The identity previously assigned to `path`, if any.
    pub fn identity_of(&self, path: &Path) -> Option<FileId> {
        self.ids.get(path).copied()
    }

    /// The path side of the bijection.
    pub fn path_of(&self, id: FileId) -> Option<&Path> {
        self.paths.get(id.index()).map(PathBuf::as_path)
    }

    /// Number of distinct files registered.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Registered paths in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &Path)> {
        self.paths
            .iter()
            .enumerate()
            .map(|(index, path)| (FileId::new(index as u32), path.as_path()))
    }
}
