//! Per-file dependency lists, kept in scan order.

use rustc_hash::FxHashMap;

use crate::file_id::FileId;

/// The dependencies collected from each scanned file.
///
/// Entries iterate in the order files were first recorded, and each entry's
/// list preserves the order in which references were encountered, duplicates
/// included. Edge insertion downstream is therefore deterministic for a
/// given scan order.
#[derive(Debug, Default)]
pub struct DependencyRecord {
    entries: Vec<(FileId, Vec<FileId>)>,
    index: FxHashMap<FileId, usize>,
}

impl DependencyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `file` has an entry, so scanned files with no references
    /// still show up when iterating.
    pub fn add_file(&mut self, file: FileId) {
        self.slot(file);
    }

    /// Appends `dependency` to `file`'s list.
    pub fn add_dependency(&mut self, file: FileId, dependency: FileId) {
        let slot = self.slot(file);
        self.entries[slot].1.push(dependency);
    }

    /// References recorded for `file`, in scan order.
    pub fn dependencies_of(&self, file: FileId) -> Option<&[FileId]> {
        self.index
            .get(&file)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Number of files with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total references recorded across all entries.
    pub fn reference_count(&self) -> usize {
        self.entries.iter().map(|(_, deps)| deps.len()).sum()
    }

    /// Entries in the order files were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &[FileId])> {
        self.entries.iter().map(|(file, deps)| (*file, deps.as_slice()))
    }

    fn slot(&mut self, file: FileId) -> usize {
        if let Some(&slot) = self.index.get(&file) {
            return slot;
        }
        let slot = self.entries.len();
        self.entries.push((file, Vec::new()));
        self.index.insert(file, slot);
        slot
    }
}
