//! Small helpers shared by the commands.

use std::path::Path;

/// Displays `path` relative to `root` where possible.
///
/// Resolved paths are absolute; listings read better rooted at what the
/// user asked for.
pub(crate) fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
