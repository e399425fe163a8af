//! Line-oriented file access shared by collection and emission.

use std::fs;
use std::io;
use std::path::Path;

/// Reads `path` as lines of text.
///
/// Contents are decoded as UTF-8 with invalid sequences replaced, so a
/// binary file degrades to garbage lines instead of a read failure. Line
/// endings are stripped; emission adds its own.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.lines().map(str::to_owned).collect())
}
