//! Extraction of `require '<path>'` references from lines of text.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::DirectiveError;

/// Directive keyword honored when none is configured.
pub const DEFAULT_KEYWORD: &str = "require";

/// Scans lines of text for dependency directives.
///
/// A directive is the keyword followed by a single-quoted, slash-delimited
/// path relative to the resolution root, for example `require 'lib/util'`.
/// The quoted argument may contain spaces; tokens are rejoined until the
/// closing quote. Only the first directive on a line is honored, and the
/// keyword must stand alone as a whitespace-delimited word.
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    keyword: String,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD)
    }
}

impl DirectiveParser {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Extracts the first directive on `line` and resolves its reference
    /// against `base`.
    ///
    /// `Ok(None)` means the line carries no directive. A keyword as the last
    /// word of a line has no argument and also counts as no directive.
    pub fn parse_line(&self, line: &str, base: &Path) -> Result<Option<PathBuf>, DirectiveError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        for (position, word) in words.iter().enumerate() {
            if *word != self.keyword || position + 1 >= words.len() {
                continue;
            }
            let reference = Self::quoted_argument(&words[position + 1..])?;
            return Ok(Some(Self::resolve_reference(&reference, base)));
        }
        Ok(None)
    }

    /// Rejoins tokens until one ends with a quote, then takes the text
    /// between the first two quote characters.
    fn quoted_argument(words: &[&str]) -> Result<String, DirectiveError> {
        let mut argument = String::from(words[0]);
        let mut rest = words[1..].iter();
        while !argument.ends_with('\'') {
            match rest.next() {
                Some(word) => {
                    argument.push(' ');
                    argument.push_str(word);
                }
                None => return Err(DirectiveError::UnterminatedQuote),
            }
        }
        let mut quotes = argument.match_indices('\'');
        let (open, _) = quotes.next().ok_or(DirectiveError::MissingQuote)?;
        let (close, _) = quotes.next().ok_or(DirectiveError::MissingQuote)?;
        let reference = &argument[open + 1..close];
        if reference.is_empty() {
            return Err(DirectiveError::EmptyReference);
        }
        Ok(reference.to_string())
    }

    /// Joins a slash-delimited reference onto the base directory and cleans
    /// the result lexically. No symlink resolution happens here.
    fn resolve_reference(reference: &str, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for segment in reference.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.clean()
    }
}
