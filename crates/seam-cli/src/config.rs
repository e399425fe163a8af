//! Configuration file handling.
//!
//! Seam reads an optional `seam.toml`. Values merge in a fixed precedence:
//! command-line flags override file values, which override built-in
//! defaults. Without `--config`, the file is searched for in the root being
//! resolved and then in the current directory; absence is not an error.
//!
//! ```toml
//! [resolve]
//! output = "bundle.txt"
//! max-depth = 6
//! keyword = "require"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, Result, ResultExt};

/// Name of the discovered configuration file.
pub const CONFIG_FILE: &str = "seam.toml";

/// Output destination used when neither flag nor file names one.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Contents of `seam.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeamConfig {
    /// The `[resolve]` table.
    pub resolve: ResolveSection,
}

/// The `[resolve]` table of `seam.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResolveSection {
    /// Output destination for the concatenated result.
    pub output: PathBuf,

    /// Maximum directory nesting depth below the root.
    pub max_depth: usize,

    /// Directive keyword scanned for in file contents.
    pub keyword: String,
}

impl Default for ResolveSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_depth: seam_resolve::DEFAULT_MAX_DEPTH,
            keyword: seam_resolve::DEFAULT_KEYWORD.to_string(),
        }
    }
}

/// Effective settings for one run after merging flags over file over
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root directory the pass runs over.
    pub root: PathBuf,
    /// Output destination.
    pub output: PathBuf,
    /// Directory nesting bound.
    pub max_depth: usize,
    /// Directive keyword.
    pub keyword: String,
}

impl Settings {
    /// Builds the settings for a run from command-line values.
    ///
    /// `None` values fall through to the config file and then the defaults.
    pub fn resolve(
        root: Option<PathBuf>,
        config_path: Option<&Path>,
        output: Option<PathBuf>,
        max_depth: Option<usize>,
        keyword: Option<String>,
    ) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()
                .with_hint("Pass ROOT explicitly when the working directory is unavailable")?,
        };
        let config = load_config(config_path, &root)?;
        let settings = Self {
            root,
            output: output.unwrap_or(config.resolve.output),
            max_depth: max_depth.unwrap_or(config.resolve.max_depth),
            keyword: keyword.unwrap_or(config.resolve.keyword),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.keyword.is_empty() || self.keyword.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "keyword".to_string(),
                value: self.keyword.clone(),
                hint: "Use a single non-empty word".to_string(),
            }
            .into());
        }
        if self.output.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: self.output.display().to_string(),
                hint: "Point at a file path, not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Finds `seam.toml` next to the root being resolved, then in the current
/// directory.
pub fn discover(root: &Path) -> Option<PathBuf> {
    let in_root = root.join(CONFIG_FILE);
    if in_root.is_file() {
        return Some(in_root);
    }
    let in_cwd = PathBuf::from(CONFIG_FILE);
    if in_cwd.is_file() {
        return Some(in_cwd);
    }
    None
}

/// Loads configuration for a run.
///
/// An explicit path must exist; a discovered one is optional and absence
/// falls back to the defaults.
fn load_config(explicit: Option<&Path>, root: &Path) -> Result<SeamConfig, ConfigError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path.to_path_buf())
        }
        None => discover(root),
    };
    match path {
        Some(path) => parse_config(&path),
        None => Ok(SeamConfig::default()),
    }
}

fn parse_config(path: &Path) -> Result<SeamConfig, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|_| ConfigError::NotFound(path.to_path_buf()))?;
    toml::from_str(&content).map_err(|err| ConfigError::InvalidToml {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
