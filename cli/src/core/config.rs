//! # dirkit Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! dirkit has no configuration file. Every setting has an in-code default
//! defined here, and the command-line flags (with their environment-variable
//! fallbacks, handled by `clap`) override those defaults for a single run.
//!
//! ## Architecture
//!
//! - `DEFAULT_IGNORES`: directory names the tree renderer skips unless told otherwise.
//! - `TreeOptions`: the full set of tree renderer settings.
//! - `TreeOptions::validate`: rejects settings the walker cannot honor.
//! - `resolve_root`: expands `~` and turns the root into an absolute, existing directory.
//!
//! ## Examples
//!
//! ```rust
//! let options = TreeOptions {
//!     max_depth: Some(2),
//!     ..TreeOptions::default()
//! };
//! options.validate()?;
//! let root = config::resolve_root(&options.root)?;
//! ```
//!
use crate::core::error::{DirkitError, Result};
use anyhow::Context;
use std::{
    io,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Directory names skipped by `dirkit tree` when `--ignore` is not given.
/// Matching is by exact name, not by glob.
pub const DEFAULT_IGNORES: &[&str] = &[
    "__pycache__",
    ".git",
    ".venv",
    "venv",
    "env",
    "node_modules",
    "dist",
    "build",
    ".idea",
    ".vscode",
    ".expo",
    "target",
];

/// Root used when `--root` is not given.
pub const DEFAULT_ROOT: &str = ".";

/// Settings for a single tree rendering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    /// Directory to render. May be relative or start with `~`.
    pub root: PathBuf,
    /// Number of directory levels to list. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Whether dot-prefixed entries are shown (and traversed).
    pub show_hidden: bool,
    /// Directory names that are displayed but never expanded.
    pub ignore: Vec<String>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            max_depth: None,
            show_hidden: false,
            ignore: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TreeOptions {
    /// Replaces the ignore list, dropping empty names and repeated names.
    pub fn with_ignores<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = normalize_ignores(names);
        self
    }

    /// Checks that the options describe a walk that can actually run.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            anyhow::bail!(DirkitError::Config(
                "--max-depth must be at least 1 (the root is always listed)".to_string()
            ));
        }
        if let Some(bad) = self.ignore.iter().find(|name| name.contains(['/', '\\'])) {
            anyhow::bail!(DirkitError::Config(format!(
                "Ignore entry '{}' must be a directory name, not a path.",
                bad
            )));
        }
        Ok(())
    }
}

/// Drops empty names and collapses duplicates, keeping the first occurrence.
pub fn normalize_ignores<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.into().trim().to_string();
        if !name.is_empty() && !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

/// Expands a leading `~` in a user-supplied path.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn expand_path(raw: &Path) -> PathBuf {
    let Some(text) = raw.to_str() else {
        debug!("Path '{}' is not valid UTF-8, leaving it unexpanded", raw.display());
        return raw.to_path_buf();
    };
    let expanded = shellexpand::tilde(text).into_owned();
    debug!("Expanded path '{}' to '{}'", text, expanded);
    PathBuf::from(expanded)
}

/// Resolves the tree root to an absolute path of an existing directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let expanded = expand_path(root);
    let resolved = match expanded.canonicalize() {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            anyhow::bail!(DirkitError::PathNotFound {
                path: expanded.display().to_string(),
            });
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to resolve root path: {}", expanded.display()));
        }
    };
    if !resolved.is_dir() {
        anyhow::bail!(DirkitError::NotADirectory {
            path: resolved.display().to_string(),
        });
    }
    Ok(resolved)
}
