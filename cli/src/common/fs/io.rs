//! # dirkit Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Idempotent "make sure it exists" primitives used by the scaffolder. Each
//! function creates the requested entry only when it is missing and tells the
//! caller which of the two happened, so progress can be reported either way.
//! Existing entries are never modified.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and its parents) if absent. Fails if the path exists but is not a directory.
//! - **`ensure_empty_file`**: Creates an empty file if absent. An existing entry at the path is left untouched.
//!
//! ```rust
//! use crate::common::fs::io::{self, Presence};
//!
//! match io::ensure_dir_exists(Path::new("src/components"))? {
//!     Presence::Created => println!("created"),
//!     Presence::Existing => println!("already there"),
//! }
//! ```
//!
use crate::core::error::{DirkitError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

/// Whether an `ensure_*` call had to create the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The entry was missing and has been created.
    Created,
    /// The entry was already present; nothing was touched.
    Existing,
}

/// Ensures that a directory exists at the specified path.
///
/// Missing parents are created as well (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<Presence> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
        Ok(Presence::Created)
    } else if !path.is_dir() {
        anyhow::bail!(DirkitError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
        Ok(Presence::Existing)
    }
}

/// Ensures that an entry exists at `path`, creating an empty file if needed.
///
/// The file is opened with `create_new`, so an existing file is never
/// truncated, even if it appears between the check and the create.
///
/// # Errors
///
/// Returns an `Err` if the parent directory is missing or unwritable.
pub fn ensure_empty_file(path: &Path) -> Result<Presence> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            debug!("Created empty file: {:?}", path);
            Ok(Presence::Created)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("File already exists: {:?}", path);
            Ok(Presence::Existing)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create file {:?}", path)),
    }
}
