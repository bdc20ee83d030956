//! # dirkit Scaffold Builder
//!
//! File: cli/src/commands/scaffold/builder.rs
//!
//! ## Overview
//!
//! Materializes a structure descriptor on disk. Every folder and file is
//! created only when missing and each one produces exactly one report line,
//! so a second run over the same base path changes nothing and reports every
//! entry as already existing.
//!
//! Errors are not caught: the first filesystem failure aborts the run and
//! whatever was created before it stays on disk.
//!
use super::layout::{Contents, Folder};
use crate::common::fs::io::{self, Presence};
use crate::core::error::{DirkitError, Result};
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// # Ensure Structure (`ensure_structure`)
///
/// Ensures every folder and file described by `layout` exists under `base`,
/// walking the descriptor depth-first in declaration order.
///
/// ## Arguments
///
/// * `base` - Directory the top-level folders of `layout` are created in.
/// * `layout` - The folders to materialize, each holding either nested
///   folders or file names.
/// * `out` - Sink for the progress report, one line per folder or file.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once every entry exists. Returns an `Err` if a
///   descriptor name is not a plain single path component, if a folder path
///   is occupied by a regular file, or if any create or report write fails.
pub fn ensure_structure(base: &Path, layout: &[Folder], out: &mut dyn Write) -> Result<()> {
    for folder in layout {
        // 1. The folder itself.
        check_entry_name(folder.name)?;
        let folder_path = base.join(folder.name);

        let status = match io::ensure_dir_exists(&folder_path)? {
            Presence::Created => "✓ Created folder",
            Presence::Existing => "- Folder already exists",
        };
        writeln!(out, "{}: {}", status, folder_path.display())
            .context("Failed to write scaffold progress")?;

        // 2. Its contents: either more folders or empty files.
        match folder.contents {
            Contents::Folders(children) => {
                debug!(
                    "Descending into '{}' ({} nested folders)",
                    folder_path.display(),
                    children.len()
                );
                ensure_structure(&folder_path, children, out)?;
            }
            Contents::Files(files) => {
                for file in files {
                    check_entry_name(file)?;
                    let file_path = folder_path.join(file);
                    let status = match io::ensure_empty_file(&file_path)? {
                        Presence::Created => "✓ Created file",
                        Presence::Existing => "- File already exists",
                    };
                    writeln!(out, "{}: {}", status, file_path.display())
                        .context("Failed to write scaffold progress")?;
                }
            }
        }
    }
    Ok(())
}

/// # Check Entry Name (`check_entry_name`)
///
/// Rejects names that would not land directly inside their parent folder.
///
/// ## Arguments
///
/// * `name` - A folder or file name taken from the descriptor.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` for a plain name, otherwise an `Err` wrapping
///   `DirkitError::Layout` for empty names, `.`/`..`, or names containing
///   `/` or `\`.
fn check_entry_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "names must not be empty"
    } else if name == "." || name == ".." {
        "names must not refer to the current or parent directory"
    } else if name.contains(['/', '\\']) {
        "names must not contain path separators"
    } else {
        return Ok(());
    };
    anyhow::bail!(DirkitError::Layout {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}
