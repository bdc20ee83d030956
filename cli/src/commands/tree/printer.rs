//! # dirkit Directory Tree Printer
//!
//! File: cli/src/commands/tree/printer.rs
//!
//! ## Overview
//!
//! Renders a directory as an annotated text tree, similar to the output of
//! the `tree` utility, with file sizes and explicit markers for skipped
//! directories. It backs `dirkit tree`.
//!
//! ## Architecture
//!
//! The printer implements several features:
//!
//! - Recursive, depth-first, pre-order traversal (directories before files)
//! - Indentation and connector lines (├──, └──, │)
//! - Optional depth limit; directories past the limit are named but not expanded
//! - Skipping of hidden entries (names starting with '.') unless requested
//! - Ignored directory names, shown with an `[IGNORED]` marker and never expanded
//! - Symlink cycle detection against the chain of canonical ancestors
//! - Inline recovery from unreadable directories and unreadable file sizes
//!
//! Each recursive call receives its own depth, prefix and ancestor chain;
//! nothing is shared between siblings except the output sink.
//!
//! ## Usage
//!
//! ```rust
//! // Stream to any writer (stdout in the CLI)
//! render_tree(&options, &mut std::io::stdout().lock())?;
//!
//! // Or collect the whole rendering
//! let text = render_tree_to_string(&options)?;
//! ```
//!
//! Example output:
//!
//! ```
//! 📁 project/
//! 🚫 Ignoring: node_modules, target
//! ------------------------------------------------------------
//! ├── src/
//! │   ├── lib.rs (1.2 KB)
//! │   └── main.rs (310 B)
//! ├── target/ [IGNORED]
//! └── Cargo.toml (402 B)
//!
//! ============================================================
//! Total ignored folders: 2
//! ```
//!
use crate::common::ui::format::{format_file_size, rule, TREE_RULE_WIDTH};
use crate::core::config::{self, TreeOptions};
use crate::core::error::Result;
use anyhow::Context;
use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a directory listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
const ELBOW: &str = "└── ";
/// Continuation under an item that still has siblings below it.
const PIPE: &str = "│   ";
/// Continuation under the last item of a listing.
const SPACER: &str = "    ";
/// Suffix for directories listed but never expanded because of the ignore set.
const IGNORED_MARKER: &str = " [IGNORED]";
/// Suffix for directories that resolve to one of their own ancestors.
const CYCLE_MARKER: &str = " [CYCLE]";
/// Shown instead of a size when a file can no longer be stat'ed.
const UNKNOWN_SIZE: &str = "?";

/// A directory entry that survived filtering, ready to be printed.
#[derive(Debug)]
struct TreeEntry {
    path: PathBuf,
    /// Raw name, used for ordinal sorting.
    key: OsString,
    /// Display name.
    name: String,
}

/// The filtered, sorted contents of one directory.
#[derive(Debug, Default)]
struct Listing {
    dirs: Vec<TreeEntry>,
    files: Vec<TreeEntry>,
}

impl Listing {
    fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }
}

/// # Render Directory Tree (`render_tree`)
///
/// Validates `options`, resolves the root, then writes the header, the tree
/// body and the ignore summary to `out`.
///
/// ## Errors
///
/// Fails when the options are invalid, the root does not exist or is not a
/// directory, a directory listing fails for any reason other than permission
/// denial, or writing to `out` fails. Output written before the failure is
/// not retracted.
pub fn render_tree(options: &TreeOptions, out: &mut dyn Write) -> Result<()> {
    options.validate()?;
    let root = config::resolve_root(&options.root)?;
    info!("Rendering tree for {}", root.display());

    let root_label = match root.file_name() {
        Some(name) => format!("{}/", name.to_string_lossy()),
        None => root.display().to_string(),
    };
    let ignoring = if options.ignore.is_empty() {
        "None".to_string()
    } else {
        options.ignore.join(", ")
    };
    writeln!(out, "📁 {}", root_label)?;
    writeln!(out, "🚫 Ignoring: {}", ignoring)?;
    writeln!(out, "{}", rule('-', TREE_RULE_WIDTH))?;

    let mut walker = TreeWalker {
        options,
        ignored: options.ignore.iter().map(String::as_str).collect(),
        out,
    };
    walker
        .walk(&root, 0, "", &[root.clone()])
        .context("Failed while rendering directory tree")?;

    writeln!(walker.out, "\n{}", rule('=', TREE_RULE_WIDTH))?;
    writeln!(walker.out, "Total ignored folders: {}", options.ignore.len())?;
    Ok(())
}

/// # Render Directory Tree to a String (`render_tree_to_string`)
///
/// Same output as `render_tree`, collected into a `String`.
#[allow(dead_code)] // The CLI streams to stdout; the string form serves library callers and tests.
pub fn render_tree_to_string(options: &TreeOptions) -> Result<String> {
    let mut buffer = Vec::new();
    render_tree(options, &mut buffer)?;
    String::from_utf8(buffer).context("Tree output was not valid UTF-8")
}

struct TreeWalker<'a> {
    options: &'a TreeOptions,
    ignored: HashSet<&'a str>,
    out: &'a mut dyn Write,
}

impl TreeWalker<'_> {
    /// Whether a directory at `depth` may have its own entries listed.
    fn can_list(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |max| depth < max)
    }

    /// # Recursive Tree Walker (`walk`)
    ///
    /// Lists `dir`, prints one line per surviving entry and recurses into
    /// each subdirectory that is neither ignored, past the depth limit, nor a
    /// cycle. All directories are printed before any file, so an ignored
    /// directory such as `node_modules/ [IGNORED]` appears ahead of a sibling
    /// `b.txt` even though `b` sorts first by name.
    ///
    /// ## Arguments
    ///
    /// * `dir` - The directory whose entries are printed.
    /// * `depth` - Depth of `dir` itself; the root is depth 0.
    /// * `prefix` - Indentation built from `PIPE`/`SPACER` segments for the
    ///   entries of `dir`.
    /// * `ancestors` - Canonical paths from the root down to and including
    ///   `dir`, used to spot symlinks that lead back up the branch.
    ///
    /// ## Returns
    ///
    /// * `Result<()>` - `Ok(())` once this subtree is printed. A permission
    ///   denial on `dir` is reported inline and still returns `Ok`; any other
    ///   listing failure or a write error is returned as `Err`.
    fn walk(&mut self, dir: &Path, depth: usize, prefix: &str, ancestors: &[PathBuf]) -> Result<()> {
        // 1. Open the directory, recovering inline from permission denial.
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!("Permission denied listing '{}', skipping", dir.display());
                writeln!(self.out, "{}[Permission Denied: {}]", prefix, display_name(dir))?;
                return Ok(());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to list directory: {}", dir.display()));
            }
        };
        // 2. Filter, classify and sort what was listed.
        let listing = read_listing(dir, entries, self.options.show_hidden)?;
        let total = listing.len();

        // 3. Directories: marker lines, depth cut-offs and recursion.
        for (index, entry) in listing.dirs.iter().enumerate() {
            // Files are printed after directories, so a directory is only
            // last when no files follow it.
            let is_last = index + 1 == total;
            let connector = if is_last { ELBOW } else { TEE };

            if self.ignored.contains(entry.name.as_str()) {
                debug!("Ignoring directory: {}", entry.path.display());
                writeln!(self.out, "{}{}{}/{}", prefix, connector, entry.name, IGNORED_MARKER)?;
                continue;
            }

            if !self.can_list(depth + 1) {
                writeln!(self.out, "{}{}{}/", prefix, connector, entry.name)?;
                continue;
            }

            let mut chain = ancestors.to_vec();
            match entry.path.canonicalize() {
                Ok(canonical) if ancestors.contains(&canonical) => {
                    warn!(
                        "Detected symlink cycle at '{}', not descending",
                        entry.path.display()
                    );
                    writeln!(self.out, "{}{}{}/{}", prefix, connector, entry.name, CYCLE_MARKER)?;
                    continue;
                }
                Ok(canonical) => chain.push(canonical),
                Err(e) => warn!(
                    "Could not canonicalize '{}': {}. Skipping cycle check.",
                    entry.path.display(),
                    e
                ),
            }

            writeln!(self.out, "{}{}{}/", prefix, connector, entry.name)?;
            let child_prefix = format!("{}{}", prefix, if is_last { SPACER } else { PIPE });
            self.walk(&entry.path, depth + 1, &child_prefix, &chain)?;
        }

        // 4. Files, each with its size looked up at print time.
        for (index, entry) in listing.files.iter().enumerate() {
            let is_last = listing.dirs.len() + index + 1 == total;
            let connector = if is_last { ELBOW } else { TEE };
            let size = size_label(&entry.path);
            writeln!(self.out, "{}{}{} ({})", prefix, connector, entry.name, size)?;
        }

        Ok(())
    }
}

/// # Read Directory Listing (`read_listing`)
///
/// Filters, classifies and sorts the entries of one directory.
///
/// Entries are classified from the type recorded in the directory itself,
/// so a directory that can be listed but not searched (read without execute
/// permission) still yields its files; their sizes then show as `?`. Only
/// symlinks are stat'ed, to find out what they point at.
///
/// ## Arguments
///
/// * `dir` - The directory being listed, used for error context.
/// * `entries` - The open `fs::ReadDir` for `dir`.
/// * `show_hidden` - Keep names starting with '.' when `true`.
///
/// ## Returns
///
/// * `Result<Listing>` - Directories and files, each sorted by raw name.
///   Dangling symlinks, entries whose type cannot be read, and anything that
///   is neither a directory nor a regular file are skipped. An error while
///   iterating `dir` itself is returned as `Err`.
fn read_listing(dir: &Path, entries: fs::ReadDir, show_hidden: bool) -> Result<Listing> {
    let mut listing = Listing::default();

    for entry_result in entries {
        let entry = entry_result
            .with_context(|| format!("Failed to read entry in '{}'", dir.display()))?;
        let key = entry.file_name();
        let name = key.to_string_lossy().into_owned();

        // Hidden filtering runs before the ignore check in `walk`.
        if !show_hidden && name.starts_with('.') {
            debug!("Skipping hidden entry: {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                debug!("Skipping '{}': {}", path.display(), e);
                continue;
            }
        };

        // Symlinks are followed, so a link to a directory is walked as one.
        let (is_dir, is_file) = if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(target) => (target.is_dir(), target.is_file()),
                Err(e) => {
                    debug!("Skipping dangling symlink '{}': {}", path.display(), e);
                    continue;
                }
            }
        } else {
            (file_type.is_dir(), file_type.is_file())
        };

        let item = TreeEntry { path, key, name };
        if is_dir {
            listing.dirs.push(item);
        } else if is_file {
            listing.files.push(item);
        } else {
            debug!("Skipping special file: {}", item.path.display());
        }
    }

    // Ordinal on the raw names: uppercase sorts before lowercase.
    listing.dirs.sort_by(|a, b| a.key.cmp(&b.key));
    listing.files.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(listing)
}

/// Human-readable size of the file at `path`, or `?` when it cannot be stat'ed.
fn size_label(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => format_file_size(meta.len()),
        Err(e) => {
            debug!("Could not read size of '{}': {}", path.display(), e);
            UNKNOWN_SIZE.to_string()
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
