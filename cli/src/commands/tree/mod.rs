//! # dirkit Tree Command
//!
//! File: cli/src/commands/tree/mod.rs
//!
//! ## Overview
//!
//! Implements `dirkit tree`, a read-only directory visualizer. It prints the
//! subtree under a root with tree connectors, file sizes, `[IGNORED]` markers
//! for skipped directory names, and an optional depth limit.
//!
//! ## Architecture
//!
//! - `TreeArgs`: Clap arguments, each with an environment-variable fallback.
//! - `TreeArgs::into_options`: Merges the flags over the in-code defaults from `core::config`.
//! - `handle_tree`: Prints the scanner banner and streams the rendering to stdout.
//! - `printer`: The renderer itself.
//!
//! ## Examples
//!
//! ```bash
//! # Current directory, default ignore list, unlimited depth
//! dirkit tree
//!
//! # Two levels of ~/code, including dotfiles, ignoring only `target`
//! dirkit tree --root ~/code --max-depth 2 --show-hidden --ignore target
//!
//! # Several names at once
//! dirkit tree --ignore node_modules,dist --ignore .cache
//! ```
//!
use crate::common::ui::format::{rule, TREE_RULE_WIDTH};
use crate::core::config::{TreeOptions, DEFAULT_ROOT};
use crate::core::error::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

pub mod printer;

/// # Tree Arguments (`TreeArgs`)
///
/// Flags for `dirkit tree`. Anything not given falls back to the
/// corresponding environment variable, then to the in-code default.
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Directory to render. A leading `~` is expanded.
    #[arg(long, env = "DIRKIT_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Number of directory levels to list (at least 1). Unlimited when omitted.
    #[arg(long, env = "DIRKIT_MAX_DEPTH")]
    max_depth: Option<usize>,

    /// Include entries whose names start with '.'.
    #[arg(long)]
    show_hidden: bool,

    /// Directory names to show but not expand. Comma-separated and repeatable;
    /// replaces the default list. Pass `--ignore ""` to ignore nothing.
    #[arg(long, env = "DIRKIT_IGNORE", value_delimiter = ',')]
    ignore: Option<Vec<String>>,
}

impl TreeArgs {
    /// Applies the parsed flags on top of `TreeOptions::default()`.
    pub fn into_options(self) -> TreeOptions {
        let options = TreeOptions {
            root: self.root,
            max_depth: self.max_depth,
            show_hidden: self.show_hidden,
            ..TreeOptions::default()
        };
        match self.ignore {
            Some(names) => options.with_ignores(names),
            None => options,
        }
    }
}

/// # Handle Tree Command (`handle_tree`)
///
/// Prints the scanner banner followed by the rendered tree on stdout.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` after the footer is printed; an error if the
///   options are invalid, the root cannot be resolved, or an unrecoverable
///   filesystem error occurs mid-walk.
pub fn handle_tree(args: TreeArgs) -> Result<()> {
    let options = args.into_options();
    debug!("Tree options: {:?}", options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "📂 Directory Structure Scanner")?;
    writeln!(out, "{}", rule('=', TREE_RULE_WIDTH))?;

    printer::render_tree(&options, &mut out)?;
    out.flush()?;
    Ok(())
}
