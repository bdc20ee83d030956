//! # dirkit Scaffold Command
//!
//! File: cli/src/commands/scaffold/mod.rs
//!
//! ## Overview
//!
//! Implements `dirkit scaffold`, which materializes the built-in project
//! skeleton (`layout::PROJECT_LAYOUT`) in the current working directory.
//! Missing folders and empty files are created; existing ones are reported
//! and left alone, so the command can be re-run safely.
//!
//! ## Architecture
//!
//! - `layout`: The structure descriptor types and the built-in skeleton.
//! - `builder`: `ensure_structure`, the idempotent recursive materializer.
//! - `handle_scaffold`: Resolves the base path, prints the banner, and runs the builder.
//!
//! ## Examples
//!
//! ```bash
//! cd my-app && dirkit scaffold
//! ```
//!
//! ```
//! Creating project structure in: /home/me/my-app
//!
//! ==================================================
//! ✓ Created folder: /home/me/my-app/src
//! ✓ Created folder: /home/me/my-app/src/components
//! ✓ Created file: /home/me/my-app/src/components/Header.tsx
//! ...
//! ==================================================
//!
//! ✓ Project structure creation complete!
//! ```
//!
use crate::common::ui::format::{rule, SCAFFOLD_RULE_WIDTH};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

pub mod builder;
pub mod layout;

/// # Scaffold Arguments (`ScaffoldArgs`)
///
/// `dirkit scaffold` takes no options: the layout is fixed in code and the
/// base path is always the current working directory.
#[derive(Parser, Debug)]
pub struct ScaffoldArgs {}

/// # Handle Scaffold Command (`handle_scaffold`)
///
/// Creates the project skeleton under the current directory, streaming one
/// progress line per folder and file to stdout.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` once every entry exists; the first filesystem
///   error otherwise (entries created before it are kept).
pub fn handle_scaffold(_args: ScaffoldArgs) -> Result<()> {
    let base = std::env::current_dir().context("Failed to get current directory")?;
    let totals = layout::stats(layout::PROJECT_LAYOUT);
    info!(
        "Scaffolding {} folders and {} files in {}",
        totals.folders,
        totals.files,
        base.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Creating project structure in: {}\n", base.display())?;
    writeln!(out, "{}", rule('=', SCAFFOLD_RULE_WIDTH))?;

    builder::ensure_structure(&base, layout::PROJECT_LAYOUT, &mut out)?;

    writeln!(out, "{}", rule('=', SCAFFOLD_RULE_WIDTH))?;
    writeln!(out, "\n✓ Project structure creation complete!")?;
    out.flush()?;
    Ok(())
}
