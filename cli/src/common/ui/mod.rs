//! # dirkit UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal presentation helpers. dirkit only writes plain, line-oriented
//! text, so this module is limited to formatting: banner rules and
//! human-readable sizes (see `format`).
//!
//! ```rust
//! use crate::common::ui::format;
//!
//! println!("{}", format::rule('=', format::TREE_RULE_WIDTH));
//! println!("notes.md ({})", format::format_file_size(2048)); // "2.0 KB"
//! ```

/// Banner rules and file size formatting.
pub mod format;
