//! # dirkit Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the command handlers. Keeping them under
//! `common::` separates cross-cutting helpers from command-specific logic
//! (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Idempotent filesystem creation helpers used by the scaffolder.
//! - **`ui`**: Output formatting (banner rules, human-readable sizes).
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal output formatting.
pub mod ui;
