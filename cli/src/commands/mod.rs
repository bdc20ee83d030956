//! # dirkit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The two top-level commands of the dirkit CLI. They share no logic with
//! each other; each module defines its own arguments structure and handler.
//!
//! - `scaffold`: Materializes the built-in project skeleton in the current directory
//! - `tree`: Prints an annotated, filterable directory tree
//!

/// `dirkit scaffold`: idempotent creation of the project skeleton.
pub mod scaffold;
/// `dirkit tree`: directory tree rendering with sizes and ignore markers.
pub mod tree;
