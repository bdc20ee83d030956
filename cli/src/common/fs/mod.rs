//! # dirkit Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared across commands. Currently this is only the
//! `io` submodule, which holds the idempotent create-if-missing operations
//! used by `dirkit scaffold`.
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::ensure_dir_exists`.
//!

/// Idempotent directory and empty-file creation (`ensure_dir_exists`, `ensure_empty_file`).
pub mod io;
