//! # dirkit Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout dirkit. Failures are
//! fatal by default: they travel up to `main`, which prints them and exits
//! with a non-zero status. The only recoverable conditions (permission-denied
//! listings and unreadable file sizes) are handled inline by the tree walker
//! and never become errors.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DirkitError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !root.exists() {
//!     return Err(DirkitError::PathNotFound { path: root.display().to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let entries = fs::read_dir(&dir)
//!     .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the dirkit application.
#[derive(Error, Debug)]
pub enum DirkitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Path '{path}' does not exist.")]
    PathNotFound { path: String },

    #[error("Path '{path}' is not a directory.")]
    NotADirectory { path: String },

    /// A structure descriptor entry that cannot be materialized safely.
    #[error("Invalid layout entry '{name}': {reason}")]
    Layout { name: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
