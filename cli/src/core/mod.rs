//! # dirkit Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: In-code defaults and option validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config::TreeOptions;
//! use crate::core::error::{DirkitError, Result};
//! ```
//!
pub mod config;
pub mod error;
