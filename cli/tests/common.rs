//! # dirkit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`scaffold.rs`, `tree.rs`,
//! `main_tests.rs`). Each of those files is compiled as its own test crate
//! and runs the compiled `dirkit` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Environment variables that would otherwise leak defaults into `dirkit tree`.
const TREE_ENV_VARS: &[&str] = &["DIRKIT_ROOT", "DIRKIT_MAX_DEPTH", "DIRKIT_IGNORE", "RUST_LOG"];

/// # Get dirkit Command (`dirkit_cmd`)
///
/// Creates an `assert_cmd::Command` for the `dirkit` binary built for this
/// test run, with dirkit's environment fallbacks cleared.
///
/// ## Panics
/// Panics if the `dirkit` binary cannot be found via `Command::cargo_bin`.
pub fn dirkit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dirkit").expect("Failed to find dirkit binary for testing");
    for var in TREE_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}
