//! CLI integration tests for stricture.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (lint, classify, parse, rules)
//! - Exit codes
//! - Config discovery and error handling

mod classify;
mod common;
mod lint;
mod parse;
