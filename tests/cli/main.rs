//! CLI integration tests for fancy-lists.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, markers)
//! - Stdin/stdout handling
//! - Config discovery and marker flags
//! - Error handling

mod common;
mod markers;
mod parse;
