//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Validation of the exclusion list before any stream processing

mod args;

pub use args::Args;
