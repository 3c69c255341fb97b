//! Error handling.
//!
//! This module provides the error types for the three failure classes of a run:
//! - **Initialization**: logger setup and resource construction
//! - **Configuration**: unknown modes and unreadable input files, reported up front
//! - **Run**: input read failures and output write failures
//!
//! Lines that fail to parse as URLs are not errors; they are skipped and counted.

mod types;

// Re-export public API
pub use types::{ConfigError, InitializationError, UnfurlError};
