//! Error type definitions.
//!
//! This module defines the error types raised while setting up and driving a run.
//! Formatting itself has no error paths: missing URL fields degrade to empty output.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::RunReport;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error compiling the pattern used to strip ports from hosts.
    #[error("Port pattern compilation error: {0}")]
    PortPatternError(#[from] regex::Error),
}

/// Error types for invalid configuration, reported before any input is read.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested extraction mode does not exist.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// The input file could not be opened.
    #[error("failed to open input {}: {source}", path.display())]
    InputUnreadable {
        /// Path given with `--input`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that end a run.
///
/// Parse failures on individual lines are not errors; those lines are skipped
/// and counted in the [`RunReport`].
#[derive(Error, Debug)]
pub enum UnfurlError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shared resources could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// Reading the input stream failed part way through.
    ///
    /// Values emitted before the failure have already been written and flushed.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
        /// Counters for the lines processed before the failure.
        report: RunReport,
    },

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl UnfurlError {
    /// Returns true when the output was closed by the reader (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, UnfurlError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
