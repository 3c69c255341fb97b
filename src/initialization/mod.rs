//! Application initialization.
//!
//! Sets up the logger before a run; the domain decomposer is built by the run
//! itself.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
