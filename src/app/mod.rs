//! Main application modules.
//!
//! This module provides input opening and run-summary logging used by the
//! driver loop.

pub mod input;
pub mod logging;

// Re-export public API
pub use input::open_input;
pub use logging::log_summary;
