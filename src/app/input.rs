//! Input selection.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::config::Config;
use crate::error_handling::ConfigError;

/// Opens the configured input: stdin for `-`, otherwise the named file.
///
/// # Errors
///
/// Returns `ConfigError::InputUnreadable` if the file cannot be opened.
pub fn open_input(config: &Config) -> Result<Box<dyn BufRead>, ConfigError> {
    if config.reads_stdin() {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(&config.input).map_err(|source| ConfigError::InputUnreadable {
        path: config.input.clone(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
