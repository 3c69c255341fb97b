//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `unfurl` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Wiring stdin/stdout (or `--input`) to the library's run loop
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, BufWriter};
use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use unfurl::initialization::init_logger_with;
use unfurl::{open_input, run, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.effective_log_level().into(), config.log_format)
        .context("Failed to initialize logger")?;

    // Reject unknown modes before touching the input.
    if let Err(e) = config.mode() {
        eprintln!("{e}");
        eprintln!("{}", Config::command().render_help());
        process::exit(1);
    }

    let input = open_input(&config).context("Failed to open input")?;
    let output = BufWriter::new(io::stdout().lock());

    match run(&config, input, output) {
        Ok(_) => Ok(()),
        // the reader went away (e.g. `| head`); nothing left to do
        Err(e) if e.is_broken_pipe() => Ok(()),
        Err(e) => {
            eprintln!("unfurl error: {e}");
            process::exit(1);
        }
    }
}
