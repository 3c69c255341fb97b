//! unfurl library: pull out bits of URLs
//!
//! This library reads URLs line by line and prints derived values: domains,
//! paths, apex domains, query keys and values, JSON records, or any custom
//! format built from `%` directives (see [`format`]).
//!
//! # Example
//!
//! ```
//! use clap::Parser;
//! use unfurl::{run, Config};
//!
//! let config = Config::parse_from(["unfurl", "--unique", "apexes"]);
//! let input = "https://a.example.com/x\nhttps://b.example.com/y\nexample.co.uk\n";
//! let mut output = Vec::new();
//!
//! let report = run(&config, input.as_bytes(), &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "example.com\nexample.co.uk\n");
//! assert_eq!(report.duplicates_suppressed, 1);
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod domain;
mod error_handling;
pub mod format;
pub mod initialization;
pub mod modes;
pub mod parse;
pub mod record;

// Re-export public API
pub use app::open_input;
pub use config::{Config, LogFormat, LogLevel};
pub use domain::{DomainDecomposer, DomainParts};
pub use error_handling::{ConfigError, InitializationError, UnfurlError};
pub use format::Formatter;
pub use modes::{Extractor, Mode};
pub use parse::ParsedUrl;
pub use run::{run, RunReport};

// Internal run module (contains the line loop)
mod run {
    use std::collections::HashSet;
    use std::io::{BufRead, Write};
    use std::time::Instant;

    use log::{debug, warn};

    use crate::app::log_summary;
    use crate::config::Config;
    use crate::error_handling::UnfurlError;
    use crate::domain::DomainDecomposer;
    use crate::format::Formatter;
    use crate::modes::{Extractor, Mode};
    use crate::parse::ParsedUrl;

    /// Counters for one run.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct RunReport {
        /// Lines read from the input, including blank and unparseable ones
        pub lines_read: usize,
        /// Lines skipped because they did not parse as URLs
        pub parse_failures: usize,
        /// Values written to the output
        pub values_emitted: usize,
        /// Values skipped by `--unique` because they were already written
        pub duplicates_suppressed: usize,
    }

    /// Runs unfurl over `input`, writing one value per line to `output`.
    ///
    /// The mode is resolved before any input is read. Each line is parsed,
    /// formatted and written before the next is read, so output order follows
    /// input order. Lines that are not URLs are skipped (and logged with
    /// `--verbose`); empty values are never written.
    ///
    /// # Arguments
    ///
    /// * `config` - Mode, format string and flags
    /// * `input` - Source of URLs, one per line
    /// * `output` - Destination for values; flushed before returning
    ///
    /// # Errors
    ///
    /// * `UnfurlError::Config` if the mode is unknown
    /// * `UnfurlError::Read` if reading the input fails; values written so far are kept
    /// * `UnfurlError::Write` if writing the output fails
    pub fn run<R: BufRead, W: Write>(
        config: &Config,
        input: R,
        mut output: W,
    ) -> Result<RunReport, UnfurlError> {
        let mode = config.mode()?;
        let decomposer = DomainDecomposer::new()?;
        let extractor = Extractor::new(mode, config.format.as_str(), Formatter::new(&decomposer));
        if config.format.is_empty() && mode == Mode::Format {
            warn!("format mode without a format string; nothing will be printed");
        }

        let start_time = Instant::now();
        let mut report = RunReport::default();
        let mut seen: HashSet<String> = HashSet::new();

        for line in input.split(b'\n') {
            let bytes = match line {
                Ok(bytes) => bytes,
                Err(source) => {
                    output.flush().map_err(UnfurlError::Write)?;
                    log_summary(&report, start_time.elapsed());
                    return Err(UnfurlError::Read { source, report });
                }
            };
            report.lines_read += 1;

            let line = String::from_utf8_lossy(&bytes);
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.trim().is_empty() {
                continue;
            }

            let url = match ParsedUrl::parse(line) {
                Ok(url) => url,
                Err(e) => {
                    report.parse_failures += 1;
                    if config.verbose {
                        warn!("parse failure: {line}: {e}");
                    } else {
                        debug!("parse failure: {line}: {e}");
                    }
                    continue;
                }
            };

            for value in extractor.extract(&url) {
                if value.is_empty() {
                    continue;
                }
                if config.unique && seen.contains(&value) {
                    report.duplicates_suppressed += 1;
                    continue;
                }

                writeln!(output, "{value}").map_err(UnfurlError::Write)?;
                report.values_emitted += 1;

                // only remember values when duplicates are being dropped
                if config.unique {
                    seen.insert(value);
                }
            }
        }

        output.flush().map_err(UnfurlError::Write)?;
        log_summary(&report, start_time.elapsed());
        Ok(report)
    }

}
