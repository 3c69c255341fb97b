//! Command-line configuration.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::error_handling::ConfigError;
use crate::modes::Mode;

/// Input path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Text shown after the options in `--help`.
const HELP_FOOTER: &str = "\
Modes:
  keys      Keys from the query string (one per line)
  values    Values from the query string (one per line)
  keypairs  Key=value pairs from the query string (one per line)
  domains   The hostname (e.g. sub.example.com)
  paths     The request path (e.g. /users)
  apexes    The apex domain (e.g. example.com from sub.example.com)
  json      JSON encoded url/format objects
  format    Specify a custom format (see below)

Format Directives:
  %%  A literal percent character
  %s  The request scheme (e.g. https)
  %u  The user info (e.g. user:pass)
  %d  The domain (e.g. sub.example.com)
  %S  The subdomain (e.g. sub)
  %r  The root of domain (e.g. example)
  %t  The TLD (e.g. com)
  %P  The port (e.g. 8080)
  %p  The path (e.g. /users)
  %e  The path's file extension (e.g. jpg, html)
  %q  The raw query string (e.g. a=1&b=2)
  %f  The page fragment (e.g. page-section)
  %@  Inserts an @ if user info is specified
  %:  Inserts a colon if a port is specified
  %?  Inserts a question mark if a query string exists
  %#  Inserts a hash if a fragment exists
  %a  Authority (alias for %u%@%d%:%P)

Examples:
  cat urls.txt | unfurl keys
  cat urls.txt | unfurl format %s://%d%p?%q";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings, including parse failures under `--verbose`
    Warn,
    /// Adds the end-of-run summary
    Info,
    /// Adds every skipped line
    Debug,
    /// Everything, including dependencies' trace output
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored `target [LEVEL] message` lines
    Plain,
    /// One JSON object per line
    Json,
}

/// Command-line options and configuration.
///
/// Results go to stdout, one per line; logs go to stderr.
///
/// # Examples
///
/// ```bash
/// # Hostnames, each printed once
/// cat urls.txt | unfurl --unique domains
///
/// # Custom format
/// cat urls.txt | unfurl format '%s://%d%p?%q'
///
/// # Read from a file and report unparseable lines
/// unfurl -v --input urls.txt apexes
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "unfurl",
    about = "Format URLs provided on stdin",
    after_help = HELP_FOOTER
)]
pub struct Config {
    /// Extraction mode (see Modes below)
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Format string for the `format` mode
    #[arg(value_name = "FORMATSTRING", default_value = "", allow_hyphen_values = true)]
    pub format: String,

    /// Only output unique values
    #[arg(short, long)]
    pub unique: bool,

    /// Verbose mode (output URL parse errors)
    #[arg(short, long)]
    pub verbose: bool,

    /// File to read URLs from ("-" for stdin)
    #[arg(short, long, value_parser, default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Resolves the mode name, accepting aliases such as `domain` and `apex`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownMode` if the name matches no mode.
    pub fn mode(&self) -> Result<Mode, ConfigError> {
        Mode::from_str(&self.mode).map_err(|_| ConfigError::UnknownMode(self.mode.clone()))
    }

    /// True when input comes from stdin rather than a file.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }

    /// The log level to run with; `--verbose` raises it to at least `warn` so
    /// parse failures are shown.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            self.log_level.max(LogLevel::Warn)
        } else {
            self.log_level
        }
    }
}
