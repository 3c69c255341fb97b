//! Extraction modes.
//!
//! Each mode turns one URL into zero or more output values. The `domains`,
//! `paths` and `apexes` modes are fixed format strings; the query-string modes
//! produce one value per parameter.

use log::warn;
use strum_macros::{Display, EnumIter, EnumString};

use crate::format::{Formatter, APEX_FORMAT, DOMAIN_FORMAT, PATH_FORMAT};
use crate::parse::ParsedUrl;
use crate::record::UrlRecord;

/// What to extract from each URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Mode {
    /// Keys from the query string, each once per URL.
    #[strum(serialize = "keys")]
    Keys,
    /// Values from the query string.
    #[strum(serialize = "values")]
    Values,
    /// `key=value` pairs from the query string.
    #[strum(serialize = "keypairs")]
    KeyPairs,
    /// The hostname.
    #[strum(to_string = "domains", serialize = "domain")]
    Domains,
    /// The escaped path.
    #[strum(to_string = "paths", serialize = "path")]
    Paths,
    /// The registrable domain, `root.tld`.
    #[strum(to_string = "apexes", serialize = "apex")]
    Apexes,
    /// One JSON object describing the whole URL.
    #[strum(serialize = "json")]
    Json,
    /// A user-supplied format string.
    #[strum(serialize = "format")]
    Format,
}

impl Mode {
    /// The fixed format string behind this mode, if it has one.
    pub fn builtin_format(self) -> Option<&'static str> {
        match self {
            Mode::Domains => Some(DOMAIN_FORMAT),
            Mode::Paths => Some(PATH_FORMAT),
            Mode::Apexes => Some(APEX_FORMAT),
            _ => None,
        }
    }
}

/// Produces a mode's values for each URL.
///
/// Resolved once before any input is read.
#[derive(Debug, Clone)]
pub struct Extractor<'d> {
    mode: Mode,
    custom_format: String,
    formatter: Formatter<'d>,
}

impl<'d> Extractor<'d> {
    /// Creates an extractor; `custom_format` is only used by [`Mode::Format`].
    pub fn new(mode: Mode, custom_format: impl Into<String>, formatter: Formatter<'d>) -> Self {
        Self {
            mode,
            custom_format: custom_format.into(),
            formatter,
        }
    }

    /// Returns the values for one URL, in output order. Values may be empty
    /// strings; the caller decides whether to print them.
    pub fn extract(&self, url: &ParsedUrl) -> Vec<String> {
        match self.mode {
            Mode::Keys => url.query_params().keys().map(str::to_string).collect(),
            Mode::Values => url.query_params().values().map(str::to_string).collect(),
            Mode::KeyPairs => url
                .query_params()
                .pairs()
                .map(|(key, value)| format!("{key}={value}"))
                .collect(),
            Mode::Domains | Mode::Paths | Mode::Apexes => {
                let directives = self.mode.builtin_format().unwrap_or_default();
                vec![self.formatter.format(url, directives)]
            }
            Mode::Format => vec![self.formatter.format(url, &self.custom_format)],
            Mode::Json => {
                let record = UrlRecord::new(url, &self.formatter);
                match serde_json::to_string(&record) {
                    Ok(json) => vec![json],
                    Err(e) => {
                        warn!("Failed to encode {} as JSON: {e}", url.serialized());
                        Vec::new()
                    }
                }
            }
        }
    }
}
