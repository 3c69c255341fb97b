//! Domain decomposition.
//!
//! This module splits a host into subdomain, registrable root and public suffix
//! using the Public Suffix List (PSL), so multi-label suffixes such as `co.uk`
//! are handled correctly.
//!
//! The PSL is compiled into the binary by the `psl` crate; lookups are pure
//! in-memory matches with no I/O.

use std::net::IpAddr;

use psl::{List, Psl};
use regex::Regex;

use crate::error_handling::InitializationError;

/// Matches a trailing `:<port>` on a host.
const PORT_PATTERN: &str = r":\d+$";

/// The parts of a host, as slices of that host.
///
/// Joining the non-empty parts with `.` gives back the host whenever its
/// suffix is known. Hosts with no known suffix have all three parts empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainParts<'a> {
    /// Everything left of the root, e.g. `a.b` in `a.b.example.co.uk`.
    pub subdomain: &'a str,
    /// The registrable label left of the suffix, e.g. `example`.
    pub root: &'a str,
    /// The public suffix, e.g. `co.uk`.
    pub tld: &'a str,
}

/// Splits hosts into [`DomainParts`].
///
/// Built once at startup and shared by reference with every formatter.
#[derive(Debug, Clone)]
pub struct DomainDecomposer {
    port_pattern: Regex,
}

impl DomainDecomposer {
    /// Creates a decomposer backed by the compiled-in Public Suffix List.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::PortPatternError` if the port pattern fails to compile.
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self {
            port_pattern: Regex::new(PORT_PATTERN)?,
        })
    }

    /// Splits a host into subdomain, root and suffix.
    ///
    /// A trailing `:<port>` is ignored. IP literals and hosts whose suffix is not
    /// on the list give empty parts; a host that is itself a public suffix gives
    /// only a `tld`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unfurl::domain::DomainDecomposer;
    ///
    /// let decomposer = DomainDecomposer::new().unwrap();
    /// let parts = decomposer.decompose("sub.example.co.uk:8080");
    /// assert_eq!(parts.subdomain, "sub");
    /// assert_eq!(parts.root, "example");
    /// assert_eq!(parts.tld, "co.uk");
    /// ```
    pub fn decompose<'a>(&self, host: &'a str) -> DomainParts<'a> {
        if is_ip_literal(host) {
            return DomainParts::default();
        }
        let host = match self.port_pattern.find(host) {
            Some(port) => &host[..port.start()],
            None => host,
        };
        if host.is_empty() || is_ip_literal(host) {
            return DomainParts::default();
        }

        // The list is lowercase; ASCII lowercasing keeps byte offsets, so the
        // match lengths can be used to slice the original host.
        let lowered = host.to_ascii_lowercase();
        let suffix_len = match List.suffix(lowered.as_bytes()) {
            Some(suffix) if suffix.is_known() => suffix.as_bytes().len(),
            _ => return DomainParts::default(),
        };
        let tld = &host[host.len() - suffix_len..];

        let Some(domain) = List.domain(lowered.as_bytes()) else {
            return DomainParts {
                tld,
                ..Default::default()
            };
        };
        let domain_len = domain.as_bytes().len();
        let root_start = host.len() - domain_len;
        let root = host
            .get(root_start..host.len().saturating_sub(suffix_len + 1))
            .unwrap_or_default();
        let subdomain = host[..root_start].strip_suffix('.').unwrap_or_default();

        DomainParts {
            subdomain,
            root,
            tld,
        }
    }
}

fn is_ip_literal(host: &str) -> bool {
    let unbracketed = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    unbracketed.parse::<IpAddr>().is_ok()
}
