//! The per-URL JSON record written by the `json` mode.

use serde::Serialize;

use crate::format::{path_extension, Formatter, APEX_FORMAT};
use crate::parse::{KeyValue, ParsedUrl};

/// Everything the format directives can extract from a URL, in one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// Scheme, e.g. `https`.
    pub scheme: String,
    /// Opaque data for URLs such as `mailto:` ones.
    pub opaque: String,
    /// Userinfo, `user` or `user:pass`.
    pub user: String,
    /// Host including `:port` when present.
    pub host: String,
    /// Percent-decoded path.
    pub path: String,
    /// Percent-escaped path, only when it differs from `path`.
    pub raw_path: String,
    /// Query string without `?`.
    pub raw_query: String,
    /// Fragment without `#`.
    pub fragment: String,
    /// Decoded query parameters.
    pub parameters: Vec<KeyValue>,
    /// The serialized URL.
    pub url: String,
    /// Hostname without port, e.g. `sub.example.com`.
    pub domain: String,
    /// Subdomain, e.g. `sub`.
    pub subdomain: String,
    /// Root of the domain, e.g. `example`.
    pub root: String,
    /// Public suffix, e.g. `com`.
    pub tld: String,
    /// `root.tld`, e.g. `example.com`.
    pub apex: String,
    /// Port, e.g. `8080`.
    pub port: String,
    /// File extension of the path, e.g. `jpg`.
    pub extension: String,
}

impl UrlRecord {
    /// Builds the record for one URL.
    pub fn new(url: &ParsedUrl, formatter: &Formatter<'_>) -> Self {
        let parts = formatter.domain_parts(url);
        let path = url.decoded_path().into_owned();
        let escaped_path = url.escaped_path();
        let raw_path = if escaped_path == path {
            String::new()
        } else {
            escaped_path.to_string()
        };

        Self {
            scheme: url.scheme().to_string(),
            opaque: url.opaque().to_string(),
            user: url.userinfo().map(|u| u.into_owned()).unwrap_or_default(),
            host: url.host_with_port(),
            path,
            raw_path,
            raw_query: url.raw_query().to_string(),
            fragment: url.fragment().into_owned(),
            parameters: url.query_params().to_key_values(),
            url: url.serialized().into_owned(),
            domain: url.hostname().map(|h| h.into_owned()).unwrap_or_default(),
            subdomain: parts.subdomain.to_string(),
            root: parts.root.to_string(),
            tld: parts.tld.to_string(),
            apex: formatter.format(url, APEX_FORMAT),
            port: url.port().map(|p| p.to_string()).unwrap_or_default(),
            extension: path_extension(escaped_path).to_string(),
        }
    }
}
