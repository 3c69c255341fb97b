//! URL parsing for input lines.
//!
//! [`ParsedUrl`] wraps a [`url::Url`] and exposes the components the format
//! directives read. Optional components (userinfo, port, query, fragment) are
//! reported as absent or empty rather than as errors.

mod query;

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::{Host, ParseError, Url};

pub use query::{KeyValue, QueryParams};

/// Prefix tried when an input line has no scheme (e.g. `example.com/foo`).
pub const FALLBACK_SCHEME_PREFIX: &str = "http://";

/// Base that host-less lines such as `/path` or `?a=1` are resolved against.
/// Its host never shows through the accessors.
const HOSTLESS_BASE: &str = "http://hostless.invalid";

/// What a scheme-less line without a host started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hostless {
    /// The line has a host (or a scheme).
    No,
    /// `/just/path`, optionally followed by a query or fragment.
    Path,
    /// `?a=1` or `#frag`, with no path at all.
    NoPath,
}

/// A URL read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    inner: Url,
    hostless: Hostless,
    /// A port written in the input that the parser dropped for being the
    /// scheme's default, e.g. the `443` of `https://example.com:443/`.
    default_port: Option<u16>,
}

impl ParsedUrl {
    /// Parses a raw line as a URL.
    ///
    /// If the line has no scheme, it is parsed again with `http://` prepended
    /// before giving up. Lines that start with a path (`/a/b`), a query (`?a=1`)
    /// or a fragment have no host at all.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if neither attempt yields a URL.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (inner, hostless, written) = match Url::parse(raw) {
            Ok(url) => (url, Hostless::No, Cow::Borrowed(raw)),
            Err(ParseError::RelativeUrlWithoutBase) => match hostless_kind(raw) {
                Hostless::No => {
                    let prefixed = format!("{FALLBACK_SCHEME_PREFIX}{raw}");
                    (Url::parse(&prefixed)?, Hostless::No, Cow::Owned(prefixed))
                }
                kind => (Url::parse(HOSTLESS_BASE)?.join(raw)?, kind, Cow::Borrowed(raw)),
            },
            Err(e) => return Err(e),
        };

        let default_port = match inner.port() {
            Some(_) => None,
            None => written_port(&written).filter(|&p| inner.port_or_known_default() == Some(p)),
        };
        Ok(Self {
            inner,
            hostless,
            default_port,
        })
    }

    /// The serialized URL. Host-less lines serialize with an empty host, e.g.
    /// `http:///just/path`.
    pub fn serialized(&self) -> Cow<'_, str> {
        let full = self.inner.as_str();
        let rest = match self.hostless {
            Hostless::No => return Cow::Borrowed(full),
            Hostless::Path => &full[HOSTLESS_BASE.len()..],
            Hostless::NoPath => full[HOSTLESS_BASE.len()..].trim_start_matches('/'),
        };
        Cow::Owned(format!("{FALLBACK_SCHEME_PREFIX}{rest}"))
    }

    /// The scheme, e.g. `https`.
    pub fn scheme(&self) -> &str {
        self.inner.scheme()
    }

    /// Opaque data of URLs without a hierarchical path, e.g. `user@example.com`
    /// for `mailto:user@example.com`. Empty for ordinary URLs.
    pub fn opaque(&self) -> &str {
        if self.inner.cannot_be_a_base() {
            self.inner.path()
        } else {
            ""
        }
    }

    /// The userinfo as `user` or `user:pass`, if any was given.
    pub fn userinfo(&self) -> Option<Cow<'_, str>> {
        let user = self.inner.username();
        match self.inner.password() {
            Some(pass) => Some(Cow::Owned(format!("{user}:{pass}"))),
            None if user.is_empty() => None,
            None => Some(Cow::Borrowed(user)),
        }
    }

    /// The host exactly as serialized in the URL (IPv6 literals keep their brackets).
    pub fn host_str(&self) -> Option<&str> {
        match self.hostless {
            Hostless::No => self.inner.host_str(),
            Hostless::Path | Hostless::NoPath => None,
        }
    }

    /// The hostname without port; IPv6 literals lose their brackets.
    pub fn hostname(&self) -> Option<Cow<'_, str>> {
        let host = self.host_str()?;
        match self.inner.host()? {
            Host::Ipv6(addr) => Some(Cow::Owned(addr.to_string())),
            Host::Ipv4(_) | Host::Domain(_) => Some(Cow::Borrowed(host)),
        }
    }

    /// The host followed by `:port` when a port is present.
    pub fn host_with_port(&self) -> String {
        let host = self.host_str().unwrap_or_default();
        match self.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// The port written in the input, including one equal to the scheme's default.
    pub fn port(&self) -> Option<u16> {
        self.inner.port().or(self.default_port)
    }

    /// The percent-escaped path, e.g. `/a%20b`. Empty for opaque URLs and for
    /// lines that start with a query or fragment.
    pub fn escaped_path(&self) -> &str {
        if self.inner.cannot_be_a_base() || self.hostless == Hostless::NoPath {
            ""
        } else {
            self.inner.path()
        }
    }

    /// The percent-decoded path, e.g. `/a b`.
    pub fn decoded_path(&self) -> Cow<'_, str> {
        percent_decode_str(self.escaped_path()).decode_utf8_lossy()
    }

    /// The raw query string without the leading `?`; empty when absent.
    pub fn raw_query(&self) -> &str {
        self.inner.query().unwrap_or_default()
    }

    /// The decoded fragment without the leading `#`; empty when absent.
    pub fn fragment(&self) -> Cow<'_, str> {
        match self.inner.fragment() {
            Some(f) => percent_decode_str(f).decode_utf8_lossy(),
            None => Cow::Borrowed(""),
        }
    }

    /// The decoded query string, grouped by key.
    pub fn query_params(&self) -> QueryParams {
        QueryParams::from_query(self.raw_query())
    }
}

/// Classifies a line the parser rejected for having no scheme. Network-path
/// lines (`//host/path`) still get the `http://` prefix.
fn hostless_kind(raw: &str) -> Hostless {
    let line = raw.trim_start_matches(|c: char| c <= ' ');
    if line.starts_with("//") {
        Hostless::No
    } else if line.starts_with('/') {
        Hostless::Path
    } else if line.starts_with(['?', '#']) {
        Hostless::NoPath
    } else {
        Hostless::No
    }
}

/// The port as written in the authority of `raw`, e.g. `443` in
/// `https://user@example.com:443/x`.
fn written_port(raw: &str) -> Option<u16> {
    let (_, rest) = raw.split_once("://")?;
    let authority = rest.split(['/', '\\', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let (_, port) = host_port.rsplit_once(':')?;
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}
