//! Format directives.
//!
//! A format string is copied to the output with each `%<char>` directive
//! replaced by a part of the URL, e.g. `%s://%d%p` gives `https://example.com/path`.
//! The string is read once, left to right, and formatting never fails:
//! unknown directives are written back literally and missing URL parts
//! produce nothing.
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%%` | A literal `%` |
//! | `%s` | The scheme (e.g. `https`) |
//! | `%u` | The user info (e.g. `user:pass`) |
//! | `%d` | The domain (e.g. `sub.example.com`) |
//! | `%S` | The subdomain (e.g. `sub`) |
//! | `%r` | The root of the domain (e.g. `example`) |
//! | `%t` | The TLD (e.g. `com`) |
//! | `%P` | The port (e.g. `8080`) |
//! | `%p` | The path (e.g. `/users`) |
//! | `%e` | The path's file extension (e.g. `jpg`) |
//! | `%q` | The raw query string (e.g. `a=1&b=2`) |
//! | `%f` | The fragment (e.g. `page-section`) |
//! | `%@` | An `@` if user info is present |
//! | `%:` | A `:` if a port is present |
//! | `%?` | A `?` if the query string is non-empty |
//! | `%#` | A `#` if the fragment is non-empty |
//! | `%a` | The authority, same as `%u%@%d%:%P` |

use crate::domain::{DomainDecomposer, DomainParts};
use crate::parse::ParsedUrl;

/// Format string used by the `domains` mode.
pub const DOMAIN_FORMAT: &str = "%d";
/// Format string used by the `paths` mode.
pub const PATH_FORMAT: &str = "%p";
/// Format string used by the `apexes` mode.
pub const APEX_FORMAT: &str = "%r.%t";
/// What `%a` expands to.
pub const AUTHORITY_FORMAT: &str = "%u%@%d%:%P";

const DIRECTIVE_MARKER: char = '%';

/// Applies format strings to parsed URLs.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'d> {
    decomposer: &'d DomainDecomposer,
}

impl<'d> Formatter<'d> {
    /// Creates a formatter that uses `decomposer` for `%S`, `%r` and `%t`.
    pub fn new(decomposer: &'d DomainDecomposer) -> Self {
        Self { decomposer }
    }

    /// Formats `url` according to `directives`.
    ///
    /// A `%` at the very end of the format string is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use unfurl::domain::DomainDecomposer;
    /// use unfurl::format::Formatter;
    /// use unfurl::parse::ParsedUrl;
    ///
    /// let decomposer = DomainDecomposer::new().unwrap();
    /// let url = ParsedUrl::parse("https://sub.example.com:8080/index.html?a=1").unwrap();
    /// let formatter = Formatter::new(&decomposer);
    ///
    /// assert_eq!(formatter.format(&url, "%s://%d%p"), "https://sub.example.com/index.html");
    /// assert_eq!(formatter.format(&url, "%r.%t %e %z 100%%"), "example.com html %z 100%");
    /// ```
    pub fn format(&self, url: &ParsedUrl, directives: &str) -> String {
        let mut out = String::with_capacity(directives.len() * 2);
        // Decomposed on first use; most format strings never need it.
        let mut domain: Option<DomainParts<'_>> = None;
        let mut in_directive = false;

        for c in directives.chars() {
            if !in_directive {
                if c == DIRECTIVE_MARKER {
                    in_directive = true;
                } else {
                    out.push(c);
                }
                continue;
            }
            in_directive = false;

            match c {
                // a literal percent
                '%' => out.push('%'),

                // the scheme; e.g. http
                's' => out.push_str(url.scheme()),

                // the userinfo; e.g. user:pass
                'u' => {
                    if let Some(userinfo) = url.userinfo() {
                        out.push_str(&userinfo);
                    }
                }

                // the domain; e.g. sub.example.com
                'd' => {
                    if let Some(host) = url.hostname() {
                        out.push_str(&host);
                    }
                }

                // the port; e.g. 8080
                'P' => {
                    if let Some(port) = url.port() {
                        out.push_str(&port.to_string());
                    }
                }

                // the subdomain, root and tld; e.g. www, example, com
                'S' | 'r' | 't' => {
                    let parts = domain.get_or_insert_with(|| self.domain_parts(url));
                    out.push_str(match c {
                        'S' => parts.subdomain,
                        'r' => parts.root,
                        _ => parts.tld,
                    });
                }

                // the path; e.g. /users
                'p' => out.push_str(url.escaped_path()),

                // the path's file extension; e.g. jpg
                'e' => out.push_str(path_extension(url.escaped_path())),

                // the query string; e.g. one=1&two=2
                'q' => out.push_str(url.raw_query()),

                // the fragment; e.g. section-1
                'f' => out.push_str(&url.fragment()),

                '@' => {
                    if url.userinfo().is_some() {
                        out.push('@');
                    }
                }
                ':' => {
                    if url.port().is_some() {
                        out.push(':');
                    }
                }
                '?' => {
                    if !url.raw_query().is_empty() {
                        out.push('?');
                    }
                }
                '#' => {
                    if !url.fragment().is_empty() {
                        out.push('#');
                    }
                }

                // the authority; e.g. user:pass@example.com:8080
                'a' => out.push_str(&self.format(url, AUTHORITY_FORMAT)),

                // unknown directives are written back untouched
                other => {
                    out.push(DIRECTIVE_MARKER);
                    out.push(other);
                }
            }
        }

        out
    }

    /// Decomposes the URL's host; URLs without a host give empty parts.
    pub fn domain_parts<'u>(&self, url: &'u ParsedUrl) -> DomainParts<'u> {
        match url.host_str() {
            Some(host) => self.decomposer.decompose(host),
            None => DomainParts::default(),
        }
    }
}

/// Returns the file extension of a percent-escaped path.
///
/// Only the last `/`-separated component is considered, so a dot in a
/// directory name does not count: `/foo.html/test` has no extension.
pub fn path_extension(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default()
}
