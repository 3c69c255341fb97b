//! Query-string decoding.

use serde::Serialize;
use url::form_urlencoded;

/// One decoded `key=value` occurrence from a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    /// Decoded key.
    pub key: String,
    /// Decoded value (empty for `?flag`).
    pub value: String,
}

/// Query-string values grouped by key.
///
/// Keys are kept in order of first appearance; each key's values keep the
/// order they appeared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Decodes a raw query string (without the leading `?`).
    pub fn from_query(raw: &str) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            // Queries are short; a linear scan keeps first-seen order without a map.
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value.into_owned()),
                None => entries.push((key.into_owned(), vec![value.into_owned()])),
            }
        }
        Self { entries }
    }

    /// Distinct keys, in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Every value, grouped by key.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, values)| values.iter().map(String::as_str))
    }

    /// Every `(key, value)` pair, grouped by key.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Every pair as an owned [`KeyValue`].
    pub fn to_key_values(&self) -> Vec<KeyValue> {
        self.pairs()
            .map(|(key, value)| KeyValue {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect()
    }
}
