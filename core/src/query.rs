//! Query-string parameters and full-URL construction.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as is in a query key or value: alphanumerics and `_.-~`.
/// Space is kept here and turned into `+` afterwards.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_COMPONENT)
        .to_string()
        .replace(' ', "+")
}

/// Ordered query parameters. Keys may repeat; order of insertion is the
/// order of the encoded query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Values are rendered with `Display`.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `key=value` pairs joined by `&`. Space becomes `+`, `~` is
    /// kept and every other non-alphanumeric byte except `_.-` is
    /// percent-encoded as UTF-8.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

/// Concatenate `base`, `param` and the encoded query.
///
/// The `?` is only added when `query` has at least one pair. Neither `base`
/// nor `param` is normalized: `"https://x/"` + `"pikachu"` gives
/// `"https://x/pikachu"`, and a base without a trailing slash is joined as is.
pub fn build_url(base: &str, param: Option<&str>, query: &QueryParams) -> String {
    let mut url = String::with_capacity(base.len() + 32);
    url.push_str(base);
    url.push_str(param.unwrap_or(""));
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.encode());
    }
    url
}
