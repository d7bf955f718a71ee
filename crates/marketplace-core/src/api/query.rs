//! Query string assembly.

use std::fmt::Display;
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Ordered query parameters. Values are form-encoded; keys are static.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    parts: Vec<String>,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn param(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        let encoded: String = byte_serialize(value.as_bytes()).collect();
        self.parts.push(format!("{}={}", key, encoded));
        self
    }

    pub(crate) fn optional<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Append `key=value` with the value left exactly as given.
    pub(crate) fn raw(mut self, key: &str, value: &str) -> Self {
        self.parts.push(format!("{}={}", key, value));
        self
    }

    pub(crate) fn apply(&self, url: &mut Url) {
        if self.parts.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.parts.join("&")));
        }
    }
}
