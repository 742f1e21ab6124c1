use crate::constants::header;
use std::collections::HashMap;

/// Finished header map handed back to the transport layer.
pub type Headers = HashMap<String, String>;

/// Response-header sink the preflight engine writes into.
///
/// `Vary` is treated as a list-valued header: repeated additions are merged
/// into one comma-joined value with case-insensitive deduplication. Every
/// other header is single-valued and last-write-wins.
///
/// Headers written before a failing validation step are left in place; a
/// failed preflight does not roll the sink back.
#[derive(Debug, Default, Clone)]
pub struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value.into());
        }
    }

    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if !entries
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(incoming))
        {
            entries.push(incoming.to_string());
        }

        self.headers
            .insert(header::VARY.to_string(), entries.join(", "));
    }

    /// Case-insensitive lookup by header name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
