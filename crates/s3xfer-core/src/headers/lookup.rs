//! Case-insensitive response header lookup.

use std::collections::HashMap;

/// Read access to a set of response headers by name.
///
/// Names compare ASCII case-insensitively. When a name occurs more than once
/// the first occurrence is returned.
pub trait HeaderLookup {
    fn find_header(&self, name: &str) -> Option<&str>;
}

/// Response headers as `(name, value)` pairs, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    entries: Vec<(String, String)>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from raw header lines as a transfer callback delivers them
    /// (`"Name: value"`, possibly with trailing CRLF).
    ///
    /// Lines without a colon are skipped. A status line (`HTTP/...`) starts a new
    /// response, dropping headers of any earlier one (redirects, `100 Continue`),
    /// so the list always describes the final response.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = HeaderList::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("HTTP/") {
                list.entries.clear();
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                let name = name.trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    continue;
                }
                list.push(name, value.trim());
            }
        }
        list
    }

    /// Parses a header block such as the output of `curl -D`.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderLookup for HeaderList {
    fn find_header(&self, name: &str) -> Option<&str> {
        self.entries.as_slice().find_header(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderLookup for [(K, V)] {
    fn find_header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderLookup for Vec<(K, V)> {
    fn find_header(&self, name: &str) -> Option<&str> {
        self.as_slice().find_header(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> HeaderLookup for [(K, V); N] {
    fn find_header(&self, name: &str) -> Option<&str> {
        self.as_slice().find_header(name)
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn find_header(&self, name: &str) -> Option<&str> {
        if let Some(v) = self.get(name) {
            return Some(v.as_str());
        }
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
