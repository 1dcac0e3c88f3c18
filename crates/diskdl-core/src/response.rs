//! HTTP response as handed to the resolver: status, headers, body.

use std::collections::BTreeMap;

/// Response headers keyed by lowercased name. Repeated headers keep the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(BTreeMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.0
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    /// Parses raw header lines as collected from the wire.
    ///
    /// A status line (`HTTP/...`) starts a new header block, so after redirects
    /// only the final response's headers remain. Lines without a colon are ignored.
    pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut headers = Headers::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("HTTP/") {
                headers = Headers::new();
                continue;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name, value);
            }
        }
        headers
    }
}

/// Status code from the last `HTTP/x yyy` status line, if any.
pub fn status_from_lines<S: AsRef<str>>(lines: &[S]) -> Option<u32> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|l| l.starts_with("HTTP/"))
        .filter_map(|l| l.split_whitespace().nth(1)?.parse::<u32>().ok())
        .last()
}

/// A response received for a download request. Consumed once by
/// [`resolve`](crate::resolver::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResponse {
    pub status_code: u32,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl DownloadResponse {
    pub fn new(status_code: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// Builder-style header insertion, mostly for tests and recorded responses.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.header("content-disposition")
    }
}
