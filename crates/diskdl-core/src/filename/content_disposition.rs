//! Content-Disposition filename patterns (filename*, quoted, unquoted).

/// One way of pulling a filename out of a raw Content-Disposition value.
///
/// Patterns are tried in the order of [`PATTERNS`]; the first one that yields a
/// non-empty name wins, regardless of where in the header its parameter sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDispositionPattern {
    /// `filename*=UTF-8''caf%C3%A9.pdf` or bare `filename*=name` (percent-decoded).
    Extended,
    /// `filename="name"` or `filename='name'`.
    Quoted,
    /// `filename=name`, value runs to `;` or end of line.
    Unquoted,
}

/// Precedence order used by [`parse_content_disposition_filename`].
pub const PATTERNS: [ContentDispositionPattern; 3] = [
    ContentDispositionPattern::Extended,
    ContentDispositionPattern::Quoted,
    ContentDispositionPattern::Unquoted,
];

impl ContentDispositionPattern {
    /// Applies this pattern alone to `header_value`.
    pub fn extract(self, header_value: &str) -> Option<String> {
        let name = match self {
            ContentDispositionPattern::Extended => extract_extended(header_value),
            ContentDispositionPattern::Quoted => extract_quoted(header_value),
            ContentDispositionPattern::Unquoted => extract_unquoted(header_value),
        }?;
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Extracts the filename from a raw Content-Disposition header value by trying
/// every pattern in [`PATTERNS`] order.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.extract(header_value))
}

const QUOTES: &[char] = &['"', '\''];

fn extract_extended(header_value: &str) -> Option<String> {
    let rest = find_param_value(header_value, "filename*=")?;
    let rest = rest.strip_prefix(QUOTES).unwrap_or(rest);
    let rest = strip_utf8_prefix(rest);
    let raw = take_until(rest, &[';', '\r', '\n', '\'', '"']);
    if raw.is_empty() {
        return None;
    }
    Some(percent_decode(raw))
}

fn extract_quoted(header_value: &str) -> Option<String> {
    let rest = find_param_value(header_value, "filename=")?;
    let rest = rest.strip_prefix(QUOTES)?;
    let end = rest.find(QUOTES)?;
    Some(rest[..end].to_string())
}

fn extract_unquoted(header_value: &str) -> Option<String> {
    let rest = find_param_value(header_value, "filename=")?;
    Some(take_until(rest, &[';', '\r', '\n']).trim().to_string())
}

/// Returns the text right after the first ASCII case-insensitive occurrence of `key`.
fn find_param_value<'a>(header_value: &'a str, key: &str) -> Option<&'a str> {
    let haystack = header_value.as_bytes();
    let needle = key.as_bytes();
    let pos = haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))?;
    // `key` is ASCII, so pos + len is a char boundary.
    Some(&header_value[pos + needle.len()..])
}

/// Strips an RFC 5987 `UTF-8'<lang>'` prefix; the language tag is ignored.
fn strip_utf8_prefix(value: &str) -> &str {
    const CHARSET: &str = "utf-8'";
    match value.get(..CHARSET.len()) {
        Some(head) if head.eq_ignore_ascii_case(CHARSET) => {}
        _ => return value,
    }
    let after_charset = &value[CHARSET.len()..];
    match after_charset.find('\'') {
        Some(i) => &after_charset[i + 1..],
        None => value,
    }
}

fn take_until<'a>(value: &'a str, stops: &[char]) -> &'a str {
    match value.find(stops) {
        Some(i) => &value[..i],
        None => value,
    }
}

/// Percent-decode for filename* values. Malformed escapes are kept as-is and
/// invalid UTF-8 is replaced, so a bad header never fails the download.
pub(super) fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            if let (Some(high), Some(low)) = (high, low) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
