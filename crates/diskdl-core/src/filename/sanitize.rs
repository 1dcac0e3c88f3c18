//! Make a server-supplied display name safe to create in the download directory.

/// Linux NAME_MAX, in bytes.
pub const NAME_MAX: usize = 255;

/// Sanitizes a display filename for use as a single path component.
///
/// - Replaces NUL, `/`, `\` and control characters with `_` (runs collapse to one)
/// - Keeps spaces and non-ASCII letters as sent by the server
/// - Trims leading/trailing spaces and dots, so `..` and hidden names cannot escape
/// - Limits length to 255 bytes, keeping the extension when possible
///
/// May return an empty string; the caller picks a fallback.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_replaced = false;

    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !prev_replaced {
                out.push('_');
            }
            prev_replaced = true;
        } else {
            out.push(c);
            prev_replaced = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');
    truncate_keeping_extension(trimmed, NAME_MAX)
}

/// Cuts `name` to at most `max` bytes on a char boundary, keeping a short extension.
pub fn truncate_keeping_extension(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }
    let ext = match name.rfind('.') {
        Some(i) if name.len() - i < 16 => &name[i..],
        _ => "",
    };
    let ext = if ext.len() < max { ext } else { "" };
    let mut take = max - ext.len();
    while take > 0 && !name.is_char_boundary(take) {
        take -= 1;
    }
    format!("{}{}", &name[..take], ext)
}
