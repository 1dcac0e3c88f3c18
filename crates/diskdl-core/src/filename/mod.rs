//! Display filename derivation for downloaded files.
//!
//! The name comes from Content-Disposition when one of the known patterns
//! matches, otherwise [`DEFAULT_FILENAME`]. Names without any `.` get an
//! extension inferred from Content-Type.

mod content_disposition;
mod mime;
mod sanitize;

pub use content_disposition::{
    parse_content_disposition_filename, ContentDispositionPattern, PATTERNS,
};
pub use mime::{extension_for_content_type, FALLBACK_EXTENSION, MIME_EXTENSIONS};
pub use sanitize::{sanitize_filename, truncate_keeping_extension, NAME_MAX};

/// Name used when Content-Disposition is missing or carries no usable filename.
pub const DEFAULT_FILENAME: &str = "download_file";

/// Derives the display filename for a successful download.
///
/// The result always contains at least one `.`.
///
/// # Examples
///
/// - `derive_filename(Some("attachment; filename=notes"), Some("text/plain"))` → `"notes.txt"`
/// - `derive_filename(None, None)` → `"download_file.bin"`
pub fn derive_filename(content_disposition: Option<&str>, content_type: Option<&str>) -> String {
    let mut name = content_disposition
        .and_then(parse_content_disposition_filename)
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    if !name.contains('.') {
        name.push_str(extension_for_content_type(content_type));
    }
    name
}
