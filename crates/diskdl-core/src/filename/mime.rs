//! MIME type to file extension mapping.

/// Extension used when the content type is missing or not in [`MIME_EXTENSIONS`].
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Known content types and the extension appended to extensionless names.
pub const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("text/plain", ".txt"),
    ("text/html", ".html"),
    ("application/pdf", ".pdf"),
    ("application/msword", ".doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
    ("application/vnd.ms-excel", ".xls"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xlsx",
    ),
    ("application/vnd.ms-powerpoint", ".ppt"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".pptx",
    ),
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("application/zip", ".zip"),
    ("application/x-rar-compressed", ".rar"),
    ("application/json", ".json"),
];

/// Returns the extension (with leading dot) for a Content-Type header value.
///
/// Parameters such as `; charset=utf-8` and letter case are ignored.
pub fn extension_for_content_type(content_type: Option<&str>) -> &'static str {
    let Some(essence) = content_type.map(mime_essence) else {
        return FALLBACK_EXTENSION;
    };
    MIME_EXTENSIONS
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(essence))
        .map(|(_, ext)| *ext)
        .unwrap_or(FALLBACK_EXTENSION)
}

/// `type/subtype` part of a Content-Type value, without parameters.
fn mime_essence(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types() {
        assert_eq!(extension_for_content_type(Some("text/plain")), ".txt");
        assert_eq!(extension_for_content_type(Some("application/pdf")), ".pdf");
        assert_eq!(extension_for_content_type(Some("image/jpeg")), ".jpg");
        assert_eq!(
            extension_for_content_type(Some(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            )),
            ".pptx"
        );
        assert_eq!(
            extension_for_content_type(Some("application/x-rar-compressed")),
            ".rar"
        );
    }

    #[test]
    fn parameters_and_case_ignored() {
        assert_eq!(
            extension_for_content_type(Some("text/plain; charset=utf-8")),
            ".txt"
        );
        assert_eq!(extension_for_content_type(Some("Application/JSON")), ".json");
    }

    #[test]
    fn unknown_or_missing_is_bin() {
        assert_eq!(extension_for_content_type(None), ".bin");
        assert_eq!(extension_for_content_type(Some("")), ".bin");
        assert_eq!(
            extension_for_content_type(Some("application/octet-stream")),
            ".bin"
        );
    }

    #[test]
    fn table_entries_are_well_formed() {
        for (mime, ext) in MIME_EXTENSIONS {
            assert!(mime.contains('/'), "{mime}");
            assert!(ext.starts_with('.') && ext.len() > 1, "{ext}");
        }
    }
}
