//! Turns a download response into a [`ResolvedDownload`].
//!
//! Resolution is a pure function of the response: a 200 yields the display
//! filename and the bytes to save; anything else yields a failure message taken
//! from the JSON error body when there is one. Nothing here returns `Err`.

use crate::filename;
use crate::response::DownloadResponse;

pub const SUCCESS_MESSAGE: &str = "download succeeded";
pub const NETWORK_ERROR_MESSAGE: &str = "network error, please check connection";

/// Why a download did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-200 status with a JSON `message`; the message is passed through verbatim.
    Server { status: u32 },
    /// Non-200 status whose body is not JSON or has no usable `message`.
    ServerUnparsable { status: u32 },
    /// No response was received (refused, timed out, reset, DNS).
    Network,
}

/// Outcome of resolving one download response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDownload {
    pub success: bool,
    /// Display filename; empty on failure.
    pub file_name: String,
    pub message: String,
    /// Body to persist; present only on success.
    pub bytes: Option<Vec<u8>>,
    /// Set on failure.
    pub failure: Option<FailureKind>,
}

impl ResolvedDownload {
    fn succeeded(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            success: true,
            file_name,
            message: SUCCESS_MESSAGE.to_string(),
            bytes: Some(bytes),
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            file_name: String::new(),
            message: message.into(),
            bytes: None,
            failure: Some(kind),
        }
    }

    /// Result for a request that never got a response.
    pub fn network_error() -> Self {
        Self::failed(FailureKind::Network, NETWORK_ERROR_MESSAGE)
    }
}

/// Resolves a received response.
pub fn resolve(response: DownloadResponse) -> ResolvedDownload {
    if response.status_code != 200 {
        return resolve_error(&response);
    }

    let file_name = filename::derive_filename(
        response.content_disposition(),
        response.content_type(),
    );
    tracing::debug!(
        file_name = %file_name,
        bytes = response.body.len(),
        "resolved download"
    );
    ResolvedDownload::succeeded(file_name, response.body)
}

fn resolve_error(response: &DownloadResponse) -> ResolvedDownload {
    let status = response.status_code;
    match error_message(&response.body) {
        Some(message) => {
            tracing::debug!(status, message = %message, "server rejected download");
            ResolvedDownload::failed(FailureKind::Server { status }, message)
        }
        None => {
            tracing::debug!(status, "server error without a readable message");
            ResolvedDownload::failed(
                FailureKind::ServerUnparsable { status },
                format!("download failed: {}", status),
            )
        }
    }
}

/// `message` field of a JSON error body, if the body is UTF-8 JSON and the
/// field is a non-empty string.
fn error_message(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?;
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_response(cd: Option<&str>, ct: Option<&str>) -> DownloadResponse {
        let mut r = DownloadResponse::new(200, b"payload".to_vec());
        if let Some(cd) = cd {
            r = r.with_header("Content-Disposition", cd);
        }
        if let Some(ct) = ct {
            r = r.with_header("Content-Type", ct);
        }
        r
    }

    #[test]
    fn extended_filename_is_decoded() {
        let r = resolve(ok_response(
            Some("attachment; filename*=UTF-8''caf%C3%A9.pdf"),
            Some("application/pdf"),
        ));
        assert!(r.success);
        assert_eq!(r.file_name, "café.pdf");
        assert_eq!(r.message, "download succeeded");
        assert_eq!(r.bytes.as_deref(), Some(&b"payload"[..]));
        assert_eq!(r.failure, None);
    }

    #[test]
    fn quoted_filename() {
        let r = resolve(ok_response(
            Some("attachment; filename=\"report.docx\""),
            None,
        ));
        assert_eq!(r.file_name, "report.docx");
    }

    #[test]
    fn unquoted_filename_gets_extension_from_content_type() {
        let r = resolve(ok_response(Some("attachment; filename=notes"), Some("text/plain")));
        assert_eq!(r.file_name, "notes.txt");
    }

    #[test]
    fn missing_disposition_and_unknown_type() {
        let r = resolve(ok_response(None, Some("application/x-whatever")));
        assert!(r.success);
        assert_eq!(r.file_name, "download_file.bin");
    }

    #[test]
    fn empty_body_is_still_success() {
        let r = resolve(DownloadResponse::new(200, Vec::new()));
        assert!(r.success);
        assert_eq!(r.bytes, Some(Vec::new()));
    }

    #[test]
    fn json_error_message_is_passed_through() {
        let r = resolve(DownloadResponse::new(404, br#"{"message":"not found"}"#.to_vec()));
        assert!(!r.success);
        assert_eq!(r.message, "not found");
        assert_eq!(r.failure, Some(FailureKind::Server { status: 404 }));
        assert!(r.bytes.is_none());
        assert!(r.file_name.is_empty());
    }

    #[test]
    fn non_json_error_body() {
        let r = resolve(DownloadResponse::new(500, b"<html>Internal Server Error</html>".to_vec()));
        assert!(!r.success);
        assert_eq!(r.message, "download failed: 500");
        assert_eq!(r.failure, Some(FailureKind::ServerUnparsable { status: 500 }));
    }

    #[test]
    fn json_without_usable_message() {
        let bodies: [&[u8]; 5] = [
            br#"{"error":"nope"}"#,
            br#"{"message":""}"#,
            br#"{"message":42}"#,
            br#"["message"]"#,
            b"\xff\xfe",
        ];
        for body in bodies {
            let r = resolve(DownloadResponse::new(403, body.to_vec()));
            assert_eq!(r.message, "download failed: 403");
        }
    }

    #[test]
    fn non_200_success_codes_are_failures() {
        let r = resolve(
            DownloadResponse::new(206, b"partial".to_vec())
                .with_header("Content-Disposition", "attachment; filename=a.txt"),
        );
        assert!(!r.success);
        assert_eq!(r.message, "download failed: 206");
    }

    #[test]
    fn network_error_result() {
        let r = ResolvedDownload::network_error();
        assert!(!r.success);
        assert_eq!(r.message, "network error, please check connection");
        assert_eq!(r.failure, Some(FailureKind::Network));
    }

    #[test]
    fn resolving_twice_is_identical() {
        let response = ok_response(Some("attachment; filename=\"x.zip\""), Some("application/zip"));
        assert_eq!(resolve(response.clone()), resolve(response));

        let err = DownloadResponse::new(404, br#"{"message":"gone"}"#.to_vec());
        assert_eq!(resolve(err.clone()), resolve(err));
    }
}
