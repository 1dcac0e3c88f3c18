//! HTTP transport seam between the client and the network.
//!
//! The client only depends on [`Transport`]; [`CurlTransport`] is the libcurl
//! implementation, and tests plug in canned responses.

mod libcurl;

pub use libcurl::CurlTransport;

use crate::response::DownloadResponse;
use crate::retry::ErrorKind;

/// Failure to obtain any HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transfer could not be configured (e.g. malformed URL, bad option).
    #[error("transfer setup failed: {0}")]
    Setup(String),
    /// The request was attempted but no response came back.
    #[error("no response: {message}")]
    NoResponse { kind: ErrorKind, message: String },
}

impl TransportError {
    pub fn no_response(kind: ErrorKind, message: impl Into<String>) -> Self {
        TransportError::NoResponse {
            kind,
            message: message.into(),
        }
    }

    /// Retry classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransportError::Setup(_) => ErrorKind::Other,
            TransportError::NoResponse { kind, .. } => *kind,
        }
    }
}

/// Sends a JSON POST and returns whatever response the server gave.
///
/// Implementations must return `Ok` for every HTTP status, including 4xx/5xx.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<DownloadResponse, TransportError>;
}
