//! Download request: share id plus password, sent as a JSON body.

use serde::Serialize;
use std::fmt;

/// Identifies a file shared on the network disk.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub share_id: String,
    pub password: String,
}

// Keep the password out of logs.
impl fmt::Debug for DownloadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadRequest")
            .field("share_id", &self.share_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Problems with the request itself, found before anything is sent.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("share id is required")]
    MissingShareId,
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to set up HTTP transfer: {0}")]
    Transport(String),
}

impl DownloadRequest {
    pub fn new(share_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            share_id: share_id.into(),
            password: password.into(),
        }
    }

    /// Rejects a blank share id. The password may be empty (public shares).
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.share_id.trim().is_empty() {
            return Err(RequestError::MissingShareId);
        }
        Ok(())
    }

    /// JSON body as posted to the download endpoint.
    pub fn to_json(&self) -> Result<Vec<u8>, RequestError> {
        Ok(serde_json::to_vec(self)?)
    }
}
