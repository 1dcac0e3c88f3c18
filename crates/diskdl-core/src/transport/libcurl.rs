//! libcurl-backed transport.

use super::{Transport, TransportError};
use crate::config::DiskdlConfig;
use crate::response::{DownloadResponse, Headers};
use crate::retry::classify_curl_error;
use std::time::Duration;

/// Blocking transport using a fresh curl easy handle per request.
/// Call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&DiskdlConfig::default())
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &DiskdlConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

fn setup(e: curl::Error) -> TransportError {
    TransportError::Setup(e.to_string())
}

fn no_response(e: curl::Error) -> TransportError {
    TransportError::no_response(classify_curl_error(&e), e.to_string())
}

impl Transport for CurlTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<DownloadResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut data: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(setup)?;
        easy.post(true).map_err(setup)?;
        easy.post_fields_copy(body).map_err(setup)?;
        easy.follow_location(true).map_err(setup)?;
        easy.max_redirections(10).map_err(setup)?;
        easy.connect_timeout(self.connect_timeout).map_err(setup)?;
        easy.timeout(self.timeout).map_err(setup)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json").map_err(setup)?;
        list.append("Accept: */*").map_err(setup)?;
        easy.http_headers(list).map_err(setup)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|line| {
                    // Servers may send raw latin-1 filenames; keep the line.
                    header_lines.push(String::from_utf8_lossy(line).trim_end().to_string());
                    true
                })
                .map_err(setup)?;
            transfer
                .write_function(|chunk| {
                    data.extend_from_slice(chunk);
                    Ok(chunk.len())
                })
                .map_err(setup)?;
            transfer.perform().map_err(no_response)?;
        }

        let status_code = easy.response_code().map_err(no_response)?;
        if status_code == 0 {
            return Err(TransportError::no_response(
                crate::retry::ErrorKind::Connection,
                "no HTTP status received",
            ));
        }

        tracing::debug!(url, status_code, bytes = data.len(), "POST completed");
        Ok(DownloadResponse {
            status_code,
            headers: Headers::parse_lines(&header_lines),
            body: data,
        })
    }
}
