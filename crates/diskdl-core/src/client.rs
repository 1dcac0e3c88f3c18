//! Share-disk download client: validate, POST, resolve.
//!
//! The client is built explicitly from a config and a [`Transport`]; there is
//! no shared global HTTP handle.

use crate::config::DiskdlConfig;
use crate::request::{DownloadRequest, RequestError};
use crate::resolver::{self, ResolvedDownload};
use crate::retry::{self, RetryPolicy};
use crate::transport::{CurlTransport, Transport, TransportError};

pub struct DiskClient<T = CurlTransport> {
    endpoint: url::Url,
    transport: T,
    retry: RetryPolicy,
}

impl DiskClient<CurlTransport> {
    /// Client using libcurl with the timeouts and retry policy from `cfg`.
    pub fn from_config(cfg: &DiskdlConfig) -> Result<Self, RequestError> {
        Self::new(cfg, CurlTransport::from_config(cfg))
    }
}

impl<T: Transport> DiskClient<T> {
    pub fn new(cfg: &DiskdlConfig, transport: T) -> Result<Self, RequestError> {
        let endpoint = cfg
            .endpoint_url()
            .map_err(|source| RequestError::InvalidEndpoint {
                url: format!("{}{}", cfg.base_url, cfg.endpoint),
                source,
            })?;
        Ok(Self {
            endpoint,
            transport,
            retry: RetryPolicy::from(&cfg.retry_config()),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Requests the shared file and resolves the response.
    ///
    /// `Err` only for problems with the request itself; server errors and
    /// missing responses come back as unsuccessful [`ResolvedDownload`]s.
    pub fn download(&self, request: &DownloadRequest) -> Result<ResolvedDownload, RequestError> {
        request.validate()?;
        let body = request.to_json()?;

        tracing::info!(share_id = %request.share_id, url = %self.endpoint, "requesting download");
        let sent = retry::run_with_retry(&self.retry, || {
            self.transport.post_json(self.endpoint.as_str(), &body)
        });

        match sent {
            Ok(response) => {
                let status = response.status_code;
                let resolved = resolver::resolve(response);
                if resolved.success {
                    tracing::info!(
                        share_id = %request.share_id,
                        status,
                        file_name = %resolved.file_name,
                        bytes = resolved.bytes.as_ref().map_or(0, Vec::len),
                        "download resolved"
                    );
                } else {
                    tracing::warn!(
                        share_id = %request.share_id,
                        status,
                        "download rejected: {}",
                        resolved.message
                    );
                }
                Ok(resolved)
            }
            Err(TransportError::Setup(msg)) => Err(RequestError::Transport(msg)),
            Err(e @ TransportError::NoResponse { .. }) => {
                tracing::warn!(share_id = %request.share_id, "no response: {}", e);
                Ok(ResolvedDownload::network_error())
            }
        }
    }
}
