//! Share-disk download client: request a shared file, resolve the response
//! into a display filename and bytes, and save it locally.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod client;
pub mod filename;
pub mod request;
pub mod resolver;
pub mod response;
pub mod retry;
pub mod storage;
pub mod transport;

pub use client::DiskClient;
pub use request::{DownloadRequest, RequestError};
pub use resolver::{resolve, FailureKind, ResolvedDownload};
pub use response::DownloadResponse;
