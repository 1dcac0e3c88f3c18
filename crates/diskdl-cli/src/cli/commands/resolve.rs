//! `diskdl resolve <headers-file>` – resolve a recorded response offline.

use anyhow::{Context, Result};
use diskdl_core::response::{status_from_lines, Headers};
use diskdl_core::{resolve, DownloadResponse, ResolvedDownload};
use std::path::Path;

/// Builds a response from a raw header dump and optional body file.
pub(crate) fn load_response(
    headers_path: &Path,
    status: Option<u32>,
    body_path: Option<&Path>,
) -> Result<DownloadResponse> {
    let raw = std::fs::read(headers_path)
        .with_context(|| format!("read {}", headers_path.display()))?;
    let raw = String::from_utf8_lossy(&raw);
    let lines: Vec<&str> = raw.lines().collect();
    let body = match body_path {
        Some(p) => std::fs::read(p).with_context(|| format!("read {}", p.display()))?,
        None => Vec::new(),
    };
    Ok(DownloadResponse {
        status_code: status.or_else(|| status_from_lines(&lines)).unwrap_or(200),
        headers: Headers::parse_lines(&lines),
        body,
    })
}

pub(crate) fn describe(resolved: &ResolvedDownload) -> String {
    if resolved.success {
        format!(
            "ok: {} ({} bytes)",
            resolved.file_name,
            resolved.bytes.as_ref().map_or(0, Vec::len)
        )
    } else {
        format!("failed: {}", resolved.message)
    }
}

pub fn run_resolve(headers_path: &Path, status: Option<u32>, body_path: Option<&Path>) -> Result<()> {
    let response = load_response(headers_path, status, body_path)?;
    let resolved = resolve(response);
    println!("{}", describe(&resolved));
    if !resolved.success {
        anyhow::bail!("{}", resolved.message);
    }
    Ok(())
}
