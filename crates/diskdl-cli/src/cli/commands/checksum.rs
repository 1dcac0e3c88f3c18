//! `diskdl checksum <path>` – compute SHA-256 of a file.

use anyhow::{Context, Result};
use diskdl_core::checksum;
use std::path::Path;

/// SHA-256 of a file, hashed on the blocking pool.
pub(crate) async fn sha256_file(path: &Path) -> Result<String> {
    let owned = path.to_path_buf();
    tokio::task::spawn_blocking(move || checksum::sha256_path(&owned))
        .await
        .context("checksum task join")?
}

/// Compute and print SHA-256 of the given file.
pub async fn run_checksum(path: &Path) -> Result<()> {
    let digest = sha256_file(path).await?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
