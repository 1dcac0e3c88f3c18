//! `diskdl get <share-id>` – download a shared file and save it.

use anyhow::{Context, Result};
use diskdl_core::config::DiskdlConfig;
use diskdl_core::storage::save_resolved;
use super::checksum::sha256_file;
use diskdl_core::{DiskClient, DownloadRequest};
use std::path::PathBuf;

#[derive(Debug)]
pub struct GetArgs {
    pub share_id: String,
    pub password: String,
    pub dir: Option<PathBuf>,
    pub overwrite: bool,
    pub sha256: bool,
}

/// Directory to save into: explicit flag, then config, then the current directory.
pub(crate) fn target_dir(flag: Option<PathBuf>, cfg: &DiskdlConfig) -> Result<PathBuf> {
    match flag.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

pub async fn run_get(cfg: &DiskdlConfig, args: GetArgs) -> Result<()> {
    let dir = target_dir(args.dir, cfg)?;
    let client = DiskClient::from_config(cfg)?;
    let request = DownloadRequest::new(args.share_id, args.password);

    let resolved = tokio::task::spawn_blocking(move || client.download(&request))
        .await
        .context("download task join")??;
    if !resolved.success {
        anyhow::bail!("{}", resolved.message);
    }

    let overwrite = args.overwrite;
    let path = tokio::task::spawn_blocking(move || save_resolved(&resolved, &dir, overwrite))
        .await
        .context("save task join")??;
    println!("Saved {}", path.display());

    if args.sha256 {
        let digest = sha256_file(&path).await?;
        println!("{}  {}", digest, path.display());
    }
    Ok(())
}
