//! Temp file that holds bytes until they are committed under the final name.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A `.part` file owned by one save. Released exactly once: renamed away by
/// [`commit`](StagedFile::commit), or removed when dropped uncommitted.
pub struct StagedFile {
    file: Option<File>,
    temp_path: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Create a new temp file at `temp_path` (e.g. `destination.part`).
    /// Overwrites if the path already exists.
    pub fn create(temp_path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(StagedFile {
            file: Some(file),
            temp_path: temp_path.to_path_buf(),
            committed: false,
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let file = self.file.as_mut().context("temp file already closed")?;
        file.write_all(data).context("staged write failed")?;
        Ok(())
    }

    /// Sync file data to disk. Call before `commit` for durability.
    pub fn sync(&self) -> Result<()> {
        if let Some(file) = &self.file {
            file.sync_all().context("staged sync failed")?;
        }
        Ok(())
    }

    /// Close the temp file and atomically rename it to `final_path`.
    /// Replaces `final_path` if it exists. Fails across filesystems.
    pub fn commit(mut self, final_path: &Path) -> Result<()> {
        drop(self.file.take());
        std::fs::rename(&self.temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                self.temp_path.display(),
                final_path.display()
            )
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        drop(self.file.take());
        if let Err(e) = std::fs::remove_file(&self.temp_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove {}: {}", self.temp_path.display(), e);
            }
        } else {
            tracing::debug!("discarded {}", self.temp_path.display());
        }
    }
}
