//! Saving resolved downloads to disk.
//!
//! Bytes go to `<name>.part`, are fsynced, then renamed to the final name, so a
//! crash never leaves a truncated file under the real name.

mod staged;

pub use staged::StagedFile;

use crate::filename::{
    sanitize_filename, truncate_keeping_extension, DEFAULT_FILENAME, FALLBACK_EXTENSION, NAME_MAX,
};
use crate::resolver::ResolvedDownload;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Upper bound on `name (n).ext` candidates tried before giving up.
const MAX_NAME_SUFFIX: u32 = 9999;

/// Longest local name that still fits NAME_MAX once ` (9999)` and `.part` are added.
pub const LOCAL_NAME_MAX: usize = NAME_MAX - TEMP_SUFFIX.len() - " (9999)".len();

/// Path for the temp file: appends `.part` to the final path (e.g. `file.pdf` → `file.pdf.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Local filename for a display name: sanitized, at most [`LOCAL_NAME_MAX`]
/// bytes, with a fallback when nothing usable is left.
pub fn local_filename(display_name: &str) -> String {
    let sanitized = sanitize_filename(display_name);
    if sanitized.is_empty() {
        format!("{}{}", DEFAULT_FILENAME, FALLBACK_EXTENSION)
    } else {
        truncate_keeping_extension(&sanitized, LOCAL_NAME_MAX)
    }
}

/// First free path among `dir/name`, `dir/stem (1).ext`, `dir/stem (2).ext`, ...
pub fn unique_destination(dir: &Path, name: &str) -> Result<PathBuf> {
    let first = dir.join(name);
    if !first.exists() {
        return Ok(first);
    }
    let (stem, ext) = match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    };
    for n in 1..=MAX_NAME_SUFFIX {
        let candidate = dir.join(format!("{} ({}){}", stem, n, ext));
        if !candidate.exists() {
            return Ok(candidate);
        }
    }
    anyhow::bail!("no free filename for {} in {}", name, dir.display())
}

/// Writes the bytes of a successful resolution into `dir` and returns the final path.
///
/// With `overwrite` false an existing file is never replaced; a numbered
/// variant of the name is used instead.
pub fn save_resolved(resolved: &ResolvedDownload, dir: &Path, overwrite: bool) -> Result<PathBuf> {
    let bytes = match (&resolved.bytes, resolved.success) {
        (Some(bytes), true) => bytes,
        _ => anyhow::bail!("nothing to save: {}", resolved.message),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create download dir {}", dir.display()))?;

    let name = local_filename(&resolved.file_name);
    let final_path = if overwrite {
        dir.join(&name)
    } else {
        unique_destination(dir, &name)?
    };

    let mut staged = StagedFile::create(&temp_path(&final_path))?;
    staged.write_all(bytes)?;
    staged.sync()?;
    staged.commit(&final_path)?;

    tracing::info!(
        bytes = bytes.len(),
        "saved {} as {}",
        resolved.file_name,
        final_path.display()
    );
    Ok(final_path)
}
