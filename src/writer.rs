//! Materializes a [`StructureTable`](crate::structure::StructureTable)
//! under a root directory.
//!
//! Safe by default: an existing file is never touched unless `overwrite`
//! is set, so re-running against a populated root is a no-op for
//! everything already there.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::structure::StructureTable;

/// Counts reported back to the entry point after a write pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Join a forward-slash relative path onto `root` using host separators.
fn resolve(root: &Path, relative: &str) -> PathBuf {
    relative.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg))
}

/// Write every table entry under `root`.
///
/// Each entry is handled independently: ancestor directories are created
/// as needed, existing targets are skipped unless `overwrite` is set, and
/// content is written verbatim as UTF-8. An existing directory at a
/// file's target is skipped like any existing path when `overwrite` is
/// off; with `overwrite` on it is a conflict error — the writer never
/// deletes a directory to put a file in its place.
///
/// Fatal filesystem errors (permissions, disk full) propagate
/// immediately; files written before the failure are left in place.
pub fn write_all(root: &Path, table: &StructureTable, overwrite: bool) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for (relative, content) in table.iter() {
        let target = resolve(root, relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        if target.exists() {
            if !overwrite {
                summary.skipped += 1;
                continue;
            }
            if target.is_dir() {
                anyhow::bail!(
                    "Cannot overwrite directory with file: {}",
                    target.display()
                );
            }
        }

        fs::write(&target, content)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
        summary.written += 1;
    }

    Ok(summary)
}
