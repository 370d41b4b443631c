//! Async file discovery.

use std::path::{Path, PathBuf};

use async_walkdir::WalkDir;
use futures::StreamExt;

use crate::error::{Error, Result};

/// List every file below `root`, returned as paths relative to `root`.
///
/// The walk is recursive. The result is sorted so that callers which assign
/// positions from it (collection ids, stable sort tie-breaks) get the same
/// order on every run and every platform.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `root` does not exist, and [`Error::Io`]
/// with the offending path if a directory cannot be read or an entry cannot
/// be inspected.
pub async fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !tokio::fs::try_exists(root)
        .await
        .map_err(|e| Error::io_with_path(e, root))?
    {
        return Err(Error::not_found(
            root.to_string_lossy(),
            "content directory",
        ));
    }

    let mut files = Vec::new();
    let mut walker = WalkDir::new(root);

    while let Some(entry) = walker.next().await {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                log::error!("Walk failed at {}: {}", path.display(), e);
                return Err(Error::io_with_path(e.into(), path));
            }
        };

        let is_file = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, entry.path()))?
            .is_file();
        if !is_file {
            continue;
        }

        let path = entry.path();
        if let Ok(rel) = path.strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
