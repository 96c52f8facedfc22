use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::loader::{self, LoadError};
use super::model::DestinationTable;

// ---------------------------------------------------------------------------
// Memoized loading
// ---------------------------------------------------------------------------

/// Single-slot cache for the most recently loaded table, keyed by source
/// path plus modification timestamp.
///
/// A hit returns the memoized table without re-reading the file body; a
/// changed path or mtime forces a reload. Invalidation is explicit via
/// [`TableCache::invalidate`] — there is no hidden global state.
#[derive(Debug, Default)]
pub struct TableCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    path: PathBuf,
    modified: SystemTime,
    table: DestinationTable,
}

impl TableCache {
    /// Load `path`, reusing the cached table when the file is unchanged.
    pub fn load(&mut self, path: &Path) -> Result<DestinationTable, LoadError> {
        let modified = modification_time(path)?;

        if let Some(entry) = &self.entry {
            if entry.path.as_path() == path && entry.modified == modified {
                log::debug!("serving {} from cache", path.display());
                return Ok(entry.table.clone());
            }
        }

        let table = loader::load(path)?;
        self.entry = Some(CacheEntry {
            path: path.to_path_buf(),
            modified,
            table: table.clone(),
        });
        Ok(table)
    }

    /// Drop the memoized table; the next load re-reads the file.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

fn modification_time(path: &Path) -> Result<SystemTime, LoadError> {
    let metadata = fs::metadata(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Unknown(format!("{}: {err}", path.display())),
    })?;
    metadata
        .modified()
        .map_err(|err| LoadError::Unknown(format!("{}: {err}", path.display())))
}
