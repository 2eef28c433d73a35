use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, bail};
use once_cell::sync::OnceCell;

use super::loader::load_sales;
use super::model::SalesTable;

/// The export file read when no other path is configured.
pub const DEFAULT_SOURCE: &str = "bakerysales.csv";

// ---------------------------------------------------------------------------
// Load-once table holder
// ---------------------------------------------------------------------------

/// Holds the cleaned table for one source file.
///
/// The file is read on the first successful [`TableCache::get_or_load`];
/// afterwards every caller shares the same read-only table. A failed load
/// leaves the cache empty.
#[derive(Debug)]
pub struct TableCache {
    path: PathBuf,
    table: OnceCell<Arc<SalesTable>>,
}

impl TableCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TableCache {
            path: path.into(),
            table: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Return the cached table, loading it on first use.
    pub fn get_or_load(&self) -> Result<Arc<SalesTable>> {
        self.table
            .get_or_try_init(|| {
                let table = load_sales(&self.path)?;
                log::info!(
                    "Loaded {} sale records ({} products) from {}",
                    table.len(),
                    table.products.len(),
                    self.path.display()
                );
                Ok::<_, anyhow::Error>(Arc::new(table))
            })
            .cloned()
    }
}

// ---------------------------------------------------------------------------
// Process-wide instance
// ---------------------------------------------------------------------------

static SOURCE: OnceCell<TableCache> = OnceCell::new();

/// The process-wide cache. The first call fixes the source path; asking
/// for any other path afterwards is an error.
pub fn source_cache(path: &Path) -> Result<&'static TableCache> {
    let cache = SOURCE.get_or_init(|| TableCache::new(path));
    if cache.path() != path {
        bail!(
            "sales cache is bound to {}, not {}",
            cache.path().display(),
            path.display()
        );
    }
    Ok(cache)
}
