use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::input::{Dataset, InputError, discover_tables, load_dataset_files};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// Maximum age of a cached dataset. `None` keeps it until invalidated or
    /// until the table files change.
    pub ttl: Option<Duration>,
}

impl CachePolicy {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl: Some(ttl) }
    }
}

#[derive(Debug)]
struct CacheEntry {
    dir: PathBuf,
    fingerprint: u64,
    loaded_at: Instant,
    dataset: Arc<Dataset>,
}

/// Holds the last loaded dataset. A cached copy is reused only for the same
/// directory, within the TTL, and while the table files hash to the same
/// fingerprint.
#[derive(Debug, Default)]
pub struct DatasetCache {
    policy: CachePolicy,
    entry: Option<CacheEntry>,
    loads: usize,
}

impl DatasetCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entry: None,
            loads: 0,
        }
    }

    pub fn get_or_load(&mut self, dir: &Path) -> Result<Arc<Dataset>, InputError> {
        let files = discover_tables(dir)?;
        let fingerprint = files.fingerprint()?;

        if let Some(entry) = &self.entry {
            if self.is_fresh(entry, dir, fingerprint) {
                debug!(dir = %dir.display(), "dataset cache hit");
                return Ok(Arc::clone(&entry.dataset));
            }
            debug!(dir = %dir.display(), "dataset cache stale; reloading");
        }

        let dataset = Arc::new(load_dataset_files(dir, files)?);
        self.loads += 1;
        self.entry = Some(CacheEntry {
            dir: dir.to_path_buf(),
            fingerprint,
            loaded_at: Instant::now(),
            dataset: Arc::clone(&dataset),
        });
        Ok(dataset)
    }

    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            debug!("dataset cache invalidated");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }

    /// Number of loads from disk since the cache was created.
    pub fn loads(&self) -> usize {
        self.loads
    }

    fn is_fresh(&self, entry: &CacheEntry, dir: &Path, fingerprint: u64) -> bool {
        if entry.dir != dir || entry.fingerprint != fingerprint {
            return false;
        }
        match self.policy.ttl {
            Some(ttl) => entry.loaded_at.elapsed() < ttl,
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/cache.rs"]
mod tests;
