use anyhow::Result;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

const DEFAULT_MAX_MEMORY_ENTRIES: usize = 4096;

/// One cached extraction, validated by modification time and file size.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedExtraction {
    specifiers: Vec<String>,
    timestamp: u64,
    file_size: u64,
}

/// Thread-safe specifier cache with a memory tier and a best-effort disk
/// tier.
///
/// Caching extraction output does not make builds incremental: the graph is
/// still assembled from scratch on every build, only the per-file read and
/// parse are skipped for unchanged files.
pub struct SpecifierCache {
    memory: DashMap<PathBuf, CachedExtraction>,
    cache_dir: Option<PathBuf>,
    max_memory_entries: usize,
}

impl SpecifierCache {
    pub fn new(cache_dir: Option<PathBuf>) -> Result<Self> {
        let resolved_dir = cache_dir.unwrap_or_else(|| std::env::temp_dir().join("modmap_cache"));
        let cache_dir = match fs::create_dir_all(&resolved_dir) {
            Ok(()) => Some(resolved_dir),
            Err(err) => {
                eprintln!(
                    "Warning: failed to initialize disk cache at {}: {err}",
                    resolved_dir.display()
                );
                None
            }
        };

        Ok(Self {
            memory: DashMap::with_capacity(DEFAULT_MAX_MEMORY_ENTRIES),
            cache_dir,
            max_memory_entries: DEFAULT_MAX_MEMORY_ENTRIES,
        })
    }

    /// Build an in-memory-only cache without touching the filesystem.
    pub fn in_memory_only() -> Self {
        Self {
            memory: DashMap::with_capacity(DEFAULT_MAX_MEMORY_ENTRIES),
            cache_dir: None,
            max_memory_entries: DEFAULT_MAX_MEMORY_ENTRIES,
        }
    }

    /// Return the cached specifiers for `path` if the entry is still fresh.
    pub fn lookup(&self, path: &Path) -> Option<Vec<String>> {
        let (timestamp, file_size) = file_stamp(path).ok()?;

        if let Some(entry) = self.memory.get(path) {
            if entry.timestamp == timestamp && entry.file_size == file_size {
                return Some(entry.specifiers.clone());
            }
            // Stale in memory means the disk copy is the same generation or
            // older, skip it.
            return None;
        }

        let disk_path = self.disk_path(path)?;
        let entry = self.load_from_disk(&disk_path).ok()?;
        if entry.timestamp != timestamp || entry.file_size != file_size {
            return None;
        }

        let specifiers = entry.specifiers.clone();
        if self.memory.len() < self.max_memory_entries {
            self.memory.insert(path.to_path_buf(), entry);
        }
        Some(specifiers)
    }

    /// Record fresh extraction output for `path`.
    pub fn store(&self, path: &Path, specifiers: &[String]) -> Result<()> {
        let (timestamp, file_size) = file_stamp(path)?;
        let entry = CachedExtraction {
            specifiers: specifiers.to_vec(),
            timestamp,
            file_size,
        };

        if self.memory.len() >= self.max_memory_entries {
            if let Some(victim) = self.memory.iter().next() {
                let key = victim.key().clone();
                drop(victim);
                self.memory.remove(&key);
            }
        }
        self.memory.insert(path.to_path_buf(), entry.clone());

        if let Some(disk_path) = self.disk_path(path) {
            self.store_to_disk(&disk_path, &entry)?;
        }
        Ok(())
    }

    /// Drop both tiers.
    pub fn clear(&self) -> Result<()> {
        self.memory.clear();
        if let Some(cache_dir) = &self.cache_dir {
            if cache_dir.exists() {
                fs::remove_dir_all(cache_dir)?;
                fs::create_dir_all(cache_dir)?;
            }
        }
        Ok(())
    }

    fn disk_path(&self, path: &Path) -> Option<PathBuf> {
        let cache_dir = self.cache_dir.as_ref()?;

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        let hash = hasher.finish();

        Some(cache_dir.join(format!("spec_{:x}.bincode", hash)))
    }

    fn load_from_disk(&self, disk_path: &Path) -> Result<CachedExtraction> {
        let data = fs::read(disk_path)?;
        let entry: CachedExtraction = bincode::deserialize(&data)?;
        Ok(entry)
    }

    fn store_to_disk(&self, disk_path: &Path, entry: &CachedExtraction) -> Result<()> {
        let data = bincode::serialize(entry)?;
        fs::write(disk_path, data)?;
        Ok(())
    }
}

fn file_stamp(path: &Path) -> std::io::Result<(u64, u64)> {
    let metadata = fs::metadata(path)?;
    let timestamp = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    Ok((timestamp, metadata.len()))
}
