//! Persistent on-disk caching of the downloaded game-data files, with a TTL
//! so a patched data repo gets picked up without the user clearing anything.

use std::{
    fs,
    io,
    path::PathBuf,
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

const CACHE_DIR_NAME: &str = "arc-safe-recycle";

/// Cache TTL: 7 days. The data repo only moves with game patches.
pub const DATA_CACHE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// One cached download: the raw upstream JSON plus a fetch timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedFile {
    /// Unix timestamp (seconds) when this file was fetched.
    pub cached_at: u64,
    /// The upstream JSON, unmodified.
    pub data: Value,
}

impl CachedFile {
    /// Wraps freshly fetched data with the current timestamp.
    pub fn new(data: Value) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { cached_at, data }
    }

    /// Check if this entry is older than the TTL.
    pub fn is_expired(&self) -> bool {
        self.age() > DATA_CACHE_TTL
    }

    /// Entry age as Duration.
    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        let secs = self.age().as_secs();
        if secs < 60 {
            format!("{secs}s")
        } else if secs < 3600 {
            format!("{}m", secs / 60)
        } else if secs < 86400 {
            format!("{}h", secs / 3600)
        } else {
            format!("{}d", secs / 86400)
        }
    }
}

/// Root of the cache (in the platform local-data directory).
fn cache_root() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME);
        let _ = fs::create_dir_all(&base);
        base
    })
    .clone()
}

fn entry_path(rel: &str) -> PathBuf {
    cache_root().join(format!("{rel}.json"))
}

/// Load one cached download, if present and parseable.
pub fn load_cached(rel: &str) -> Option<CachedFile> {
    let path = entry_path(rel);

    if !path.exists() {
        return None;
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(entry) => Some(entry),
            Err(e) => {
                println!("[cache] Failed to parse {}: {e}", path.display());
                None
            }
        },
        Err(e) => {
            println!("[cache] Failed to read {}: {e}", path.display());
            None
        }
    }
}

/// Save one download. Writes via a temp file so a crash mid-write never
/// leaves a truncated entry behind.
pub fn save_cached(rel: &str, entry: &CachedFile) -> Result<(), io::Error> {
    let path = entry_path(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string(entry)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, &path)?;
    println!("[cache] Saved {} to {}", rel, path.display());
    Ok(())
}
