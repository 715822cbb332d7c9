//! Network and disk plumbing: the data-repo client and its file cache.

pub mod arcdata;
pub mod cache;

#[allow(unused_imports)]
pub use arcdata::{ArcDataClient, CacheStatus, DataError, GameData, SourceReport, HIDEOUT_FILES};
#[allow(unused_imports)]
pub use cache::{load_cached, save_cached, CachedFile, DATA_CACHE_TTL};
