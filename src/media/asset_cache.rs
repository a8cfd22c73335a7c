// SPDX-License-Identifier: MPL-2.0
//! Cache of decoded gallery assets (thumbnails and webview images).
//!
//! # Design
//!
//! - **LRU eviction**: least recently rendered assets are evicted first
//! - **Count-bounded**: capacity comes from `[display] asset_cache_entries`,
//!   grown while a view needs more assets than that
//! - **Path-keyed**: assets are indexed by their resolved path (`photos/...`)
//! - **Request de-duplication**: an asset that is in flight is not requested again
//!
//! Failed downloads are remembered so the view can show a caption, and are
//! requested again the next time a view needing them becomes active.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::config::DEFAULT_ASSET_CACHE_ENTRIES;

/// What the view knows about one asset.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    /// Not requested yet, or evicted.
    Unknown,
    /// Request in flight.
    Pending,
    /// Ready to draw.
    Loaded(Handle),
    /// The last request failed.
    Failed,
}

#[derive(Debug, Clone)]
enum Entry {
    Loaded(Handle),
    Failed,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetCacheStats {
    /// Number of assets inserted (loaded or failed).
    pub insertions: u64,

    /// Number of assets evicted due to the capacity limit.
    pub evictions: u64,

    /// Number of requests skipped because the asset was cached or in flight.
    pub hits: u64,

    /// Number of assets handed out for download.
    pub misses: u64,
}

/// LRU cache for gallery assets.
pub struct AssetCache {
    entries: LruCache<String, Entry>,
    /// Configured capacity; the cache never shrinks below it.
    base_capacity: NonZeroUsize,
    pending: HashSet<String>,
    stats: AssetCacheStats,
}

impl AssetCache {
    /// Creates a cache holding at most `capacity` assets.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_ASSET_CACHE_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: LruCache::new(capacity),
            base_capacity: capacity,
            pending: HashSet::new(),
            stats: AssetCacheStats::default(),
        }
    }

    /// Returns the status of `asset` without updating LRU order.
    #[must_use]
    pub fn status(&self, asset: &str) -> AssetStatus {
        if let Some(entry) = self.entries.peek(asset) {
            return match entry {
                Entry::Loaded(handle) => AssetStatus::Loaded(handle.clone()),
                Entry::Failed => AssetStatus::Failed,
            };
        }
        if self.pending.contains(asset) {
            AssetStatus::Pending
        } else {
            AssetStatus::Unknown
        }
    }

    /// Selects the assets that must be downloaded and marks them pending.
    ///
    /// Loaded assets are promoted in LRU order; previously failed assets are
    /// handed out again. Order and duplicates of `assets` are preserved only
    /// for the first occurrence.
    ///
    /// Afterwards the capacity fits `assets` plus every download already in
    /// flight, so assets of the active view are never evicted by each other
    /// or by late responses for an earlier view.
    pub fn claim_missing(&mut self, assets: &[String]) -> Vec<String> {
        let needed = assets.len() + self.pending.len();
        let mut missing = Vec::new();
        for asset in assets {
            match self.entries.get(asset) {
                Some(Entry::Loaded(_)) => {
                    self.stats.hits += 1;
                    continue;
                }
                Some(Entry::Failed) => {
                    self.entries.pop(asset);
                }
                None => {}
            }
            if !self.pending.insert(asset.clone()) {
                self.stats.hits += 1;
                continue;
            }
            self.stats.misses += 1;
            missing.push(asset.clone());
        }
        self.fit_capacity(needed);
        missing
    }

    /// Resizes to `max(base capacity, needed)`. Runs after promotion, so
    /// shrinking only drops entries the active view does not use.
    fn fit_capacity(&mut self, needed: usize) {
        let target = NonZeroUsize::new(needed)
            .map_or(self.base_capacity, |needed| needed.max(self.base_capacity));
        if target != self.entries.cap() {
            tracing::debug!(from = self.entries.cap().get(), to = target.get(), "resizing asset cache");
            self.entries.resize(target);
        }
    }

    /// Stores a downloaded asset.
    pub fn insert_loaded(&mut self, asset: String, handle: Handle) {
        self.insert(asset, Entry::Loaded(handle));
    }

    /// Remembers that downloading `asset` failed.
    pub fn insert_failed(&mut self, asset: String) {
        self.insert(asset, Entry::Failed);
    }

    fn insert(&mut self, asset: String, entry: Entry) {
        self.pending.remove(&asset);
        if let Some((evicted, _)) = self.entries.push(asset.clone(), entry) {
            if evicted != asset {
                self.stats.evictions += 1;
            }
        }
        self.stats.insertions += 1;
    }

    /// Number of settled (loaded or failed) assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of assets currently in flight.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn stats(&self) -> AssetCacheStats {
        self.stats
    }
}

impl std::fmt::Debug for AssetCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("pending", &self.pending.len())
            .field("stats", &self.stats)
            .finish()
    }
}
