// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Gallery server used when neither the config file nor the CLI names one.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Upper bound accepted for the optional request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default edge length of gallery thumbnails (in logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

/// Smallest thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Largest thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Default number of decoded assets kept in memory.
pub const DEFAULT_ASSET_CACHE_ENTRIES: usize = 256;

/// Minimum number of cached assets.
pub const MIN_ASSET_CACHE_ENTRIES: usize = 16;

/// Maximum number of cached assets.
pub const MAX_ASSET_CACHE_ENTRIES: usize = 1024;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of snapshots kept on the back stack.
pub const DEFAULT_HISTORY_ENTRIES: usize = 100;

/// Minimum history depth.
pub const MIN_HISTORY_ENTRIES: usize = 1;

/// Maximum history depth.
pub const MAX_HISTORY_ENTRIES: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_their_ranges() {
        assert!((MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE).contains(&DEFAULT_THUMBNAIL_SIZE));
        assert!((MIN_ASSET_CACHE_ENTRIES..=MAX_ASSET_CACHE_ENTRIES)
            .contains(&DEFAULT_ASSET_CACHE_ENTRIES));
        assert!((MIN_HISTORY_ENTRIES..=MAX_HISTORY_ENTRIES).contains(&DEFAULT_HISTORY_ENTRIES));
    }
}
