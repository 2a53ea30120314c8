//! File persistence and serialization configuration

/// Directory path for storing fetched volume data
pub const VOLUME_CACHE_PATH: &str = "volume_data";

/// Base filename for volume cache files (without extension)
pub const VOLUME_CACHE_FILENAME_WITHOUT_EXT: &str = "total_volume";

/// Current version of the volume cache serialization format
pub const VOLUME_CACHE_VERSION: f64 = 1.0;

/// Generate the cache filename for the fixed total-volume query
/// Example: "total_volume_v1.bin"
pub fn volume_cache_filename() -> String {
    format!(
        "{}_v{}.bin",
        VOLUME_CACHE_FILENAME_WITHOUT_EXT, VOLUME_CACHE_VERSION
    )
}

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = "app_state.json";
