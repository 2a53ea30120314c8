//! Configuration module for the volume dashboard.

pub mod api;
pub mod chart;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;
pub mod persistence;

// Re-export commonly used items
pub use api::{STATS_API, VOLUME_CACHE_ACCEPTABLE_AGE_SECONDS};
pub use chart::{CHART_CONFIG, MAX_STACKED_COINS, OTHER_LABEL, coin_color};
pub use demo::{DEMO_COINS, DEMO_DAYS, DEMO_DAY_ZERO};
pub use persistence::{
    APP_STATE_PATH, VOLUME_CACHE_PATH, VOLUME_CACHE_VERSION, volume_cache_filename,
};
