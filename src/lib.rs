#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::{STATS_API, VOLUME_CACHE_ACCEPTABLE_AGE_SECONDS};
pub use data::{TotalVolumeRow, VolumeDataset, fetch_volume_data};
pub use models::{StackedVolume, VolumeBucket, build_stacked_volume};
pub use ui::VolumeBoardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the stats API as primary source instead of the local cache
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(
    cc: &eframe::CreationContext,
    dataset: VolumeDataset,
    source_signature: &'static str,
) -> Box<dyn eframe::App> {
    let app = ui::VolumeBoardApp::new(cc, dataset, source_signature);
    Box::new(app)
}
