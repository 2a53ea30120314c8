// Chart-ready data structures
pub mod stacked;

// Re-export commonly used types
pub use stacked::{StackedVolume, VolumeBucket, build_stacked_volume};
