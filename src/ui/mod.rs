// User interface components
pub mod app;
pub mod app_async;
pub mod chart_view;
pub mod config;
pub mod plot_layers;
pub mod styles;
pub mod ui_render;
pub mod utils;

// Re-export main app
pub use app::VolumeBoardApp;
pub use config::UI_CONFIG;
