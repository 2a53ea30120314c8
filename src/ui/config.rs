use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub footnote: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(220),
        heading: Color32::from_rgb(151, 252, 228), // Matches the cumulative line
        central_panel: Color32::from_rgb(10, 31, 27), // Deep green-black
        side_panel: Color32::from_rgb(6, 20, 18),
        footnote: Color32::from_gray(165),
    },
};

/// All user-facing strings in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub chart_heading: &'static str,
    pub footnote: &'static str,
    pub refresh_button: &'static str,
    pub loading_heading: &'static str,
    pub error_heading: &'static str,
    pub cumulative_label: &'static str,
    pub help_refresh: &'static str,
    pub help_toggle_help: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Volume Board",
    chart_heading: "Total Volume",
    footnote: "Top 10 coins grouped daily and remaining coins grouped by Other. \
               Volume tracked since introduction of fees.",
    refresh_button: "⟳ Refresh",
    loading_heading: "Fetching volume data...",
    error_heading: "⚠ Unable to Load Volume Data",
    cumulative_label: "Cumulative",
    help_refresh: "Refresh volume data from the stats backend",
    help_toggle_help: "Toggle this help panel",
};
