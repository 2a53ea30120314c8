//! Chart visualization configuration

use eframe::egui::Color32;

/// Coins outside the per-bucket top ten are merged under this label.
pub const OTHER_LABEL: &str = "Other";

/// Maximum number of individually-stacked coins per time bucket.
pub const MAX_STACKED_COINS: usize = 10;

pub struct ChartConfig {
    /// Stroke color of the cumulative volume line
    pub cumulative_line_color: Color32,
    pub cumulative_line_width: f32,
    /// Fill color for the synthetic `Other` stack segment
    pub other_color: Color32,
    /// Fraction of one day a bar occupies on the x axis
    pub bar_width_fraction: f64,
    /// Grid line opacity (0.0 = invisible, 1.0 = fully opaque)
    pub grid_opacity: f32,
    /// Plot x axis divisions (split axis into n equal parts)
    pub x_axis_divisions: u32,
    pub y_axis_divisions: u32,
    /// Minimum chart height in points
    pub chart_height: f32,
    /// Gradient used to derive stable colors for coins without a fixed entry
    pub fallback_gradient_colors: &'static [&'static str],
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    cumulative_line_color: Color32::from_rgb(151, 252, 228), // Bright mint green
    cumulative_line_width: 1.5,
    other_color: Color32::from_rgb(110, 110, 120),
    bar_width_fraction: 0.6,
    grid_opacity: 0.1,
    x_axis_divisions: 8,
    y_axis_divisions: 7,
    chart_height: 480.0,
    fallback_gradient_colors: &[
        "#1f77b4", // Steel blue
        "#9467bd", // Muted purple
        "#e377c2", // Pink
        "#17becf", // Teal
        "#bcbd22", // Olive
        "#8c564b", // Brown
    ],
};

/// Fixed display colors for the coins that dominate volume most days.
const COIN_COLORS: &[(&str, Color32)] = &[
    ("BTC", Color32::from_rgb(247, 147, 26)),  // Bitcoin orange
    ("ETH", Color32::from_rgb(98, 126, 234)),  // Ether indigo
    ("SOL", Color32::from_rgb(20, 241, 149)),  // Solana green
    ("ARB", Color32::from_rgb(40, 160, 240)),
    ("AVAX", Color32::from_rgb(232, 65, 66)),
    ("DOGE", Color32::from_rgb(194, 166, 51)),
    ("LTC", Color32::from_rgb(191, 187, 187)),
    ("SUI", Color32::from_rgb(106, 192, 255)),
    ("OP", Color32::from_rgb(255, 4, 32)),
    ("APT", Color32::from_rgb(0, 215, 187)),
    ("ATOM", Color32::from_rgb(110, 100, 165)),
    ("MATIC", Color32::from_rgb(130, 71, 229)),
    ("INJ", Color32::from_rgb(0, 130, 250)),
    ("kPEPE", Color32::from_rgb(77, 146, 66)),
];

/// Look up the display color for a coin.
///
/// Unlisted coins get a stable color sampled from the fallback gradient by
/// hashing the name, so a coin keeps its color across refreshes. `Other`
/// always maps to the fixed neutral color.
pub fn coin_color(coin: &str) -> Color32 {
    if coin == OTHER_LABEL {
        return CHART_CONFIG.other_color;
    }
    if let Some((_, color)) = COIN_COLORS.iter().find(|(name, _)| *name == coin) {
        return *color;
    }
    fallback_color(coin)
}

fn fallback_color(coin: &str) -> Color32 {
    use std::hash::{Hash, Hasher};

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    coin.hash(&mut hasher);
    let t = (hasher.finish() % 1000) as f32 / 1000.0;

    let grad = colorgrad::GradientBuilder::new()
        .html_colors(CHART_CONFIG.fallback_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>();

    match grad {
        Ok(grad) => {
            let rgba8 = colorgrad::Gradient::at(&grad, t).to_rgba8();
            Color32::from_rgb(rgba8[0], rgba8[1], rgba8[2])
        }
        Err(_) => CHART_CONFIG.other_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_coins_use_fixed_colors() {
        assert_eq!(coin_color("BTC"), Color32::from_rgb(247, 147, 26));
        assert_eq!(coin_color(OTHER_LABEL), CHART_CONFIG.other_color);
    }

    #[test]
    fn unknown_coins_get_stable_colors() {
        let first = coin_color("ZZZCOIN");
        let second = coin_color("ZZZCOIN");
        assert_eq!(first, second, "fallback color must be deterministic");
    }
}
