use std::hash::{Hash, Hasher};

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::{CHART_CONFIG, coin_color};
use crate::models::StackedVolume;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_currency_compact;

// Import the Layer System
use crate::ui::plot_layers::{
    CumulativeLineLayer, HoverTooltipLayer, LayerContext, PlotLayer, StackedBarsLayer,
};

/// One stack segment series: the values a single legend coin contributes
/// across all buckets.
#[derive(Clone)]
pub struct CoinSeries {
    pub name: String,
    pub color: Color32,
    pub values: Vec<f64>,
}

#[derive(Clone)]
pub struct ChartCache {
    pub data_hash: u64,
    /// Legend order, `Other` last
    pub coin_series: Vec<CoinSeries>,
    /// Cumulative line points, scaled into the volume range
    pub cumulative_points: Vec<[f64; 2]>,
    /// plotted value = real cumulative * cumulative_scale
    pub cumulative_scale: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Default)]
pub struct ChartView {
    cache: Option<ChartCache>,
}

impl ChartView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn show_chart(&mut self, ui: &mut egui::Ui, stacked: &StackedVolume) {
        let cache = self.calculate_chart_data(stacked);

        let legend = Legend::default().position(Corner::LeftTop);
        let bucket_count = stacked.buckets.len();

        Plot::new("total_volume_chart")
            .legend(legend)
            .height(CHART_CONFIG.chart_height)
            .custom_x_axes(vec![create_x_axis(stacked)])
            .custom_y_axes(vec![
                create_volume_axis(),
                create_cumulative_axis(cache.cumulative_scale),
            ])
            // Suppress the default hover label; the tooltip layer replaces it
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |_input| {
                // Integer bucket positions only, thinned to the configured
                // division count so long histories stay readable
                let step = (bucket_count / CHART_CONFIG.x_axis_divisions as usize).max(1);
                let mut marks = Vec::new();
                for idx in (0..bucket_count).step_by(step) {
                    marks.push(egui_plot::GridMark {
                        value: idx as f64,
                        step_size: step as f64,
                    });
                }
                marks
            })
            .y_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let divisions = CHART_CONFIG.y_axis_divisions.max(1);
                let step = (max - min) / divisions as f64;
                let mut marks = Vec::new();
                for i in 0..=divisions {
                    marks.push(egui_plot::GridMark {
                        value: min + step * i as f64,
                        step_size: step,
                    });
                }
                marks
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(cache.x_min..=cache.x_max);
                plot_ui.set_plot_bounds_y(cache.y_min..=cache.y_max);

                // --- LAYER RENDERING SYSTEM ---

                // 1. Create Context
                let ctx = LayerContext {
                    stacked,
                    cache: &cache,
                };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(StackedBarsLayer),
                    Box::new(CumulativeLineLayer),
                    Box::new(HoverTooltipLayer),
                ];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_chart_data(&mut self, stacked: &StackedVolume) -> ChartCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        stacked.buckets.len().hash(&mut hasher);
        stacked.coins.len().hash(&mut hasher);
        stacked.last_cumulative().to_bits().hash(&mut hasher);
        stacked.max_total().to_bits().hash(&mut hasher);
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.data_hash == current_hash {
                return cache.clone();
            }
        }

        let coin_series: Vec<CoinSeries> = stacked
            .coins
            .iter()
            .map(|coin| CoinSeries {
                name: coin.clone(),
                color: coin_color(coin),
                values: stacked
                    .buckets
                    .iter()
                    .map(|bucket| bucket.coin_value(coin))
                    .collect(),
            })
            .collect();

        // egui_plot has a single y scale, so the cumulative line is squeezed
        // into the volume range; the right-hand axis formats values back into
        // real dollars.
        let max_total = stacked.max_total();
        let max_cumulative = stacked
            .buckets
            .iter()
            .map(|b| b.cumulative.abs())
            .fold(0.0, f64::max);
        let cumulative_scale = if max_cumulative > 0.0 {
            max_total / max_cumulative
        } else {
            1.0
        };

        let cumulative_points: Vec<[f64; 2]> = stacked
            .buckets
            .iter()
            .enumerate()
            .map(|(idx, bucket)| [idx as f64, bucket.cumulative * cumulative_scale])
            .collect();

        let y_min = stacked
            .buckets
            .iter()
            .map(|b| b.total)
            .fold(0.0, f64::min);
        let y_max = max_total.max(
            cumulative_points
                .iter()
                .map(|p| p[1])
                .fold(0.0, f64::max),
        ) * 1.05;

        let cache = ChartCache {
            data_hash: current_hash,
            coin_series,
            cumulative_points,
            cumulative_scale,
            x_min: -0.6,
            x_max: stacked.buckets.len() as f64 - 0.4,
            y_min,
            y_max,
        };

        self.cache = Some(cache.clone());
        cache
    }
}

// Helpers retained locally for axis construction

fn create_x_axis(stacked: &StackedVolume) -> AxisHints<'static> {
    let labels: Vec<String> = stacked.buckets.iter().map(|b| b.day_label()).collect();
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round();
        if (grid_mark.value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    })
}

fn create_volume_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format_currency_compact(grid_mark.value))
        .placement(HPlacement::Left)
}

fn create_cumulative_axis(cumulative_scale: f64) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.cumulative_label)
        .formatter(move |grid_mark, _range| {
            if cumulative_scale > 0.0 {
                format_currency_compact(grid_mark.value / cumulative_scale)
            } else {
                String::new()
            }
        })
        .placement(HPlacement::Right)
}
