use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Bar, BarChart, Line, PlotPoints, PlotUi};

use crate::config::{CHART_CONFIG, OTHER_LABEL, coin_color};
use crate::models::{StackedVolume, VolumeBucket};
use crate::ui::chart_view::ChartCache;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_currency_full;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub stacked: &'a StackedVolume,
    pub cache: &'a ChartCache,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. STACKED BARS LAYER (Per-coin daily volume)
// ============================================================================
pub struct StackedBarsLayer;

impl PlotLayer for StackedBarsLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // Each legend coin becomes one BarChart, stacked on everything built
        // before it. Legend order is ranking order with `Other` on top.
        let mut built: Vec<BarChart> = Vec::with_capacity(ctx.cache.coin_series.len());

        for series in &ctx.cache.coin_series {
            let bars: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .map(|(idx, &value)| {
                    Bar::new(idx as f64, value)
                        .width(CHART_CONFIG.bar_width_fraction)
                        .stroke(Stroke::NONE)
                })
                .collect();

            let chart = BarChart::new(series.name.clone(), bars).color(series.color);

            let chart = {
                let below: Vec<&BarChart> = built.iter().collect();
                chart.stack_on(&below)
            };
            built.push(chart);
        }

        for chart in built {
            plot_ui.bar_chart(chart);
        }
    }
}

// ============================================================================
// 2. CUMULATIVE LINE LAYER
// ============================================================================
pub struct CumulativeLineLayer;

impl PlotLayer for CumulativeLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.cache.cumulative_points.len() < 2 {
            return;
        }

        let points = PlotPoints::new(ctx.cache.cumulative_points.clone());
        plot_ui.line(
            Line::new(UI_TEXT.cumulative_label, points)
                .color(CHART_CONFIG.cumulative_line_color)
                .width(CHART_CONFIG.cumulative_line_width),
        );
    }
}

// ============================================================================
// 3. HOVER TOOLTIP LAYER (Per-bucket breakdown)
// ============================================================================
pub struct HoverTooltipLayer;

impl PlotLayer for HoverTooltipLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };

        // Hit test: nearest bucket index, within half a slot
        let idx = pointer.x.round();
        if (pointer.x - idx).abs() > 0.5 || idx < 0.0 {
            return;
        }
        let Some(bucket) = ctx.stacked.buckets.get(idx as usize) else {
            return;
        };

        let tooltip_layer = LayerId::new(Tooltip, Id::new("volume_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new(format!("tooltip_{}", bucket.time)),
            |ui: &mut Ui| render_bucket_tooltip(ui, bucket),
        );
    }
}

fn render_bucket_tooltip(ui: &mut Ui, bucket: &VolumeBucket) {
    ui.label(RichText::new(bucket.day_label()).strong());
    ui.label(format!("Total: {}", format_currency_full(bucket.total)));
    ui.separator();

    // Already in ranking order from the transform
    for (coin, value) in &bucket.coins {
        ui.horizontal(|ui| {
            ui.label(RichText::new(coin).color(coin_color(coin)));
            ui.label(format_currency_full(*value));
        });
    }
    if bucket.other != 0.0 {
        ui.horizontal(|ui| {
            ui.label(RichText::new(OTHER_LABEL).color(CHART_CONFIG.other_color));
            ui.label(format_currency_full(bucket.other));
        });
    }

    ui.separator();
    ui.label(format!(
        "{}: {}",
        UI_TEXT.cumulative_label,
        format_currency_full(bucket.cumulative)
    ));
}
