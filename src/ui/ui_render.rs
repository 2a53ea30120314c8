use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, ScrollArea,
    TopBottomPanel, Window,
};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::format_currency_compact;
use crate::utils::time_utils::how_many_seconds_ago;

use super::app::VolumeBoardApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl VolumeBoardApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(10, 6));
        TopBottomPanel::top("top_panel")
            .frame(top_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_header(UI_TEXT.app_title);
                    ui.separator();
                    ui.label(
                        RichText::new(UI_TEXT.chart_heading).color(UI_CONFIG.colors.label),
                    );

                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            if self.is_fetching() {
                                ui.spinner();
                            } else {
                                let button = ui
                                    .button(UI_TEXT.refresh_button)
                                    .on_hover_text(UI_TEXT.help_refresh);
                                if button.clicked() {
                                    self.start_refresh();
                                }
                            }
                        },
                    );
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(14, 10));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(6.0);

                if let Some(stacked) = self.data_state.stacked.clone() {
                    ScrollArea::vertical().show(ui, |ui| {
                        self.chart_view.show_chart(ui, &stacked);

                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(UI_TEXT.footnote)
                                .small()
                                .color(UI_CONFIG.colors.footnote),
                        );
                    });
                } else if self.is_fetching() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.add_space(12.0);
                        ui.heading(UI_TEXT.loading_heading);
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new("Talking to the stats backend")
                                .color(Color32::from_gray(190)),
                        );
                    });
                } else if let Some(error) = &self.data_state.last_error {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(UI_TEXT.error_heading);
                        ui.add_space(10.0);
                        ui.label_error(format!("{}", error));
                        ui.add_space(20.0);
                        ui.label("Press R or click Refresh to try again.");
                    });
                } else {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.spinner();
                        ui.add_space(12.0);
                        ui.heading("Preparing chart...");
                    });
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Data source
                    ui.metric(
                        "📡 Source",
                        self.data_state.source_signature,
                        Color32::from_rgb(100, 200, 100),
                    );
                    ui.separator();

                    // 2. Dataset shape
                    if let Some(stacked) = &self.data_state.stacked {
                        ui.metric(
                            "📊 Days",
                            &format!("{}", stacked.buckets.len()),
                            Color32::from_rgb(180, 200, 255),
                        );
                        ui.metric(
                            "🪙 Coins",
                            &format!("{}", self.data_state.dataset.unique_coin_names().len()),
                            Color32::from_rgb(180, 200, 255),
                        );
                        ui.separator();

                        // 3. Headline number
                        ui.metric(
                            "Σ Cumulative",
                            &format_currency_compact(stacked.last_cumulative()),
                            UI_CONFIG.colors.heading,
                        );
                        ui.separator();
                    }

                    // 4. Freshness
                    if self.data_state.fetched_at_ms > 0 {
                        let age = how_many_seconds_ago(self.data_state.fetched_at_ms);
                        let (text, color) = if age < 60 {
                            (format!("{}s ago", age), Color32::from_rgb(150, 255, 150))
                        } else if age < 3600 {
                            (format!("{}m ago", age / 60), Color32::from_rgb(200, 200, 100))
                        } else {
                            (format!("{}h ago", age / 3600), Color32::from_rgb(255, 150, 100))
                        };
                        ui.metric("🕒 Fetched", &text, color);
                    }

                    // 5. Transient state
                    if self.is_fetching() {
                        ui.separator();
                        ui.label_warning("⚙ Refreshing...");
                    } else if self.data_state.last_error.is_some()
                        && self.data_state.stacked.is_some()
                    {
                        // Fetch failed but the stale chart is still up
                        ui.separator();
                        ui.label_warning("⚠ Last refresh failed, showing cached data");
                    }
                });
            });
    }

    fn render_shortcut_rows(ui: &mut eframe::egui::Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new("⌨️ Keyboard Shortcuts")
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                let shortcuts = [
                    ("R", UI_TEXT.help_refresh),
                    ("H", UI_TEXT.help_toggle_help),
                    ("Esc", "Close this panel"),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let mut refresh_requested = false;
        ctx.input(|i| {
            if i.key_pressed(Key::R) {
                refresh_requested = true;
            }

            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
        });

        if refresh_requested {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("⌨️ Refresh via keyboard shortcut");
            }
            self.start_refresh();
        }
    }
}
