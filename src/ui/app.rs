use eframe::{Frame, egui};
use poll_promise::Promise;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::STATS_API;
use crate::data::VolumeDataset;
use crate::models::{StackedVolume, build_stacked_volume};
use crate::ui::app_async::AsyncFetchResult;
use crate::ui::chart_view::ChartView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, now};
use crate::utils::time_utils::local_now_as_timestamp_ms;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// No data is available for the operation
    DataNotAvailable,
    /// The fetch from the stats backend failed
    FetchFailed(String),
    /// General error with a message
    General(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DataNotAvailable => write!(f, "No data available"),
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// The single shared in-memory result, replaced wholesale on each fetch.
#[derive(Default)]
pub struct DataState {
    pub dataset: VolumeDataset,
    /// Chart-ready data; only rebuilt after a successful fetch
    pub stacked: Option<Arc<StackedVolume>>,
    pub source_signature: &'static str,
    /// Wall-clock timestamp of the last successful fetch (ms)
    pub fetched_at_ms: i64,
    pub last_error: Option<AppError>,
}

/// Cooldown gate so refresh-spamming cannot hammer the backend.
pub struct RefreshGate {
    last_refresh: Option<AppInstant>,
    cooldown: Duration,
}

impl Default for RefreshGate {
    fn default() -> Self {
        Self {
            last_refresh: None,
            cooldown: Duration::from_secs(STATS_API.limits.refresh_cooldown_sec as u64),
        }
    }
}

impl RefreshGate {
    #[cfg(test)]
    fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            last_refresh: None,
            cooldown,
        }
    }

    pub fn ready(&self) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => last.elapsed() >= self.cooldown,
        }
    }

    pub fn mark(&mut self) {
        self.last_refresh = Some(now());
    }
}

pub struct VolumeBoardApp {
    pub(super) data_state: DataState,
    pub(super) chart_view: ChartView,
    pub(super) fetch_promise: Option<Promise<AsyncFetchResult>>,
    pub(super) refresh_gate: RefreshGate,
    pub(super) show_help: bool,
}

impl VolumeBoardApp {
    pub fn new(
        cc: &eframe::CreationContext,
        dataset: VolumeDataset,
        source_signature: &'static str,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            data_state: DataState {
                dataset,
                stacked: None,
                source_signature,
                fetched_at_ms: local_now_as_timestamp_ms(),
                last_error: None,
            },
            chart_view: ChartView::new(),
            fetch_promise: None,
            refresh_gate: RefreshGate::default(),
            show_help: false,
        };
        app.rebuild_stacked();
        app
    }

    /// Accept a freshly fetched dataset: replace the old one wholesale and
    /// re-run the transform.
    pub(super) fn accept_dataset(
        &mut self,
        dataset: VolumeDataset,
        source_signature: &'static str,
    ) {
        self.data_state.dataset = dataset;
        self.data_state.source_signature = source_signature;
        self.data_state.fetched_at_ms = local_now_as_timestamp_ms();
        self.data_state.last_error = None;
        self.rebuild_stacked();
    }

    /// Rebuild the chart-ready structure from the current dataset.
    /// Only called after a dataset actually changed; a failed refresh never
    /// reaches this, so the previous chart stays on screen.
    pub(super) fn rebuild_stacked(&mut self) {
        if self.data_state.dataset.is_empty() {
            self.data_state.last_error = Some(AppError::DataNotAvailable);
            return;
        }

        let stacked = build_stacked_volume(&self.data_state.dataset.rows);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_transform {
            log::info!(
                "Stacked volume rebuilt: {} buckets, {} legend coins, cumulative {:.0}",
                stacked.buckets.len(),
                stacked.coins.len(),
                stacked.last_cumulative()
            );
        }

        self.data_state.stacked = Some(Arc::new(stacked));
        self.chart_view.clear_cache();
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}

impl eframe::App for VolumeBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_global_shortcuts(ctx);
        self.poll_fetch(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_help_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_gate_is_ready() {
        let gate = RefreshGate::default();
        assert!(gate.ready());
    }

    #[test]
    fn marked_gate_blocks_until_cooldown_elapses() {
        let mut gate = RefreshGate::with_cooldown(Duration::from_secs(3600));
        gate.mark();
        assert!(!gate.ready());
    }

    #[test]
    fn zero_cooldown_never_blocks() {
        let mut gate = RefreshGate::with_cooldown(Duration::ZERO);
        gate.mark();
        assert!(gate.ready());
    }
}
