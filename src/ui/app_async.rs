use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::VolumeDataset;
use crate::ui::app::{AppError, VolumeBoardApp};
use crate::utils::app_time::now;

pub(super) struct AsyncFetchResult {
    pub(super) result: Result<(VolumeDataset, &'static str), AppError>,
    elapsed_time: Duration,
}

impl AsyncFetchResult {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl VolumeBoardApp {
    /// Kick off a refresh against the stats backend.
    /// At most one fetch is in flight; the cooldown gate rejects spam.
    pub(super) fn start_refresh(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }

        if !self.refresh_gate.ready() {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Refresh ignored: cooldown still active");
            }
            return;
        }
        self.refresh_gate.mark();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("🔄 Manual refresh requested");
        }

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("volume_refresh", run_refresh_fetch);

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::from_ready(run_refresh_fetch());

        self.fetch_promise = Some(promise);
    }

    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self.fetch_promise.as_ref().and_then(|promise| {
            promise.ready().map(|fetch_result| {
                let result = fetch_result.result.clone();
                let elapsed = fetch_result.elapsed_time();
                (result, elapsed)
            })
        });

        if let Some((result, elapsed)) = outcome {
            self.fetch_promise = None;

            match result {
                Ok((dataset, signature)) => {
                    self.accept_dataset(dataset, signature);

                    if elapsed.as_millis() > 100 {
                        #[cfg(debug_assertions)]
                        log::info!("✅ Refresh completed in {:.2}s", elapsed.as_secs_f32());
                    }
                }
                Err(error) => {
                    // A failed refresh only gates re-transformation; whatever
                    // chart data we already had stays on screen.
                    log::error!("❌ Refresh failed: {}", error);
                    self.data_state.last_error = Some(error);
                }
            }
        } else if self.fetch_promise.is_some() {
            ctx.request_repaint();
        }
    }
}

/// Runs on a background thread (native). Fetches from the API and writes the
/// cache back while it is at it, so the next cold start is instant.
#[cfg(not(target_arch = "wasm32"))]
fn run_refresh_fetch() -> AsyncFetchResult {
    use crate::data::api_version::StatsApiVersion;
    use crate::data::{CreateVolumeData, write_volume_data_locally};

    let fetch_start = now();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();

    let result = match runtime {
        Ok(rt) => {
            let provider = StatsApiVersion;
            match rt.block_on(provider.create_volume_data()) {
                Ok(dataset) => {
                    let signature = provider.signature();
                    if let Err(e) = write_volume_data_locally(signature, &dataset) {
                        log::warn!("⚠️  Failed to write cache after refresh: {:#}", e);
                    }
                    Ok((dataset, signature))
                }
                Err(e) => Err(AppError::FetchFailed(format!("{:#}", e))),
            }
        }
        Err(e) => Err(AppError::General(format!("Failed to build runtime: {}", e))),
    };

    AsyncFetchResult {
        result,
        elapsed_time: fetch_start.elapsed(),
    }
}

/// The WASM demo has no backend; a refresh just regenerates the synthetic
/// dataset synchronously.
#[cfg(target_arch = "wasm32")]
fn run_refresh_fetch() -> AsyncFetchResult {
    use crate::data::wasm_demo::synthetic_dataset;

    let fetch_start = now();
    AsyncFetchResult {
        result: Ok((synthetic_dataset(), "WASM Demo Data")),
        elapsed_time: fetch_start.elapsed(),
    }
}
