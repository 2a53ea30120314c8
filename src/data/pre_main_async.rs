// Async code to run in main before egui starts up

use crate::Cli;
use crate::data::{CreateVolumeData, VolumeDataset, get_volume_data_async};

#[cfg(target_arch = "wasm32")]
use crate::data::wasm_demo::WasmDemoData;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::VOLUME_CACHE_VERSION;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
#[cfg(not(target_arch = "wasm32"))]
use crate::data::api_version::StatsApiVersion;
#[cfg(not(target_arch = "wasm32"))]
use crate::data::serde_version::{LocalCacheVersion, check_local_data_validity};

// The async function to load data before the GUI starts at all (so can't rely on gui app state)
pub async fn fetch_volume_data(
    cache_acceptable_age_secs: i64,
    args: &Cli,
) -> (VolumeDataset, &'static str) {
    // Loading logic: If `check_local_data_validity` fails, the only choice is the API.
    // Otherwise both providers are available and we prioritize whichever the
    // user asked for (`--prefer-api` via cli).

    #[cfg(target_arch = "wasm32")]
    {
        let _ = args;
        let _ = cache_acceptable_age_secs;
    }

    #[cfg(not(target_arch = "wasm32"))]
    let providers: Vec<Box<dyn CreateVolumeData>> = {
        let api_first = args.prefer_api;
        match (
            api_first,
            check_local_data_validity(cache_acceptable_age_secs, VOLUME_CACHE_VERSION),
        ) {
            (false, Ok(_)) => vec![
                Box::new(LocalCacheVersion),
                Box::new(StatsApiVersion),
            ], // local first
            (true, Ok(_)) => vec![
                Box::new(StatsApiVersion),
                Box::new(LocalCacheVersion),
            ], // API first
            (_, Err(e)) => {
                log::warn!("⚠️  Local cache validation failed: {:#}", e);
                log::warn!("⚠️  Falling back to the Stats API...");
                vec![Box::new(StatsApiVersion)] // API only
            }
        }
    };

    #[cfg(target_arch = "wasm32")]
    let providers: Vec<Box<dyn CreateVolumeData>> = vec![Box::new(WasmDemoData)];

    let (dataset, source_signature) = match get_volume_data_async(&providers).await {
        Ok(result) => result,
        Err(e) => {
            // The UI renders an explicit error state for an empty dataset,
            // which beats dying before the window even opens.
            log::error!("All volume data providers failed: {:#}", e);
            (VolumeDataset::default(), "No Data")
        }
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "Successfully retrieved volume data using: {}.",
            source_signature
        );
        log::info!("Data fetch complete.");
    }
    (dataset, source_signature)
}
