//! Synthetic dataset used by the WASM demo build, which cannot block on a
//! network fetch before the app starts.

use anyhow::Result;
use async_trait::async_trait;

use crate::config::{DEMO_COINS, DEMO_DAYS, DEMO_DAY_ZERO};
use crate::data::{CreateVolumeData, TotalVolumeRow, VolumeDataset};
use crate::utils::time_utils::{TimeUtils, epoch_ms_to_day_string, parse_day_to_epoch_ms};

pub struct WasmDemoData;

#[async_trait]
impl CreateVolumeData for WasmDemoData {
    fn signature(&self) -> &'static str {
        "WASM Demo Data"
    }

    async fn create_volume_data(&self) -> Result<VolumeDataset> {
        Ok(synthetic_dataset())
    }
}

/// Deterministic stand-in for the backend payload: a few months of daily
/// volume with a plausible dominance curve across the demo coins. No RNG,
/// so the demo chart renders identically on every load.
pub fn synthetic_dataset() -> VolumeDataset {
    let day_zero_ms = parse_day_to_epoch_ms(DEMO_DAY_ZERO).unwrap_or(0);

    let mut rows = Vec::with_capacity(DEMO_DAYS * DEMO_COINS.len());
    for day in 0..DEMO_DAYS {
        let time = epoch_ms_to_day_string(day_zero_ms + day as i64 * TimeUtils::MS_IN_D);
        for (rank, coin) in DEMO_COINS.iter().enumerate() {
            // Dominance falls off with rank; a slow sine wave keeps the
            // stacks visibly moving day to day.
            let base = 25_000_000.0 / (rank + 1) as f64;
            let wave = 1.0 + 0.35 * ((day + rank) as f64 * 0.37).sin();
            rows.push(TotalVolumeRow {
                time: time.clone(),
                coin: (*coin).to_string(),
                total_volume: base * wave,
            });
        }
    }

    VolumeDataset::new("Synthetic demo volume", rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_dataset_is_deterministic() {
        let a = synthetic_dataset();
        let b = synthetic_dataset();
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn synthetic_dataset_covers_all_demo_coins_daily() {
        let dataset = synthetic_dataset();
        assert_eq!(dataset.rows.len(), DEMO_DAYS * DEMO_COINS.len());
        assert!(dataset.rows.iter().all(|r| r.total_volume > 0.0));
        assert_eq!(dataset.unique_coin_names().len(), DEMO_COINS.len());
    }
}
