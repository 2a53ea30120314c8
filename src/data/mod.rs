// Data loading, caching, and the provider chain
#[cfg(not(target_arch = "wasm32"))]
pub mod api_version;
pub mod cache_file;
pub mod pre_main_async;
#[cfg(not(target_arch = "wasm32"))]
pub mod serde_version;
// Compiled on native too: only the wasm build ships it, but native
// `cargo test` is what checks the generator's determinism and shape.
pub mod wasm_demo;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Re-export commonly used items
pub use pre_main_async::fetch_volume_data;
#[cfg(not(target_arch = "wasm32"))]
pub use serde_version::{write_volume_data_async, write_volume_data_locally};

/// One row per coin per time bucket, as delivered by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TotalVolumeRow {
    pub time: String,
    pub coin: String,
    pub total_volume: f64,
}

#[async_trait]
pub trait CreateVolumeData {
    // Either produce a dataset OR return an anyhow::error
    async fn create_volume_data(&self) -> Result<VolumeDataset>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_volume_data_async(
    implementations: &[Box<dyn CreateVolumeData>],
) -> Result<(VolumeDataset, &'static str)> {
    for imp in implementations {
        match imp.create_volume_data().await {
            Ok(data) => {
                let signature = imp.signature();
                return Ok((data, signature));
            }
            Err(e) => {
                log::info!("Error with an async implementation: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All async implementations failed to create data"))
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct VolumeDataset {
    pub name: String, // Metadata e.g. "Stats API total_volume".
    pub version: f64,
    pub rows: Vec<TotalVolumeRow>,
}

impl VolumeDataset {
    pub fn new(name: impl Into<String>, rows: Vec<TotalVolumeRow>) -> Self {
        Self {
            name: name.into(),
            version: crate::config::VOLUME_CACHE_VERSION,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn unique_coin_names(&self) -> Vec<String> {
        // BTreeSet maintains sorted order and ensures uniqueness
        self.rows
            .iter()
            .map(|row| row.coin.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_deserialize_from_backend_payload() {
        let payload = r#"
            [
                {"time": "2023-01-01", "coin": "BTC", "total_volume": 1250000.5},
                {"time": "2023-01-01", "coin": "ETH", "total_volume": 830000.0}
            ]
        "#;
        let rows: Vec<TotalVolumeRow> = serde_json::from_str(payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].coin, "BTC");
        assert_eq!(rows[0].total_volume, 1_250_000.5);
    }

    #[test]
    fn unique_coin_names_are_sorted_and_deduped() {
        let dataset = VolumeDataset::new(
            "test",
            vec![
                TotalVolumeRow {
                    time: "2023-01-01".into(),
                    coin: "ETH".into(),
                    total_volume: 1.0,
                },
                TotalVolumeRow {
                    time: "2023-01-02".into(),
                    coin: "BTC".into(),
                    total_volume: 2.0,
                },
                TotalVolumeRow {
                    time: "2023-01-02".into(),
                    coin: "ETH".into(),
                    total_volume: 3.0,
                },
            ],
        );
        assert_eq!(dataset.unique_coin_names(), vec!["BTC", "ETH"]);
    }
}
