//! HTTP provider for the pre-aggregated stats backend.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::STATS_API;
use crate::data::{CreateVolumeData, TotalVolumeRow, VolumeDataset};

pub struct StatsApiVersion;

#[async_trait]
impl CreateVolumeData for StatsApiVersion {
    fn signature(&self) -> &'static str {
        "Stats API"
    }

    async fn create_volume_data(&self) -> Result<VolumeDataset> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(STATS_API.client.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        let url = format!(
            "{}/{}",
            STATS_API.base_url, STATS_API.total_volume_endpoint
        );

        let mut last_error = None;
        for attempt in 0..=STATS_API.client.retries {
            if attempt > 0 {
                let backoff = Duration::from_millis(STATS_API.client.backoff_ms * attempt as u64);
                log::warn!(
                    "Retrying {} in {:?} (attempt {}/{})",
                    url,
                    backoff,
                    attempt,
                    STATS_API.client.retries
                );
                tokio::time::sleep(backoff).await;
            }

            match fetch_total_volume(&client, &url).await {
                Ok(dataset) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_fetch {
                        log::info!(
                            "✅ Fetched {} rows from {} on attempt {}",
                            dataset.rows.len(),
                            url,
                            attempt + 1
                        );
                    }
                    return Ok(dataset);
                }
                Err(e) => {
                    log::warn!("Fetch attempt {} failed: {:#}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Stats API fetch failed with no attempts made")))
    }
}

async fn fetch_total_volume(client: &reqwest::Client, url: &str) -> Result<VolumeDataset> {
    let response = client
        .get(url)
        .send()
        .await
        .context("Request to stats backend failed")?
        .error_for_status()
        .context("Stats backend returned an error status")?;

    let body: serde_json::Value = response
        .json()
        .await
        .context("Stats response was not valid JSON")?;

    let rows = parse_chart_data(&body)?;
    Ok(VolumeDataset::new(
        format!("Stats API {}", STATS_API.total_volume_endpoint),
        rows,
    ))
}

/// The backend nests the row array under a fixed key, e.g.
/// `{ "chart_data": [{"time": ..., "coin": ..., "total_volume": ...}, ...] }`.
fn parse_chart_data(body: &serde_json::Value) -> Result<Vec<TotalVolumeRow>> {
    let rows_value = body
        .get(STATS_API.response_key)
        .ok_or_else(|| anyhow!("Response missing '{}' key", STATS_API.response_key))?;

    serde_json::from_value(rows_value.clone()).context("Malformed rows in stats response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_chart_data() {
        let body = json!({
            "chart_data": [
                {"time": "2023-01-01", "coin": "BTC", "total_volume": 42.0}
            ]
        });
        let rows = parse_chart_data(&body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].coin, "BTC");
    }

    #[test]
    fn missing_key_is_an_error() {
        let body = json!({"wrong_key": []});
        assert!(parse_chart_data(&body).is_err());
    }

    #[test]
    fn malformed_rows_are_an_error() {
        let body = json!({"chart_data": [{"time": "2023-01-01"}]});
        assert!(parse_chart_data(&body).is_err());
    }
}
