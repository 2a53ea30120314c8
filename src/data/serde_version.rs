#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::VOLUME_CACHE_VERSION;
use crate::utils::time_utils::how_many_seconds_ago;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::data::{CreateVolumeData, VolumeDataset, cache_file::CacheFile};

pub fn check_local_data_validity(
    recency_required_secs: i64,
    version_required: f64,
) -> Result<()> {
    let full_path = CacheFile::default_cache_path();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!("Checking validity of local cache at {:?}...", full_path);
    }
    let cache = CacheFile::load_from_path(&full_path)?;

    // Check version
    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }

    // Check recency
    let seconds_ago = how_many_seconds_ago(cache.timestamp_ms);
    if seconds_ago > recency_required_secs {
        bail!(
            "Cache too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            recency_required_secs
        );
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "✅ Cache valid: v{}, {}s old (limit {}s)",
            cache.version,
            seconds_ago,
            recency_required_secs
        );
    }

    Ok(())
}

/// Write the fetched dataset to the binary cache file.
/// Uses bincode for much faster serialization than JSON.
pub fn write_volume_data_locally(
    source_signature: &'static str,
    dataset: &VolumeDataset,
) -> Result<()> {
    if source_signature != "Stats API" {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Skipping cache write (data not from the Stats API)");
        }
        return Ok(());
    }

    let full_path = CacheFile::default_cache_path();

    #[cfg(debug_assertions)]
    let start_time = DEBUG_FLAGS.print_serde.then(|| {
        log::info!("Writing cache to disk: {:?}...", full_path);
        std::time::Instant::now()
    });

    let cache = CacheFile::new(dataset.clone(), VOLUME_CACHE_VERSION);
    cache.save_to_path(&full_path)?;

    #[cfg(debug_assertions)]
    if let Some(start) = start_time {
        let elapsed = start.elapsed();
        let file_size = std::fs::metadata(&full_path)?.len();
        log::info!(
            "✅ Cache written: {:?} ({:.1} KB in {:.2}s)",
            full_path,
            file_size as f64 / 1024.0,
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}

/// Async wrapper for write_volume_data_locally.
/// Spawns a blocking task so the write never stalls the UI.
pub async fn write_volume_data_async(
    source_signature: &'static str,
    dataset: VolumeDataset,
) -> Result<()> {
    tokio::task::spawn_blocking(move || write_volume_data_locally(source_signature, &dataset))
        .await
        .context("Cache write task panicked")?
}

pub struct LocalCacheVersion;

#[async_trait]
impl CreateVolumeData for LocalCacheVersion {
    fn signature(&self) -> &'static str {
        "Local Cache"
    }

    async fn create_volume_data(&self) -> Result<VolumeDataset> {
        let full_path = CacheFile::default_cache_path();

        #[cfg(debug_assertions)]
        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading cache from: {:?}...", full_path);
            std::time::Instant::now()
        });

        let cache = tokio::task::spawn_blocking(move || CacheFile::load_from_path(&full_path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load cache file")?;

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            let elapsed = start.elapsed();
            log::info!(
                "✅ Cache loaded: {} rows in {:.2}s",
                cache.data.rows.len(),
                elapsed.as_secs_f64()
            );
        }

        Ok(cache.data)
    }
}
