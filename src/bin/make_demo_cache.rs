use anyhow::{Context, Result};
use itertools::Itertools;
use std::collections::HashSet;
use std::path::PathBuf;
use volume_board::config::{DEMO_COINS, DEMO_DAYS, VOLUME_CACHE_PATH, volume_cache_filename};
use volume_board::data::cache_file::CacheFile;

fn main() -> Result<()> {
    build_demo_cache()
}

/// Cut the full fetched cache down to a small deterministic demo dataset:
/// only whitelisted coins, only the most recent days.
fn build_demo_cache() -> Result<()> {
    let source_filename = volume_cache_filename();
    let source_path = PathBuf::from(VOLUME_CACHE_PATH).join(&source_filename);
    let cache = CacheFile::load_from_path(&source_path)
        .with_context(|| format!("Failed to load source cache {:?}", source_path))?;

    println!(
        "Loaded {} rows from {:?}",
        cache.data.rows.len(),
        source_path
    );

    let whitelist: HashSet<String> = DEMO_COINS.iter().map(|c| c.to_uppercase()).collect();

    let mut filtered = cache.data.clone();
    filtered
        .rows
        .retain(|row| whitelist.contains(&row.coin.to_uppercase()));

    // Keep only the trailing DEMO_DAYS worth of buckets. Rows arrive in
    // time order, so the cut point is the first row of the first kept day.
    let days: Vec<&str> = filtered
        .rows
        .iter()
        .map(|r| r.time.as_str())
        .dedup()
        .collect();
    if days.len() > DEMO_DAYS {
        let first_kept_day = days[days.len() - DEMO_DAYS].to_string();
        let cut = filtered
            .rows
            .iter()
            .position(|r| r.time == first_kept_day)
            .unwrap_or(0);
        filtered.rows.drain(..cut);
    }

    let output_cache = CacheFile::new(filtered, cache.version);

    let demo_filename = format!("demo_{}", source_filename);
    let output_path = PathBuf::from(VOLUME_CACHE_PATH).join(&demo_filename);
    output_cache.save_to_path(&output_path)?;

    println!(
        "✅ Demo cache written to {:?} with {} rows.",
        output_path,
        output_cache.data.rows.len()
    );
    Ok(())
}
