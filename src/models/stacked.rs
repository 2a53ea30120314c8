use std::collections::HashMap;

use crate::config::{MAX_STACKED_COINS, OTHER_LABEL};
use crate::data::TotalVolumeRow;
use crate::utils::time_utils::{epoch_ms_to_day_string, parse_day_to_epoch_ms};

// ============================================================================
// VolumeBucket: one merged entry per distinct `time` value
// ============================================================================

/// All per-coin volume for a single time bucket, reshaped for stacking.
///
/// `coins` holds the bucket's dominant coins ranked by absolute volume
/// descending (at most [`MAX_STACKED_COINS`] entries); everything below the
/// cut is summed into `other`.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeBucket {
    /// Raw bucket label as delivered by the backend (e.g. "2023-01-01")
    pub time: String,
    /// Parsed UTC timestamp of the bucket, if the label was parseable
    pub time_ms: Option<i64>,
    /// Sum across all coins for this bucket, `other` included
    pub total: f64,
    /// Running total across all rows processed so far, in input order
    pub cumulative: f64,
    /// Top coins for this bucket: (coin, volume), ranked by |volume| desc
    pub coins: Vec<(String, f64)>,
    /// Aggregate of every coin outside the top ten
    pub other: f64,
}

impl VolumeBucket {
    /// Value this bucket contributes to the stack segment of `coin`.
    /// Zero when the coin did not make this bucket's top ten.
    pub fn coin_value(&self, coin: &str) -> f64 {
        if coin == OTHER_LABEL {
            return self.other;
        }
        self.coins
            .iter()
            .find(|(name, _)| name == coin)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// Display label for this bucket's day. The backend sends either bare
    /// dates or full ISO timestamps; both collapse to `YYYY-MM-DD` here.
    /// Unparseable labels pass through unchanged.
    pub fn day_label(&self) -> String {
        match self.time_ms {
            Some(ms) => epoch_ms_to_day_string(ms),
            None => self.time.clone(),
        }
    }
}

// ============================================================================
// StackedVolume: the chart-ready dataset
// ============================================================================

/// Output of [`build_stacked_volume`]: ordered buckets plus the legend set.
///
/// Rebuilt from scratch on every successful fetch; the UI replaces its copy
/// wholesale.
#[derive(Debug, Clone, Default)]
pub struct StackedVolume {
    /// One entry per distinct `time`, in first-seen input order
    pub buckets: Vec<VolumeBucket>,
    /// Union of every bucket's top coins in first-seen order, with the
    /// synthetic `Other` label appended last
    pub coins: Vec<String>,
}

impl StackedVolume {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Cumulative volume after the last processed row.
    pub fn last_cumulative(&self) -> f64 {
        self.buckets.last().map(|b| b.cumulative).unwrap_or(0.0)
    }

    /// Largest per-bucket total, used to fit the y axis.
    pub fn max_total(&self) -> f64 {
        self.buckets.iter().map(|b| b.total).fold(0.0, f64::max)
    }
}

struct BucketAccum {
    time: String,
    total: f64,
    cumulative: f64,
    // Vec keeps first-seen coin order so the stable tail-sort can
    // tie-break on insertion order
    coins: Vec<(String, f64)>,
}

/// Reshape raw backend rows into the chart-ready structure.
///
/// Pass 1 walks the rows in input order, accumulating the global running
/// total and grouping volume by coin within each bucket. Pass 2 ranks each
/// bucket's coins by absolute volume, keeps the top [`MAX_STACKED_COINS`],
/// and folds the remainder into `Other`.
///
/// Input order determines both bucket order and cumulative-sum order; the
/// transform does not sort by time. NaN volumes propagate through the sums
/// unchecked, matching the backend contract that rows are well-formed.
pub fn build_stacked_volume(rows: &[TotalVolumeRow]) -> StackedVolume {
    let mut accums: Vec<BucketAccum> = Vec::new();
    let mut index_by_time: HashMap<&str, usize> = HashMap::new();
    let mut cumulative = 0.0;

    // Pass 1: group by time, sum by coin, carry the running total
    for row in rows {
        cumulative += row.total_volume;

        let idx = match index_by_time.get(row.time.as_str()) {
            Some(&idx) => idx,
            None => {
                accums.push(BucketAccum {
                    time: row.time.clone(),
                    total: 0.0,
                    cumulative: 0.0,
                    coins: Vec::new(),
                });
                index_by_time.insert(row.time.as_str(), accums.len() - 1);
                accums.len() - 1
            }
        };

        let accum = &mut accums[idx];
        accum.total += row.total_volume;
        accum.cumulative = cumulative;
        match accum.coins.iter_mut().find(|(name, _)| name == &row.coin) {
            Some((_, volume)) => *volume += row.total_volume,
            None => accum.coins.push((row.coin.clone(), row.total_volume)),
        }
    }

    // Pass 2: rank per bucket, cut the tail into Other, collect the legend
    let mut legend: Vec<String> = Vec::new();
    let buckets: Vec<VolumeBucket> = accums
        .into_iter()
        .map(|accum| {
            let mut ranked = accum.coins;
            // Stable sort: equal magnitudes keep insertion order.
            // total_cmp keeps NaN ordering deterministic instead of panicking.
            ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

            let tail = if ranked.len() > MAX_STACKED_COINS {
                ranked.split_off(MAX_STACKED_COINS)
            } else {
                Vec::new()
            };
            let other: f64 = tail.iter().map(|(_, volume)| volume).sum();

            for (coin, _) in &ranked {
                if !legend.iter().any(|existing| existing == coin) {
                    legend.push(coin.clone());
                }
            }

            VolumeBucket {
                time_ms: parse_day_to_epoch_ms(&accum.time),
                time: accum.time,
                total: accum.total,
                cumulative: accum.cumulative,
                coins: ranked,
                other,
            }
        })
        .collect();

    legend.push(OTHER_LABEL.to_string());

    StackedVolume {
        buckets,
        coins: legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(time: &str, coin: &str, total_volume: f64) -> TotalVolumeRow {
        TotalVolumeRow {
            time: time.to_string(),
            coin: coin.to_string(),
            total_volume,
        }
    }

    #[test]
    fn worked_example_from_two_rows() {
        let rows = vec![row("2023-01-01", "A", 5.0), row("2023-01-01", "B", 3.0)];
        let stacked = build_stacked_volume(&rows);

        assert_eq!(stacked.buckets.len(), 1);
        let bucket = &stacked.buckets[0];
        assert_eq!(bucket.coin_value("A"), 5.0);
        assert_eq!(bucket.coin_value("B"), 3.0);
        assert_eq!(bucket.other, 0.0);
        assert_eq!(bucket.total, 8.0);
        assert_eq!(bucket.cumulative, 8.0);
        assert_eq!(stacked.coins, vec!["A", "B", "Other"]);
    }

    #[test]
    fn per_coin_sum_plus_other_equals_total() {
        // 14 coins on one day forces a tail
        let rows: Vec<TotalVolumeRow> = (0..14)
            .map(|i| row("2023-01-01", &format!("C{i:02}"), (i + 1) as f64))
            .collect();
        let stacked = build_stacked_volume(&rows);

        for bucket in &stacked.buckets {
            let coin_sum: f64 = bucket.coins.iter().map(|(_, v)| v).sum();
            assert!(
                (coin_sum + bucket.other - bucket.total).abs() < 1e-9,
                "per-coin sum + Other must equal total"
            );
        }
    }

    #[test]
    fn at_most_ten_coins_per_bucket() {
        let rows: Vec<TotalVolumeRow> = (0..25)
            .map(|i| row("2023-01-01", &format!("C{i:02}"), (i + 1) as f64))
            .collect();
        let stacked = build_stacked_volume(&rows);

        let bucket = &stacked.buckets[0];
        assert_eq!(bucket.coins.len(), MAX_STACKED_COINS);
        // Tail is coins 1..=15, top ten are coins 16..=25
        assert_eq!(bucket.other, (1..=15).sum::<i32>() as f64);
        assert_eq!(bucket.total, (1..=25).sum::<i32>() as f64);
    }

    #[test]
    fn fewer_than_ten_coins_leaves_other_zero() {
        let rows = vec![
            row("2023-01-01", "A", 1.0),
            row("2023-01-01", "B", 2.0),
            row("2023-01-02", "A", 4.0),
        ];
        let stacked = build_stacked_volume(&rows);
        assert!(stacked.buckets.iter().all(|b| b.other == 0.0));
    }

    #[test]
    fn cumulative_of_last_bucket_equals_grand_total() {
        let rows = vec![
            row("2023-01-01", "A", 5.0),
            row("2023-01-01", "B", 3.0),
            row("2023-01-02", "A", 2.0),
            row("2023-01-02", "C", 10.0),
        ];
        let stacked = build_stacked_volume(&rows);
        assert_eq!(stacked.last_cumulative(), 20.0);
        assert_eq!(stacked.buckets[0].cumulative, 8.0);
        assert_eq!(stacked.buckets[1].cumulative, 20.0);
    }

    #[test]
    fn duplicate_time_coin_rows_accumulate() {
        let rows = vec![
            row("2023-01-01", "A", 5.0),
            row("2023-01-01", "A", 2.5),
        ];
        let stacked = build_stacked_volume(&rows);
        let bucket = &stacked.buckets[0];
        assert_eq!(bucket.coin_value("A"), 7.5);
        assert_eq!(bucket.total, 7.5);
    }

    #[test]
    fn ranking_uses_absolute_magnitude() {
        let mut rows = vec![row("2023-01-01", "NEG", -100.0)];
        for i in 0..10 {
            rows.push(row("2023-01-01", &format!("P{i}"), 10.0 + i as f64));
        }
        let stacked = build_stacked_volume(&rows);

        let bucket = &stacked.buckets[0];
        // -100 has the largest magnitude, so it must survive the cut
        assert_eq!(bucket.coins[0].0, "NEG");
        assert_eq!(bucket.coins.len(), MAX_STACKED_COINS);
        // The smallest positive coin (P0 at 10.0) falls into Other
        assert_eq!(bucket.other, 10.0);
    }

    #[test]
    fn equal_magnitudes_keep_insertion_order() {
        let rows: Vec<TotalVolumeRow> = (0..12)
            .map(|i| row("2023-01-01", &format!("T{i:02}"), 7.0))
            .collect();
        let stacked = build_stacked_volume(&rows);

        let bucket = &stacked.buckets[0];
        let kept: Vec<&str> = bucket.coins.iter().map(|(c, _)| c.as_str()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("T{i:02}")).collect();
        assert_eq!(kept, expected.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(bucket.other, 14.0); // T10 + T11
    }

    #[test]
    fn legend_is_union_of_top_coins_in_first_seen_order() {
        let rows = vec![
            row("2023-01-01", "A", 5.0),
            row("2023-01-02", "B", 9.0),
            row("2023-01-02", "A", 1.0),
        ];
        let stacked = build_stacked_volume(&rows);
        assert_eq!(stacked.coins, vec!["A", "B", "Other"]);
    }

    #[test]
    fn bucket_order_follows_input_not_chronology() {
        let rows = vec![
            row("2023-01-02", "A", 1.0),
            row("2023-01-01", "A", 2.0),
        ];
        let stacked = build_stacked_volume(&rows);
        assert_eq!(stacked.buckets[0].time, "2023-01-02");
        assert_eq!(stacked.buckets[1].time, "2023-01-01");
    }

    #[test]
    fn empty_input_yields_only_the_other_label() {
        let stacked = build_stacked_volume(&[]);
        assert!(stacked.is_empty());
        assert_eq!(stacked.coins, vec!["Other"]);
        assert_eq!(stacked.last_cumulative(), 0.0);
    }

    #[test]
    fn iso_timestamp_labels_collapse_to_bare_dates() {
        let rows = vec![
            row("2023-01-01T00:00:00", "A", 5.0),
            row("2023-01-02", "A", 2.0),
        ];
        let stacked = build_stacked_volume(&rows);
        assert_eq!(stacked.buckets[0].day_label(), "2023-01-01");
        assert_eq!(stacked.buckets[1].day_label(), "2023-01-02");
    }

    #[test]
    fn unparseable_time_labels_still_bucket() {
        let rows = vec![row("garbage-day", "A", 3.0)];
        let stacked = build_stacked_volume(&rows);
        assert_eq!(stacked.buckets.len(), 1);
        assert!(stacked.buckets[0].time_ms.is_none());
        assert_eq!(stacked.buckets[0].day_label(), "garbage-day");
        assert_eq!(stacked.buckets[0].total, 3.0);
    }
}
