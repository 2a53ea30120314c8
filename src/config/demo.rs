//! Demo dataset configuration (WASM build and the demo-cache bin).

/// Coins included in the synthetic/demo dataset.
pub const DEMO_COINS: &[&str] = &[
    "BTC", "ETH", "SOL", "ARB", "AVAX", "DOGE", "LTC", "SUI", "OP", "APT", "ATOM", "INJ",
];

/// Number of daily buckets generated for the synthetic dataset.
pub const DEMO_DAYS: usize = 90;

/// First day of the synthetic dataset, as a backend-style day string.
pub const DEMO_DAY_ZERO: &str = "2023-06-01";
