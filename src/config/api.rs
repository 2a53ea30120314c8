//! Stats-backend configuration constants and types.

/// Configuration for REST API limits and freshness
pub struct RestLimits {
    /// Maximum age of cached volume data before a refetch is forced (seconds)
    pub cache_acceptable_age_sec: i64,
    /// Minimum seconds between manual refreshes from the UI
    pub refresh_cooldown_sec: i64,
}

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct StatsApiConfig {
    /// Base URL of the pre-aggregated stats backend
    pub base_url: &'static str,
    /// Endpoint name of the fixed query this dashboard renders
    pub total_volume_endpoint: &'static str,
    /// JSON key the backend nests the row array under
    pub response_key: &'static str,
    pub limits: RestLimits,
    pub client: ClientDefaults,
}

pub const STATS_API: StatsApiConfig = StatsApiConfig {
    base_url: "https://d2v1fiwobg9w6.cloudfront.net",
    total_volume_endpoint: "total_volume",
    response_key: "chart_data",
    limits: RestLimits {
        // The backend aggregates daily, so a few hours of staleness is fine
        cache_acceptable_age_sec: 60 * 60 * 6,
        refresh_cooldown_sec: 5,
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        retries: 3,
        backoff_ms: 2_000,
    },
};

/// Convenience alias used by main() and the provider chain.
pub const VOLUME_CACHE_ACCEPTABLE_AGE_SECONDS: i64 = STATS_API.limits.cache_acceptable_age_sec;
