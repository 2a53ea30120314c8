//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit detailed serialization/deserialization logs.
    pub print_serde: bool,
    /// Emit request/retry logs for the stats API client.
    pub print_fetch: bool,
    /// Emit a summary after each stacked-volume rebuild (buckets, coins, totals).
    pub print_transform: bool,
    /// Emit UI interaction logs (e.g., manual refreshes, legend toggles).
    pub print_ui_interactions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_fetch: false,
    print_transform: false,
    print_ui_interactions: true,
};
