//! Monotonic clock usable from both build targets.
//!
//! `std::time::Instant::now()` panics on wasm32-unknown-unknown, so the web
//! build substitutes `web_time`, which mirrors the std API.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
