//! `gildedrose-observability` — log output for code that drives the inventory.
//!
//! The inventory crate only emits `tracing` events (per-item aging, resets,
//! clamps). Nothing is printed until a caller installs a subscriber here.

pub mod tracing;

/// Install the JSON subscriber filtered by `RUST_LOG`.
///
/// Test binaries call this from several tests; only the first call installs.
pub fn init() {
    tracing::init();
}
