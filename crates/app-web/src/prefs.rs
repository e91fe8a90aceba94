//! Persisted preferences, all best-effort: storage that is full, blocked, or
//! absent reads as "unset" and writes are dropped silently.

use app_core::PerfTier;
use web_sys as web;

pub const PERF_TIER_KEY: &str = "perfTier";
pub const TOGGLE_SHOWN_KEY: &str = "perfToggleShown";

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn load_tier() -> Option<PerfTier> {
    storage()
        .and_then(|s| s.get_item(PERF_TIER_KEY).ok())
        .flatten()
        .as_deref()
        .and_then(PerfTier::from_str)
}

pub fn store_tier(tier: PerfTier) {
    if let Some(s) = storage() {
        let _ = s.set_item(PERF_TIER_KEY, tier.as_str());
    }
}

pub fn toggle_shown() -> bool {
    storage()
        .and_then(|s| s.get_item(TOGGLE_SHOWN_KEY).ok())
        .flatten()
        .as_deref()
        == Some("1")
}

pub fn set_toggle_shown() {
    if let Some(s) = storage() {
        let _ = s.set_item(TOGGLE_SHOWN_KEY, "1");
    }
}
