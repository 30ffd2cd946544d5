//! Env parsing and defaults for the feed.

use std::path::PathBuf;
use std::time::Duration;

use crate::data::FeedConfig;

const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Builds a feed config from the environment.
/// `FEED_INTERVAL_MS`, `FEED_OUTAGE_RATE`, and `FEED_SEED` are each optional;
/// invalid values warn and fall back to the default.
pub fn feed_config() -> FeedConfig {
    let mut config = FeedConfig {
        interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        ..FeedConfig::default()
    };

    if let Ok(raw) = std::env::var("FEED_INTERVAL_MS") {
        match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => config.interval = Duration::from_millis(ms),
            _ => eprintln!("meridian: invalid FEED_INTERVAL_MS {raw:?}, using default"),
        }
    }

    if let Ok(raw) = std::env::var("FEED_OUTAGE_RATE") {
        match raw.parse::<f64>() {
            Ok(rate) if (0.0..=1.0).contains(&rate) => config.outage_rate = rate,
            _ => eprintln!("meridian: invalid FEED_OUTAGE_RATE {raw:?}, using 0"),
        }
    }

    if let Ok(raw) = std::env::var("FEED_SEED") {
        match raw.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => eprintln!("meridian: invalid FEED_SEED {raw:?}, seeding from entropy"),
        }
    }

    config
}

/// Fixture replay path, if `MERIDIAN_FIXTURE` is set.
pub fn fixture_path() -> Option<PathBuf> {
    std::env::var("MERIDIAN_FIXTURE").ok().map(PathBuf::from)
}
