//! CLI configuration loaded from process environment variables.
use std::env;
use std::time::Duration;

use lootlens_core::DEFAULT_SNAPSHOT_TTL;

const DEFAULT_TICK_MS: u64 = 250;

/// Runtime knobs for the demonstration loop.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Cadence of the coordination loop.
    pub tick: Duration,
    /// TTL handed to every category cache.
    pub snapshot_ttl: Duration,
    /// Start with collection enabled instead of waiting for the toggle key.
    pub start_enabled: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            snapshot_ttl: DEFAULT_SNAPSHOT_TTL,
            start_enabled: true,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOOTLENS_TICK_MS` - Coordination loop cadence (default: 250)
    /// - `LOOTLENS_TTL_MS` - Category cache TTL (default: 1000)
    /// - `LOOTLENS_START_ENABLED` - Collect from the first tick (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("LOOTLENS_TICK_MS") {
            config.tick = Duration::from_millis(millis.max(1));
        }
        if let Some(millis) = read_env::<u64>("LOOTLENS_TTL_MS") {
            config.snapshot_ttl = Duration::from_millis(millis);
        }
        if let Some(enabled) = read_env::<bool>("LOOTLENS_START_ENABLED") {
            config.start_enabled = enabled;
        }

        config
    }
}

fn read_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| raw.parse().ok())
}
