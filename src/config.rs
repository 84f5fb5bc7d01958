//! Session configuration, read from the environment

use std::time::Duration;

const DEFAULT_TIME_UNIT_MS: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Wall-clock length of one typing-delay unit
    pub time_unit: Duration,
    /// Seed for reply selection; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_millis(DEFAULT_TIME_UNIT_MS),
            seed: None,
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let time_unit = lookup("COMPANION_TIME_UNIT_MS")
            .and_then(|raw| parse_or_warn::<u64>("COMPANION_TIME_UNIT_MS", &raw))
            .map_or(defaults.time_unit, Duration::from_millis);

        let seed = lookup("COMPANION_SEED").and_then(|raw| parse_or_warn::<u64>("COMPANION_SEED", &raw));

        Self { time_unit, seed }
    }
}

/// Whether logs should be emitted as JSON. Read on its own so logging can be
/// installed before the rest of the config is parsed.
pub fn log_json_from_env() -> bool {
    std::env::var("COMPANION_LOG_JSON").is_ok_and(|raw| is_truthy(&raw))
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, raw: &str) -> Option<T> {
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = raw, "Ignoring invalid config value");
    }
    parsed
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
