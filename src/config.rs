//! Configuration management

use anyhow::{Context, Result};

use crate::defaults;

/// Engine tunables. Every value has a default; deployments override via
/// environment variables.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Maximum waypoint-to-endpoint distance for anchor lookup (km)
    pub max_distance_km: f64,

    /// Average speed used by the travel time model (km/h)
    pub average_speed_kmh: f64,

    /// Safety margin required on top of the detour (minutes)
    pub minimum_buffer_minutes: f64,

    /// Fixed loading/unloading allowance per inserted stop (minutes)
    pub loading_allowance_minutes: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_distance_km: defaults::DEFAULT_MAX_DISTANCE_KM,
            average_speed_kmh: defaults::DEFAULT_AVERAGE_SPEED_KMH,
            minimum_buffer_minutes: defaults::DEFAULT_MINIMUM_BUFFER_MINUTES,
            loading_allowance_minutes: defaults::DEFAULT_LOADING_ALLOWANCE_MINUTES,
        }
    }
}

impl MatcherConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            max_distance_km: parse_var("MATCH_MAX_DISTANCE_KM", defaults::DEFAULT_MAX_DISTANCE_KM)?,
            average_speed_kmh: parse_var(
                "MATCH_AVERAGE_SPEED_KMH",
                defaults::DEFAULT_AVERAGE_SPEED_KMH,
            )?,
            minimum_buffer_minutes: parse_var(
                "MATCH_MIN_BUFFER_MINUTES",
                defaults::DEFAULT_MINIMUM_BUFFER_MINUTES,
            )?,
            loading_allowance_minutes: parse_var(
                "MATCH_LOADING_ALLOWANCE_MINUTES",
                defaults::DEFAULT_LOADING_ALLOWANCE_MINUTES,
            )?,
        })
    }
}

fn parse_var(name: &str, default: f64) -> Result<f64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
