//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honoured for local development.

use crate::time_utils::{parse_date, DateRange};
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Range used when a request omits `start_date` / `end_date`
    pub default_range: DateRange,
    /// `Cache-Control` max-age for successful responses
    pub cache_max_age_secs: u32,
    /// Optional roster file replacing the bundled roster
    pub roster_path: Option<String>,
    /// Longest date range a request may ask for, in days
    pub max_range_days: i64,
}

const DEFAULT_START_DATE: &str = "2024-01-01";
const DEFAULT_END_DATE: &str = "2026-01-01";
const DEFAULT_MAX_RANGE_DAYS: i64 = 1096;

impl Config {
    /// Config for tests: bundled roster and the default date range.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            default_range: DateRange::parse(DEFAULT_START_DATE, DEFAULT_END_DATE)
                .expect("default dates are valid"),
            cache_max_age_secs: 300,
            roster_path: None,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let start = env::var("DEFAULT_START_DATE").unwrap_or_else(|_| DEFAULT_START_DATE.into());
        let end = env::var("DEFAULT_END_DATE").unwrap_or_else(|_| DEFAULT_END_DATE.into());
        let default_range = DateRange::new(
            parse_date("DEFAULT_START_DATE", &start)
                .map_err(|e| ConfigError::Invalid("DEFAULT_START_DATE", e.to_string()))?,
            parse_date("DEFAULT_END_DATE", &end)
                .map_err(|e| ConfigError::Invalid("DEFAULT_END_DATE", e.to_string()))?,
        );

        let max_range_days = env::var("MAX_RANGE_DAYS")
            .ok()
            .map(|v| v.parse::<i64>())
            .transpose()
            .map_err(|_| ConfigError::Invalid("MAX_RANGE_DAYS", "not an integer".into()))?
            .unwrap_or(DEFAULT_MAX_RANGE_DAYS);
        if default_range.num_days() > max_range_days {
            return Err(ConfigError::Invalid(
                "MAX_RANGE_DAYS",
                format!(
                    "default range spans {} days, more than {}",
                    default_range.num_days(),
                    max_range_days
                ),
            ));
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            default_range,
            cache_max_age_secs: env::var("CACHE_MAX_AGE_SECS")
                .ok()
                .map(|v| v.parse())
                .transpose()
                .map_err(|_| ConfigError::Invalid("CACHE_MAX_AGE_SECS", "not an integer".into()))?
                .unwrap_or(300),
            roster_path: env::var("ROSTER_PATH").ok().filter(|p| !p.trim().is_empty()),
            max_range_days,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    Invalid(&'static str, String),
}
