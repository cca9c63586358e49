//! Environment-driven settings.
//!
//! | Variable | Default |
//! |---|---|
//! | `CART_CAPACITY` | 100 |
//! | `PER_ORDER_LIMIT` | 20 |
//! | `MAX_NAME_CHARS` | 20 |
//! | `CART_CLEAR_AT` | `00:00:00` (local time) |
//! | `STORE_BUFFER` | 32 |
//! | `FAVORITES_LOAD_TIMEOUT_MS` | 3000 |
//! | `SEED_DEFAULT_NAMES` | true |

use crate::cart::CartLimits;
use chrono::NaiveTime;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub limits: CartLimits,
    /// Local wall-clock time of the daily cart clear.
    pub clear_at: NaiveTime,
    /// Request queue size of the store actor.
    pub store_buffer: usize,
    pub favorites_load_timeout: Duration,
    pub seed_default_names: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: CartLimits::default(),
            clear_at: NaiveTime::MIN,
            store_buffer: 32,
            favorites_load_timeout: Duration::from_millis(3000),
            seed_default_names: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_buffer = try_load_positive(&lookup, "STORE_BUFFER", defaults.store_buffer)?;
        let limits = CartLimits {
            capacity: try_load_positive(&lookup, "CART_CAPACITY", defaults.limits.capacity)?,
            per_order: try_load_positive(&lookup, "PER_ORDER_LIMIT", defaults.limits.per_order)?,
            max_name_chars: try_load_positive(&lookup, "MAX_NAME_CHARS", defaults.limits.max_name_chars)?,
        };
        if limits.per_order > limits.capacity {
            warn!("PER_ORDER_LIMIT {} exceeds CART_CAPACITY {}", limits.per_order, limits.capacity);
            return Err(ConfigError::Invalid {
                key: "PER_ORDER_LIMIT".into(),
                value: limits.per_order.to_string(),
                reason: format!("must not exceed CART_CAPACITY ({})", limits.capacity),
            });
        }

        Ok(Self {
            limits,
            clear_at: try_load(&lookup, "CART_CLEAR_AT", defaults.clear_at)?,
            store_buffer,
            favorites_load_timeout: Duration::from_millis(try_load(
                &lookup,
                "FAVORITES_LOAD_TIMEOUT_MS",
                defaults.favorites_load_timeout.as_millis() as u64,
            )?),
            seed_default_names: try_load(&lookup, "SEED_DEFAULT_NAMES", defaults.seed_default_names)?,
        })
    }
}

/// Like [`try_load`] for counts that must be at least 1.
fn try_load_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    let value = try_load(lookup, key, default)?;
    if value == 0 {
        warn!("Invalid {key} value: 0");
        return Err(ConfigError::Invalid {
            key: key.to_string(),
            value: "0".into(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(value)
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return Ok(default);
    };
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key: key.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
