use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_SESSION_PATH: &str = "skfood_session.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
}

/// Runtime settings, read from the environment with logged defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub channel_buffer: usize,
    pub payment_delay: Duration,
    pub login_delay: Duration,
    pub session_path: PathBuf,
    pub support_phone: String,
    pub delivery_eta_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            payment_delay: Duration::from_millis(2000),
            login_delay: Duration::from_millis(1000),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            support_phone: "919876543210".to_string(),
            delivery_eta_minutes: 40,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            channel_buffer: try_load(&lookup, "THALI_CHANNEL_BUFFER", defaults.channel_buffer)?,
            payment_delay: Duration::from_millis(try_load(&lookup, "THALI_PAYMENT_DELAY_MS", defaults.payment_delay.as_millis() as u64)?),
            login_delay: Duration::from_millis(try_load(&lookup, "THALI_LOGIN_DELAY_MS", defaults.login_delay.as_millis() as u64)?),
            session_path: PathBuf::from(try_load(&lookup, "THALI_SESSION_PATH", DEFAULT_SESSION_PATH.to_string())?),
            support_phone: try_load(&lookup, "THALI_SUPPORT_PHONE", defaults.support_phone)?,
            delivery_eta_minutes: try_load(&lookup, "THALI_DELIVERY_ETA_MINUTES", defaults.delivery_eta_minutes)?,
        };
        if config.channel_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "THALI_CHANNEL_BUFFER",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(config)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => {
            debug!("{key} set to {raw}");
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            })
        }
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
