use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub dev_fallback: bool,
}

impl Config {
    /// Read the environment once at process start; no runtime reconfiguration.
    pub fn load() -> Self {
        Self {
            port: try_load("GYMDESK_PORT", "3111"),
            backend_url: try_load("GYMDESK_BACKEND_URL", "http://localhost:8000/api"),
            dev_fallback: try_load("GYMDESK_DEV_FALLBACK", "true"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
