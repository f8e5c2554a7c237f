use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use slot_engine::{validate_step, DEFAULT_STEP_MINUTES};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Minutes between candidate start times.
    pub step_minutes: u32,
    /// Timezone the shop's opening hours are written in.
    pub timezone: Tz,
    /// Optional JSON dataset to seed the in-memory store with.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let step_minutes = match lookup("SLOT_STEP_MINUTES") {
            Some(val) => val
                .parse::<u32>()
                .context("Failed to parse SLOT_STEP_MINUTES")?,
            None => DEFAULT_STEP_MINUTES,
        };
        validate_step(step_minutes).context("Invalid SLOT_STEP_MINUTES")?;

        let timezone_name = lookup("SHOP_TIMEZONE").unwrap_or_else(|| "UTC".to_string());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Failed to parse SHOP_TIMEZONE '{}': {}", timezone_name, e))?;

        let seed_path = lookup("SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Config {
            server: ServerConfig { host, port },
            booking: BookingConfig {
                step_minutes,
                timezone,
                seed_path,
            },
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}
