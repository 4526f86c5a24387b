use std::{env, fmt::Display, str::FromStr};

use clap::Parser;
use tracing::{info, warn};

use crate::error::ConfigError;

const BASE_URL_KEY: &str = "ORDERS_BASE_URL";
const BUFFER_SIZE_KEY: &str = "TRANSPORT_BUFFER";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_BUFFER_SIZE: &str = "32";

/// Terminal form for the orders REST service.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the orders service [env: ORDERS_BASE_URL]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Capacity of the request channel feeding the HTTP actor [env: TRANSPORT_BUFFER]
    #[arg(long)]
    pub buffer_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub buffer_size: usize,
}

impl Config {
    /// Command-line flags win; otherwise the environment, otherwise defaults.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve(cli, |key| env::var(key).ok())
    }

    fn resolve(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url: String = match &cli.base_url {
            Some(url) => url.clone(),
            None => try_load(&lookup, BASE_URL_KEY, DEFAULT_BASE_URL)?,
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: BASE_URL_KEY,
                value: base_url,
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let buffer_size: usize = match cli.buffer_size {
            Some(size) => size,
            None => try_load(&lookup, BUFFER_SIZE_KEY, DEFAULT_BUFFER_SIZE)?,
        };
        if buffer_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: BUFFER_SIZE_KEY,
                value: buffer_size.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self { base_url, buffer_size })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
