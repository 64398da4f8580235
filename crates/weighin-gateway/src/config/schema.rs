use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use weighin_core::error::{Result, WeighInError};
use weighin_core::quote::DEFAULT_STALENESS_DAYS;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub quotes: QuotesSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            quotes: QuotesSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WeighInError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.quotes.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            WeighInError::BadRequest(format!(
                "server.listen must be a valid socket address, got '{}'",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuotesSection {
    /// Dataset API root; `{index}/{symbol}/` is appended per request.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_staleness_days")]
    pub staleness_days: u32,

    /// Upper bound on one quote request; the price entry stays locked while it runs.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for QuotesSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            staleness_days: default_staleness_days(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl QuotesSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(WeighInError::BadRequest(
                "quotes.base_url must be an http(s) URL".into(),
            ));
        }
        if !self.base_url.ends_with('/') {
            return Err(WeighInError::BadRequest(
                "quotes.base_url must end with '/'".into(),
            ));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(WeighInError::BadRequest(
                "quotes.api_key_env must not be empty".into(),
            ));
        }
        if !(1..=365).contains(&self.staleness_days) {
            return Err(WeighInError::BadRequest(
                "quotes.staleness_days must be between 1 and 365".into(),
            ));
        }
        if !(100..=120000).contains(&self.timeout_ms) {
            return Err(WeighInError::BadRequest(
                "quotes.timeout_ms must be between 100 and 120000".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(WeighInError::Internal(format!(
                "environment variable {} must hold the quote API key",
                self.api_key_env
            ))),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_base_url() -> String {
    "https://www.quandl.com/api/v3/datasets/".into()
}
fn default_api_key_env() -> String {
    "QUANDL_APIKEY".into()
}
fn default_staleness_days() -> u32 {
    DEFAULT_STALENESS_DAYS
}
fn default_timeout_ms() -> u64 {
    10000
}
