//! Gateway config loader (strict parsing).

pub mod schema;

use std::{fs, io::ErrorKind};

use weighin_core::error::{Result, WeighInError};

pub use schema::{GatewayConfig, QuotesSection, ServerSection};

/// Environment variable naming an alternative config path.
pub const CONFIG_PATH_ENV: &str = "WEIGHIN_CONFIG";
/// Config path used when `WEIGHIN_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "weighin.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WeighInError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| WeighInError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `WEIGHIN_CONFIG` (or `weighin.yaml`). A missing file yields defaults.
pub fn load_from_env() -> Result<GatewayConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match fs::metadata(&path) {
        Ok(_) => load_from_file(&path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(WeighInError::Internal(format!("stat config failed ({path}): {e}"))),
    }
}
