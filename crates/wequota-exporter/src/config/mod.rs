//! Exporter config loader (environment only).
//!
//! Required: `LANDLINE_NUMBER`, `PASSWORD`, `INTERVAL`.
//! Optional: `METRICS_LISTEN`, `WE_API_BASE_URL`.

pub mod duration;
pub mod schema;

use wequota_core::error::{QuotaError, Result};

pub use schema::{Credentials, ExporterConfig};

pub const ENV_LANDLINE: &str = "LANDLINE_NUMBER";
pub const ENV_PASSWORD: &str = "PASSWORD";
pub const ENV_INTERVAL: &str = "INTERVAL";
pub const ENV_LISTEN: &str = "METRICS_LISTEN";
pub const ENV_BASE_URL: &str = "WE_API_BASE_URL";

pub fn load_from_env() -> Result<ExporterConfig> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary key lookup. Empty values count as unset.
pub fn load_from_lookup<F>(lookup: F) -> Result<ExporterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    let landline = get(ENV_LANDLINE);
    let password = get(ENV_PASSWORD);
    let interval = get(ENV_INTERVAL);

    let (landline, password, interval) = match (landline, password, interval) {
        (Some(l), Some(p), Some(i)) => (l, p, i),
        _ => {
            return Err(QuotaError::Config(format!(
                "{ENV_LANDLINE}, {ENV_PASSWORD}, and {ENV_INTERVAL} environment variables must be set"
            )))
        }
    };

    let interval = duration::parse(&interval)
        .map_err(|e| QuotaError::Config(format!("error parsing {ENV_INTERVAL}: {e}")))?;

    let cfg = ExporterConfig {
        credentials: Credentials::new(landline, password)?,
        interval,
        listen: get(ENV_LISTEN).unwrap_or_else(schema::default_listen),
        base_url: get(ENV_BASE_URL).unwrap_or_else(schema::default_base_url),
    };
    cfg.validate()?;
    Ok(cfg)
}
