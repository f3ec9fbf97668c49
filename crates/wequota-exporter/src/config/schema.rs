use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use wequota_core::error::{QuotaError, Result};
use wequota_core::{account_id_from_landline, protocol};

#[derive(Debug)]
pub struct ExporterConfig {
    pub credentials: Credentials,
    pub interval: Duration,
    pub listen: String,
    pub base_url: String,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(QuotaError::Config("INTERVAL must be greater than zero".into()));
        }
        self.listen_addr()?;
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(QuotaError::Config(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| QuotaError::Config(format!("invalid listen address {}: {e}", self.listen)))
    }
}

pub fn default_listen() -> String {
    "0.0.0.0:2222".into()
}

pub fn default_base_url() -> String {
    protocol::DEFAULT_BASE_URL.into()
}

/// Account credentials, fixed for the life of the process.
#[derive(Clone)]
pub struct Credentials {
    landline: String,
    password: String,
    account_id: String,
}

impl Credentials {
    pub fn new(landline: String, password: String) -> Result<Self> {
        if password.is_empty() {
            return Err(QuotaError::Config("password must not be empty".into()));
        }
        let account_id = account_id_from_landline(&landline)?;
        Ok(Self { landline, password, account_id })
    }

    pub fn landline(&self) -> &str {
        &self.landline
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("landline", &self.landline)
            .field("account_id", &self.account_id)
            .field("password", &"***")
            .finish()
    }
}
