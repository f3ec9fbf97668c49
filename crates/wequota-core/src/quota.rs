//! Quota snapshot and account id derivation.

use crate::error::{QuotaError, Result};

/// Prefix the selfcare API expects in front of a fixed-line account id.
pub const ACCOUNT_PREFIX: &str = "FBB";

/// One quota record as reported by upstream (gigabytes).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuotaSnapshot {
    pub used: f64,
    pub total: f64,
    pub remain: f64,
}

impl QuotaSnapshot {
    /// `used / total * 100`, or 0 when `total` is not positive.
    pub fn usage_percentage(&self) -> f64 {
        if self.total > 0.0 {
            self.used / self.total * 100.0
        } else {
            0.0
        }
    }
}

/// Landline `0XXXXXXXXX` becomes account `FBBXXXXXXXXX` (leading digit dropped).
pub fn account_id_from_landline(landline: &str) -> Result<String> {
    let mut chars = landline.chars();
    if chars.next().is_none() {
        return Err(QuotaError::Config("landline number must not be empty".into()));
    }
    Ok(format!("{ACCOUNT_PREFIX}{}", chars.as_str()))
}
