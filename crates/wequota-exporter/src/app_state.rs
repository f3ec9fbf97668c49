//! Shared application state for the exporter.
//!
//! The gauges are owned here and handed to both the check routine and the
//! scrape handler; nothing is process-global.

use std::sync::Arc;

use wequota_core::error::Result;

use crate::check::QuotaChecker;
use crate::config::ExporterConfig;
use crate::obs::metrics::QuotaGauges;
use crate::upstream::UpstreamSession;

#[derive(Clone)]
pub struct AppState {
    gauges: Arc<QuotaGauges>,
    checker: Arc<QuotaChecker>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &ExporterConfig) -> Result<Self> {
        let gauges = Arc::new(QuotaGauges::default());
        let session = UpstreamSession::new(cfg.base_url.clone())?;
        let checker = QuotaChecker::new(cfg.credentials.clone(), session, Arc::clone(&gauges));

        Ok(Self { gauges, checker: Arc::new(checker) })
    }

    pub fn gauges(&self) -> Arc<QuotaGauges> {
        Arc::clone(&self.gauges)
    }

    pub fn checker(&self) -> Arc<QuotaChecker> {
        Arc::clone(&self.checker)
    }
}
