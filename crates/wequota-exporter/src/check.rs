//! Quota check routine.
//!
//! One cycle walks `Authenticating -> ListingOfferings -> QueryingQuota -> Done`.
//! Any failure aborts the cycle; the gauges keep their previous values.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use wequota_core::{QuotaError, QuotaSnapshot};

use crate::config::Credentials;
use crate::obs::metrics::QuotaGauges;
use crate::upstream::UpstreamSession;

/// Step of a check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStep {
    Authenticating,
    ListingOfferings,
    QueryingQuota,
    Done,
}

impl CheckStep {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStep::Authenticating => "authenticating",
            CheckStep::ListingOfferings => "listing_offerings",
            CheckStep::QueryingQuota => "querying_quota",
            CheckStep::Done => "done",
        }
    }
}

impl fmt::Display for CheckStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cycle aborted at `step`.
#[derive(Debug, Error)]
#[error("{step}: {error}")]
pub struct CheckFailure {
    pub step: CheckStep,
    #[source]
    pub error: QuotaError,
}

fn at(step: CheckStep) -> impl FnOnce(QuotaError) -> CheckFailure {
    move |error| CheckFailure { step, error }
}

/// Something the scheduler can run once per tick.
#[async_trait]
pub trait QuotaCheck: Send + Sync {
    async fn run_check(&self);
}

pub struct QuotaChecker {
    credentials: Credentials,
    session: UpstreamSession,
    gauges: Arc<QuotaGauges>,
}

impl QuotaChecker {
    pub fn new(credentials: Credentials, session: UpstreamSession, gauges: Arc<QuotaGauges>) -> Self {
        Self { credentials, session, gauges }
    }

    pub fn gauges(&self) -> Arc<QuotaGauges> {
        Arc::clone(&self.gauges)
    }

    /// Run the three calls in order without touching the gauges.
    pub async fn fetch_quota(&self) -> Result<QuotaSnapshot, CheckFailure> {
        let account_id = self.credentials.account_id();

        let auth = self
            .session
            .authenticate(account_id, self.credentials.password())
            .await
            .map_err(at(CheckStep::Authenticating))?;

        let offer_id = self
            .session
            .subscribed_offering(account_id, &auth.token)
            .await
            .map_err(at(CheckStep::ListingOfferings))?;

        self.session
            .query_quota(&auth.subscriber_id, &offer_id, &auth.token)
            .await
            .map_err(at(CheckStep::QueryingQuota))
    }

    /// One full cycle: fetch, then publish on success.
    pub async fn check_once(&self) -> Result<QuotaSnapshot, CheckFailure> {
        let outcome = self.fetch_quota().await;
        self.gauges.record_check(outcome.is_ok());
        if let Ok(quota) = &outcome {
            self.gauges.apply(quota);
            tracing::debug!(step = %CheckStep::Done, "gauges updated");
        }
        outcome
    }
}

#[async_trait]
impl QuotaCheck for QuotaChecker {
    async fn run_check(&self) {
        match self.check_once().await {
            Ok(quota) => tracing::info!(
                "Quota check successful. Remaining: {:.2} GB / {:.2} GB, Usage: {:.2}%",
                quota.remain,
                quota.total,
                quota.usage_percentage()
            ),
            Err(f) => tracing::error!(
                step = %f.step,
                kind = f.error.kind().as_str(),
                ret_code = f.error.ret_code().unwrap_or_default(),
                "quota check failed: {}",
                f.error
            ),
        }
    }
}
