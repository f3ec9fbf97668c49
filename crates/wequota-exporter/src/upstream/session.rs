//! HTTP session against the selfcare API.
//!
//! One `reqwest::Client` per process: its cookie store is the session jar and
//! persists across calls and across check cycles.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use wequota_core::error::{QuotaError, Result};
use wequota_core::protocol::request::{AuthRequest, OfferingsRequest, QuotaRequest};
use wequota_core::protocol::response::{AuthResponse, Envelope, OfferingsResponse, QuotaResponse};
use wequota_core::protocol::{self, AUTH_PATH, OFFERINGS_PATH, QUOTA_PATH};
use wequota_core::QuotaSnapshot;

/// Overall per-call timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Header carrying the auth token on calls after login.
pub const TOKEN_HEADER: &str = "csrftoken";

/// Token and subscriber id returned by a successful login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub subscriber_id: String,
}

pub struct UpstreamSession {
    client: Client,
    base_url: String,
}

impl UpstreamSession {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Same as `new`, with a custom overall per-call timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .default_headers(static_headers())
            .build()
            .map_err(|e| QuotaError::Internal(format!("HTTP client builder failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// POST `payload` as JSON and decode the body as `R`.
    ///
    /// The HTTP status is not inspected: the API reports failures through
    /// `header.retCode`, which callers check on the decoded record.
    pub async fn post_json<P, R>(&self, path: &str, payload: &P, token: Option<&str>) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(payload);
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            req = req.header(TOKEN_HEADER, token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| QuotaError::Transport(format!("failed to execute request: {e}")))?;

        tracing::debug!(%url, status = %resp.status(), "upstream responded");

        resp.json::<R>()
            .await
            .map_err(|e| QuotaError::Decode(format!("failed to decode response: {e}")))
    }

    pub async fn authenticate(&self, account_id: &str, password: &str) -> Result<AuthSession> {
        let resp: AuthResponse = self
            .post_json(AUTH_PATH, &AuthRequest::new(account_id, password), None)
            .await?;
        ensure_success("authentication", &resp)?;

        Ok(AuthSession {
            token: resp.token().to_string(),
            subscriber_id: resp.subscriber_id().to_string(),
        })
    }

    /// First subscribed offering id for the account.
    pub async fn subscribed_offering(&self, account_id: &str, token: &str) -> Result<String> {
        let resp: OfferingsResponse = self
            .post_json(OFFERINGS_PATH, &OfferingsRequest::new(account_id), Some(token))
            .await?;
        ensure_success("subscribed offerings", &resp)?;

        resp.first_offering_id()
            .map(str::to_string)
            .ok_or(QuotaError::NoOfferings)
    }

    pub async fn query_quota(
        &self,
        subscriber_id: &str,
        offer_id: &str,
        token: &str,
    ) -> Result<QuotaSnapshot> {
        let payload = QuotaRequest { subscriber_id, main_offer_id: offer_id };
        let resp: QuotaResponse = self.post_json(QUOTA_PATH, &payload, Some(token)).await?;
        ensure_success("quota details", &resp)?;

        resp.first_snapshot().ok_or(QuotaError::NoQuota)
    }
}

fn ensure_success<E: Envelope>(step: &'static str, resp: &E) -> Result<()> {
    if resp.is_success() {
        Ok(())
    } else {
        Err(QuotaError::Upstream { step, ret_code: resp.ret_code().to_string() })
    }
}

fn static_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    for (name, value) in [
        ("channelid", "702"),
        ("iscoporate", "false"),
        ("ismobile", "false"),
        ("isselfcare", "true"),
        ("languagecode", protocol::LOCALE),
    ] {
        h.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }
    h
}
