//! Response records.
//!
//! Upstream drops or nulls `body` on failure, so bodies are optional and the
//! `retCode` check stays reachable for every decoded response. Leaf fields
//! read `null` the same as a missing key.

use serde::{Deserialize, Deserializer};

use crate::quota::QuotaSnapshot;

/// `retCode` value signalling success.
pub const RET_CODE_OK: &str = "0";

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ret_code: String,
}

impl ResponseHeader {
    pub fn is_success(&self) -> bool {
        self.ret_code == RET_CODE_OK
    }
}

/// Common accessor over the three response records.
pub trait Envelope {
    fn header(&self) -> Option<&ResponseHeader>;

    /// `retCode` as reported, empty when the header is missing.
    fn ret_code(&self) -> &str {
        self.header().map(|h| h.ret_code.as_str()).unwrap_or_default()
    }

    fn is_success(&self) -> bool {
        self.header().is_some_and(ResponseHeader::is_success)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub header: Option<ResponseHeader>,
    #[serde(default)]
    pub body: Option<AuthBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(default)]
    pub subscriber: Option<Subscriber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    #[serde(default, deserialize_with = "null_as_default")]
    pub subscriber_id: String,
}

impl AuthResponse {
    pub fn token(&self) -> &str {
        self.body.as_ref().map(|b| b.token.as_str()).unwrap_or_default()
    }

    pub fn subscriber_id(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|b| b.subscriber.as_ref())
            .map(|s| s.subscriber_id.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OfferingsResponse {
    #[serde(default)]
    pub header: Option<ResponseHeader>,
    #[serde(default)]
    pub body: Option<OfferingsBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingsBody {
    #[serde(default)]
    pub offering_list: Option<Vec<Offering>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_offering_id: String,
}

impl OfferingsResponse {
    /// Id of the first listed offering; the only one queried.
    pub fn first_offering_id(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.offering_list.as_ref())
            .and_then(|list| list.first())
            .map(|o| o.main_offering_id.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuotaResponse {
    #[serde(default)]
    pub header: Option<ResponseHeader>,
    #[serde(default)]
    pub body: Option<Vec<QuotaDetail>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct QuotaDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub used: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remain: f64,
}

impl From<QuotaDetail> for QuotaSnapshot {
    fn from(d: QuotaDetail) -> Self {
        QuotaSnapshot { used: d.used, total: d.total, remain: d.remain }
    }
}

impl QuotaResponse {
    pub fn first_snapshot(&self) -> Option<QuotaSnapshot> {
        self.body
            .as_ref()
            .and_then(|b| b.first())
            .copied()
            .map(QuotaSnapshot::from)
    }
}

impl Envelope for AuthResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        self.header.as_ref()
    }
}

impl Envelope for OfferingsResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        self.header.as_ref()
    }
}

impl Envelope for QuotaResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        self.header.as_ref()
    }
}
