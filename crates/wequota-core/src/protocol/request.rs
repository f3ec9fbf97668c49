//! Request payloads.

use serde::Serialize;

use super::LOCALE;

/// Service type for fixed broadband lines.
pub const SERVICE_TYPE_FBB: &str = "FBB";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest<'a> {
    pub acct_id: &'a str,
    pub password: &'a str,
    pub app_locale: &'static str,
}

impl<'a> AuthRequest<'a> {
    pub fn new(acct_id: &'a str, password: &'a str) -> Self {
        Self { acct_id, password, app_locale: LOCALE }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingsRequest<'a> {
    pub msisdn: &'a str,
    pub number_service_type: &'static str,
    pub group_id: &'static str,
}

impl<'a> OfferingsRequest<'a> {
    pub fn new(msisdn: &'a str) -> Self {
        Self { msisdn, number_service_type: SERVICE_TYPE_FBB, group_id: "" }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaRequest<'a> {
    pub subscriber_id: &'a str,
    pub main_offer_id: &'a str,
}
