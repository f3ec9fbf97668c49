//! Wire records of the WE selfcare API.
//!
//! Three JSON-over-HTTPS POST calls, each answering with a `header.retCode`
//! (`"0"` on success) and a call-specific `body`.
//!
//! - `request`  : payloads sent by the exporter
//! - `response` : records decoded from upstream

pub mod request;
pub mod response;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api-my.te.eg";

/// Locale sent in payloads and in the `languageCode` header.
pub const LOCALE: &str = "en-US";

pub const AUTH_PATH: &str =
    "/echannel/service/besapp/base/rest/busiservice/v1/auth/userAuthenticate";
pub const OFFERINGS_PATH: &str =
    "/echannel/service/besapp/base/rest/busiservice/cz/v1/auth/getSubscribedOfferings";
pub const QUOTA_PATH: &str =
    "/echannel/service/besapp/base/rest/busiservice/cz/cbs/bb/queryFreeUnit";
