//! Upstream WE selfcare API access.
//!
//! - `session` : HTTP helper owning the client, cookie jar and static headers
//!   plus the typed calls for the three endpoints

pub mod session;

pub use session::UpstreamSession;
