//! wequota core: upstream wire records, quota math, and the shared error type.
//!
//! This crate defines the request/response contracts of the WE selfcare API
//! and the error surface shared by the exporter. It carries no transport or
//! runtime dependencies so the records can be exercised without a network.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `QuotaError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod quota;

/// Shared result type.
pub use error::{Result, QuotaError};
pub use quota::{account_id_from_landline, QuotaSnapshot};
