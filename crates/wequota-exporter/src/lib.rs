//! WE quota exporter library entry.
//!
//! This crate wires env configuration, the upstream session, the check
//! routine, quota gauges and the scrape router into one exporter. It is
//! consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod check;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scheduler;
pub mod server;
pub mod upstream;
