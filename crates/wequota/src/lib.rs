//! Top-level facade crate for the WE quota exporter.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use wequota_core::*;
}

pub mod exporter {
    pub use wequota_exporter::*;
}
