//! Shared error type across wequota crates.

use thiserror::Error;

/// Stable error kinds, used as a structured log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid settings.
    Config,
    /// Request could not be sent or timed out.
    Transport,
    /// Response body did not match the expected record.
    Decode,
    /// Upstream answered with a non-success `retCode`.
    Upstream,
    /// Offering list was empty.
    NoOfferings,
    /// Quota record list was empty.
    NoQuota,
    /// Metrics listener could not be bound.
    Bind,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Upstream => "UPSTREAM",
            ErrorKind::NoOfferings => "NO_OFFERINGS",
            ErrorKind::NoQuota => "NO_QUOTA",
            ErrorKind::Bind => "BIND",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, QuotaError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("{step} rejected, retCode: {ret_code}")]
    Upstream { step: &'static str, ret_code: String },
    #[error("no offerings found")]
    NoOfferings,
    #[error("no quota details found")]
    NoQuota,
    #[error("bind: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl QuotaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuotaError::Config(_) => ErrorKind::Config,
            QuotaError::Transport(_) => ErrorKind::Transport,
            QuotaError::Decode(_) => ErrorKind::Decode,
            QuotaError::Upstream { .. } => ErrorKind::Upstream,
            QuotaError::NoOfferings => ErrorKind::NoOfferings,
            QuotaError::NoQuota => ErrorKind::NoQuota,
            QuotaError::Bind(_) => ErrorKind::Bind,
            QuotaError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The `retCode` reported by upstream, when the failure came from one.
    pub fn ret_code(&self) -> Option<&str> {
        match self {
            QuotaError::Upstream { ret_code, .. } => Some(ret_code),
            _ => None,
        }
    }
}
