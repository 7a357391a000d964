//! Typed failure surface for remote task-store calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// What went wrong with a remote operation.
///
/// Both kinds surface identically to the user (error banner + error toast);
/// the split exists so callers can tell a transport fault from a request the
/// server understood and rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure, or a non-success response with no usable body.
    #[error("{0}")]
    Network(String),
    /// Non-success response carrying a body message (e.g. validation failure).
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// The user-facing message text.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(msg) | Self::Rejected(msg) => msg,
        }
    }
}
