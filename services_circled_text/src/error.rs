//! Service error types

use host_api::HostError;
use thiserror::Error;

/// Errors raised while starting an edit session
///
/// These never escape to the host: every key-event entry point resolves
/// them into a "not consumed" verdict and an audit-trail entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The service has no valid activation window
    #[error("Service is not active")]
    NotActive,

    /// The host refused the edit-session lock
    #[error("Edit session refused: {0}")]
    SessionRefused(#[from] HostError),
}
