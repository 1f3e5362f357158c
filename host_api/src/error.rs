//! Host boundary error types

use crate::ids::{ClientId, HotKeyId};
use thiserror::Error;

/// Errors that can occur at the plugin/host boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The host does not expose a required capability this session
    #[error("Capability unavailable: {capability}")]
    CapabilityUnavailable { capability: String },

    /// A keystroke sink is already advised for this client
    #[error("Key event sink already advised for {0}")]
    SinkAlreadyAdvised(ClientId),

    /// No keystroke sink is advised for this client
    #[error("No key event sink advised for {0}")]
    SinkNotAdvised(ClientId),

    /// The hot key is already preserved
    #[error("Hot key already preserved: {0}")]
    HotKeyAlreadyPreserved(HotKeyId),

    /// The hot key is not preserved
    #[error("Hot key not preserved: {0}")]
    HotKeyNotPreserved(HotKeyId),

    /// The document context is locked by an executing session
    #[error("Document context busy")]
    ContextBusy,

    /// The client id is not valid for this context
    #[error("Invalid client: {0}")]
    InvalidClient(ClientId),

    /// The edit cookie does not authorize mutation right now
    #[error("Invalid edit cookie")]
    InvalidCookie,

    /// An edit primitive failed inside a granted session
    #[error("Edit failed: {reason}")]
    EditFailed { reason: String },
}

impl HostError {
    /// Builds a capability-unavailable error
    pub fn capability(name: impl Into<String>) -> Self {
        Self::CapabilityUnavailable {
            capability: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HostError::capability("keystroke manager");
        assert_eq!(err.to_string(), "Capability unavailable: keystroke manager");
        assert_eq!(HostError::ContextBusy.to_string(), "Document context busy");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(HostError::InvalidCookie, HostError::InvalidCookie);
        assert_ne!(HostError::InvalidCookie, HostError::ContextBusy);
    }
}
