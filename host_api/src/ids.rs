//! Identifiers issued across the host boundary

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for one activation of a plugin in a host client context
///
/// Issued by the host at activation time; valid only between a successful
/// activate and the matching deactivate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Creates a new random client ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a client ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client({})", self.0)
    }
}

/// Identifier for a preserved-key (hot key) registration
///
/// Stable across sessions: a plugin registers the same id every activation
/// so the host can route the chord back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HotKeyId(Uuid);

impl HotKeyId {
    /// Creates a new random hot key ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a hot key ID from a UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for HotKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HotKey({})", self.0)
    }
}

/// Authorization token for one granted edit session
///
/// Issued fresh per grant; mutation primitives must reject any other
/// cookie. Holding a cookie past the session's return authorizes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditCookie(u64);

impl EditCookie {
    /// Creates a cookie from a raw value (hosts only)
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EditCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cookie({})", self.0)
    }
}
