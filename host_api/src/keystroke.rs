//! Keystroke manager contract: sink advising and preserved keys

use crate::error::HostError;
use crate::ids::{ClientId, HotKeyId};
use key_types::KeyChord;

/// The host's keystroke manager
///
/// Advising a sink tells the host to offer this client key events through
/// the test/offer protocol. Preserving a key claims a chord globally so
/// the host routes it to the client even without input focus.
///
/// Multiple implementations are possible: a real input framework binding,
/// or an in-memory simulation for tests.
pub trait KeystrokeHost {
    /// Advises this client as a key event sink
    fn advise_key_event_sink(&mut self, client: ClientId) -> Result<(), HostError>;

    /// Removes this client's key event sink
    fn unadvise_key_event_sink(&mut self, client: ClientId) -> Result<(), HostError>;

    /// Registers a preserved key (hot key)
    ///
    /// `label` is a human-readable name the host may surface in its own UI.
    fn preserve_key(
        &mut self,
        client: ClientId,
        id: HotKeyId,
        chord: KeyChord,
        label: &str,
    ) -> Result<(), HostError>;

    /// Removes a preserved-key registration
    fn unpreserve_key(&mut self, id: HotKeyId, chord: KeyChord) -> Result<(), HostError>;
}
