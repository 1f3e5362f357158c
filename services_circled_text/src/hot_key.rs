//! Preserved hot-key registration
//!
//! One fixed chord (Ctrl+F) bound to a stable identifier so the host
//! routes it to this service even when the editing surface lacks focus.

use host_api::{ClientId, HotKeyId, KeystrokeHost};
use key_types::{KeyChord, KeyCode, Modifiers};
use uuid::Uuid;

/// The chord the service preserves
pub const TOGGLE_CHORD: KeyChord = KeyChord::new(KeyCode::F, Modifiers::CTRL);

/// Label the host may show for the preserved key
pub const TOGGLE_LABEL: &str = "Toggle Circled Letters";

/// Returns the stable identifier for the toggle hot key
///
/// Stable across activations: the host routes the chord back to whoever
/// registered this id.
pub fn toggle_hot_key_id() -> HotKeyId {
    HotKeyId::from_uuid(Uuid::from_u128(0x5d6d1b1e_64f2_47cd_9fe1_4e032c2dae77))
}

/// Tracks the preserved-key registration for one activation
///
/// Registration and unregistration are paired: `unregister` is a no-op
/// unless a `register` previously succeeded, so teardown can call it
/// unconditionally without leaking or double-freeing the global claim.
#[derive(Debug, Default)]
pub struct HotKeyRegistrar {
    registered: bool,
}

impl HotKeyRegistrar {
    /// Creates a registrar with nothing registered
    pub fn new() -> Self {
        Self { registered: false }
    }

    /// Asks the host to preserve the toggle chord
    ///
    /// Returns false if the host refuses. Failure is non-fatal: the
    /// service still intercepts keys directly, it only loses the
    /// works-without-focus behavior.
    pub fn register(&mut self, host: &mut dyn KeystrokeHost, client: ClientId) -> bool {
        if self.registered {
            return true;
        }
        self.registered = host
            .preserve_key(client, toggle_hot_key_id(), TOGGLE_CHORD, TOGGLE_LABEL)
            .is_ok();
        self.registered
    }

    /// Removes the registration if one succeeded earlier
    pub fn unregister(&mut self, host: &mut dyn KeystrokeHost) {
        if !self.registered {
            return;
        }
        // The claim is gone either way; a host that already dropped it
        // has nothing for us to retry.
        let _ = host.unpreserve_key(toggle_hot_key_id(), TOGGLE_CHORD);
        self.registered = false;
    }

    /// True if the hot key is currently preserved
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Checks whether a fired preserved-key id is ours
    pub fn matches(&self, id: HotKeyId) -> bool {
        id == toggle_hot_key_id()
    }
}
