//! Simulated keystroke manager

use host_api::{ClientId, HostError, HotKeyId, KeystrokeHost};
use key_types::KeyChord;
use std::collections::{HashMap, HashSet};

/// A recorded preserved-key registration
#[derive(Debug, Clone)]
struct PreservedKey {
    client: ClientId,
    chord: KeyChord,
    label: String,
}

/// In-memory keystroke manager
///
/// Records sink advises and preserved keys, and can be told to refuse
/// either capability to simulate a host that does not expose it.
#[derive(Debug, Default)]
pub struct SimKeystrokeHost {
    advised: HashSet<ClientId>,
    preserved: HashMap<HotKeyId, PreservedKey>,
    refuse_sink: bool,
    refuse_hot_keys: bool,
}

impl SimKeystrokeHost {
    /// Creates an empty keystroke manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms or disarms refusal of the keystroke-sink capability
    pub fn refuse_sink_capability(&mut self, refuse: bool) {
        self.refuse_sink = refuse;
    }

    /// Arms or disarms refusal of the preserved-key capability
    pub fn refuse_hot_key_capability(&mut self, refuse: bool) {
        self.refuse_hot_keys = refuse;
    }

    /// True if a sink is advised for the client
    pub fn is_sink_advised(&self, client: ClientId) -> bool {
        self.advised.contains(&client)
    }

    /// Number of advised sinks
    pub fn advised_sink_count(&self) -> usize {
        self.advised.len()
    }

    /// True if the hot key is preserved
    pub fn is_key_preserved(&self, id: HotKeyId) -> bool {
        self.preserved.contains_key(&id)
    }

    /// Label supplied with a preserved key, if registered
    pub fn preserved_label(&self, id: HotKeyId) -> Option<&str> {
        self.preserved.get(&id).map(|p| p.label.as_str())
    }

    /// Client that registered a preserved key, if registered
    pub fn preserved_owner(&self, id: HotKeyId) -> Option<ClientId> {
        self.preserved.get(&id).map(|p| p.client)
    }

    /// Number of preserved keys
    pub fn preserved_key_count(&self) -> usize {
        self.preserved.len()
    }
}

impl KeystrokeHost for SimKeystrokeHost {
    fn advise_key_event_sink(&mut self, client: ClientId) -> Result<(), HostError> {
        if self.refuse_sink {
            return Err(HostError::capability("keystroke sink"));
        }
        if !self.advised.insert(client) {
            return Err(HostError::SinkAlreadyAdvised(client));
        }
        Ok(())
    }

    fn unadvise_key_event_sink(&mut self, client: ClientId) -> Result<(), HostError> {
        if !self.advised.remove(&client) {
            return Err(HostError::SinkNotAdvised(client));
        }
        Ok(())
    }

    fn preserve_key(
        &mut self,
        client: ClientId,
        id: HotKeyId,
        chord: KeyChord,
        label: &str,
    ) -> Result<(), HostError> {
        if self.refuse_hot_keys {
            return Err(HostError::capability("preserved keys"));
        }
        if self.preserved.contains_key(&id) {
            return Err(HostError::HotKeyAlreadyPreserved(id));
        }
        self.preserved.insert(
            id,
            PreservedKey {
                client,
                chord,
                label: label.to_string(),
            },
        );
        Ok(())
    }

    fn unpreserve_key(&mut self, id: HotKeyId, chord: KeyChord) -> Result<(), HostError> {
        match self.preserved.get(&id) {
            Some(preserved) if preserved.chord == chord => {
                self.preserved.remove(&id);
                Ok(())
            }
            _ => Err(HostError::HotKeyNotPreserved(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use key_types::{KeyCode, Modifiers};

    fn chord() -> KeyChord {
        KeyChord::new(KeyCode::F, Modifiers::CTRL)
    }

    #[test]
    fn test_advise_and_unadvise_pair() {
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();

        host.advise_key_event_sink(client).unwrap();
        assert!(host.is_sink_advised(client));
        assert_eq!(host.advised_sink_count(), 1);

        host.unadvise_key_event_sink(client).unwrap();
        assert!(!host.is_sink_advised(client));
    }

    #[test]
    fn test_duplicate_advise_is_an_error() {
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();

        host.advise_key_event_sink(client).unwrap();
        assert_eq!(
            host.advise_key_event_sink(client),
            Err(HostError::SinkAlreadyAdvised(client))
        );
    }

    #[test]
    fn test_unadvise_unknown_is_an_error() {
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();
        assert_eq!(
            host.unadvise_key_event_sink(client),
            Err(HostError::SinkNotAdvised(client))
        );
    }

    #[test]
    fn test_sink_capability_refusal() {
        let mut host = SimKeystrokeHost::new();
        host.refuse_sink_capability(true);
        let result = host.advise_key_event_sink(ClientId::new());
        assert!(matches!(
            result,
            Err(HostError::CapabilityUnavailable { .. })
        ));
    }

    #[test]
    fn test_preserve_and_unpreserve() {
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();
        let id = HotKeyId::new();

        host.preserve_key(client, id, chord(), "Toggle").unwrap();
        assert!(host.is_key_preserved(id));
        assert_eq!(host.preserved_label(id), Some("Toggle"));
        assert_eq!(host.preserved_owner(id), Some(client));

        host.unpreserve_key(id, chord()).unwrap();
        assert!(!host.is_key_preserved(id));
        assert_eq!(host.preserved_key_count(), 0);
    }

    #[test]
    fn test_double_preserve_is_an_error() {
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();
        let id = HotKeyId::new();

        host.preserve_key(client, id, chord(), "Toggle").unwrap();
        assert_eq!(
            host.preserve_key(client, id, chord(), "Toggle"),
            Err(HostError::HotKeyAlreadyPreserved(id))
        );
    }

    #[test]
    fn test_unpreserve_wrong_chord_is_an_error() {
        let mut host = SimKeystrokeHost::new();
        let id = HotKeyId::new();
        host.preserve_key(ClientId::new(), id, chord(), "Toggle")
            .unwrap();

        let other = KeyChord::new(KeyCode::G, Modifiers::CTRL);
        assert_eq!(
            host.unpreserve_key(id, other),
            Err(HostError::HotKeyNotPreserved(id))
        );
        // Still registered.
        assert!(host.is_key_preserved(id));
    }

    #[test]
    fn test_hot_key_capability_refusal() {
        let mut host = SimKeystrokeHost::new();
        host.refuse_hot_key_capability(true);
        let result = host.preserve_key(ClientId::new(), HotKeyId::new(), chord(), "Toggle");
        assert!(matches!(
            result,
            Err(HostError::CapabilityUnavailable { .. })
        ));
    }
}
