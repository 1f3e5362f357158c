//! Text service controller
//!
//! The top-level stateful object the host activates and deactivates, and
//! the entry point for every host callback. Inactive → Active → Inactive;
//! each activation capability (key sink, hot key) is acquired best-effort
//! and released iff it was acquired.

use crate::error::ServiceError;
use crate::filter::should_consume;
use crate::hot_key::HotKeyRegistrar;
use crate::session::KeystrokeEditSession;
use host_api::{ClientId, DocumentContext, EditSession, HotKeyId, KeystrokeHost, SessionMode};
use key_types::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};

/// Audit-trail entry for one observable service transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceEvent {
    /// The service bound to a client context
    Activated { client: ClientId, timestamp: u64 },
    /// An activation sub-step failed; the capability is absent this session
    ActivationDegraded { missing: String, timestamp: u64 },
    /// The service released its client binding
    Deactivated { client: ClientId, timestamp: u64 },
    /// A key event was intercepted and its mutation completed
    KeyConsumed { code: KeyCode, timestamp: u64 },
    /// The preserved hot key fired and its mutation completed
    HotKeyFired { timestamp: u64 },
    /// An edit-session request was refused; the key fell through
    SessionRefused { reason: String, timestamp: u64 },
}

/// The circled-text service controller
///
/// One instance per host-assigned client context. The host delivers every
/// callback on one designated thread, serialized, so the controller needs
/// no internal locking; its fields are written only during activate and
/// deactivate and read everywhere else.
pub struct CircledTextService {
    /// Host-issued id; `Some` exactly while active
    client: Option<ClientId>,
    /// The "flip keys" enable flag
    filtering: bool,
    /// Whether the keystroke sink advise succeeded this activation
    key_sink_advised: bool,
    registrar: HotKeyRegistrar,
    audit_trail: Vec<ServiceEvent>,
    next_timestamp: u64,
}

impl CircledTextService {
    /// Creates an inactive controller with filtering enabled
    pub fn new() -> Self {
        Self {
            client: None,
            filtering: true,
            key_sink_advised: false,
            registrar: HotKeyRegistrar::new(),
            audit_trail: Vec::new(),
            next_timestamp: 0,
        }
    }

    /// Binds the service to a client context
    ///
    /// Stores the client id, then attempts the keystroke-sink advise and
    /// the hot-key registration independently. Either sub-step may fail
    /// without aborting activation; the controller just lacks that one
    /// capability for the session. Activating while already active tears
    /// down the previous binding first so advise/unadvise stay paired.
    pub fn activate(&mut self, host: &mut dyn KeystrokeHost, client: ClientId) {
        if self.client.is_some() {
            self.deactivate(host);
        }

        self.client = Some(client);

        self.key_sink_advised = host.advise_key_event_sink(client).is_ok();
        if !self.key_sink_advised {
            let timestamp = self.next_timestamp();
            self.audit_trail.push(ServiceEvent::ActivationDegraded {
                missing: "key event sink".to_string(),
                timestamp,
            });
        }

        if !self.registrar.register(host, client) {
            let timestamp = self.next_timestamp();
            self.audit_trail.push(ServiceEvent::ActivationDegraded {
                missing: "preserved hot key".to_string(),
                timestamp,
            });
        }

        let timestamp = self.next_timestamp();
        self.audit_trail
            .push(ServiceEvent::Activated { client, timestamp });
    }

    /// Releases the client binding
    ///
    /// Each uninit step checks its own precondition, so this is safe on a
    /// controller that never fully activated and safe to call twice.
    pub fn deactivate(&mut self, host: &mut dyn KeystrokeHost) {
        if let Some(client) = self.client {
            if self.key_sink_advised {
                let _ = host.unadvise_key_event_sink(client);
                self.key_sink_advised = false;
            }
        }

        self.registrar.unregister(host);

        if let Some(client) = self.client.take() {
            let timestamp = self.next_timestamp();
            self.audit_trail
                .push(ServiceEvent::Deactivated { client, timestamp });
        }
    }

    /// Focus changes do not affect filter state in this design
    pub fn on_set_focus(&mut self, _foreground: bool) {}

    /// Pure query: would a key-down be consumed?
    pub fn on_test_key_down(&self, event: &KeyEvent) -> bool {
        should_consume(self.filtering, event.code)
    }

    /// Pure query: would a key-up be consumed?
    pub fn on_test_key_up(&self, event: &KeyEvent) -> bool {
        should_consume(self.filtering, event.code)
    }

    /// Offers the service a key-down
    ///
    /// If the filter accepts, a synchronous edit session is requested on
    /// this call stack. A refused lock reports the key as not consumed so
    /// the host falls through to default handling; a granted lock reports
    /// consumed unconditionally, whatever happens inside the session.
    pub fn on_key_down(&mut self, ctx: &mut dyn DocumentContext, event: &KeyEvent) -> bool {
        if !should_consume(self.filtering, event.code) {
            return false;
        }

        let mut session = KeystrokeEditSession::from_key(event);
        match self.start_edit_session(ctx, &mut session) {
            Ok(()) => {
                let timestamp = self.next_timestamp();
                self.audit_trail.push(ServiceEvent::KeyConsumed {
                    code: event.code,
                    timestamp,
                });
                true
            }
            Err(err) => {
                self.record_refusal(err);
                false
            }
        }
    }

    /// Offers the service a key-up; mirrors the test verdict, no mutation
    pub fn on_key_up(&self, event: &KeyEvent) -> bool {
        should_consume(self.filtering, event.code)
    }

    /// Notifies the service that a preserved key fired
    ///
    /// Ids other than the toggle hot key's are not ours. A refused lock
    /// reports not consumed, consistent with the literal-key path.
    pub fn on_preserved_key(&mut self, ctx: &mut dyn DocumentContext, id: HotKeyId) -> bool {
        if !self.registrar.matches(id) {
            return false;
        }

        let mut session = KeystrokeEditSession::from_hot_key();
        match self.start_edit_session(ctx, &mut session) {
            Ok(()) => {
                let timestamp = self.next_timestamp();
                self.audit_trail.push(ServiceEvent::HotKeyFired { timestamp });
                true
            }
            Err(err) => {
                self.record_refusal(err);
                false
            }
        }
    }

    /// Enables or disables key filtering
    pub fn set_filtering(&mut self, enabled: bool) {
        self.filtering = enabled;
    }

    /// Returns the enable flag
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Returns the client id while active
    pub fn client_id(&self) -> Option<ClientId> {
        self.client
    }

    /// True between a successful activate and the matching deactivate
    pub fn is_active(&self) -> bool {
        self.client.is_some()
    }

    /// True if the keystroke-sink advise succeeded this activation
    pub fn is_key_sink_advised(&self) -> bool {
        self.key_sink_advised
    }

    /// True if the hot key is currently preserved
    pub fn is_hot_key_registered(&self) -> bool {
        self.registrar.is_registered()
    }

    /// Returns the audit trail
    pub fn audit_trail(&self) -> &[ServiceEvent] {
        &self.audit_trail
    }

    /// Requests a synchronous edit session for the given transaction
    fn start_edit_session(
        &mut self,
        ctx: &mut dyn DocumentContext,
        session: &mut dyn EditSession,
    ) -> Result<(), ServiceError> {
        let client = self.client.ok_or(ServiceError::NotActive)?;
        ctx.request_edit_session(client, SessionMode::Sync, session)?;
        Ok(())
    }

    fn record_refusal(&mut self, err: ServiceError) {
        let timestamp = self.next_timestamp();
        self.audit_trail.push(ServiceEvent::SessionRefused {
            reason: err.to_string(),
            timestamp,
        });
    }

    fn next_timestamp(&mut self) -> u64 {
        let ts = self.next_timestamp;
        self.next_timestamp += 1;
        ts
    }
}

impl Default for CircledTextService {
    fn default() -> Self {
        Self::new()
    }
}
