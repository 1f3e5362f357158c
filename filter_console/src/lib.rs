//! # Filter Console (Demo)
//!
//! This is a simple demonstration of wiring the circled-text service
//! against the simulated host. It is NOT a terminal emulator; it feeds a
//! typed key script to the service and shows the document after each
//! event.
//!
//! Script tokens:
//! - `a` .. `z` — unshifted letter press
//! - `A` .. `Z` — shifted letter press (uppercase implies Shift)
//! - `C-f`, `S-a`, `C-S-a`, ... — modifier prefixes (C, S, A, M)
//! - `on` / `off` — enable or disable filtering

use host_api::ClientId;
use key_types::{KeyCode, KeyEvent, Modifiers};
use services_circled_text::{toggle_hot_key_id, CircledTextService, TOGGLE_CHORD};
use sim_host::{SimDocument, SimKeystrokeHost};

/// One parsed script token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Turn key filtering on or off
    SetFiltering(bool),
    /// Deliver a key press
    Key(KeyEvent),
}

/// Parses one script token
pub fn parse_key_token(token: &str) -> Result<ScriptCommand, String> {
    match token {
        "on" => return Ok(ScriptCommand::SetFiltering(true)),
        "off" => return Ok(ScriptCommand::SetFiltering(false)),
        _ => {}
    }

    let mut modifiers = Modifiers::none();
    let mut parts: Vec<&str> = token.split('-').collect();
    let key_part = parts.pop().filter(|p| !p.is_empty()).ok_or_else(|| {
        format!("'{}': expected a key after the modifier prefix", token)
    })?;

    for part in parts {
        modifiers = match part {
            "C" | "c" => modifiers.with(Modifiers::CTRL),
            "S" | "s" => modifiers.with(Modifiers::SHIFT),
            "A" | "a" => modifiers.with(Modifiers::ALT),
            "M" | "m" => modifiers.with(Modifiers::META),
            other => return Err(format!("'{}': unknown modifier '{}'", token, other)),
        };
    }

    let mut chars = key_part.chars();
    let (ch, rest) = (chars.next(), chars.next());
    let ch = match (ch, rest) {
        (Some(ch), None) => ch,
        _ => return Err(format!("'{}': expected a single key character", token)),
    };

    let code = KeyCode::from_letter(ch)
        .ok_or_else(|| format!("'{}': '{}' is not a letter key", token, ch))?;
    if ch.is_ascii_uppercase() {
        modifiers = modifiers.with(Modifiers::SHIFT);
    }

    Ok(ScriptCommand::Key(KeyEvent::pressed(code, modifiers)))
}

/// What happened to one applied command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The service consumed the key (or hot key)
    Consumed,
    /// The key fell through to default handling
    PassedThrough,
    /// Filtering was switched
    FilteringSet(bool),
}

/// Demo console: one service bound to one simulated host and document
pub struct FilterConsole {
    service: CircledTextService,
    host: SimKeystrokeHost,
    document: SimDocument,
}

impl FilterConsole {
    /// Wires service, host, and document together and activates
    pub fn new() -> Self {
        let mut service = CircledTextService::new();
        let mut host = SimKeystrokeHost::new();
        let client = ClientId::new();
        service.activate(&mut host, client);
        let document = SimDocument::for_client(client);
        Self {
            service,
            host,
            document,
        }
    }

    /// Applies one command, dispatching the way a host would
    ///
    /// A press matching the preserved chord is routed through the
    /// preserved-key path when the registration succeeded; everything
    /// else goes through the test/offer protocol.
    pub fn apply(&mut self, command: ScriptCommand) -> Outcome {
        match command {
            ScriptCommand::SetFiltering(enabled) => {
                self.service.set_filtering(enabled);
                Outcome::FilteringSet(enabled)
            }
            ScriptCommand::Key(event) => {
                if self.service.is_hot_key_registered() && TOGGLE_CHORD.matches(&event) {
                    if self
                        .service
                        .on_preserved_key(&mut self.document, toggle_hot_key_id())
                    {
                        return Outcome::Consumed;
                    }
                    return Outcome::PassedThrough;
                }

                if !self.service.on_test_key_down(&event) {
                    return Outcome::PassedThrough;
                }
                if self.service.on_key_down(&mut self.document, &event) {
                    Outcome::Consumed
                } else {
                    Outcome::PassedThrough
                }
            }
        }
    }

    /// Current document text
    pub fn text(&self) -> &str {
        self.document.text()
    }

    /// Current caret position (start of the selection)
    pub fn caret(&self) -> usize {
        self.document.selection().range.start
    }

    /// Whether filtering is enabled
    pub fn is_filtering(&self) -> bool {
        self.service.is_filtering()
    }

    /// The underlying keystroke host, for inspection
    pub fn host(&self) -> &SimKeystrokeHost {
        &self.host
    }
}

impl Default for FilterConsole {
    fn default() -> Self {
        Self::new()
    }
}
