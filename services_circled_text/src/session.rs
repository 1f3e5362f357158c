//! Keystroke edit session
//!
//! The short-lived transaction object submitted to the host per accepted
//! key event (or hot-key fire). The host invokes it exactly once under
//! the context lock; it inserts one character and moves the caret.

use crate::circled::{circled_char, Trigger};
use host_api::{DocumentContext, EditCookie, EditSession, HostError, Selection};
use key_types::KeyEvent;

/// One atomic mutation: insert a circled character at the selection
///
/// Carries the originating trigger and the shift state captured when the
/// key arrived. Never outlives one mutation.
#[derive(Debug)]
pub struct KeystrokeEditSession {
    trigger: Trigger,
    shift_held: bool,
}

impl KeystrokeEditSession {
    /// Builds a session for a literal key the filter accepted
    pub fn from_key(event: &KeyEvent) -> Self {
        Self {
            trigger: Trigger::Key(event.code),
            shift_held: event.modifiers.is_shift(),
        }
    }

    /// Builds a session for the preserved hot key (no literal key)
    pub fn from_hot_key() -> Self {
        Self {
            trigger: Trigger::HotKey,
            shift_held: false,
        }
    }
}

impl EditSession for KeystrokeEditSession {
    fn do_edit_session(
        &mut self,
        cookie: EditCookie,
        ctx: &mut dyn DocumentContext,
    ) -> Result<(), HostError> {
        let Some(ch) = circled_char(self.trigger, self.shift_held) else {
            // The filter only admits letters, so this trigger maps.
            return Ok(());
        };

        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);

        // Best effort from here: a single-character insert is atomic at
        // the host's granularity, so there is no partial state to roll
        // back and no lower-priority fallback to try.
        let Ok(range) = ctx.insert_at_selection(cookie, text) else {
            return Ok(());
        };

        // Caret moves just past the inserted character.
        let _ = ctx.set_selection(cookie, Selection::new(range.collapse_to_end()));

        Ok(())
    }
}
