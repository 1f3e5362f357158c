//! Circled character mapping
//!
//! The fixed arithmetic transform from a Latin letter to its circled
//! Unicode counterpart, plus the toggle glyph for the hot-key path.

use key_types::KeyCode;
use serde::{Deserialize, Serialize};

/// First code point of the circled uppercase block (Ⓐ)
const CIRCLED_UPPER_BASE: u32 = 0x24B6;

/// First code point of the circled lowercase block (ⓐ)
const CIRCLED_LOWER_BASE: u32 = 0x24D0;

/// The glyph inserted by the preserved hot key (⓿)
pub const TOGGLE_GLYPH: char = '\u{24FF}';

/// What started a keystroke edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// A literal key the filter accepted
    Key(KeyCode),
    /// The preserved hot key fired; there is no literal key
    HotKey,
}

/// Maps a trigger to the character to insert
///
/// Pure and total in `(trigger, shift_held)`:
/// - hot key: always [`TOGGLE_GLYPH`], shift state ignored
/// - letter with shift held: circled uppercase block
/// - letter without shift: circled lowercase block
/// - anything else: `None`
///
/// Only live shift state matters; caps lock is not represented in
/// [`key_types::Modifiers`] and cannot influence the result.
pub fn circled_char(trigger: Trigger, shift_held: bool) -> Option<char> {
    match trigger {
        Trigger::HotKey => Some(TOGGLE_GLYPH),
        Trigger::Key(code) => {
            let index = u32::from(code.letter_index()?);
            let base = if shift_held {
                CIRCLED_UPPER_BASE
            } else {
                CIRCLED_LOWER_BASE
            };
            char::from_u32(base + index)
        }
    }
}
