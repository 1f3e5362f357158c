//! # Key Types
//!
//! This crate defines the keyboard event types shared by the circled-text
//! service and its hosts.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input is structured events, not raw scan codes
//! - **Logical, not physical**: Key codes name keys, not hardware positions
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A hardware driver abstraction (no PS/2, USB HID)
//! - A text encoding layer (no IME composition, no dead keys)
//! - Global keyboard state (no caps-lock tracking; only live modifiers)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical key code
///
/// Covers the keys the filter and hot-key chord can name. Anything the
/// host cannot map lands on `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Editing and navigation
    Escape,
    Tab,
    Space,
    Enter,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,

    /// Unmapped key
    Unknown,
}

/// The 26 letter codes in alphabetical order.
const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

impl KeyCode {
    /// Returns true if this code is one of the letter keys A..Z
    pub fn is_letter(&self) -> bool {
        self.letter_index().is_some()
    }

    /// Returns the alphabetical index of a letter key (A = 0 .. Z = 25)
    pub fn letter_index(&self) -> Option<u8> {
        LETTERS.iter().position(|c| c == self).map(|i| i as u8)
    }

    /// Maps a Latin letter (either case) to its key code
    pub fn from_letter(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(LETTERS[(upper as u8 - b'A') as usize])
        } else {
            None
        }
    }

    /// All letter key codes, in alphabetical order
    pub fn letters() -> &'static [KeyCode] {
        &LETTERS
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys
///
/// Bitflags representing live modifier state. Caps lock is deliberately
/// not a modifier here; consumers that care about letter case must look
/// at `SHIFT` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super key
    pub const META: Self = Self { bits: 1 << 3 };

    /// Creates an empty modifier set
    pub const fn none() -> Self {
        Self::NONE
    }

    /// Combines this set with another
    pub const fn with(self, other: Modifiers) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks whether every modifier in `other` is present
    pub const fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if Ctrl is held
    pub const fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Checks if Alt is held
    pub const fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    /// Checks if Shift is held
    pub const fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Checks if Meta is held
    pub const fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true if no modifier is held
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Key transition state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Keyboard event
///
/// One physical key transition. Transient: events are delivered, decided
/// on, and dropped; nothing persists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that changed state
    pub code: KeyCode,
    /// Modifiers held at the time of the transition
    pub modifiers: Modifiers,
    /// Press, release, or repeat
    pub state: KeyState,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    /// Creates a key released event
    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    /// Returns true if this is a press event
    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }

    /// Returns true if this is a release event
    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }
}

/// Key chord
///
/// A key plus an exact modifier set, used for hot-key bindings. A chord
/// matches press events only; releases and repeats never fire a hot key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    /// The non-modifier key
    pub code: KeyCode,
    /// Modifiers that must be held, exactly
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// Creates a new chord
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Checks whether a key event fires this chord
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.is_pressed() && event.code == self.code && event.modifiers == self.modifiers
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}+{}", self.modifiers, self.code)
        }
    }
}
