//! # Circled Text Service
//!
//! A keyboard-filtering text service. When active, it intercepts letter key
//! presses inside a host-managed editing surface and inserts the circled
//! Unicode variant of the letter in place of the normal character. A
//! preserved Ctrl+F hot key inserts the toggle glyph (U+24FF) even when the
//! surface lacks focus.
//!
//! ## Philosophy
//!
//! - **The host drives**: every entry point is a host callback; the service
//!   spawns nothing and blocks on nothing
//! - **Query and offer agree**: the same pure predicate answers "would you
//!   take this key" and "take this key"
//! - **Failures degrade, never abort**: a refused capability or lock means
//!   one keystroke falls through to default handling
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An IME (no composition, no candidates)
//! - A key remapper (only letters are touched, and only while enabled)
//! - A host framework (see `host_api` for the contract it consumes)

pub mod circled;
pub mod error;
pub mod filter;
pub mod hot_key;
pub mod service;
pub mod session;

pub use circled::{circled_char, Trigger, TOGGLE_GLYPH};
pub use error::ServiceError;
pub use filter::should_consume;
pub use hot_key::{toggle_hot_key_id, HotKeyRegistrar, TOGGLE_CHORD, TOGGLE_LABEL};
pub use service::{CircledTextService, ServiceEvent};
pub use session::KeystrokeEditSession;
