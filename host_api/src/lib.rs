//! # Host API
//!
//! This crate defines the interface between the circled-text service and
//! the host text-input framework that drives it.
//!
//! ## Philosophy
//!
//! The host provides **mechanisms**, not policies:
//! - Keystroke sink advising (who gets offered key events)
//! - Preserved-key registration (hot keys routed without focus)
//! - Exclusive edit sessions (transactional document mutation)
//!
//! ## Design Goals
//!
//! 1. **Testability**: The entire contract can be implemented in memory
//! 2. **Explicitness**: Mutation requires a cookie issued per session
//! 3. **No retention**: Borrowed contexts cannot outlive a granted session
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A widget toolkit or rendering surface
//! - An IME composition protocol (no preedit, no candidates)
//! - A threading layer (hosts serialize every callback per client)

pub mod document;
pub mod error;
pub mod ids;
pub mod keystroke;

pub use document::{DocumentContext, EditSession, Range, Selection, SessionMode};
pub use error::HostError;
pub use ids::{ClientId, EditCookie, HotKeyId};
pub use keystroke::KeystrokeHost;
