//! # Simulated Host
//!
//! In-memory implementation of the `host_api` contract, for tests and
//! demos.
//!
//! ## Philosophy
//!
//! - **Deterministic**: same call sequence => same state, no real input
//! - **Strict at the boundary**: duplicate advises, unknown unadvises and
//!   stale cookies are errors, so plugin bookkeeping bugs surface in tests
//! - **Fault injectable**: capability refusals and lock refusals can be
//!   armed to exercise the plugin's degradation paths
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A real input framework binding
//! - A rich text model (one flat buffer, char offsets, one selection)

pub mod document;
pub mod keystroke;

pub use document::SimDocument;
pub use keystroke::SimKeystrokeHost;
