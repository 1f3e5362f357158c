//! Document context contract: edit sessions, ranges, selection

use crate::error::HostError;
use crate::ids::{ClientId, EditCookie};
use serde::{Deserialize, Serialize};

/// A half-open span of character offsets in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// First character covered
    pub start: usize,
    /// One past the last character covered
    pub end: usize,
}

impl Range {
    /// Creates a range
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty range at a single position
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of characters covered
    ///
    /// Saturates to zero for an inverted range, so a malformed value can
    /// never panic its way through length arithmetic.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for a zero-length range
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collapses the range to an insertion point at its end
    pub const fn collapse_to_end(self) -> Self {
        Self::caret(self.end)
    }
}

/// Document selection
///
/// No interim-character styling in this design; a selection is its range,
/// and a caret is an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected span
    pub range: Range,
}

impl Selection {
    /// Creates a selection over a range
    pub const fn new(range: Range) -> Self {
        Self { range }
    }

    /// Creates a caret (empty selection) at a position
    pub const fn caret(pos: usize) -> Self {
        Self {
            range: Range::caret(pos),
        }
    }

    /// True if the selection is an insertion point
    pub const fn is_caret(&self) -> bool {
        self.range.is_empty()
    }
}

/// How an edit session must be scheduled
///
/// Only synchronous grants exist: key-event handling must finish within
/// the host dispatch call that delivered the key, so a deferred mode is
/// deliberately absent from this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Run the session on this call stack or refuse the lock
    Sync,
}

/// A transactional mutation task
///
/// Created per accepted key event, submitted through
/// [`DocumentContext::request_edit_session`], invoked exactly once under
/// the context lock, then discarded. Implementations must not retain the
/// cookie or the context past return.
pub trait EditSession {
    /// The single mutation entry point
    ///
    /// `cookie` authorizes mutation for the duration of this call only.
    fn do_edit_session(
        &mut self,
        cookie: EditCookie,
        ctx: &mut dyn DocumentContext,
    ) -> Result<(), HostError>;
}

/// An editable document owned by the host
///
/// The plugin borrows a context for the duration of one callback; the
/// mutation primitives are only honored under a granted session's cookie.
pub trait DocumentContext {
    /// Requests an exclusive read-write lock and runs `session` under it
    ///
    /// On grant the host invokes `session.do_edit_session` exactly once,
    /// synchronously, with a fresh cookie. Refusals:
    /// - [`HostError::ContextBusy`] while another session is executing
    /// - [`HostError::InvalidClient`] outside a valid activation window
    fn request_edit_session(
        &mut self,
        client: ClientId,
        mode: SessionMode,
        session: &mut dyn EditSession,
    ) -> Result<(), HostError>;

    /// Inserts text at the current selection, replacing it
    ///
    /// Returns the range covering the inserted text. Rejects a cookie that
    /// does not belong to the currently executing session.
    fn insert_at_selection(&mut self, cookie: EditCookie, text: &str)
        -> Result<Range, HostError>;

    /// Replaces the current selection
    fn set_selection(&mut self, cookie: EditCookie, selection: Selection)
        -> Result<(), HostError>;
}
