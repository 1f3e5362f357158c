//! Simulated document context

use host_api::{
    ClientId, DocumentContext, EditCookie, EditSession, HostError, Range, Selection, SessionMode,
};
use std::collections::HashSet;

/// In-memory editable document
///
/// A flat text buffer addressed by char offsets, one selection, and a
/// synchronous edit-session grant with per-grant cookies. The lock is
/// held only while a granted session's entry point is executing, so a
/// re-entrant request refuses with [`HostError::ContextBusy`] — the same
/// guarantee a real host gives.
#[derive(Debug)]
pub struct SimDocument {
    text: String,
    selection: Selection,
    authorized: HashSet<ClientId>,
    locked: bool,
    refuse_sessions: bool,
    current_cookie: Option<EditCookie>,
    next_cookie: u64,
    sessions_granted: u64,
}

impl SimDocument {
    /// Creates an empty document with no authorized clients
    pub fn new() -> Self {
        Self {
            text: String::new(),
            selection: Selection::caret(0),
            authorized: HashSet::new(),
            locked: false,
            refuse_sessions: false,
            current_cookie: None,
            next_cookie: 1,
            sessions_granted: 0,
        }
    }

    /// Creates an empty document that accepts sessions from `client`
    pub fn for_client(client: ClientId) -> Self {
        let mut doc = Self::new();
        doc.authorize_client(client);
        doc
    }

    /// Marks a client id as valid for edit-session requests
    pub fn authorize_client(&mut self, client: ClientId) {
        self.authorized.insert(client);
    }

    /// Withdraws a client id (ends its activation window)
    pub fn deauthorize_client(&mut self, client: ClientId) {
        self.authorized.remove(&client);
    }

    /// Arms or disarms refusal of every session request
    pub fn refuse_sessions(&mut self, refuse: bool) {
        self.refuse_sessions = refuse;
    }

    /// Replaces the whole buffer; caret moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = Selection::caret(self.char_len());
    }

    /// Selects a span, clamped to the buffer
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let end = end.min(len);
        let start = start.min(end);
        self.selection = Selection::new(Range::new(start, end));
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Number of sessions granted so far
    pub fn sessions_granted(&self) -> u64 {
        self.sessions_granted
    }

    /// Buffer length in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn check_cookie(&self, cookie: EditCookie) -> Result<(), HostError> {
        if self.current_cookie == Some(cookie) {
            Ok(())
        } else {
            Err(HostError::InvalidCookie)
        }
    }

    fn char_to_byte(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}

impl Default for SimDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentContext for SimDocument {
    fn request_edit_session(
        &mut self,
        client: ClientId,
        _mode: SessionMode,
        session: &mut dyn EditSession,
    ) -> Result<(), HostError> {
        if self.locked || self.refuse_sessions {
            return Err(HostError::ContextBusy);
        }
        if !self.authorized.contains(&client) {
            return Err(HostError::InvalidClient(client));
        }

        let cookie = EditCookie::from_raw(self.next_cookie);
        self.next_cookie += 1;
        self.current_cookie = Some(cookie);
        self.locked = true;
        self.sessions_granted += 1;

        let result = session.do_edit_session(cookie, self);

        // Reclaim the lock on every exit path; the cookie dies with it.
        self.locked = false;
        self.current_cookie = None;

        result
    }

    fn insert_at_selection(
        &mut self,
        cookie: EditCookie,
        text: &str,
    ) -> Result<Range, HostError> {
        self.check_cookie(cookie)?;

        let span = self.selection.range;
        let byte_start = self.char_to_byte(span.start);
        let byte_end = self.char_to_byte(span.end);
        self.text.replace_range(byte_start..byte_end, text);

        let inserted = Range::new(span.start, span.start + text.chars().count());
        // The inserted text is left selected; callers collapse it.
        self.selection = Selection::new(inserted);
        Ok(inserted)
    }

    fn set_selection(
        &mut self,
        cookie: EditCookie,
        selection: Selection,
    ) -> Result<(), HostError> {
        self.check_cookie(cookie)?;

        let len = self.char_len();
        let end = selection.range.end.min(len);
        let start = selection.range.start.min(end);
        self.selection = Selection::new(Range::new(start, end));
        Ok(())
    }
}
