//! Time-boxed undo of the most recent trash action.

use crate::domain::{Note, NoteId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a trash action stays reversible: 5 seconds, the timeout the
/// richer app variant used for its undo snackbar.
pub const DEFAULT_UNDO_WINDOW_SECS: i64 = 5;

/// Captured state for one reversible trash action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArmedUndo {
    /// The note exactly as it was before `trash` flipped its flag.
    prior: Note,
    expires_at: DateTime<Utc>,
}

/// Holds at most one pending reversible action for a bounded time.
///
/// Two states: *Idle* (nothing to undo) and *Armed* (the prior state of
/// the most recently trashed note, plus a deadline). Arming while armed
/// overwrites; reversals never queue. Expiry is a deadline checked at
/// use, not a background timer: an expired window simply reads as Idle,
/// and re-arming or disarming replaces the deadline, which is all the
/// cancellation the single-threaded core needs.
///
/// The window serializes (under its own store key) so a reversal can
/// span process invocations within its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UndoWindow {
    armed: Option<ArmedUndo>,
}

impl UndoWindow {
    /// Creates an idle window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the window with the prior state of a freshly trashed note,
    /// replacing any previously armed action.
    pub fn arm(&mut self, prior: Note, now: DateTime<Utc>, window: Duration) {
        self.armed = Some(ArmedUndo {
            prior,
            expires_at: now + window,
        });
    }

    /// Drops any pending action, expired or not.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Whether an unexpired action is pending at `now`.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.armed
            .as_ref()
            .is_some_and(|a| now < a.expires_at)
    }

    /// The id of the note a pending reversal would restore, if the
    /// window is still open at `now`.
    pub fn pending_note_id(&self, now: DateTime<Utc>) -> Option<&NoteId> {
        self.armed
            .as_ref()
            .filter(|a| now < a.expires_at)
            .map(|a| a.prior.id())
    }

    /// Takes the captured prior state if the window is still open.
    ///
    /// Returns `None` when idle or expired; an expired action is
    /// discarded on the way out, so the window always reads Idle
    /// afterwards.
    pub fn take_if_open(&mut self, now: DateTime<Utc>) -> Option<Note> {
        match self.armed.take() {
            Some(a) if now < a.expires_at => Some(a.prior),
            _ => None,
        }
    }
}
