//! The note lifecycle manager: single source of truth for the collection.

use crate::domain::{Note, NoteColor, NoteId};
use crate::store::kv::{KvStore, NOTES_KEY, StoreError, UNDO_KEY};
use crate::store::undo::{DEFAULT_UNDO_WINDOW_SECS, UndoWindow};
use chrono::{Duration, Utc};

/// Owns the canonical in-memory note collection and enforces every
/// state transition.
///
/// All operations are synchronous and persist the full collection after
/// each mutation. Lookups are linear and a missing id is always a
/// silent no-op; there is a single writer, so an absent note only
/// means the caller raced nothing but itself.
///
/// Persistence failures never fail an operation: the in-memory
/// collection stays authoritative for the session and the failure is
/// held as a one-shot warning for the caller to surface.
pub struct NoteStore<S: KvStore> {
    store: S,
    notes: Vec<Note>,
    undo: UndoWindow,
    undo_window: Duration,
    persist_warning: Option<String>,
}

impl<S: KvStore> NoteStore<S> {
    /// Opens the store, loading the collection and any armed undo
    /// window from the backing store.
    ///
    /// An absent or malformed blob means "no notes yet", never an
    /// error.
    pub fn open(store: S) -> Self {
        let notes = store
            .load(NOTES_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();

        let undo = store
            .load(UNDO_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();

        Self {
            store,
            notes,
            undo,
            undo_window: Duration::seconds(DEFAULT_UNDO_WINDOW_SECS),
            persist_warning: None,
        }
    }

    /// Overrides the undo window duration (config and tests).
    pub fn with_undo_window(mut self, window: Duration) -> Self {
        self.undo_window = window;
        self
    }

    /// Read-only snapshot of the full collection, trash included.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection, trash included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Resolves a note from user input (full id or id prefix).
    pub fn find(&self, input: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id().matches(input))
    }

    /// Creates a note and prepends it to the collection.
    ///
    /// Blank or whitespace-only content is a silent no-op, returning
    /// `None`: the empty-editor save just collapses.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
    ) -> Option<&Note> {
        let note = Note::new(NoteId::new(), title, content, color, Utc::now()).ok()?;
        self.notes.insert(0, note);
        self.persist_notes();
        Some(&self.notes[0])
    }

    /// Replaces title, content, and color on the matching note.
    ///
    /// Identity (`id`, `created_at`) and all flags are preserved.
    /// Returns `false` without side effects when the id is absent.
    pub fn edit(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
    ) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        note.apply_edit(title, content, color);
        self.persist_notes();
        true
    }

    /// Soft-deletes the matching note and arms the undo window with its
    /// prior state.
    ///
    /// Idempotent: trashing an already-trashed note is a no-op and does
    /// not re-arm the window.
    pub fn trash(&mut self, id: &NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if note.is_trashed() {
            return false;
        }

        let prior = note.clone();
        note.set_trashed(true);
        self.undo.arm(prior, Utc::now(), self.undo_window);
        self.persist_notes();
        self.persist_undo();
        true
    }

    /// Clears the trashed flag. No-op if the note is absent or not
    /// trashed.
    pub fn restore(&mut self, id: &NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if !note.is_trashed() {
            return false;
        }
        note.set_trashed(false);
        self.persist_notes();
        true
    }

    /// Removes the note permanently. Irreversible: never arms the undo
    /// window, and cancels a pending reversal that points at this note
    /// so undo can never resurrect a purged note.
    pub fn purge(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id() != id);
        if self.notes.len() == before {
            return false;
        }

        if self.undo.pending_note_id(Utc::now()) == Some(id) {
            self.undo.disarm();
            self.persist_undo();
        }
        self.persist_notes();
        true
    }

    /// Flips the pinned flag, returning the new value. `None` if absent.
    pub fn toggle_pin(&mut self, id: &NoteId) -> Option<bool> {
        let pinned = self
            .notes
            .iter_mut()
            .find(|n| n.id() == id)?
            .toggle_pinned();
        self.persist_notes();
        Some(pinned)
    }

    /// Flips the favorite flag, returning the new value. `None` if absent.
    pub fn toggle_favorite(&mut self, id: &NoteId) -> Option<bool> {
        let favorite = self
            .notes
            .iter_mut()
            .find(|n| n.id() == id)?
            .toggle_favorite();
        self.persist_notes();
        Some(favorite)
    }

    /// Reverts the most recent `trash` if its window is still open.
    ///
    /// The captured prior state replaces the note in place, so the
    /// collection is value-equal to what it was before the trash call.
    /// Returns `false` when the window is idle or expired; an expired
    /// window leaves the note trashed.
    pub fn undo_last_trash(&mut self) -> bool {
        let Some(prior) = self.undo.take_if_open(Utc::now()) else {
            self.persist_undo();
            return false;
        };

        if let Some(note) = self.notes.iter_mut().find(|n| n.id() == prior.id()) {
            *note = prior;
            self.persist_notes();
        }
        self.persist_undo();
        true
    }

    /// The note a pending undo would restore, if the window is open.
    pub fn undo_pending(&self) -> Option<&NoteId> {
        self.undo.pending_note_id(Utc::now())
    }

    /// Takes the warning from the most recent failed persist, if any.
    ///
    /// Surfaced once as a transient notice; the session keeps running
    /// on in-memory state either way.
    pub fn take_persist_warning(&mut self) -> Option<String> {
        self.persist_warning.take()
    }

    fn persist_notes(&mut self) {
        let result = serde_json::to_string(&self.notes)
            .map_err(StoreError::from)
            .and_then(|blob| self.store.save(NOTES_KEY, &blob));
        if let Err(e) = result {
            self.persist_warning = Some(e.to_string());
        }
    }

    fn persist_undo(&mut self) {
        let result = if self.undo == UndoWindow::new() {
            self.store.remove(UNDO_KEY)
        } else {
            serde_json::to_string(&self.undo)
                .map_err(StoreError::from)
                .and_then(|blob| self.store.save(UNDO_KEY, &blob))
        };
        if let Err(e) = result {
            self.persist_warning = Some(e.to_string());
        }
    }
}
