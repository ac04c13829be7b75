//! Draft editor: the staging buffer notes are written in before they
//! reach the store, plus inline formatting and clipboard paste.

use crate::domain::{Note, NoteColor, NoteId};
use crate::store::{KvStore, NoteStore};
use std::ops::Range;
use thiserror::Error;

/// Errors from the clipboard collaborator.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The platform refused access (permission denied, no display, …).
    /// Surfaced as a transient notice; note state is never touched.
    #[error("failed to paste from clipboard: {0}")]
    Denied(String),
}

/// Read access to the system clipboard.
///
/// A trait seam so the editor can be exercised without a real
/// clipboard; the binary uses [`SystemClipboard`].
pub trait Clipboard {
    /// Reads the clipboard's current text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The real clipboard, via arboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        arboard::Clipboard::new()
            .and_then(|mut c| c.get_text())
            .map_err(|e| ClipboardError::Denied(e.to_string()))
    }
}

/// Outcome of saving a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new note was created.
    Created(NoteId),
    /// The targeted note was updated in place.
    Updated(NoteId),
    /// Content was blank; the save collapsed without touching the store.
    Empty,
    /// The edit target no longer exists; nothing changed.
    Missing,
}

/// In-progress note text, not yet part of the collection.
///
/// A draft either creates a new note or, when built from an existing
/// one with [`Draft::for_note`], edits it in place on save. Saving
/// blank content is the one silent rejection: the editor just
/// collapses ([`SaveOutcome::Empty`]), it is not an error.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub color: NoteColor,
    target: Option<NoteId>,
}

impl Draft {
    /// An empty draft for a new note.
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft pre-filled from an existing note; saving edits it.
    pub fn for_note(note: &Note) -> Self {
        Self {
            title: note.title().to_string(),
            content: note.content().to_string(),
            color: note.color(),
            target: Some(note.id().clone()),
        }
    }

    /// The note this draft edits, if any.
    pub fn target(&self) -> Option<&NoteId> {
        self.target.as_ref()
    }

    /// Commits the draft to the store and clears it on success.
    pub fn save<S: KvStore>(&mut self, store: &mut NoteStore<S>) -> SaveOutcome {
        if self.content.trim().is_empty() {
            return SaveOutcome::Empty;
        }

        let outcome = match &self.target {
            Some(id) => {
                if store.edit(id, self.title.clone(), self.content.clone(), self.color) {
                    SaveOutcome::Updated(id.clone())
                } else {
                    return SaveOutcome::Missing;
                }
            }
            None => match store.create(self.title.clone(), self.content.clone(), self.color) {
                Some(note) => SaveOutcome::Created(note.id().clone()),
                None => return SaveOutcome::Empty,
            },
        };

        self.clear();
        outcome
    }

    /// Discards the draft text and target.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Toggles `**bold**` markers around the selection.
    pub fn toggle_bold(&mut self, selection: Range<usize>) -> Range<usize> {
        self.toggle_inline(selection, "**")
    }

    /// Toggles `*italic*` markers around the selection.
    pub fn toggle_italic(&mut self, selection: Range<usize>) -> Range<usize> {
        self.toggle_inline(selection, "*")
    }

    /// Wraps the selected content in `marker`, or strips the markers
    /// when the selection already carries them. Returns the updated
    /// selection over the same text.
    ///
    /// `selection` is a byte range; an out-of-bounds or non-boundary
    /// range leaves the draft untouched.
    fn toggle_inline(&mut self, selection: Range<usize>, marker: &str) -> Range<usize> {
        let Range { start, end } = selection;
        if start > end
            || end > self.content.len()
            || !self.content.is_char_boundary(start)
            || !self.content.is_char_boundary(end)
        {
            return selection;
        }

        let selected = &self.content[start..end];
        let m = marker.len();

        if selected.len() >= 2 * m && selected.starts_with(marker) && selected.ends_with(marker) {
            // Toggle off: strip the existing markers.
            let inner = selected[m..selected.len() - m].to_string();
            self.content.replace_range(start..end, &inner);
            start..end - 2 * m
        } else {
            // Toggle on: wrap the selection.
            let wrapped = format!("{marker}{selected}{marker}");
            self.content.replace_range(start..end, &wrapped);
            start + m..end + m
        }
    }

    /// Reads the clipboard and inserts its text at byte offset `at`
    /// (clamped to the end), returning the cursor position after the
    /// inserted text.
    ///
    /// # Errors
    ///
    /// Propagates [`ClipboardError::Denied`]; the draft is unchanged.
    pub fn paste_at(
        &mut self,
        clipboard: &mut dyn Clipboard,
        at: usize,
    ) -> Result<usize, ClipboardError> {
        let text = clipboard.read_text()?;
        let mut at = at.min(self.content.len());
        while !self.content.is_char_boundary(at) {
            at -= 1;
        }
        self.content.insert_str(at, &text);
        Ok(at + text.len())
    }

    /// Reads the clipboard and appends its text to the content.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        let end = self.content.len();
        self.paste_at(clipboard, end).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    struct FakeClipboard(Result<String, ()>);

    impl Clipboard for FakeClipboard {
        fn read_text(&mut self) -> Result<String, ClipboardError> {
            self.0
                .clone()
                .map_err(|_| ClipboardError::Denied("permission denied".into()))
        }
    }

    fn open_store() -> NoteStore<MemoryStore> {
        NoteStore::open(MemoryStore::new())
    }

    #[test]
    fn save_creates_when_no_target() {
        let mut store = open_store();
        let mut draft = Draft {
            title: "Groceries".into(),
            content: "milk, eggs".into(),
            color: NoteColor::Green,
            ..Draft::new()
        };

        let outcome = draft.save(&mut store);
        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(store.notes()[0].title(), "Groceries");
        assert_eq!(draft.content, "", "draft clears after a successful save");
    }

    #[test]
    fn save_edits_when_built_from_a_note() {
        let mut store = open_store();
        store.create("old", "old body", NoteColor::Default).unwrap();
        let mut draft = Draft::for_note(&store.notes()[0]);
        draft.content = "new body".into();
        draft.color = NoteColor::Pink;

        let outcome = draft.save(&mut store);
        assert!(matches!(outcome, SaveOutcome::Updated(_)));
        assert_eq!(store.notes()[0].content(), "new body");
        assert_eq!(store.notes()[0].color(), NoteColor::Pink);
        assert_eq!(store.len(), 1, "edit never duplicates");
    }

    #[test]
    fn blank_save_collapses_silently() {
        let mut store = open_store();
        let mut draft = Draft {
            content: "   \n".into(),
            ..Draft::new()
        };
        assert_eq!(draft.save(&mut store), SaveOutcome::Empty);
        assert!(store.is_empty());
    }

    #[test]
    fn save_against_vanished_target_reports_missing() {
        let mut store = open_store();
        store.create("", "soon gone", NoteColor::Default).unwrap();
        let mut draft = Draft::for_note(&store.notes()[0]);
        draft.content = "update".into();

        let id = draft.target().unwrap().clone();
        store.purge(&id);
        assert_eq!(draft.save(&mut store), SaveOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn bold_toggle_wraps_then_strips() {
        let mut draft = Draft {
            content: "make this loud".into(),
            ..Draft::new()
        };

        let sel = draft.toggle_bold(5..9);
        assert_eq!(draft.content, "make **this** loud");
        assert_eq!(sel, 7..11, "selection follows the wrapped text");

        let sel = draft.toggle_bold(5..13);
        assert_eq!(draft.content, "make this loud");
        assert_eq!(sel, 5..9);
    }

    #[test]
    fn italic_uses_single_markers() {
        let mut draft = Draft {
            content: "quiet".into(),
            ..Draft::new()
        };
        draft.toggle_italic(0..5);
        assert_eq!(draft.content, "*quiet*");
    }

    #[test]
    fn toggle_ignores_invalid_ranges() {
        let mut draft = Draft {
            content: "héllo".into(),
            ..Draft::new()
        };
        // Byte 2 is inside the two-byte 'é'.
        let sel = draft.toggle_bold(2..4);
        assert_eq!(draft.content, "héllo");
        assert_eq!(sel, 2..4);

        let sel = draft.toggle_bold(0..99);
        assert_eq!(draft.content, "héllo");
        assert_eq!(sel, 0..99);
    }

    #[test]
    fn paste_appends_clipboard_text() {
        let mut draft = Draft {
            content: "before ".into(),
            ..Draft::new()
        };
        let mut clipboard = FakeClipboard(Ok("after".into()));
        draft.paste(&mut clipboard).unwrap();
        assert_eq!(draft.content, "before after");
    }

    #[test]
    fn paste_at_inserts_and_returns_cursor() {
        let mut draft = Draft {
            content: "ad".into(),
            ..Draft::new()
        };
        let mut clipboard = FakeClipboard(Ok("bc".into()));
        let cursor = draft.paste_at(&mut clipboard, 1).unwrap();
        assert_eq!(draft.content, "abcd");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn denied_clipboard_leaves_draft_untouched() {
        let mut draft = Draft {
            content: "kept".into(),
            ..Draft::new()
        };
        let mut clipboard = FakeClipboard(Err(()));
        let err = draft.paste(&mut clipboard).unwrap_err();
        assert!(err.to_string().contains("failed to paste"));
        assert_eq!(draft.content, "kept");
    }
}
