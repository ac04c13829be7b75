//! The Note entity: a single user-authored text record with metadata.

use crate::domain::{NoteColor, NoteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyContent,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyContent => {
                write!(f, "invalid note: content cannot be blank")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A single note.
///
/// Serializes in camelCase (`createdAt`, `isPinned`, ...) to stay
/// readable next to the web export format. The whole collection is
/// always written as one JSON array; there is no per-note or delta
/// persistence.
///
/// # Identity
/// `id` and `created_at` are assigned at creation and never change;
/// editing replaces title, content, and color only.
///
/// # Flags
/// - `is_pinned`: pinned notes group first in every view.
/// - `is_favorite`: selectable favorites-only view.
/// - `is_trashed`: soft delete; hidden from default views until
///   restored or purged.
/// - `animate`: transient entry-animation hint, set on creation and
///   consumed once by the presentation layer; never serialized.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    #[serde(default)]
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    color: NoteColor,
    #[serde(default)]
    is_pinned: bool,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    is_trashed: bool,
    #[serde(skip)]
    animate: bool,
}

impl Note {
    /// Creates a new note with all flags cleared and `animate` set.
    ///
    /// The title may be empty; blank content is the one rejection
    /// condition. Content is stored verbatim (leading/trailing
    /// whitespace preserved) once the blank check passes.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if `content` is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyContent,
            });
        }

        Ok(Self {
            id,
            title: title.into(),
            content,
            created_at,
            color,
            is_pinned: false,
            is_favorite: false,
            is_trashed: false,
            animate: true,
        })
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title (possibly empty).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the note's color tag.
    pub fn color(&self) -> NoteColor {
        self.color
    }

    /// Whether the note is pinned.
    pub fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    /// Whether the note is a favorite.
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Whether the note is in the trash.
    pub fn is_trashed(&self) -> bool {
        self.is_trashed
    }

    /// Whether the entry animation is still pending for this note.
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Consumes the one-shot entry-animation hint.
    pub fn take_animate(&mut self) -> bool {
        std::mem::take(&mut self.animate)
    }

    /// Replaces title, content, and color, preserving identity.
    pub(crate) fn apply_edit(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        color: NoteColor,
    ) {
        self.title = title.into();
        self.content = content.into();
        self.color = color;
    }

    pub(crate) fn set_trashed(&mut self, trashed: bool) {
        self.is_trashed = trashed;
    }

    /// Flips the pinned flag, returning the new value.
    pub(crate) fn toggle_pinned(&mut self) -> bool {
        self.is_pinned = !self.is_pinned;
        self.is_pinned
    }

    /// Flips the favorite flag, returning the new value.
    pub(crate) fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            // Title-less notes show a content snippet instead.
            let snippet: String = self.content.chars().take(30).collect();
            write!(f, "{} [{}]", snippet, self.id.prefix())
        } else {
            write!(f, "{} [{}]", self.title, self.id.prefix())
        }
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("created_at", &self.created_at)
            .field("color", &self.color)
            .field("is_pinned", &self.is_pinned)
            .field("is_favorite", &self.is_favorite)
            .field("is_trashed", &self.is_trashed)
            .finish()
    }
}
