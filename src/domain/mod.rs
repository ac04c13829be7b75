//! Domain types: notes and their identity and metadata.

mod color;
mod note;
mod note_id;

pub use color::{NoteColor, ParseColorError};
pub use note::{Note, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
