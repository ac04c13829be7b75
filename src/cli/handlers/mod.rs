//! Command handlers for the CLI.

mod flags;
mod list;
mod new;
mod show_edit;
mod theme;
mod trash;

use std::path::Path;

use crate::cli::config::Config;
use crate::domain::NoteId;
use crate::store::{FileStore, KvStore, NoteStore};

// Re-export public items
pub use flags::{handle_fav, handle_pin};
pub use list::{handle_list, handle_search};
pub use new::handle_new;
pub use show_edit::{handle_edit, handle_show};
pub use theme::handle_theme;
pub use trash::{handle_purge, handle_restore, handle_trash, handle_undo};

/// Opens the note store against the resolved data directory.
pub(crate) fn open_store(data_dir: &Path, config: &Config) -> NoteStore<FileStore> {
    NoteStore::open(FileStore::new(data_dir)).with_undo_window(config.undo_window())
}

/// Resolves user input (full id or prefix) to a note id.
///
/// A miss is not an error: callers print a notice and no-op, matching
/// the single-writer model where an absent note is never fatal.
pub(crate) fn resolve_id<S: KvStore>(store: &NoteStore<S>, input: &str) -> Option<NoteId> {
    store.find(input).map(|n| n.id().clone())
}

/// Resolves user input to a note id plus its display string, captured
/// before any mutation invalidates the borrow.
pub(crate) fn resolve_display<S: KvStore>(
    store: &NoteStore<S>,
    input: &str,
) -> Option<(NoteId, String)> {
    store.find(input).map(|n| (n.id().clone(), n.to_string()))
}

/// Prints the standard miss notice for an unresolved note reference.
pub(crate) fn print_no_match(input: &str) {
    println!("No note matches '{}'.", input);
}

/// Surfaces a failed persist as a transient stderr notice.
///
/// The session's in-memory state stays authoritative; the worst case
/// is lost durability, so the command itself still succeeds.
pub(crate) fn flush_persist_warning<S: KvStore>(store: &mut NoteStore<S>) {
    if let Some(warning) = store.take_persist_warning() {
        eprintln!("warning: {warning} (changes kept for this session only)");
    }
}
