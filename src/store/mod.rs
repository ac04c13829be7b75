//! Note persistence and lifecycle: the storage adapter, the lifecycle
//! manager, and the time-boxed undo window.

mod kv;
mod notes;
mod undo;

pub use kv::{FileStore, KvStore, MemoryStore, StoreError, StoreResult};
pub use kv::{NOTES_KEY, THEME_KEY, UNDO_KEY};
pub use notes::NoteStore;
pub use undo::{DEFAULT_UNDO_WINDOW_SECS, UndoWindow};
