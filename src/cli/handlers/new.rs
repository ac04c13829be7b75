//! New note command handler.

use anyhow::Result;
use std::path::Path;

use super::{flush_persist_warning, open_store};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::editor::{Draft, SaveOutcome, SystemClipboard};

pub fn handle_new(args: &NewArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);

    let mut draft = Draft::new();
    draft.title = args.title.clone().unwrap_or_default();
    draft.content = args.content.clone().unwrap_or_default();
    draft.color = args.color;

    if args.paste {
        // Clipboard denial is a transient notice, never a failed command;
        // whatever content was given on the command line still saves.
        if let Err(e) = draft.paste(&mut SystemClipboard) {
            eprintln!("{e}");
        }
    }

    match draft.save(&mut store) {
        SaveOutcome::Created(id) => {
            if let Some(note) = store.find(&id.to_string()) {
                println!("Created: {note}");
            }
        }
        SaveOutcome::Empty => {
            // Blank content: the save collapses silently, per the
            // empty-editor behavior.
            println!("Nothing to save.");
        }
        SaveOutcome::Updated(_) | SaveOutcome::Missing => unreachable!("new draft has no target"),
    }

    flush_persist_warning(&mut store);
    Ok(())
}
