//! Trash, restore, purge, and undo handlers.

use anyhow::Result;
use std::path::Path;

use super::{flush_persist_warning, open_store, print_no_match, resolve_display, resolve_id};
use crate::cli::NoteRefArgs;
use crate::cli::config::Config;

pub fn handle_trash(args: &NoteRefArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some(id) = resolve_id(&store, &args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    if store.trash(&id) {
        println!(
            "Note moved to trash. Run `inkr undo` within {}s to bring it back.",
            config.undo_window().num_seconds()
        );
    } else {
        println!("Note is already in the trash.");
    }

    flush_persist_warning(&mut store);
    Ok(())
}

pub fn handle_restore(args: &NoteRefArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some((id, display)) = resolve_display(&store, &args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    if store.restore(&id) {
        println!("Restored: {display}");
    } else {
        println!("Note is not in the trash.");
    }

    flush_persist_warning(&mut store);
    Ok(())
}

pub fn handle_purge(args: &NoteRefArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some((id, display)) = resolve_display(&store, &args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    if store.purge(&id) {
        println!("Permanently deleted: {display}");
    } else {
        print_no_match(&args.note);
    }

    flush_persist_warning(&mut store);
    Ok(())
}

pub fn handle_undo(data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);

    if store.undo_last_trash() {
        println!("Note restored.");
    } else {
        println!("Nothing to undo.");
    }

    flush_persist_warning(&mut store);
    Ok(())
}
