//! Pin and favorite toggle handlers.

use anyhow::Result;
use std::path::Path;

use super::{flush_persist_warning, open_store, print_no_match, resolve_display};
use crate::cli::NoteRefArgs;
use crate::cli::config::Config;

pub fn handle_pin(args: &NoteRefArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some((id, display)) = resolve_display(&store, &args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    match store.toggle_pin(&id) {
        Some(true) => println!("Pinned: {display}"),
        Some(false) => println!("Unpinned: {display}"),
        None => print_no_match(&args.note),
    }

    flush_persist_warning(&mut store);
    Ok(())
}

pub fn handle_fav(args: &NoteRefArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some((id, display)) = resolve_display(&store, &args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    match store.toggle_favorite(&id) {
        Some(true) => println!("Favorited: {display}"),
        Some(false) => println!("Unfavorited: {display}"),
        None => print_no_match(&args.note),
    }

    flush_persist_warning(&mut store);
    Ok(())
}
