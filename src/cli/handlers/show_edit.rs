//! Show and edit command handlers.

use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use super::{flush_persist_warning, open_store, print_no_match};
use crate::cli::config::Config;
use crate::cli::output::time_ago;
use crate::cli::{EditArgs, ShowArgs};
use crate::domain::NoteColor;
use crate::editor::{Draft, SaveOutcome, SystemClipboard};

pub fn handle_show(args: &ShowArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(data_dir, config);
    let Some(note) = store.find(&args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };

    if !note.title().is_empty() {
        println!("{}", note.title());
        println!();
    }
    println!("{}", note.content());
    println!();
    println!("id:      {}", note.id());
    println!(
        "created: {} ({})",
        note.created_at().format("%Y-%m-%d %H:%M"),
        time_ago(note.created_at(), Utc::now())
    );
    if note.color() != NoteColor::Default {
        println!("color:   {}", note.color());
    }

    let mut states = Vec::new();
    if note.is_pinned() {
        states.push("pinned");
    }
    if note.is_favorite() {
        states.push("favorite");
    }
    if note.is_trashed() {
        states.push("trashed");
    }
    if !states.is_empty() {
        println!("state:   {}", states.join(", "));
    }

    Ok(())
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(data_dir, config);
    let Some(note) = store.find(&args.note) else {
        print_no_match(&args.note);
        return Ok(());
    };
    let mut draft = Draft::for_note(note);

    if args.title.is_none() && args.content.is_none() && args.color.is_none() && !args.paste {
        println!("Nothing to change.");
        return Ok(());
    }
    if let Some(title) = &args.title {
        draft.title = title.clone();
    }
    if let Some(content) = &args.content {
        draft.content = content.clone();
    }
    if let Some(color) = args.color {
        draft.color = color;
    }
    if args.paste {
        if let Err(e) = draft.paste(&mut SystemClipboard) {
            eprintln!("{e}");
        }
    }

    match draft.save(&mut store) {
        SaveOutcome::Updated(id) => {
            if let Some(note) = store.find(&id.to_string()) {
                println!("Updated: {note}");
            }
        }
        SaveOutcome::Empty => println!("Nothing to save: content cannot be blank."),
        SaveOutcome::Missing => print_no_match(&args.note),
        SaveOutcome::Created(_) => unreachable!("draft built from an existing note"),
    }

    flush_persist_warning(&mut store);
    Ok(())
}
