//! List and search command handlers.

use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use super::open_store;
use crate::cli::config::Config;
use crate::cli::output::{ListingGroups, NoteListing, Output, OutputFormat, time_ago, truncate_str};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;
use crate::store::{KvStore, NoteStore};
use crate::view::{GroupedView, ViewQuery, query};

pub fn handle_list(args: &ListArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(data_dir, config);
    let view_query = ViewQuery {
        mode: args.view.into(),
        search: args.search.clone(),
        trash: args.trash,
    };
    print_view(&store, &view_query, args.format)
}

pub fn handle_search(args: &SearchArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(data_dir, config);
    let view_query = ViewQuery {
        mode: args.view.into(),
        search: Some(args.query.clone()),
        trash: false,
    };
    print_view(&store, &view_query, args.format)
}

fn print_view<S: KvStore>(
    store: &NoteStore<S>,
    view_query: &ViewQuery,
    format: OutputFormat,
) -> Result<()> {
    let view = query(store.notes(), view_query);

    match format {
        OutputFormat::Human => print_human(store, view_query, &view),
        OutputFormat::Json => {
            let groups = ListingGroups {
                pinned: view.pinned.iter().map(|n| NoteListing::from_note(n)).collect(),
                others: view.others.iter().map(|n| NoteListing::from_note(n)).collect(),
            };
            let output = Output::new(groups);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human<S: KvStore>(store: &NoteStore<S>, view_query: &ViewQuery, view: &GroupedView<'_>) {
    if view_query.trash {
        println!("Trash");
    } else {
        println!("{}", view_query.mode.label());
    }
    println!();

    if view.is_empty() {
        if store.is_empty() {
            println!("No notes saved yet.");
        } else {
            println!("No notes found.");
        }
        return;
    }

    if !view.pinned.is_empty() {
        println!("Pinned");
        for note in &view.pinned {
            print_row(note);
        }
        if !view.others.is_empty() {
            println!();
            println!("Others");
        }
    }
    for note in &view.others {
        print_row(note);
    }

    println!();
    println!("{} note(s)", view.len());
}

fn print_row(note: &Note) {
    let now = Utc::now();
    let label = if note.title().is_empty() {
        note.content().lines().next().unwrap_or_default()
    } else {
        note.title()
    };

    let mut flags = String::new();
    if note.is_favorite() {
        flags.push_str(" ♥");
    }
    if note.color() != crate::domain::NoteColor::Default {
        flags.push_str(&format!(" [{}]", note.color()));
    }

    println!(
        "{:<10}  {:<44}  {:>10}{}",
        note.id().prefix(),
        truncate_str(label, 44),
        time_ago(note.created_at(), now),
        flags
    );
}
