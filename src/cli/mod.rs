//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteColor;
use crate::view::ViewMode;
use output::OutputFormat;

/// inkr - pocket notes with pin, favorite, and trash
#[derive(Parser, Debug)]
#[command(name = "inkr", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// List notes in the current view
    #[command(name = "ls")]
    List(ListArgs),

    /// Search note content
    Search(SearchArgs),

    /// Show a single note in full
    Show(ShowArgs),

    /// Edit a note's title, content, or color
    Edit(EditArgs),

    /// Pin or unpin a note
    Pin(NoteRefArgs),

    /// Favorite or unfavorite a note
    Fav(NoteRefArgs),

    /// Move a note to the trash (undoable for a few seconds)
    Trash(NoteRefArgs),

    /// Bring a note back from the trash
    Restore(NoteRefArgs),

    /// Delete a trashed note permanently
    Purge(NoteRefArgs),

    /// Undo the most recent trash, if still within the window
    Undo,

    /// Show or set the appearance preference
    Theme(ThemeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// The view configurations the `ls` cycling control steps through.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ViewModeArg {
    /// All notes, newest first
    #[default]
    AllNewest,
    /// All notes, oldest first
    AllOldest,
    /// Favorites only, newest first
    Favorites,
    /// Pinned only, newest first
    Pinned,
}

impl From<ViewModeArg> for ViewMode {
    fn from(arg: ViewModeArg) -> Self {
        match arg {
            ViewModeArg::AllNewest => ViewMode::AllNewest,
            ViewModeArg::AllOldest => ViewMode::AllOldest,
            ViewModeArg::Favorites => ViewMode::FavoritesNewest,
            ViewModeArg::Pinned => ViewMode::PinnedNewest,
        }
    }
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note content (blank content silently creates nothing)
    pub content: Option<String>,

    /// Note title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Color tag (default, blue, green, purple, orange, pink, teal)
    #[arg(short, long, default_value = "default")]
    pub color: NoteColor,

    /// Append clipboard text to the content
    #[arg(short, long)]
    pub paste: bool,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// View configuration
    #[arg(long, value_enum, default_value_t = ViewModeArg::AllNewest)]
    pub view: ViewModeArg,

    /// Filter by a case-insensitive content substring
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show the trash instead of the active notes
    #[arg(long)]
    pub trash: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// View configuration to search within
    #[arg(long, value_enum, default_value_t = ViewModeArg::AllNewest)]
    pub view: ViewModeArg,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id or id prefix
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id or id prefix
    pub note: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New content
    #[arg(short = 'C', long)]
    pub content: Option<String>,

    /// New color tag
    #[arg(short, long)]
    pub color: Option<NoteColor>,

    /// Append clipboard text to the content
    #[arg(short, long)]
    pub paste: bool,
}

/// Arguments for commands addressing a single note
#[derive(Parser, Debug)]
pub struct NoteRefArgs {
    /// Note id or id prefix
    pub note: String,
}

/// Appearance preference values
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    pub fn name(self) -> &'static str {
        match self {
            ThemeArg::Light => "light",
            ThemeArg::Dark => "dark",
        }
    }
}

/// Arguments for the `theme` command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Preference to set; omit to print the current one
    #[arg(value_enum)]
    pub theme: Option<ThemeArg>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
