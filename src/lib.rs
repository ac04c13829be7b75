//! inkr - pocket notes with pin, favorite, trash, and a short undo window

pub mod cli;
pub mod domain;
pub mod editor;
pub mod store;
pub mod view;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_edit, handle_fav, handle_list, handle_new, handle_pin, handle_purge,
        handle_restore, handle_search, handle_show, handle_theme, handle_trash, handle_undo,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());

    if cli.verbose > 0 {
        eprintln!("data dir: {}", data_dir.display());
    }

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir, &config),
        Command::List(args) => handle_list(args, &data_dir, &config),
        Command::Search(args) => handle_search(args, &data_dir, &config),
        Command::Show(args) => handle_show(args, &data_dir, &config),
        Command::Edit(args) => handle_edit(args, &data_dir, &config),
        Command::Pin(args) => handle_pin(args, &data_dir, &config),
        Command::Fav(args) => handle_fav(args, &data_dir, &config),
        Command::Trash(args) => handle_trash(args, &data_dir, &config),
        Command::Restore(args) => handle_restore(args, &data_dir, &config),
        Command::Purge(args) => handle_purge(args, &data_dir, &config),
        Command::Undo => handle_undo(&data_dir, &config),
        Command::Theme(args) => handle_theme(args, &data_dir),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "inkr", &mut std::io::stdout());
            Ok(())
        }
    }
}
