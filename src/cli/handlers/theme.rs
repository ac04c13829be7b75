//! Appearance preference handler.
//!
//! The preference lives under its own store key; the note store never
//! reads it. It is carried here so the front end has one durable home
//! for the light/dark choice.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ThemeArgs;
use crate::store::{FileStore, KvStore, THEME_KEY};

pub fn handle_theme(args: &ThemeArgs, data_dir: &Path) -> Result<()> {
    let mut store = FileStore::new(data_dir);

    match args.theme {
        Some(theme) => {
            store
                .save(THEME_KEY, theme.name())
                .with_context(|| "failed to save theme preference")?;
            println!("Theme set to {}.", theme.name());
        }
        None => {
            let current = store
                .load(THEME_KEY)
                .unwrap_or_default()
                .unwrap_or_else(|| "light".to_string());
            println!("{current}");
        }
    }

    Ok(())
}
