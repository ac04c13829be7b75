//! The fixed set of cosmetic color tags a note can carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cosmetic color tag for a note.
///
/// One of a fixed seven-value palette. The color has no effect on any
/// lifecycle or query behavior; it is carried through edits and
/// persisted verbatim for the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Default,
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
}

impl NoteColor {
    /// All colors, in palette order.
    pub const ALL: [NoteColor; 7] = [
        NoteColor::Default,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
        NoteColor::Orange,
        NoteColor::Pink,
        NoteColor::Teal,
    ];

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            NoteColor::Default => "default",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Purple => "purple",
            NoteColor::Orange => "orange",
            NoteColor::Pink => "pink",
            NoteColor::Teal => "teal",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Clone)]
pub struct ParseColorError {
    value: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color '{}' (expected one of: default, blue, green, purple, orange, pink, teal)",
            self.value
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for NoteColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteColor::ALL
            .iter()
            .find(|c| c.name() == s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| ParseColorError {
                value: s.to_string(),
            })
    }
}
