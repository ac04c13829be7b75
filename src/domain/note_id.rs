//! ULID-based note identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Opaque unique identifier for a note.
///
/// Backed by a ULID: 26 Crockford Base32 characters, globally unique,
/// and lexicographically sortable by creation time. Assigned once at
/// note creation and never changed.
///
/// # Examples
///
/// ```
/// use inkr::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.to_string().len(), 26);
/// assert_eq!(id.prefix().len(), 8);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a fresh identifier stamped with the current time.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Returns the 8-character prefix used in listings and messages.
    ///
    /// Prefixes are matched case-insensitively when resolving a note
    /// from user input, so listings stay short without losing the
    /// ability to address a note.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Whether `input` names this id, either in full or by prefix.
    ///
    /// Matching is case-insensitive and requires at least 4 characters
    /// to avoid accidental matches on very short input.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input.len() < 4 {
            return false;
        }
        self.0
            .to_string()
            .to_ascii_uppercase()
            .starts_with(&input.to_ascii_uppercase())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid id string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the input that failed to parse.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}'", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
