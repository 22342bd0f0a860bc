//! Opaque note identifier used as both logical key and filename stem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of generated identifiers and of the short form shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// A note identifier.
///
/// Identifiers are opaque strings. New notes get the first eight hex
/// characters of a random v4 UUID; daily journal notes use `today-YYYYMMDD`.
/// Any non-empty string that is safe to use as a filename stem is accepted
/// when parsing, so hand-written notes keep whatever id they were given.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id = NoteId::generate();
/// assert_eq!(id.as_str().len(), 8);
///
/// let id: NoteId = "abc12345".parse().unwrap();
/// assert_eq!(id.to_string(), "abc12345");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(uuid[..SHORT_ID_LEN].to_string())
    }

    /// Returns the identifier of the journal note for `date`.
    pub fn journal(date: NaiveDate) -> Self {
        Self(format!("today-{}", date.format("%Y%m%d")))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns at most the first eight characters, for compact listings.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Returns the note's filename (`<id>.md`).
    pub fn filename(&self) -> String {
        format!("{}.md", self.0)
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

/// Error returned when parsing an invalid note identifier.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseNoteIdError {
            value: s.to_string(),
            reason,
        };

        if s.trim().is_empty() {
            return Err(err("id cannot be empty"));
        }
        if s != s.trim() {
            return Err(err("id cannot have surrounding whitespace"));
        }
        if s.contains(['/', '\\']) {
            return Err(err("id cannot contain path separators"));
        }
        if s.starts_with('.') {
            return Err(err("id cannot start with '.'"));
        }

        Ok(Self(s.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
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
