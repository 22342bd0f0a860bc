//! Header codec: converts notes to and from their on-disk text form.

use crate::domain::{Note, NoteId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Marker line that opens and closes the header block.
pub const DELIMITER: &str = "---\n";

/// Errors during header parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed document: missing '---' header delimiters")]
    MalformedDocument,

    #[error("invalid note header: {0}")]
    InvalidHeader(#[from] serde_yaml::Error),
}

/// Borrowed view of the header fields, in on-disk order.
#[derive(Serialize)]
struct HeaderRef<'a> {
    id: &'a NoteId,
    created_at: &'a DateTime<Utc>,
    updated_at: &'a DateTime<Utc>,
    #[serde(skip_serializing_if = "is_empty")]
    tags: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    links: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

fn is_empty(items: &&[String]) -> bool {
    items.is_empty()
}

#[derive(Deserialize)]
struct Header {
    id: NoteId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    links: Option<Vec<String>>,
    #[serde(default)]
    context: Option<String>,
}

/// Parses a note document.
///
/// # Format
/// ```text
/// ---
/// id: abc12345
/// created_at: 2025-01-15T10:30:00Z
/// updated_at: 2025-01-15T10:30:00Z
/// tags:
/// - idea
/// ---
///
/// Body content here...
/// ```
///
/// The text is split on `---\n` at most twice, so a delimiter line inside
/// the body stays part of the body. The body is trimmed.
///
/// # Errors
///
/// Returns `ParseError::MalformedDocument` if the text does not start with
/// a header block, and `ParseError::InvalidHeader` if the header is not
/// valid YAML, lacks `id`/`created_at`/`updated_at`, or describes an
/// invalid note.
pub fn parse(text: &str) -> Result<Note, ParseError> {
    let text: Cow<'_, str> = if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    };

    let parts: Vec<&str> = text.splitn(3, DELIMITER).collect();
    if parts.len() < 3 || !parts[0].is_empty() {
        return Err(ParseError::MalformedDocument);
    }

    let header: Header = serde_yaml::from_str(parts[1])?;

    Note::builder(header.id, header.created_at, header.updated_at)
        .tags(header.tags.unwrap_or_default())
        .links(header.links.unwrap_or_default())
        .context(header.context)
        .content(parts[2])
        .build()
        .map_err(|e| ParseError::InvalidHeader(serde::de::Error::custom(e)))
}

/// Serializes a note to its on-disk form.
///
/// Empty `tags`/`links` and an absent `context` are left out of the header.
/// The output always ends with a newline.
pub fn serialize(note: &Note) -> String {
    let header = HeaderRef {
        id: note.id(),
        created_at: &note.created_at(),
        updated_at: &note.updated_at(),
        tags: note.tags(),
        links: note.links(),
        context: note.context(),
    };
    let yaml = serde_yaml::to_string(&header).expect("note header serialization is infallible");

    let mut out = String::with_capacity(yaml.len() + note.content().len() + 16);
    out.push_str(DELIMITER);
    out.push_str(&yaml);
    out.push_str(DELIMITER);
    out.push('\n');
    out.push_str(note.content());
    out.push('\n');
    out
}
