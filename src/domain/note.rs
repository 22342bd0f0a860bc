//! Note struct representing a plain-text note with structured metadata.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    UpdatedBeforeCreated,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::UpdatedBeforeCreated => {
                write!(f, "invalid note: updated_at cannot be earlier than created_at")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A note: structured metadata plus a free-form content body.
///
/// # Required Fields
/// - `id`: Opaque identifier, also the filename stem
/// - `created_at`: When the note was created (never changes)
/// - `updated_at`: When the content was last modified (`>= created_at`)
///
/// # Optional Fields
/// - `tags`: Labels for filtering, order preserved, duplicates kept
/// - `links`: Free-form references, order preserved
/// - `context`: Namespace the note belongs to
/// - `content`: The body, stored trimmed
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, NoteId};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::builder(NoteId::generate(), now, now)
///     .tags(vec!["idea".to_string()])
///     .content("remember the milk")
///     .build()
///     .unwrap();
/// assert_eq!(note.tags(), ["idea"]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<String>,
    links: Vec<String>,
    context: Option<String>,
    content: String,
}

impl Note {
    /// Creates a note with no tags, links, context or content.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if `updated_at` is earlier than `created_at`.
    pub fn new(
        id: NoteId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(id, created_at, updated_at).build()
    }

    /// Creates a builder for constructing a Note with optional fields.
    pub fn builder(
        id: NoteId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder::new(id, created_at, updated_at)
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Returns the note's context, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the first line of the content, used as a one-line summary.
    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }

    /// Marks the note as modified at `now`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock did.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Takes `id` and `created_at` from the stored version of this note,
    /// so an edited header cannot rename or re-date it.
    pub fn keep_identity_of(&mut self, stored: &Note) {
        self.id = stored.id.clone();
        self.created_at = stored.created_at;
        self.updated_at = self.updated_at.max(self.created_at);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.first_line(), self.id.short())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("tags", &self.tags)
            .field("links", &self.links)
            .field("context", &self.context)
            .field("content", &self.content)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<String>,
    links: Vec<String>,
    context: Option<String>,
    content: String,
}

impl NoteBuilder {
    fn new(id: NoteId, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            tags: Vec::new(),
            links: Vec::new(),
            context: None,
            content: String::new(),
        }
    }

    /// Sets the note's tags. Order and duplicates are kept as given.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the note's links.
    pub fn links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    /// Sets the note's context.
    ///
    /// Empty or whitespace-only strings are normalized to None.
    pub fn context(mut self, context: Option<impl Into<String>>) -> Self {
        self.context = context
            .map(|s| s.into())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// Sets the note's content. Surrounding whitespace is trimmed.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into().trim().to_string();
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if `updated_at` is earlier than `created_at`.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        if self.updated_at < self.created_at {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::UpdatedBeforeCreated,
            });
        }

        Ok(Note {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tags: self.tags,
            links: self.links,
            context: self.context,
            content: self.content,
        })
    }
}

/// JSON export form: `tags` and `links` are always present, `context` only
/// when set. The on-disk header has its own encoding in `infra::frontmatter`.
impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("created_at", &self.created_at)?;
        map.serialize_entry("updated_at", &self.updated_at)?;
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("links", &self.links)?;
        map.serialize_entry("content", &self.content)?;
        if let Some(ref context) = self.context {
            map.serialize_entry("context", context)?;
        }
        map.end()
    }
}
