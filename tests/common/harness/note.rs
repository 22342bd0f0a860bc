//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Duration, Utc};
use jot::domain::{Note, NoteId};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamps, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    tags: Vec<String>,
    links: Vec<String>,
    context: Option<String>,
    content: String,
}

impl TestNote {
    /// Creates a new test note with the given content.
    ///
    /// Automatically generates a unique ID and sets timestamps to now.
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::generate(),
            created: now,
            updated: now,
            tags: Vec::new(),
            links: Vec::new(),
            context: None,
            content: content.into(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Moves the creation (and update) time back by `days`.
    pub fn days_ago(mut self, days: i64) -> Self {
        self.created = Utc::now() - Duration::days(days);
        self.updated = self.created;
        self
    }

    /// Sets an explicit creation (and update) time.
    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created = at;
        self.updated = at;
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds a link to the note.
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.links.push(link.into());
        self
    }

    /// Sets the context.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), self.created, self.updated)
            .tags(self.tags.clone())
            .links(self.links.clone())
            .context(self.context.clone())
            .content(self.content.clone())
            .build()
            .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_generates_short_id() {
        let note = TestNote::new("Test");
        assert_eq!(note.note_id().as_str().len(), 8);
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("# ADR-001\n\nWe chose Rust.")
            .tag("adr")
            .link("https://example.com")
            .context("work");

        let domain_note = note.to_note();
        assert_eq!(domain_note.tags(), ["adr"]);
        assert_eq!(domain_note.links(), ["https://example.com"]);
        assert_eq!(domain_note.context(), Some("work"));
        assert_eq!(domain_note.first_line(), "# ADR-001");
    }

    #[test]
    fn test_note_custom_id() {
        let note = TestNote::new("Test").id("abc12345");
        assert_eq!(note.note_id().to_string(), "abc12345");
    }

    #[test]
    fn test_note_days_ago() {
        let note = TestNote::new("old").days_ago(3).to_note();
        assert!(note.created_at() < Utc::now() - Duration::days(2));
    }
}
