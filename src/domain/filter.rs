//! Pure predicates for selecting notes by tags, context and creation time.

use crate::domain::Note;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Returns true if the note carries every tag in `required`.
///
/// Matching is exact and case-sensitive. An empty `required` list matches
/// every note.
pub fn has_all_tags(note: &Note, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }

    let present: HashSet<&str> = note.tags().iter().map(String::as_str).collect();
    required.iter().all(|tag| present.contains(tag.as_str()))
}

/// Returns true if `context` is unset/empty or equals the note's context.
pub fn matches_context(note: &Note, context: Option<&str>) -> bool {
    match context {
        None | Some("") => true,
        Some(wanted) => note.context() == Some(wanted),
    }
}

/// Returns true if the note was created within the inclusive bounds.
pub fn in_time_range(
    note: &Note,
    since: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
) -> bool {
    let created = note.created_at();
    since.is_none_or(|s| created >= s) && before.is_none_or(|b| created <= b)
}

/// A composite filter: the AND of whichever predicates are enabled.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteFilter;
///
/// let filter = NoteFilter::new()
///     .tags(vec!["rust".to_string()])
///     .context(Some("work".to_string()));
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    tags: Vec<String>,
    context: Option<String>,
    since: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires every one of `tags` to be present.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Requires an exact context match after trimming. Blank values disable
    /// the check.
    pub fn context(mut self, context: Option<String>) -> Self {
        self.context = context
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self
    }

    /// Requires `created_at >= since`.
    pub fn since(mut self, since: Option<DateTime<Utc>>) -> Self {
        self.since = since;
        self
    }

    /// Requires `created_at <= before`.
    pub fn before(mut self, before: Option<DateTime<Utc>>) -> Self {
        self.before = before;
        self
    }

    /// Returns true if no predicate is enabled.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.context.is_none() && self.since.is_none() && self.before.is_none()
    }

    /// Returns true if the note passes every enabled predicate.
    pub fn matches(&self, note: &Note) -> bool {
        has_all_tags(note, &self.tags)
            && matches_context(note, self.context.as_deref())
            && in_time_range(note, self.since, self.before)
    }

    /// Keeps only the notes that match, preserving order.
    pub fn apply(&self, mut notes: Vec<Note>) -> Vec<Note> {
        notes.retain(|n| self.matches(n));
        notes
    }
}
