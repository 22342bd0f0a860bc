//! Text renderings of notes for CLI commands.

use crate::domain::Note;
use anyhow::Result;

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// One-line summary used by `list` and `pipe`:
/// `<id>  <date>  [<tags>]  <first line>`.
pub fn summary_line(note: &Note) -> String {
    let tags = format!("[{}]", note.tags().join(","));
    format!(
        "{:<8}  {}  {:<20}  {}",
        note.id().short(),
        note.created_at().format("%Y-%m-%d"),
        tags,
        note.first_line()
    )
}

/// One-line entry used by `timeline`:
/// `[<date time>]  <id>  <context>  <first line>`.
pub fn timeline_line(note: &Note) -> String {
    format!(
        "[{}]  {:<8}  {:<12}  {}",
        note.created_at().format("%Y-%m-%d %H:%M"),
        note.id().short(),
        note.context().unwrap_or(""),
        note.first_line()
    )
}

/// Plain multi-line rendering for `view`.
pub fn render_basic(note: &Note) -> String {
    let mut out = format!(
        "# Note: {}\nCreated: {}\n",
        note.id(),
        note.created_at().format("%Y-%m-%d %H:%M")
    );
    if let Some(context) = note.context() {
        out.push_str(&format!("Context: {context}\n"));
    }
    if !note.tags().is_empty() {
        out.push_str(&format!("Tags:    {}\n", note.tags().join(", ")));
    }
    if !note.links().is_empty() {
        out.push_str(&format!("Links:   {}\n", note.links().join(", ")));
    }
    out.push('\n');
    out.push_str(note.content());
    out.push('\n');
    out
}

/// ANSI-styled rendering for `view --pretty`.
pub fn render_pretty(note: &Note) -> String {
    let mut out = format!("{BOLD}{}{RESET}\n", note.first_line());
    out.push_str(&format!(
        "{DIM}{}  ·  {}{RESET}\n",
        note.id(),
        note.created_at().format("%b %-d %Y, %-I:%M%p")
    ));
    if let Some(context) = note.context() {
        out.push_str(&format!("@{context}\n"));
    }
    if !note.tags().is_empty() {
        let tags: Vec<String> = note.tags().iter().map(|t| format!("#{t}")).collect();
        out.push_str(&format!("{}\n", tags.join(" ")));
    }
    if !note.links().is_empty() {
        out.push_str(&format!("-> {}\n", note.links().join(", ")));
    }
    out.push('\n');
    out.push_str(note.content());
    out.push('\n');
    out
}

/// Serializes notes as a pretty-printed JSON array.
pub fn notes_json(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}
