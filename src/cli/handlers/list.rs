//! List, timeline and pipe command handlers.

use anyhow::{Context, Result};
use std::cmp::Reverse;
use std::io::BufRead;
use std::path::Path;

use crate::cli::date_filter::parse_bound;
use crate::cli::output::{notes_json, summary_line, timeline_line};
use crate::cli::{FilterArgs, ListArgs, PipeArgs, TimelineArgs};
use crate::domain::{Note, NoteFilter};
use crate::infra::{NoteStore, get_active_context, read_note};

/// Builds the tag and context part of a filter. `default_context` applies
/// only when `--context` was not given; an explicit empty value disables
/// context filtering.
fn base_filter(args: &FilterArgs, default_context: Option<String>) -> NoteFilter {
    NoteFilter::new()
        .tags(args.tags.clone())
        .context(args.context.clone().or(default_context))
}

fn print_notes(notes: &[Note], json: bool, line: fn(&Note) -> String) -> Result<()> {
    if json {
        println!("{}", notes_json(notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        for note in notes {
            println!("{}", line(note));
        }
    }
    Ok(())
}

/// Loads every note in the store, warning about skipped entries.
///
/// Fails only when the notes directory itself cannot be read.
pub(crate) fn load_notes(store: &NoteStore) -> Result<Vec<Note>> {
    let enumeration = store.enumerate();
    if !enumeration.diagnostics.is_empty() {
        tracing::warn!(
            "skipped {} unreadable note file(s)",
            enumeration.diagnostics.len()
        );
    }
    enumeration
        .into_result()
        .context("error loading notes")
}

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let filter = base_filter(&args.filter, get_active_context(store.base_dir()));
    let notes = filter.apply(load_notes(store)?);
    print_notes(&notes, args.filter.json, summary_line)
}

/// Filters, orders newest first, and truncates to `limit`.
pub(crate) fn select_timeline(notes: Vec<Note>, filter: &NoteFilter, limit: Option<usize>) -> Vec<Note> {
    let mut selected = filter.apply(notes);
    selected.sort_by_key(|n| Reverse(n.created_at()));
    if let Some(limit) = limit.filter(|&l| l > 0) {
        selected.truncate(limit);
    }
    selected
}

pub fn handle_timeline(args: &TimelineArgs, store: &NoteStore) -> Result<()> {
    let filter = base_filter(&args.filter, None)
        .since(parse_bound("since", args.since.as_deref())?)
        .before(parse_bound("before", args.before.as_deref())?);

    let notes = select_timeline(load_notes(store)?, &filter, args.limit);
    print_notes(&notes, args.filter.json, timeline_line)
}

/// Reads one note path per line, keeping the notes that parse and match.
pub(crate) fn read_piped_notes(input: impl BufRead, filter: &NoteFilter) -> Result<Vec<Note>> {
    let mut notes = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read paths from stdin")?;
        let path = line.trim();
        if path.is_empty() {
            continue;
        }

        match read_note(Path::new(path)) {
            Ok(note) if filter.matches(&note) => notes.push(note),
            Ok(_) => {}
            Err(e) => tracing::debug!("skipping {path}: {e}"),
        }
    }
    Ok(notes)
}

pub fn handle_pipe(args: &PipeArgs) -> Result<()> {
    let filter = base_filter(&args.filter, None);
    let notes = read_piped_notes(std::io::stdin().lock(), &filter)?;
    print_notes(&notes, args.filter.json, summary_line)
}
