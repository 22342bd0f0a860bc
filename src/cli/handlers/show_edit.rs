//! View and Edit command handlers.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use super::{EditorLauncher, SystemEditor, id_from_args_or_stdin};
use crate::cli::config::Config;
use crate::cli::output::{render_basic, render_pretty};
use crate::cli::{EditArgs, ViewArgs};
use crate::domain::Note;
use crate::infra::{NoteStore, read_note, serialize};

pub fn handle_view(args: &ViewArgs, store: &NoteStore) -> Result<()> {
    let id = id_from_args_or_stdin(args.id.as_deref())?;
    let note = store
        .find_by_prefix(&id)
        .with_context(|| format!("failed to load note '{}'", id))?;

    if args.raw {
        print!("{}", serialize(&note));
    } else if args.pretty {
        print!("{}", render_pretty(&note));
    } else {
        print!("{}", render_basic(&note));
    }
    Ok(())
}

/// Opens the note at `path` in the editor, then re-parses it, refreshes
/// `updated_at` and saves it back.
///
/// The stored `id` and `created_at` survive header edits. A file that did
/// not parse before editing keeps whatever the edited header says.
pub(crate) fn edit_in_place<E: EditorLauncher>(
    path: &Path,
    store: &NoteStore,
    editor: &E,
    now: DateTime<Utc>,
) -> Result<Note> {
    let stored = read_note(path).ok();
    editor.open(path)?;

    let mut note = read_note(path)
        .with_context(|| format!("could not parse edited note {}", path.display()))?;
    if let Some(stored) = &stored {
        note.keep_identity_of(stored);
    }
    note.touch(now);
    store.save(&note).context("failed to save edited note")?;
    Ok(note)
}

/// Internal implementation that accepts a generic editor launcher.
pub(crate) fn handle_edit_impl<E: EditorLauncher>(
    id: &str,
    store: &NoteStore,
    editor: &E,
) -> Result<Note> {
    let path = store
        .resolve_by_prefix(id)
        .with_context(|| format!("failed to find note '{}'", id))?;

    let note = edit_in_place(&path, store, editor, Utc::now())?;
    println!("Updated note {}", note.id());
    Ok(note)
}

pub fn handle_edit(args: &EditArgs, store: &NoteStore, config: &Config) -> Result<()> {
    let id = id_from_args_or_stdin(args.id.as_deref())?;
    handle_edit_impl(&id, store, &SystemEditor::from_config(config)).map(|_| ())
}
