//! Note capture handlers: quick, new and today.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, Utc};
use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use super::show_edit::edit_in_place;
use super::{EditorLauncher, SystemEditor};
use crate::cli::config::Config;
use crate::cli::{MetadataArgs, NewArgs, QuickArgs, TodayArgs};
use crate::domain::{Note, NoteId};
use crate::infra::{NoteStore, TemplateStore, TemplateVars, read_note, resolve_context, serialize};

/// Context given to journal notes unless overridden.
pub(crate) const JOURNAL_CONTEXT: &str = "journal";

// ===========================================
// quick
// ===========================================

/// Builds a quick note from a message (pure apart from reading the active
/// context under `base`).
///
/// Context precedence: `--context`, the active context, the config default.
pub(crate) fn build_quick_note(
    meta: &MetadataArgs,
    message: &str,
    base: &Path,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Note> {
    let message = message.trim();
    if message.is_empty() {
        bail!("no note content provided (pass text or pipe it on stdin)");
    }

    let context = resolve_context(meta.context.as_deref(), base, config.default_context());

    Note::builder(NoteId::generate(), now, now)
        .tags(meta.tags.clone())
        .links(meta.links.clone())
        .context(context)
        .content(message)
        .build()
        .context("failed to create note")
}

pub fn handle_quick(args: &QuickArgs, store: &NoteStore, config: &Config) -> Result<()> {
    let message = if !args.message.is_empty() {
        args.message.join(" ")
    } else if !std::io::stdin().is_terminal() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read note from stdin")?;
        input
    } else {
        String::new()
    };

    let note = build_quick_note(&args.meta, &message, store.base_dir(), config, Utc::now())?;
    store
        .ensure_directories()
        .context("failed to prepare storage")?;
    store.save(&note).context("failed to save note")?;

    println!("Quick note saved: {}", note.id());
    Ok(())
}

// ===========================================
// new / today
// ===========================================

/// Appends the rendered template `name` to `content`.
///
/// A template that cannot be loaded is reported and skipped so the draft
/// still opens.
fn append_template(content: &mut String, store: &NoteStore, name: &str, vars: &TemplateVars) {
    match TemplateStore::new(store.templates_dir()).load(name, vars) {
        Ok(rendered) => content.push_str(&rendered),
        Err(e) => tracing::warn!("failed to load template '{name}': {e}"),
    }
}

/// Builds the initial draft for `jot new`.
///
/// Context precedence: `--context`, then the config default.
pub(crate) fn draft_new_note(
    args: &NewArgs,
    store: &NoteStore,
    config: &Config,
    now: DateTime<Local>,
) -> Result<Note> {
    let context = args
        .meta
        .context
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .or_else(|| config.default_context());
    let title = args.title.as_deref().unwrap_or("").trim();

    let mut content = String::new();
    if !title.is_empty() {
        content.push_str(&format!("# {title}\n\n"));
    }
    if let Some(name) = &args.template {
        let vars = TemplateVars::new(now.date_naive(), title, context);
        append_template(&mut content, store, name, &vars);
    }

    let created = now.with_timezone(&Utc);
    Note::builder(NoteId::generate(), created, created)
        .tags(args.meta.tags.clone())
        .links(args.meta.links.clone())
        .context(context)
        .content(content)
        .build()
        .context("failed to create note")
}

/// Builds the initial draft for today's journal note.
pub(crate) fn draft_journal_note(
    args: &TodayArgs,
    store: &NoteStore,
    now: DateTime<Local>,
) -> Result<Note> {
    let date = now.date_naive();
    let title = format!("Journal for {}", date.format("%Y-%m-%d"));
    let context = args
        .context
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(JOURNAL_CONTEXT);

    let mut content = format!("# {title}\n\n");
    if let Some(name) = &args.template {
        let vars = TemplateVars::new(date, &title, Some(context));
        append_template(&mut content, store, name, &vars);
    }

    let created = now.with_timezone(&Utc);
    Note::builder(NoteId::journal(date), created, created)
        .context(Some(context))
        .content(content)
        .build()
        .context("failed to create journal note")
}

/// Writes `draft` to a temp file, lets the user edit it, then parses and
/// saves the result.
pub(crate) fn compose_in_editor<E: EditorLauncher>(
    draft: &Note,
    store: &NoteStore,
    editor: &E,
) -> Result<Note> {
    let mut temp = tempfile::Builder::new()
        .prefix("jot-")
        .suffix(".md")
        .tempfile()
        .context("failed to create draft file")?;
    write_draft(&mut temp, draft)?;

    editor.open(temp.path())?;

    let note = read_note(temp.path()).context("failed to read edited note")?;
    store
        .ensure_directories()
        .context("failed to prepare storage")?;
    store.save(&note).context("failed to save note")?;
    Ok(note)
}

fn write_draft(temp: &mut NamedTempFile, draft: &Note) -> Result<()> {
    temp.write_all(serialize(draft).as_bytes())
        .and_then(|()| temp.flush())
        .with_context(|| format!("failed to write draft to {}", temp.path().display()))
}

pub(crate) fn handle_new_impl<E: EditorLauncher>(
    args: &NewArgs,
    store: &NoteStore,
    config: &Config,
    editor: &E,
) -> Result<Note> {
    let draft = draft_new_note(args, store, config, Local::now())?;
    let note = compose_in_editor(&draft, store, editor)?;
    println!("Note saved: {}", note.id());
    Ok(note)
}

pub fn handle_new(args: &NewArgs, store: &NoteStore, config: &Config) -> Result<()> {
    handle_new_impl(args, store, config, &SystemEditor::from_config(config)).map(|_| ())
}

pub(crate) fn handle_today_impl<E: EditorLauncher>(
    args: &TodayArgs,
    store: &NoteStore,
    editor: &E,
    now: DateTime<Local>,
) -> Result<Note> {
    let id = NoteId::journal(now.date_naive());

    if let Some(path) = store.locate(&id)? {
        let note = edit_in_place(&path, store, editor, now.with_timezone(&Utc))?;
        println!("Journal updated: {}", note.id());
        return Ok(note);
    }

    let draft = draft_journal_note(args, store, now)?;
    let note = compose_in_editor(&draft, store, editor)?;
    println!("Journal saved: {}", note.id());
    Ok(note)
}

pub fn handle_today(args: &TodayArgs, store: &NoteStore, config: &Config) -> Result<()> {
    handle_today_impl(args, store, &SystemEditor::from_config(config), Local::now()).map(|_| ())
}
