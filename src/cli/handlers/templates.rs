//! Templates command handler.

use anyhow::{Context, Result, bail};

use super::{EditorLauncher, SystemEditor};
use crate::cli::TemplatesCommand;
use crate::cli::config::Config;
use crate::infra::{NoteStore, TemplateStore};

pub(crate) fn handle_templates_impl<E: EditorLauncher>(
    cmd: &TemplatesCommand,
    store: &NoteStore,
    editor: &E,
) -> Result<()> {
    let templates = TemplateStore::new(store.templates_dir());

    match cmd {
        TemplatesCommand::List => {
            let names = templates.list().context("failed to list templates")?;
            if names.is_empty() {
                println!(
                    "No templates found. Create one with 'jot templates new <name>' or in {}",
                    templates.dir().display()
                );
            }
            for name in names {
                println!("{name}");
            }
        }
        TemplatesCommand::New { name } => {
            if templates.exists(name) {
                bail!(
                    "template '{}' already exists; use 'jot templates edit {}'",
                    name,
                    name
                );
            }
            std::fs::create_dir_all(templates.dir()).with_context(|| {
                format!(
                    "failed to create templates directory {}",
                    templates.dir().display()
                )
            })?;
            editor.open(&templates.path(name))?;
        }
        TemplatesCommand::Edit { name } => {
            if !templates.exists(name) {
                bail!(
                    "template '{}' does not exist; use 'jot templates new {}' to create it",
                    name,
                    name
                );
            }
            editor.open(&templates.path(name))?;
        }
    }

    Ok(())
}

pub fn handle_templates(cmd: &TemplatesCommand, store: &NoteStore, config: &Config) -> Result<()> {
    handle_templates_impl(cmd, store, &SystemEditor::from_config(config))
}
