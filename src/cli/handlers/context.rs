//! Context command handler.

use anyhow::{Context, Result};

use crate::cli::ContextCommand;
use crate::infra::{ContextError, NoteStore, clear_active_context, get_active_context, set_active_context};

pub fn handle_context(cmd: &ContextCommand, store: &NoteStore) -> Result<()> {
    let base = store.base_dir();

    match cmd {
        ContextCommand::Set { name } => {
            set_active_context(base, name).context("failed to set context")?;
            println!("Context set to: {}", name.trim());
        }
        ContextCommand::Get => match get_active_context(base) {
            Some(name) => println!("Current context: {name}"),
            None => println!("No context is currently set."),
        },
        ContextCommand::Clear => match clear_active_context(base) {
            Ok(()) => println!("Context cleared."),
            Err(ContextError::NotSet) => println!("No context is currently set."),
            Err(e) => return Err(e).context("failed to clear context"),
        },
    }

    Ok(())
}
