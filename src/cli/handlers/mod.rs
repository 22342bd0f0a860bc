//! Command handlers for the CLI.

mod capture;
mod context;
mod list;
mod show_edit;
mod templates;


use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, IsTerminal};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::cli::config::Config;
use crate::domain::SHORT_ID_LEN;

// Re-export public items
pub use capture::{handle_new, handle_quick, handle_today};
pub use context::handle_context;
pub use list::{handle_list, handle_pipe, handle_timeline};
pub use show_edit::{handle_edit, handle_view};
pub use templates::handle_templates;

// ===========================================
// Editor
// ===========================================

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launches the editor command resolved from config and environment.
pub(crate) struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            command: config.editor(),
        }
    }
}

impl EditorLauncher for SystemEditor {
    fn open(&self, path: &Path) -> Result<()> {
        open_in_editor(path, &self.command)
    }
}

/// Opens a file in an editor command.
///
/// The command may include arguments (`code --wait`). When stdin is a pipe
/// the editor is attached to the controlling terminal instead.
pub(crate) fn open_in_editor(path: &Path, editor: &str) -> Result<()> {
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    let stdin = if std::io::stdin().is_terminal() {
        Stdio::inherit()
    } else {
        File::open("/dev/tty").map_or_else(|_| Stdio::inherit(), Stdio::from)
    };

    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .stdin(stdin)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Picks the note ID to operate on: the argument if given, otherwise the
/// first [`SHORT_ID_LEN`] characters of the first input line, so the output
/// of `list` can be piped in.
pub(crate) fn id_from_input(arg: Option<&str>, input: impl BufRead) -> Result<String> {
    if let Some(id) = arg {
        return Ok(id.to_string());
    }

    let Some(line) = input.lines().next() else {
        bail!("no ID provided");
    };
    let line = line.context("failed to read ID from stdin")?;
    let line = line.trim_start();

    if line.chars().count() < SHORT_ID_LEN {
        bail!("input too short to contain a note ID: '{}'", line);
    }
    Ok(line.chars().take(SHORT_ID_LEN).collect())
}

/// Like [`id_from_input`], reading stdin only when it is not a terminal.
pub(crate) fn id_from_args_or_stdin(arg: Option<&str>) -> Result<String> {
    let stdin = std::io::stdin();
    if arg.is_none() && stdin.is_terminal() {
        bail!("no ID provided");
    }
    id_from_input(arg, stdin.lock())
}
