//! Active context persisted as a single-line file in the base directory.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the file holding the active context.
pub const CONTEXT_FILE: &str = "context";

/// Errors when changing the active context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context name cannot be empty")]
    EmptyName,

    #[error("no active context is set")]
    NotSet,

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn context_path(base: &Path) -> PathBuf {
    base.join(CONTEXT_FILE)
}

/// Returns the active context, if one is set.
///
/// A missing or unreadable file and whitespace-only content all mean
/// "no active context".
pub fn get_active_context(base: &Path) -> Option<String> {
    let content = std::fs::read_to_string(context_path(base)).ok()?;
    let name = content.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Persists `name` as the active context, creating `base` if needed.
///
/// # Errors
///
/// Returns `ContextError::EmptyName` for an empty or whitespace-only name
/// and `ContextError::Io` if the file cannot be written.
pub fn set_active_context(base: &Path, name: &str) -> Result<(), ContextError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContextError::EmptyName);
    }

    std::fs::create_dir_all(base).map_err(|e| ContextError::Io {
        path: base.to_path_buf(),
        source: e,
    })?;

    let path = context_path(base);
    std::fs::write(&path, format!("{name}\n")).map_err(|e| ContextError::Io { path, source: e })
}

/// Removes the active context.
///
/// # Errors
///
/// Returns `ContextError::NotSet` if no context file exists.
pub fn clear_active_context(base: &Path) -> Result<(), ContextError> {
    let path = context_path(base);
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ContextError::NotSet),
        Err(e) => Err(ContextError::Io { path, source: e }),
    }
}

/// Picks the context for a new note: an explicit value, else the active
/// context, else the configured default.
pub fn resolve_context(
    explicit: Option<&str>,
    base: &Path,
    default: Option<&str>,
) -> Option<String> {
    let non_empty = |s: &&str| !s.trim().is_empty();

    explicit
        .filter(non_empty)
        .map(|s| s.trim().to_string())
        .or_else(|| get_active_context(base))
        .or_else(|| default.filter(non_empty).map(|s| s.trim().to_string()))
}
