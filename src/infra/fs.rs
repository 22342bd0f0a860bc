//! File I/O operations for notes with atomic writes.

use crate::domain::Note;
use crate::infra::frontmatter::{ParseError, parse, serialize};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// File extension of note files.
pub const NOTE_EXTENSION: &str = "md";

/// Errors during file system operations on notes.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("note file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse note at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns the path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::PermissionDenied { path }
            | FsError::Io { path, .. }
            | FsError::Parse { path, .. }
            | FsError::AtomicWrite { path, .. }
            | FsError::ParentNotFound { path }
            | FsError::InvalidEncoding { path, .. } => path,
        }
    }

    /// Returns true if the file exists but has no well-formed header.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FsError::Parse {
                source: ParseError::MalformedDocument,
                ..
            }
        )
    }
}

/// Reads and decodes a note file.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
/// Returns `FsError::Parse` if the file content is not a valid note.
pub fn read_note(path: &Path) -> Result<Note, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    parse_note_from_bytes(bytes, path)
}

/// Decodes a note from already-read bytes, attributing errors to `path`.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` if the bytes are not valid UTF-8.
/// Returns `FsError::Parse` if the content is not a valid note.
pub fn parse_note_from_bytes(bytes: Vec<u8>, path: &Path) -> Result<Note, FsError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(FsError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);

    parse(content).map_err(|e| FsError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Writes a note to a file path atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so an
/// interrupted write leaves either the previous file or the new one.
/// The parent directory must exist.
///
/// # Errors
///
/// Returns `FsError::ParentNotFound` if the parent directory doesn't exist.
/// Returns `FsError::AtomicWrite` if the atomic rename fails.
pub fn write_note(path: &Path, note: &Note) -> Result<(), FsError> {
    let parent = path
        .parent()
        .ok_or_else(|| FsError::ParentNotFound { path: path.into() })?;

    if !parent.is_dir() {
        return Err(FsError::ParentNotFound {
            path: parent.into(),
        });
    }

    let content = serialize(note);
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;

    temp.write_all(content.as_bytes())
        .map_err(|e| FsError::Io {
            path: path.into(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}

/// Walks a directory recursively, yielding note files (`*.md`) in filename
/// order within each directory.
///
/// Hidden files and directories (starting with `.`) are skipped, which also
/// covers temp files left by an interrupted `write_note`. Traversal errors
/// are yielded rather than swallowed so callers can decide how to report
/// them. Yielded paths include `dir` as prefix.
pub fn scan_note_files(dir: &Path) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && has_note_extension(&e) => Some(Ok(e.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
}

/// Returns the filename stem of a note path (its note id).
pub fn note_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_note_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|e| e == NOTE_EXTENSION)
}
