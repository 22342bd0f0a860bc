//! Directory-backed note store: enumeration, prefix lookup and saving.

use crate::domain::{Note, NoteId};
use crate::infra::fs::{FsError, note_stem, read_note, scan_note_files, write_note};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Subdirectory of the base directory that holds note files.
pub const NOTES_DIR: &str = "notes";

/// Subdirectory of the base directory that holds templates.
pub const TEMPLATES_DIR: &str = "templates";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note file matched the given ID prefix.
    #[error("no note found with ID prefix '{prefix}'")]
    NotFound { prefix: String },

    /// More than one note file matched the given ID prefix.
    #[error("ID prefix '{prefix}' is ambiguous; matches: {}", .candidates.join(", "))]
    AmbiguousId {
        prefix: String,
        candidates: Vec<String>,
    },

    /// The notes directory itself could not be read.
    #[error("cannot read notes directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An entry below the notes directory could not be visited.
    #[error("failed to traverse {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A store directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

impl StoreError {
    /// Returns true if the underlying failure is a note without a
    /// well-formed header.
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Fs(e) if e.is_malformed())
    }

    fn from_walk(root: &Path, error: walkdir::Error) -> Self {
        let path = error
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        if error.depth() == 0 {
            StoreError::ReadDir {
                path,
                source: error,
            }
        } else {
            StoreError::Walk {
                path,
                source: error,
            }
        }
    }
}

/// An entry that was skipped during enumeration and why.
///
/// `error` is `StoreError::Fs` for a note that could not be read or decoded,
/// and `StoreError::Walk` for an entry the traversal could not visit.
#[derive(Debug)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub error: StoreError,
}

/// Result of walking the notes directory.
///
/// Enumeration degrades gracefully: unreadable notes and unvisitable entries
/// become diagnostics. Only a failure to read the notes directory itself is
/// a `walk_error`.
#[derive(Debug, Default)]
pub struct Enumeration {
    /// Notes decoded successfully, in traversal order.
    pub notes: Vec<Note>,
    /// Files that were skipped.
    pub diagnostics: Vec<Diagnostic>,
    /// The notes directory could not be read.
    pub walk_error: Option<StoreError>,
}

impl Enumeration {
    /// Returns the notes, or the error if the notes directory was unreadable.
    pub fn into_result(self) -> Result<Vec<Note>, StoreError> {
        match self.walk_error {
            Some(err) => Err(err),
            None => Ok(self.notes),
        }
    }
}

/// A note store rooted at a base directory.
///
/// Layout:
///
/// ```text
/// <base>/
///   notes/       one `<id>.md` per note, subdirectories allowed
///   templates/   `<name>.md` templates
///   context      active context name
/// ```
#[derive(Debug, Clone)]
pub struct NoteStore {
    base: PathBuf,
}

impl NoteStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.base.join(NOTES_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.base.join(TEMPLATES_DIR)
    }

    /// Returns the top-level path a note with `id` is saved to by default.
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        self.notes_dir().join(id.filename())
    }

    /// Creates the notes and templates directories if missing.
    pub fn ensure_directories(&self) -> Result<(), StoreError> {
        for dir in [self.notes_dir(), self.templates_dir()] {
            create_dir(&dir)?;
        }
        Ok(())
    }

    /// Decodes every note under the notes directory.
    ///
    /// A notes directory that does not exist yet yields an empty result.
    pub fn enumerate(&self) -> Enumeration {
        let dir = self.notes_dir();
        let mut result = Enumeration::default();

        if !dir.exists() {
            tracing::debug!("notes directory {} does not exist yet", dir.display());
            return result;
        }

        for entry in scan_note_files(&dir) {
            let path = match entry {
                Ok(path) => path,
                Err(err) if err.depth() == 0 => {
                    let err = StoreError::from_walk(&dir, err);
                    tracing::warn!("stopping enumeration: {err}");
                    result.walk_error = Some(err);
                    break;
                }
                Err(err) => {
                    let path = err.path().map_or_else(|| dir.clone(), Path::to_path_buf);
                    let error = StoreError::from_walk(&dir, err);
                    tracing::warn!("skipping {}: {error}", path.display());
                    result.diagnostics.push(Diagnostic { path, error });
                    continue;
                }
            };

            match read_note(&path) {
                Ok(note) => result.notes.push(note),
                Err(error) => {
                    tracing::warn!("skipping {}: {error}", path.display());
                    result.diagnostics.push(Diagnostic {
                        path,
                        error: error.into(),
                    });
                }
            }
        }

        result
    }

    /// Returns every note file whose stem starts with `prefix`, sorted by
    /// filename. Only filenames are consulted, never file contents.
    ///
    /// Entries below the notes directory that cannot be visited are skipped;
    /// only an unreadable notes directory is an error.
    pub fn candidates(&self, prefix: &str) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.notes_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in scan_note_files(&dir) {
            let path = match entry {
                Ok(path) => path,
                Err(err) if err.depth() == 0 => return Err(StoreError::from_walk(&dir, err)),
                Err(err) => {
                    tracing::debug!("ignoring unvisitable entry: {err}");
                    continue;
                }
            };
            if note_stem(&path).is_some_and(|stem| stem.starts_with(prefix)) {
                matches.push(path);
            }
        }

        matches.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
        Ok(matches)
    }

    /// Resolves an ID prefix to a single note file.
    ///
    /// An exact ID match wins over longer IDs sharing the prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an empty prefix or no match, and
    /// `StoreError::AmbiguousId` if several notes match.
    pub fn resolve_by_prefix(&self, prefix: &str) -> Result<PathBuf, StoreError> {
        if prefix.is_empty() {
            return Err(StoreError::NotFound {
                prefix: prefix.to_string(),
            });
        }

        let mut candidates = self.candidates(prefix)?;

        if let Some(pos) = candidates
            .iter()
            .position(|p| note_stem(p) == Some(prefix))
        {
            return Ok(candidates.swap_remove(pos));
        }

        match candidates.len() {
            0 => Err(StoreError::NotFound {
                prefix: prefix.to_string(),
            }),
            1 => {
                let path = candidates.remove(0);
                tracing::debug!("resolved '{prefix}' to {}", path.display());
                Ok(path)
            }
            _ => Err(StoreError::AmbiguousId {
                prefix: prefix.to_string(),
                candidates: candidates
                    .iter()
                    .filter_map(|p| note_stem(p))
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }

    /// Resolves an ID prefix and decodes the note.
    ///
    /// Unlike enumeration, a note that fails to decode is an error here.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Note, StoreError> {
        let path = self.resolve_by_prefix(prefix)?;
        Ok(read_note(&path)?)
    }

    /// Returns the file holding the note with exactly this id, if any.
    pub fn locate(&self, id: &NoteId) -> Result<Option<PathBuf>, StoreError> {
        let id = id.as_str();
        Ok(self
            .candidates(id)?
            .into_iter()
            .find(|p| note_stem(p) == Some(id)))
    }

    /// Writes a note, creating or overwriting its file.
    ///
    /// A note already stored in a subdirectory is rewritten in place;
    /// otherwise it goes to `<notes>/<id>.md`. Returns the written path.
    pub fn save(&self, note: &Note) -> Result<PathBuf, StoreError> {
        create_dir(&self.notes_dir())?;

        let path = self
            .locate(note.id())?
            .unwrap_or_else(|| self.note_path(note.id()));

        write_note(&path, note)?;
        tracing::debug!("saved note {} to {}", note.id(), path.display());
        Ok(path)
    }
}

fn create_dir(dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}
