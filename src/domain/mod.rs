//! Core types: Note, NoteId, and the note filters

mod filter;
mod note;
mod note_id;

pub use filter::{NoteFilter, has_all_tags, in_time_range, matches_context};
pub use note::{Note, NoteBuilder, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError, SHORT_ID_LEN};
