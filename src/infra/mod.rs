//! File I/O, document codec, note store, context state and templates

mod context;
mod frontmatter;
mod fs;
mod store;
mod template;

pub use context::{
    CONTEXT_FILE, ContextError, clear_active_context, get_active_context, resolve_context,
    set_active_context,
};
pub use frontmatter::{DELIMITER, ParseError, parse, serialize};
pub use fs::{FsError, note_stem, parse_note_from_bytes, read_note, scan_note_files, write_note};
pub use store::{Diagnostic, Enumeration, NoteStore, StoreError};
pub use template::{TemplateError, TemplateStore, TemplateVars, expand};
