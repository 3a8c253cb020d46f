//! Core types: Note, NoteSummary, NoteId, Tag

mod note;
mod note_id;
mod tag;

pub use note::{
    DEFAULT_TITLE, ELLIPSIS, LIST_EXCERPT_LEN, Note, NoteSummary, SEARCH_EXCERPT_LEN, excerpt,
    normalize_title,
};
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{MAX_TAG_LEN, Tag, normalize_tags};
