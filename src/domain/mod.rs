//! Core types: Note, NoteId, Rating, and the request objects

mod note;
mod note_id;
mod rating;

pub use note::{MatchKey, NewNote, Note, RatingUpdate, SortOrder};
pub use note_id::{NoteId, ParseNoteIdError};
pub use rating::{ParseRatingError, Rating};
