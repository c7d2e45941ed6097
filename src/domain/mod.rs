//! Core types: NoteName

mod note_name;

pub use note_name::{DEFAULT_EXTENSION, NoteName, ParseNoteNameError};
