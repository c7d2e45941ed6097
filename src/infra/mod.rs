//! File I/O for note files and the notes directory.

mod fs;

pub use fs::{FsError, HEADER_SEPARATOR, list_entries, note_header, write_note};
