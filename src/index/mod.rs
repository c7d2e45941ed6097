//! Durable tag→paths index with load-time reconciliation.

mod store;

pub use store::{INDEX_FILE_NAME, IndexError, IndexResult, TagIndex};
