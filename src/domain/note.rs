// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A persisted note as the backend returns it.
///
/// The id is assigned by the backend and immutable after creation. Tags keep
/// the order they were entered in; the client never deduplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Create/update payload: a note without its id.
///
/// Sent in full for both create and update; an update replaces all mutable
/// fields rather than merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}
