// src/application/list.rs
use crate::domain::{DomainError, Note, NoteDraft};
use tracing::debug;

pub trait NoteRepository {
    /// Fetch the notes collection in server-provided order. A non-empty
    /// `tags` filter restricts the result to notes carrying all given tags.
    fn list_notes(&mut self, tags: &[String]) -> Result<Vec<Note>, DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    /// Create a note from the draft; returns the stored note including the
    /// server-assigned id.
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError>;

    /// Replace all mutable fields of an existing note with the draft.
    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<Note, DomainError>;

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError>;
}

/// State of the list screen: the fetched collection, the loading flag and
/// the last failure, if any.
#[derive(Debug, Default)]
pub struct ListController {
    pub notes: Vec<Note>,
    pub loading: bool,
    pub error: Option<DomainError>,
    filter_tags: Vec<String>,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(tags: Vec<String>) -> Self {
        Self {
            filter_tags: tags,
            ..Self::default()
        }
    }

    pub fn filter_tags(&self) -> &[String] {
        &self.filter_tags
    }

    /// On-activate hook: re-fetch the collection.
    ///
    /// `loading` is cleared after the call completes regardless of outcome.
    /// A failure leaves the collection empty and records the error.
    pub fn activate<R: NoteRepository>(&mut self, repository: &mut R) {
        self.loading = true;
        match repository.list_notes(&self.filter_tags) {
            Ok(notes) => {
                debug!(count = notes.len(), "Fetched notes");
                self.notes = notes;
            }
            Err(err) => {
                debug!(%err, "Listing notes failed");
                self.notes.clear();
                self.error = Some(err);
            }
        }
        self.loading = false;
    }
}
