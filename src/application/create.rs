// src/application/create.rs
use crate::application::NoteRepository;
use crate::domain::tags::parse_tags;
use crate::domain::{DomainError, NoteDraft};
use crate::shell::Route;
use tracing::{debug, info};

/// State of the create form: raw field values and submission progress.
///
/// `tags_text` holds the raw comma-separated input; it is parsed only at
/// submit time. All fields are scratch state dropped on navigation away.
#[derive(Debug, Default)]
pub struct CreateController {
    pub title: String,
    pub body: String,
    pub tags_text: String,
    pub submitting: bool,
    pub error: Option<DomainError>,
}

impl CreateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form as a full draft.
    ///
    /// Returns the new note's detail route on success, using the id from the
    /// response. A failure records the error and resets `submitting` so the
    /// form can be retried.
    pub fn submit<R: NoteRepository>(&mut self, repository: &mut R) -> Option<Route> {
        self.submitting = true;
        let draft = NoteDraft {
            title: self.title.clone(),
            body: self.body.clone(),
            tags: parse_tags(&self.tags_text),
        };
        debug!(?draft, "Submitting new note");
        let result = repository.create_note(&draft);
        self.submitting = false;
        match result {
            Ok(note) => {
                info!(note_id = note.id, "Created note");
                Some(Route::Detail(note.id))
            }
            Err(err) => {
                debug!(%err, "Creating note failed");
                self.error = Some(err);
                None
            }
        }
    }
}
