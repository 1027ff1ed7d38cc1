// src/application/edit.rs
use crate::application::NoteRepository;
use crate::domain::tags::{join_tags, parse_tags};
use crate::domain::{DomainError, Note, NoteDraft};
use crate::shell::Route;
use tracing::{debug, info};

/// State of the edit form: the originally loaded note plus raw field values.
///
/// Activation seeds the fields from the fetched note; if the fetch fails the
/// screen renders not-found and refuses to submit. Submit always sends the
/// full draft, replacing every mutable field.
#[derive(Debug)]
pub struct EditController {
    note_id: i64,
    pub note: Option<Note>,
    pub title: String,
    pub body: String,
    pub tags_text: String,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<DomainError>,
}

impl EditController {
    pub fn new(note_id: i64) -> Self {
        Self {
            note_id,
            note: None,
            title: String::new(),
            body: String::new(),
            tags_text: String::new(),
            loading: false,
            submitting: false,
            error: None,
        }
    }

    pub fn note_id(&self) -> i64 {
        self.note_id
    }

    /// On-activate hook: fetch the note and seed the form fields from it.
    pub fn activate<R: NoteRepository>(&mut self, repository: &mut R) {
        self.loading = true;
        match repository.get_note(self.note_id) {
            Ok(note) => {
                self.title = note.title.clone();
                self.body = note.body.clone();
                self.tags_text = join_tags(&note.tags);
                self.note = Some(note);
            }
            Err(err) => {
                debug!(note_id = self.note_id, %err, "Loading note for edit failed");
                self.error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Submit the form as a full replacement draft.
    ///
    /// Returns the detail route on success. Does nothing when the note never
    /// loaded (the not-found screen has no form).
    pub fn submit<R: NoteRepository>(&mut self, repository: &mut R) -> Option<Route> {
        if self.note.is_none() {
            return None;
        }
        self.submitting = true;
        let draft = NoteDraft {
            title: self.title.clone(),
            body: self.body.clone(),
            tags: parse_tags(&self.tags_text),
        };
        debug!(note_id = self.note_id, ?draft, "Submitting note update");
        let result = repository.update_note(self.note_id, &draft);
        self.submitting = false;
        match result {
            Ok(_) => {
                info!(note_id = self.note_id, "Updated note");
                Some(Route::Detail(self.note_id))
            }
            Err(err) => {
                debug!(note_id = self.note_id, %err, "Updating note failed");
                self.error = Some(err);
                None
            }
        }
    }
}
