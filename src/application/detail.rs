// src/application/detail.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use crate::shell::Route;
use tracing::debug;

/// State of the detail screen for a single note id.
///
/// An absent note after the load completes renders as not-found. The delete
/// flow goes through an explicit confirmation before the repository call.
#[derive(Debug)]
pub struct DetailController {
    note_id: i64,
    pub note: Option<Note>,
    pub loading: bool,
    pub delete_confirmation_open: bool,
    pub error: Option<DomainError>,
}

impl DetailController {
    pub fn new(note_id: i64) -> Self {
        Self {
            note_id,
            note: None,
            loading: false,
            delete_confirmation_open: false,
            error: None,
        }
    }

    pub fn note_id(&self) -> i64 {
        self.note_id
    }

    /// On-activate hook: fetch the note.
    pub fn activate<R: NoteRepository>(&mut self, repository: &mut R) {
        self.loading = true;
        match repository.get_note(self.note_id) {
            Ok(note) => self.note = Some(note),
            Err(err) => {
                debug!(note_id = self.note_id, %err, "Loading note failed");
                self.error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Open the delete confirmation. Only meaningful once a note is shown.
    pub fn request_delete(&mut self) {
        if self.note.is_some() {
            self.delete_confirmation_open = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation_open = false;
    }

    /// Confirm the pending delete.
    ///
    /// Returns the list route as the navigation target on success. A failure
    /// closes the confirmation, records the error and stays on this screen.
    pub fn confirm_delete<R: NoteRepository>(&mut self, repository: &mut R) -> Option<Route> {
        if !self.delete_confirmation_open {
            return None;
        }
        self.delete_confirmation_open = false;
        match repository.delete_note(self.note_id) {
            Ok(()) => Some(Route::list()),
            Err(err) => {
                debug!(note_id = self.note_id, %err, "Deleting note failed");
                self.error = Some(err);
                None
            }
        }
    }
}
