// src/infrastructure/http.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

/// Note repository backed by the remote notes HTTP API.
///
/// Each call is fire-and-await-once: no retries, no timeout, no
/// cancellation. The stock blocking client imposes no total timeout.
pub struct HttpNoteRepository {
    client: Client,
    base_url: String,
}

impl HttpNoteRepository {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        debug!(%base_url, "Creating new HttpNoteRepository");
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

fn transport(err: reqwest::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}

/// Classify a non-success status. A 404 on an id-addressed operation maps to
/// `NoteNotFound`; everything else surfaces the raw status.
fn check_status(response: Response, id: Option<i64>) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(DomainError::NoteNotFound(id)),
        _ => Err(DomainError::Response(status.as_u16())),
    }
}

fn decode_note(response: Response) -> Result<Note, DomainError> {
    response
        .json()
        .map_err(|err| DomainError::MalformedBody(err.to_string()))
}

impl NoteRepository for HttpNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_notes(&mut self, tags: &[String]) -> Result<Vec<Note>, DomainError> {
        let mut request = self.client.get(self.notes_url());
        for tag in tags {
            request = request.query(&[("tags", tag)]);
        }
        let response = request.send().map_err(transport)?;
        let response = check_status(response, None)?;
        response
            .json()
            .map_err(|err| DomainError::MalformedBody(err.to_string()))
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        let response = self
            .client
            .get(self.note_url(id))
            .send()
            .map_err(transport)?;
        decode_note(check_status(response, Some(id))?)
    }

    #[instrument(level = "debug", skip(self, draft))]
    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        let response = self
            .client
            .post(self.notes_url())
            .json(draft)
            .send()
            .map_err(transport)?;
        let note = decode_note(check_status(response, None)?)?;
        info!(note_id = note.id, "Created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self, draft))]
    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<Note, DomainError> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(draft)
            .send()
            .map_err(transport)?;
        decode_note(check_status(response, Some(id))?)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .map_err(transport)?;
        // 204: no response body is consumed
        check_status(response, Some(id))?;
        info!(note_id = id, "Deleted note");
        Ok(())
    }
}
