// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server returned status {0}")]
    Response(u16),
    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}
