// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteDraft};

/// A note with placeholder body and no tags, for seeding mocks in tests.
pub fn sample_note(id: i64, title: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        body: format!("Body of {title}"),
        tags: vec![],
    }
}

/// Shared mock repository for testing controllers and the shell without a
/// live backend.
///
/// Keeps an in-memory note store that follows the backend contract: create
/// assigns the next id, update replaces the stored note in full, delete
/// removes it, list filters by tags. A configured failure makes every
/// operation return that error instead.
///
/// # Examples
///
/// ```
/// use notecli::util::testing::{sample_note, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(sample_note(123, "Question"))
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    next_id: i64,
    failure: Option<DomainError>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl NoteRepository for MockNoteRepository {
    fn list_notes(&mut self, tags: &[String]) -> Result<Vec<Note>, DomainError> {
        self.check_failure()?;
        Ok(self
            .notes
            .iter()
            .filter(|note| tags.iter().all(|tag| note.tags.contains(tag)))
            .cloned()
            .collect())
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.check_failure()?;
        self.notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn create_note(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.check_failure()?;
        let note = Note {
            id: self.next_id,
            title: draft.title.clone(),
            body: draft.body.clone(),
            tags: draft.tags.clone(),
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        Ok(note)
    }

    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.check_failure()?;
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        note.title = draft.title.clone();
        note.body = draft.body.clone();
        note.tags = draft.tags.clone();
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        self.check_failure()?;
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(DomainError::NoteNotFound(id))?;
        self.notes.remove(position);
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    failure: Option<DomainError>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            failure: None,
        }
    }

    /// Seed a note into the store.
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every operation fail with the given error.
    pub fn with_failure(mut self, error: DomainError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let next_id = self.notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
        MockNoteRepository {
            notes: self.notes,
            next_id,
            failure: self.failure,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper_util", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_seeded_note_when_getting_then_returns_note() {
        let mut mock = MockNoteRepository::builder()
            .with_note(sample_note(123, "Question"))
            .build();

        let result = mock.get_note(123).expect("Note should exist");
        assert_eq!(result.id, 123);
        assert_eq!(result.title, "Question");
    }

    #[test]
    fn given_empty_store_when_getting_then_returns_not_found() {
        let mut mock = MockNoteRepository::builder().build();

        let result = mock.get_note(999);
        assert!(matches!(result, Err(DomainError::NoteNotFound(999))));
    }

    #[test]
    fn given_seeded_notes_when_creating_then_assigns_next_id() {
        let mut mock = MockNoteRepository::builder()
            .with_note(sample_note(7, "Seventh"))
            .build();
        let draft = NoteDraft {
            title: "T".to_string(),
            body: "B".to_string(),
            tags: vec![],
        };

        let created = mock.create_note(&draft).expect("Create should succeed");
        assert_eq!(created.id, 8);
    }

    #[test]
    fn given_deleted_note_when_listing_then_note_is_gone() {
        let mut mock = MockNoteRepository::builder()
            .with_note(sample_note(1, "First"))
            .with_note(sample_note(2, "Second"))
            .build();

        mock.delete_note(1).expect("Delete should succeed");

        let remaining = mock.list_notes(&[]).expect("List should succeed");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn given_configured_failure_when_listing_then_returns_error() {
        let mut mock = MockNoteRepository::builder()
            .with_failure(DomainError::Response(503))
            .build();

        let result = mock.list_notes(&[]);
        assert!(matches!(result, Err(DomainError::Response(503))));
    }

    #[test]
    fn given_tag_filter_when_listing_then_requires_all_tags() {
        let mut both = sample_note(1, "Both");
        both.tags = vec!["a".to_string(), "b".to_string()];
        let mut one = sample_note(2, "One");
        one.tags = vec!["a".to_string()];
        let mut mock = MockNoteRepository::builder()
            .with_note(both)
            .with_note(one)
            .build();

        let result = mock
            .list_notes(&["a".to_string(), "b".to_string()])
            .expect("List should succeed");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }
}
