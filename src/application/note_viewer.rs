// src/application/note_viewer.rs
use crate::domain::{CreateNotePayload, DomainError, Note, NotesPage, NotesQuery};
use async_trait::async_trait;

#[async_trait]
pub trait NoteRepository {
    /// Fetch one page of the notes collection.
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, DomainError>;

    async fn get_note(&self, id: i64) -> Result<Note, DomainError>;

    /// Create a note and return it with its server-assigned id.
    async fn create_note(&self, payload: &CreateNotePayload) -> Result<Note, DomainError>;
}

/// Parse a note id supplied as a route or CLI segment.
///
/// Non-numeric input is rejected here, before any repository call is made.
pub fn parse_note_id(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::InvalidNoteId(raw.to_string()))
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn view_note(&self, note_id: i64) -> Result<Note, DomainError> {
        self.repository.get_note(note_id).await
    }
}
