// src/application/note_creator.rs
use crate::application::{DraftStore, NoteRepository};
use crate::domain::{DomainError, Note};
use std::sync::Arc;
use tracing::{debug, info};

/// Note creation workflow: validate the current draft, submit it, and on
/// success clear the draft so the next form starts empty.
///
/// On any failure — validation or submission — the draft is left untouched
/// so no user input is lost. Collection cache invalidation happens inside
/// the repository's `create_note`.
pub struct NoteCreator<R: NoteRepository> {
    repository: R,
    drafts: Arc<DraftStore>,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R, drafts: Arc<DraftStore>) -> Self {
        Self { repository, drafts }
    }

    pub async fn create_from_draft(&self) -> Result<Note, DomainError> {
        let draft = self.drafts.get();
        debug!(title = %draft.title, tag = %draft.tag, "Validating draft");

        let payload = draft.validate().map_err(DomainError::Validation)?;

        let note = self.repository.create_note(&payload).await?;

        self.drafts.clear();
        info!(note_id = note.id, "Note created");
        Ok(note)
    }
}
