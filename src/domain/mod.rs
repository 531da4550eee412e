// src/domain/mod.rs
pub mod draft;
pub mod error;
pub mod note;

pub use draft::{Draft, DraftPatch};
pub use error::{DomainError, ValidationErrors};
pub use note::{CreateNotePayload, Note, NoteTag, NotesPage, NotesQuery};
