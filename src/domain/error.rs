// src/domain/error.rs
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Field-scoped validation failures for a draft note.
///
/// All failing fields are reported together so the user can correct the
/// whole form in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [&self.title, &self.content, &self.tag]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}
