// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Category attached to every note. The set is fixed by the NoteHub service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    /// All tags, in the order the service presents them.
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTag(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
    /// Server-set timestamps, passed through verbatim.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// One page of the notes collection, as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub total: u64,
    pub page: u32,
}

/// Parameters for one read of the notes collection.
///
/// `tag` is `None` when no tag filter applies; any other value is passed to
/// the service verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesQuery {
    pub page: u32,
    pub search: String,
    pub per_page: u32,
    pub tag: Option<String>,
}

/// Validated input for note creation. Produced by `Draft::validate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateNotePayload {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}
