// src/application/mod.rs
pub mod draft_store;
pub mod note_browser;
pub mod note_creator;
pub mod note_viewer;

pub use draft_store::DraftStore;
pub use note_browser::NoteBrowser;
pub use note_creator::NoteCreator;
pub use note_viewer::{parse_note_id, NoteRepository, NoteViewer};
