// src/application/draft_store.rs
use crate::domain::{Draft, DraftPatch};
use std::sync::Mutex;

/// Holds the last-edited, not-yet-submitted note fields.
///
/// Created once at startup and passed explicitly (via `Arc`) to every form
/// surface that needs it; any number of them observe the same draft, last
/// write wins. The draft survives until `clear` or process exit — nothing is
/// persisted to disk.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: Mutex<Draft>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self) -> Draft {
        self.lock().clone()
    }

    /// Replace the supplied fields. Never validates.
    pub fn set(&self, patch: DraftPatch) {
        self.lock().apply(patch);
    }

    /// Reset to the default draft (empty title/content, default tag).
    pub fn clear(&self) {
        *self.lock() = Draft::default();
    }
}
