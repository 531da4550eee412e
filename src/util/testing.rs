// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{CreateNotePayload, DomainError, Note, NotesPage, NotesQuery};
use async_trait::async_trait;

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Behaves like a small in-memory NoteHub: listing filters by tag and search
/// text and paginates, creation assigns ids. Per-method call counters make
/// cache behavior observable, and failures are configurable per method.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::MockNoteRepository;
///
/// let mock = MockNoteRepository::builder()
///     .with_create_failure("service unavailable")
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicI64,
    list_delay: Option<Duration>,
    fail_list: Option<String>,
    fail_create: Option<String>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn lock_notes(&self) -> std::sync::MutexGuard<'_, Vec<Note>> {
        self.notes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.fail_list {
            return Err(DomainError::Api {
                status: 500,
                message: message.clone(),
            });
        }

        let notes = self.lock_notes();
        let filtered: Vec<Note> = notes
            .iter()
            .filter(|note| match &query.tag {
                Some(tag) => note.tag.as_str() == tag.as_str(),
                None => true,
            })
            .filter(|note| {
                query.search.is_empty()
                    || note.title.contains(&query.search)
                    || note.content.contains(&query.search)
            })
            .cloned()
            .collect();

        let total = filtered.len() as u64;
        let per_page = query.per_page.max(1) as usize;
        let total_pages = (filtered.len().div_ceil(per_page)).max(1) as u32;
        let start = (query.page.max(1) as usize - 1) * per_page;
        let page_notes: Vec<Note> = filtered.into_iter().skip(start).take(per_page).collect();

        Ok(NotesPage {
            notes: page_notes,
            total_pages,
            total,
            page: query.page,
        })
    }

    async fn get_note(&self, id: i64) -> Result<Note, DomainError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        self.lock_notes()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    async fn create_note(&self, payload: &CreateNotePayload) -> Result<Note, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.fail_create {
            return Err(DomainError::Api {
                status: 500,
                message: message.clone(),
            });
        }

        let note = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: payload.title.clone(),
            content: payload.content.clone(),
            tag: payload.tag,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        };
        self.lock_notes().push(note.clone());
        Ok(note)
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_delay: Option<Duration>,
    fail_list: Option<String>,
    fail_create: Option<String>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_delay: None,
            fail_list: None,
            fail_create: None,
        }
    }

    /// Add a note to the repository's collection
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Add several notes at once
    pub fn with_notes(mut self, notes: impl IntoIterator<Item = Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Make every list call take this long before resolving, so tests can
    /// overlap concurrent reads
    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    /// Configure list_notes to fail with a server error
    pub fn with_list_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_list = Some(message.into());
        self
    }

    /// Configure create_note to fail with a server error
    pub fn with_create_failure(mut self, message: impl Into<String>) -> Self {
        self.fail_create = Some(message.into());
        self
    }

    pub fn build(self) -> MockNoteRepository {
        let next_id = self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        MockNoteRepository {
            notes: Mutex::new(self.notes),
            next_id: AtomicI64::new(next_id),
            list_delay: self.list_delay,
            fail_list: self.fail_list,
            fail_create: self.fail_create,
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
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
    let noisy_modules = ["hyper", "reqwest", "mio", "wiremock"];
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
    use crate::domain::NoteTag;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    fn note(id: i64, title: &str, tag: NoteTag) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: String::new(),
            tag,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn query(page: u32, search: &str, tag: Option<&str>) -> NotesQuery {
        NotesQuery {
            page,
            search: search.to_string(),
            per_page: 2,
            tag: tag.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn given_notes_when_listing_without_filter_then_returns_all_paginated() {
        let mock = MockNoteRepository::builder()
            .with_notes([
                note(1, "First", NoteTag::Todo),
                note(2, "Second", NoteTag::Work),
                note(3, "Third", NoteTag::Todo),
            ])
            .build();

        let page = mock.list_notes(&query(1, "", None)).await.unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.notes.len(), 2);
        assert_eq!(mock.list_calls(), 1);
    }

    #[tokio::test]
    async fn given_tag_filter_when_listing_then_returns_matching_notes_only() {
        let mock = MockNoteRepository::builder()
            .with_notes([
                note(1, "First", NoteTag::Todo),
                note(2, "Second", NoteTag::Work),
            ])
            .build();

        let page = mock.list_notes(&query(1, "", Some("Work"))).await.unwrap();

        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.notes[0].id, 2);
    }

    #[tokio::test]
    async fn given_search_text_when_listing_then_filters_title_and_content() {
        let mock = MockNoteRepository::builder()
            .with_notes([
                note(1, "Weekly meeting", NoteTag::Meeting),
                note(2, "Groceries", NoteTag::Shopping),
            ])
            .build();

        let page = mock.list_notes(&query(1, "meeting", None)).await.unwrap();

        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.notes[0].id, 1);
    }

    #[tokio::test]
    async fn given_created_note_when_listing_then_appears_with_fresh_id() {
        let mock = MockNoteRepository::builder()
            .with_note(note(5, "Existing", NoteTag::Todo))
            .build();
        let payload = CreateNotePayload {
            title: "Groceries".to_string(),
            content: "Buy milk".to_string(),
            tag: NoteTag::Shopping,
        };

        let created = mock.create_note(&payload).await.unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(mock.get_note(6).await.unwrap().title, "Groceries");
    }

    #[tokio::test]
    async fn given_list_failure_configured_when_listing_then_returns_server_error() {
        let mock = MockNoteRepository::builder()
            .with_list_failure("down for maintenance")
            .build();

        let result = mock.list_notes(&query(1, "", None)).await;

        assert!(matches!(result, Err(DomainError::Api { status: 500, .. })));
    }
}
