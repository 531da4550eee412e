// src/infrastructure/query_cache.rs
use crate::application::NoteRepository;
use crate::domain::{CreateNotePayload, DomainError, Note, NotesPage, NotesQuery};
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing::debug;

/// Namespace shared by every cached read of the notes collection. A write
/// to the collection invalidates all keys in this namespace.
pub const NOTES_NAMESPACE: &str = "notes";

/// Namespace for single-note reads. Notes are immutable once created, so
/// these keys are never invalidated.
pub const NOTE_NAMESPACE: &str = "note";

/// Composite identifier for one cached read. Two requests with identical
/// parameters always map to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Notes {
        page: u32,
        search: String,
        per_page: u32,
        tag: Option<String>,
    },
    Note {
        id: i64,
    },
}

impl QueryKey {
    pub fn notes(query: &NotesQuery) -> Self {
        QueryKey::Notes {
            page: query.page,
            search: query.search.clone(),
            per_page: query.per_page,
            tag: query.tag.clone(),
        }
    }

    pub fn note(id: i64) -> Self {
        QueryKey::Note { id }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            QueryKey::Notes { .. } => NOTES_NAMESPACE,
            QueryKey::Note { .. } => NOTE_NAMESPACE,
        }
    }
}

/// Keyed cache of completed reads with in-flight request deduplication.
///
/// Each key owns a slot that resolves at most once: concurrent readers of
/// an unresolved key share the single underlying fetch, and later readers
/// get the cached value. A failed fetch leaves the slot empty, so errors
/// are never cached. Invalidation detaches slots from the map — a fetch
/// that resolves into a detached slot is never served again.
pub struct QueryCache<V: Clone> {
    entries: Mutex<HashMap<QueryKey, Arc<OnceCell<V>>>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, key: &QueryKey) -> Arc<OnceCell<V>> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.entry(key.clone()).or_default().clone()
    }

    /// Return the cached value for `key`, fetching it with `fetch` if the
    /// key is unresolved. Concurrent calls for one key share one fetch.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &QueryKey, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(key);
        let value = slot.get_or_try_init(fetch).await?;
        Ok(value.clone())
    }

    /// Install a value supplied out-of-band as if it had been fetched for
    /// `key`. A key that already resolved keeps its existing value.
    pub fn seed(&self, key: &QueryKey, value: V) {
        let _ = self.slot(key).set(value);
    }

    /// Drop every key in `namespace`, forcing the next read of each to
    /// refetch. Returns the number of keys dropped.
    pub fn invalidate_namespace(&self, namespace: &str) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|key, _| key.namespace() != namespace);
        before - entries.len()
    }

    /// Whether `key` currently holds a resolved value.
    pub fn contains(&self, key: &QueryKey) -> bool {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).map(|slot| slot.initialized()).unwrap_or(false)
    }
}

impl<V: Clone> Default for QueryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Caching layer over any [`NoteRepository`].
///
/// Reads are cached by exact parameter tuple and deduplicated while in
/// flight. A successful `create_note` invalidates every cached collection
/// page; single-note reads survive since notes never change after creation.
pub struct CachedNoteRepository<R> {
    inner: Arc<R>,
    pages: Arc<QueryCache<NotesPage>>,
    details: Arc<QueryCache<Note>>,
}

impl<R> Clone for CachedNoteRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            pages: Arc::clone(&self.pages),
            details: Arc::clone(&self.details),
        }
    }
}

impl<R: NoteRepository> CachedNoteRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: Arc::new(inner),
            pages: Arc::new(QueryCache::new()),
            details: Arc::new(QueryCache::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Install a prefetched collection page, e.g. one rendered by a host
    /// shell before this client took over. Equivalent to a completed fetch
    /// for that exact query.
    pub fn seed_collection_page(&self, query: &NotesQuery, page: NotesPage) {
        self.pages.seed(&QueryKey::notes(query), page);
    }

    pub fn collection_page_cached(&self, query: &NotesQuery) -> bool {
        self.pages.contains(&QueryKey::notes(query))
    }
}

#[async_trait]
impl<R: NoteRepository + Send + Sync> NoteRepository for CachedNoteRepository<R> {
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, DomainError> {
        let key = QueryKey::notes(query);
        self.pages
            .get_or_fetch(&key, || self.inner.list_notes(query))
            .await
    }

    async fn get_note(&self, id: i64) -> Result<Note, DomainError> {
        let key = QueryKey::note(id);
        self.details
            .get_or_fetch(&key, || self.inner.get_note(id))
            .await
    }

    async fn create_note(&self, payload: &CreateNotePayload) -> Result<Note, DomainError> {
        let note = self.inner.create_note(payload).await?;
        let removed = self.pages.invalidate_namespace(NOTES_NAMESPACE);
        debug!(removed, "Invalidated cached collection pages");
        Ok(note)
    }
}
