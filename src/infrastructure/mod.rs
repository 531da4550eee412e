// src/infrastructure/mod.rs
pub mod config;
pub mod debounce;
pub mod notehub;
pub mod query_cache;

pub use config::Config;
pub use debounce::Debouncer;
pub use notehub::NoteHubRepository;
pub use query_cache::{CachedNoteRepository, QueryCache, QueryKey};
