// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Notes shown per collection page.
///
/// Matches the page size the NoteHub service uses for its own list views, so
/// page numbers line up between this client and the web UI.
///
/// Used in: `infrastructure/config.rs`
pub const NOTES_PER_PAGE: u32 = 12;

/// Quiescence delay for live search input, in milliseconds.
///
/// Search text only reaches the query layer once no further input has
/// arrived for this long, bounding request volume while the user types.
///
/// Used in: `lib.rs` (browse session)
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Minimum length of a note title after trimming, in characters.
///
/// Used in: `domain/draft.rs`
pub const TITLE_MIN_CHARS: usize = 3;

/// Maximum length of a note title after trimming, in characters.
///
/// Used in: `domain/draft.rs`
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum length of note content, in characters. There is no minimum.
///
/// Used in: `domain/draft.rs`
pub const CONTENT_MAX_CHARS: usize = 500;

/// Characters of note content shown in list previews before truncation.
///
/// Used in: `ports/presenter.rs`
pub const CONTENT_PREVIEW_CHARS: usize = 100;

/// Default timeout for requests to the NoteHub service, in seconds.
///
/// Used in: `infrastructure/config.rs`
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
