// src/application/note_browser.rs
use crate::domain::NotesQuery;

/// Transient browsing state for the notes collection: current page, search
/// text, and active tag segment. Derives the query sent downstream.
///
/// State transitions follow the list view's rules: changing the search text
/// returns to page 1; switching the tag is a full-context reset (page 1,
/// search cleared).
#[derive(Debug, Clone)]
pub struct NoteBrowser {
    page: u32,
    search: String,
    tag: String,
    per_page: u32,
}

impl NoteBrowser {
    /// Create a browser for a tag segment. `"all"` (any casing) means no
    /// tag filter.
    pub fn new(tag: impl Into<String>, per_page: u32) -> Self {
        Self {
            page: 1,
            search: String::new(),
            tag: tag.into(),
            per_page,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: u32) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
        self.page = 1;
        self.search.clear();
    }

    /// Derive the downstream query for the current state.
    pub fn query(&self) -> NotesQuery {
        let tag = if self.tag.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(self.tag.clone())
        };

        NotesQuery {
            page: self.page,
            search: self.search.clone(),
            per_page: self.per_page,
            tag,
        }
    }
}
