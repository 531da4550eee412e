// src/ports/presenter.rs
use crate::constants::CONTENT_PREVIEW_CHARS;
use crate::domain::{Draft, Note, NotesPage};
use crate::util::text::preview;

/// Renders notes for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Render one collection page: a header line and one entry per note
    /// with a short content preview. An empty page renders a distinct
    /// message so it cannot be confused with loading or an error.
    pub fn render_list(&self, page: &NotesPage) -> String {
        if page.notes.is_empty() {
            return "No notes to display.".to_string();
        }

        let mut lines = vec![format!(
            "Page {}/{} ({} notes)",
            page.page,
            page.total_pages.max(1),
            page.total
        )];
        for note in &page.notes {
            lines.push(format!("{:>6}  [{}]  {}", note.id, note.tag, note.title));
            let snippet = preview(&note.content, CONTENT_PREVIEW_CHARS);
            if !snippet.is_empty() {
                lines.push(format!("        {snippet}"));
            }
        }
        lines.join("\n")
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "#{} [{}] {}\ncreated: {}  updated: {}\n\n{}",
            note.id, note.tag, note.title, note.created_at, note.updated_at, note.content
        )
    }

    pub fn render_draft(&self, draft: &Draft) -> String {
        format!(
            "title:   {}\ncontent: {}\ntag:     {}",
            draft.title, draft.content, draft.tag
        )
    }
}
