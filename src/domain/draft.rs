// src/domain/draft.rs
use crate::constants::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::domain::{CreateNotePayload, NoteTag, ValidationErrors};

/// The user's in-progress, unsaved note.
///
/// The tag is kept as raw text until validation; the draft never rejects
/// input on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::Todo.to_string(),
        }
    }
}

/// A partial draft update. Only the supplied fields are replaced.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl DraftPatch {
    pub fn title(value: impl Into<String>) -> Self {
        Self {
            title: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn content(value: impl Into<String>) -> Self {
        Self {
            content: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Self {
            tag: Some(value.into()),
            ..Self::default()
        }
    }
}

impl Draft {
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tag) = patch.tag {
            self.tag = tag;
        }
    }

    /// Validate the draft and produce the payload submitted to the service.
    ///
    /// Rules: trimmed title length in [3, 50] characters, content at most
    /// 500 characters, tag one of the five known values. All failing fields
    /// are reported together.
    pub fn validate(&self) -> Result<CreateNotePayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        let title_chars = title.chars().count();
        if title_chars < TITLE_MIN_CHARS || title_chars > TITLE_MAX_CHARS {
            errors.title = Some(format!(
                "Title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters."
            ));
        }

        if self.content.chars().count() > CONTENT_MAX_CHARS {
            errors.content = Some(format!(
                "Content must be at most {CONTENT_MAX_CHARS} characters."
            ));
        }

        let tag = match self.tag.parse::<NoteTag>() {
            Ok(tag) => Some(tag),
            Err(_) => {
                errors.tag = Some(format!("Invalid tag: {}", self.tag));
                None
            }
        };

        match tag {
            Some(tag) if errors.is_empty() => Ok(CreateNotePayload {
                title: title.to_string(),
                content: self.content.trim().to_string(),
                tag,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str, tag: &str) -> Draft {
        Draft {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn given_two_char_title_when_validating_then_fails_on_title() {
        let errors = draft("ab", "", "Todo").validate().unwrap_err();

        assert!(errors.title.is_some());
        assert!(errors.content.is_none());
        assert!(errors.tag.is_none());
    }

    #[test]
    fn given_three_char_title_when_validating_then_passes() {
        let payload = draft("abc", "", "Todo").validate().unwrap();

        assert_eq!(payload.title, "abc");
        assert_eq!(payload.tag, NoteTag::Todo);
    }

    #[test]
    fn given_fifty_char_title_when_validating_then_passes() {
        let title = "a".repeat(50);

        assert!(draft(&title, "", "Work").validate().is_ok());
    }

    #[test]
    fn given_fifty_one_char_title_when_validating_then_fails() {
        let title = "a".repeat(51);

        let errors = draft(&title, "", "Work").validate().unwrap_err();
        assert!(errors.title.is_some());
    }

    #[test]
    fn given_padded_title_when_validating_then_length_counts_after_trimming() {
        // "  ab  " trims to 2 characters and must fail.
        let errors = draft("  ab  ", "", "Todo").validate().unwrap_err();
        assert!(errors.title.is_some());

        // "  abc  " trims to 3 characters and passes.
        let payload = draft("  abc  ", "", "Todo").validate().unwrap();
        assert_eq!(payload.title, "abc");
    }

    #[test]
    fn given_500_char_content_when_validating_then_passes() {
        let content = "x".repeat(500);

        assert!(draft("abc", &content, "Personal").validate().is_ok());
    }

    #[test]
    fn given_501_char_content_when_validating_then_fails() {
        let content = "x".repeat(501);

        let errors = draft("abc", &content, "Personal").validate().unwrap_err();
        assert!(errors.content.is_some());
    }

    #[test]
    fn given_each_known_tag_when_validating_then_passes() {
        for tag in NoteTag::ALL {
            let result = draft("abc", "", tag.as_str()).validate();
            assert!(result.is_ok(), "tag {tag} should validate");
        }
    }

    #[test]
    fn given_unknown_tag_when_validating_then_fails_on_tag() {
        let errors = draft("abc", "", "unknown").validate().unwrap_err();

        assert!(errors.tag.is_some());
        assert!(errors.title.is_none());
    }

    #[test]
    fn given_multiple_bad_fields_when_validating_then_reports_all() {
        let content = "x".repeat(501);

        let errors = draft("ab", &content, "nope").validate().unwrap_err();

        assert!(errors.title.is_some());
        assert!(errors.content.is_some());
        assert!(errors.tag.is_some());
    }

    #[test]
    fn given_valid_draft_when_validating_then_trims_title_and_content() {
        let payload = draft(" Groceries ", " Buy milk ", "Shopping")
            .validate()
            .unwrap();

        assert_eq!(payload.title, "Groceries");
        assert_eq!(payload.content, "Buy milk");
        assert_eq!(payload.tag, NoteTag::Shopping);
    }

    #[test]
    fn given_patch_when_applying_then_replaces_only_supplied_fields() {
        let mut draft = Draft::default();

        draft.apply(DraftPatch::title("Groceries"));
        draft.apply(DraftPatch::content("Buy milk"));

        assert_eq!(draft.title, "Groceries");
        assert_eq!(draft.content, "Buy milk");
        assert_eq!(draft.tag, "Todo");
    }

    #[test]
    fn given_default_draft_when_created_then_uses_default_tag() {
        let draft = Draft::default();

        assert_eq!(draft.title, "");
        assert_eq!(draft.content, "");
        assert_eq!(draft.tag, "Todo");
    }
}
