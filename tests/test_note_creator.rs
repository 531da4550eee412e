mod helpers;

use helpers::{query, sample_notes};
use notehub::application::{DraftStore, NoteCreator, NoteRepository};
use notehub::domain::{DomainError, Draft, DraftPatch, NoteTag};
use notehub::infrastructure::CachedNoteRepository;
use notehub::util::testing::MockNoteRepository;
use std::sync::Arc;

fn drafted(title: &str, content: &str, tag: &str) -> Arc<DraftStore> {
    let drafts = Arc::new(DraftStore::new());
    drafts.set(DraftPatch::title(title));
    drafts.set(DraftPatch::content(content));
    drafts.set(DraftPatch::tag(tag));
    drafts
}

#[tokio::test]
async fn given_groceries_draft_when_submitting_then_creates_clears_and_refetches() {
    // Arrange: a warmed list cache and a complete draft.
    let repo = CachedNoteRepository::new(
        MockNoteRepository::builder()
            .with_notes(sample_notes())
            .build(),
    );
    let q = query(1, "", None);
    repo.list_notes(&q).await.unwrap();
    assert_eq!(repo.inner().list_calls(), 1);

    let drafts = drafted("Groceries", "Buy milk", "Shopping");
    let creator = NoteCreator::new(repo.clone(), Arc::clone(&drafts));

    // Act
    let note = creator.create_from_draft().await.unwrap();

    // Assert: created with the validated payload.
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "Buy milk");
    assert_eq!(note.tag, NoteTag::Shopping);

    // The draft is back to its defaults.
    assert_eq!(drafts.get(), Draft::default());

    // The warmed tuple refetches and includes the new note.
    let page = repo.list_notes(&q).await.unwrap();
    assert_eq!(repo.inner().list_calls(), 2);
    assert!(page.notes.iter().any(|n| n.id == note.id));
}

#[tokio::test]
async fn given_invalid_draft_when_submitting_then_network_is_never_reached() {
    // Arrange
    let repo = CachedNoteRepository::new(MockNoteRepository::builder().build());
    let drafts = drafted("ab", "", "Todo");
    let creator = NoteCreator::new(repo.clone(), Arc::clone(&drafts));

    // Act
    let result = creator.create_from_draft().await;

    // Assert: validation failed locally, the draft survives untouched.
    match result {
        Err(DomainError::Validation(errors)) => assert!(errors.title.is_some()),
        other => panic!("Expected validation error, got {other:?}"),
    }
    assert_eq!(repo.inner().create_calls(), 0);
    assert_eq!(drafts.get().title, "ab");
}

#[tokio::test]
async fn given_server_rejection_when_submitting_then_draft_and_cache_are_kept() {
    // Arrange
    let repo = CachedNoteRepository::new(
        MockNoteRepository::builder()
            .with_notes(sample_notes())
            .with_create_failure("quota exceeded")
            .build(),
    );
    let q = query(1, "", None);
    repo.list_notes(&q).await.unwrap();

    let drafts = drafted("Groceries", "Buy milk", "Shopping");
    let creator = NoteCreator::new(repo.clone(), Arc::clone(&drafts));

    // Act
    let result = creator.create_from_draft().await;

    // Assert: the error carries the server's message and nothing was lost.
    match result {
        Err(DomainError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("Expected server error, got {other:?}"),
    }
    assert_eq!(drafts.get().title, "Groceries");
    assert_eq!(drafts.get().content, "Buy milk");

    // Cached reads were not invalidated by the failed write.
    repo.list_notes(&q).await.unwrap();
    assert_eq!(repo.inner().list_calls(), 1);
}

#[tokio::test]
async fn given_draft_edited_between_forms_when_submitting_then_last_write_wins() {
    // Arrange: two surfaces share one store; the second finishes the draft.
    let repo = CachedNoteRepository::new(MockNoteRepository::builder().build());
    let drafts = Arc::new(DraftStore::new());
    drafts.set(DraftPatch::title("Call dentist"));

    let other_surface = Arc::clone(&drafts);
    other_surface.set(DraftPatch::title("Call the dentist"));

    let creator = NoteCreator::new(repo, Arc::clone(&drafts));

    // Act
    let note = creator.create_from_draft().await.unwrap();

    // Assert
    assert_eq!(note.title, "Call the dentist");
    assert_eq!(note.tag, NoteTag::Todo);
}
