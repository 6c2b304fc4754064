//! Integration tests for the minimal notes collaborator surface.

use sqlx::PgPool;
use studyhall_db::models::note::CreateNote;
use studyhall_db::repositories::NoteRepo;

fn new_note(title: &str, content: &str) -> CreateNote {
    CreateNote {
        course_id: None,
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find_note(pool: PgPool) {
    let note = NoteRepo::create(&pool, &new_note("Biology", "Cells divide by mitosis."))
        .await
        .unwrap();
    assert_eq!(note.title, "Biology");
    assert_eq!(note.content, "Cells divide by mitosis.");
    assert!(note.course_id.is_none());

    let found = NoteRepo::find_by_id(&pool, note.id).await.unwrap().unwrap();
    assert_eq!(found.id, note.id);
    assert_eq!(found.content, note.content);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_note_returns_none(pool: PgPool) {
    assert!(NoteRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_content_replaces_text_and_touches_updated_at(pool: PgPool) {
    let note = NoteRepo::create(&pool, &new_note("Chemistry", "Old content."))
        .await
        .unwrap();

    let updated = NoteRepo::update_content(&pool, note.id, "New content.")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.content, "New content.");
    assert!(updated.updated_at >= note.updated_at);

    let missing = NoteRepo::update_content(&pool, 9999, "x").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_note_is_idempotent(pool: PgPool) {
    let note = NoteRepo::create(&pool, &new_note("History", "The plague."))
        .await
        .unwrap();

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(!NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::find_by_id(&pool, note.id).await.unwrap().is_none());
}
