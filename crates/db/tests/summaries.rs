//! Integration tests for the append-only summaries store.
//!
//! Exercises create/read/delete, the "latest is newest created_at"
//! ordering, multiple rows per note, and cascade deletion with the note.

use sqlx::PgPool;
use studyhall_db::models::note::CreateNote;
use studyhall_db::models::summary::CreateSummary;
use studyhall_db::repositories::{NoteRepo, SummaryRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_note(pool: &PgPool) -> i64 {
    NoteRepo::create(
        pool,
        &CreateNote {
            course_id: None,
            title: "Algorithms".to_string(),
            content: "Sorting, searching, and graph traversal.".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_summary(note_id: i64, content: &str, is_fallback: bool) -> CreateSummary {
    CreateSummary {
        note_id,
        content: content.to_string(),
        model: if is_fallback {
            "local-heuristic".to_string()
        } else {
            "gpt-4o-mini".to_string()
        },
        word_count: 6,
        reading_time_seconds: 60,
        confidence: if is_fallback { 0.5 } else { 0.8 },
        is_fallback,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_id_and_timestamp(pool: PgPool) {
    let note_id = seed_note(&pool).await;

    let summary = SummaryRepo::create(&pool, &new_summary(note_id, "Sorting in a nutshell.", true))
        .await
        .unwrap();

    assert!(summary.id > 0);
    assert_eq!(summary.note_id, note_id);
    assert_eq!(summary.content, "Sorting in a nutshell.");
    assert_eq!(summary.model, "local-heuristic");
    assert!(summary.is_fallback);

    let found = SummaryRepo::find_by_id(&pool, summary.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.created_at, summary.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn multiple_summaries_per_note_latest_wins(pool: PgPool) {
    let note_id = seed_note(&pool).await;

    let first = SummaryRepo::create(&pool, &new_summary(note_id, "First pass.", true))
        .await
        .unwrap();
    let second = SummaryRepo::create(&pool, &new_summary(note_id, "Second pass.", false))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let latest = SummaryRepo::find_latest_by_note(&pool, note_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, second.id);

    let all = SummaryRepo::list_by_note(&pool, note_id).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, second.id);
    assert_eq!(all[1].id, first.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_for_note_without_summaries_is_none(pool: PgPool) {
    let note_id = seed_note(&pool).await;
    assert!(SummaryRepo::find_latest_by_note(&pool, note_id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_exactly_one_row(pool: PgPool) {
    let note_id = seed_note(&pool).await;
    let summary = SummaryRepo::create(&pool, &new_summary(note_id, "Ephemeral.", true))
        .await
        .unwrap();

    assert!(SummaryRepo::delete(&pool, summary.id).await.unwrap());
    assert!(!SummaryRepo::delete(&pool, summary.id).await.unwrap());
    assert!(SummaryRepo::find_by_id(&pool, summary.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_note_cascades_to_summaries(pool: PgPool) {
    let note_id = seed_note(&pool).await;
    SummaryRepo::create(&pool, &new_summary(note_id, "Doomed.", true))
        .await
        .unwrap();

    assert!(NoteRepo::delete(&pool, note_id).await.unwrap());

    let remaining = SummaryRepo::list_by_note(&pool, note_id).await.unwrap();
    assert!(remaining.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_for_unknown_note_is_rejected(pool: PgPool) {
    let result = SummaryRepo::create(&pool, &new_summary(424242, "Orphan.", true)).await;
    assert!(result.is_err()); // foreign key violation
}
