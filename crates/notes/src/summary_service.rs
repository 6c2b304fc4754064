//! Tiered note summarization.
//!
//! A single decision point consumes the remote result: `Ok` keeps the
//! provider summary, any [`RemoteError`] drops to the local extractive
//! heuristic. The caller never sees a remote failure; only empty input or
//! a storage error fails a request.

use sqlx::PgPool;
use studyhall_core::error::CoreError;
use studyhall_core::summarize::extractive_summary;
use studyhall_core::text_metrics;
use studyhall_core::types::DbId;
use studyhall_db::models::summary::{CreateSummary, Summary};
use studyhall_db::repositories::{NoteRepo, SummaryRepo};
use studyhall_llm::RemoteSummarizer;

use crate::error::NotesResult;

/// Model identifier recorded for summaries produced by the local heuristic.
pub const LOCAL_MODEL: &str = "local-heuristic";

/// Confidence recorded for the fallback path.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Confidence recorded for a remote summary when the provider reports none.
pub const DEFAULT_REMOTE_CONFIDENCE: f64 = 0.8;

/// Produces and persists note summaries.
pub struct SummarizationService;

impl SummarizationService {
    /// Generate a summary for `text` and persist it against `note_id`.
    ///
    /// Tries the remote provider first and falls back to
    /// [`extractive_summary`] on any remote failure. Exactly one summary
    /// row is written per successful call; nothing is written on failure,
    /// and cancelling the future before the remote attempt resolves also
    /// writes nothing.
    pub async fn generate(
        pool: &PgPool,
        remote: &dyn RemoteSummarizer,
        note_id: DbId,
        text: &str,
    ) -> NotesResult<Summary> {
        if text.trim().is_empty() {
            return Err(CoreError::Validation("Note content must not be empty".into()).into());
        }

        NoteRepo::find_by_id(pool, note_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "note",
                id: note_id,
            })?;

        let (content, model, confidence, is_fallback) = match remote.summarize(text).await {
            Ok(summary) => {
                let confidence = summary.confidence.unwrap_or(DEFAULT_REMOTE_CONFIDENCE);
                (summary.text, summary.model, confidence, false)
            }
            Err(err) => {
                tracing::warn!(
                    note_id,
                    error = %err,
                    "Remote summarization failed, using local heuristic"
                );
                (
                    extractive_summary(text),
                    LOCAL_MODEL.to_string(),
                    FALLBACK_CONFIDENCE,
                    true,
                )
            }
        };

        // Metrics describe the summary text, not the source note.
        let metrics = text_metrics::compute(&content);

        let summary = SummaryRepo::create(
            pool,
            &CreateSummary {
                note_id,
                content,
                model,
                word_count: metrics.word_count,
                reading_time_seconds: metrics.reading_time_seconds(),
                confidence,
                is_fallback,
            },
        )
        .await?;

        Ok(summary)
    }
}
