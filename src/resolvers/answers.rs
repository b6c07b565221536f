//! Community answers badge metadata.

use serde::{Deserialize, Serialize};

use crate::api::{ApiResult, QuranApi};
use crate::locale::qna_language;
use crate::telemetry::ErrorReporter;

/// Question type flag marking a clarification question
pub const CLARIFICATION_TYPE: &str = "CLARIFICATION";

/// Whether the verse has community answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswersMetadata {
    pub has_answers: bool,
    pub is_clarification_question: bool,
}

/// Look up question counts for the starting verse.
pub async fn fetch_answers(
    api: &dyn QuranApi,
    verse_key: &str,
    locale: &str,
) -> ApiResult<AnswersMetadata> {
    let counts = api
        .count_questions(verse_key, verse_key, qna_language(locale))
        .await?;

    Ok(counts
        .get(verse_key)
        .map(|count| AnswersMetadata {
            has_answers: count.total > 0,
            is_clarification_question: count
                .types
                .get(CLARIFICATION_TYPE)
                .is_some_and(|n| *n > 0),
        })
        .unwrap_or_default())
}

/// Resolve answers metadata, never failing.
pub async fn resolve_answers(
    api: &dyn QuranApi,
    reporter: &dyn ErrorReporter,
    enabled: bool,
    verse_key: &str,
    locale: &str,
) -> AnswersMetadata {
    if !enabled {
        return AnswersMetadata::default();
    }

    fetch_answers(api, verse_key, locale)
        .await
        .unwrap_or_else(|e| {
            reporter.report("Failed to fetch question counts", &e);
            AnswersMetadata::default()
        })
}
