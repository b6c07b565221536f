//! Chapter metadata, the bounds oracle for verse and range validation.

use tracing::warn;

use crate::api::QuranApi;
use crate::error::{Result, WidgetError};
use crate::types::ChapterMetadata;

/// Fetch chapter metadata.
///
/// A failed fetch or an empty payload is a hard error: without the chapter's
/// verse count the range cannot be validated.
pub async fn resolve_chapter(
    api: &dyn QuranApi,
    chapter_number: u16,
    locale: &str,
) -> Result<ChapterMetadata> {
    match api.get_chapter(chapter_number, locale).await {
        Ok(Some(chapter)) => Ok(chapter),
        Ok(None) => {
            warn!(chapter_number, "Chapter response carried no chapter");
            Err(WidgetError::InvalidChapter)
        }
        Err(e) => {
            warn!(chapter_number, error = %e, "Chapter fetch failed");
            Err(WidgetError::InvalidChapter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{ApiOperation, MockQuranApi};

    fn fatiha() -> ChapterMetadata {
        ChapterMetadata {
            id: 1,
            verses_count: 7,
            name_simple: "Al-Fatihah".to_string(),
            name_arabic: "الفاتحة".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolves_known_chapter() {
        let api = MockQuranApi::new().with_chapter(fatiha());
        let chapter = resolve_chapter(&api, 1, "en").await.unwrap();
        assert_eq!(chapter.verses_count, 7);
    }

    #[tokio::test]
    async fn test_missing_chapter_is_invalid() {
        let api = MockQuranApi::new();
        let err = resolve_chapter(&api, 1, "en").await.unwrap_err();
        assert!(matches!(err, WidgetError::InvalidChapter));
        assert_eq!(err.status(), 400);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_never_downgraded() {
        let api = MockQuranApi::new()
            .with_chapter(fatiha())
            .with_failing(ApiOperation::Chapter);
        let err = resolve_chapter(&api, 1, "en").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid chapter requested");
    }
}
