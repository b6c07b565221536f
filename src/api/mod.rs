//! Quran content API abstraction.
//!
//! The pipeline talks to its backends only through the [`QuranApi`] trait:
//! - [`HttpQuranApi`] calls the public content and QnA HTTP APIs
//! - [`MockQuranApi`] serves in-memory fixtures for tests

pub mod http;
pub mod mock;
pub mod types;

use async_trait::async_trait;

use crate::types::{ChapterMetadata, Verse};
use crate::verses::query::VerseQuery;

pub use http::HttpQuranApi;
pub use mock::MockQuranApi;
pub use types::*;

/// Error from a backend collaborator
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Backend resources the widget pipeline reads.
#[async_trait]
pub trait QuranApi: Send + Sync {
    /// Chapter metadata; `Ok(None)` when the response carries no chapter.
    async fn get_chapter(&self, chapter_number: u16, locale: &str)
        -> ApiResult<Option<ChapterMetadata>>;

    /// One verse by key; `Ok(None)` when the response carries no verse.
    async fn get_verse(&self, verse_key: &str, query: &VerseQuery) -> ApiResult<Option<Verse>>;

    /// Languages with word-by-word glosses available.
    async fn list_wbw_locales(&self, locale: &str) -> ApiResult<Vec<WbwLocale>>;

    /// Metadata for the given translation resources.
    async fn get_translations_info(&self, ids: &[u32]) -> ApiResult<Vec<TranslationInfo>>;

    /// Question counts per verse key within `from..=to`.
    async fn count_questions(
        &self,
        from_key: &str,
        to_key: &str,
        language: &str,
    ) -> ApiResult<QuestionCounts>;

    /// Chapter recitation with verse-level timings.
    async fn get_chapter_audio(&self, reciter_id: u32, chapter_number: u16)
        -> ApiResult<ChapterAudio>;
}
