//! In-memory [`QuranApi`] for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::*;
use super::{ApiError, ApiResult, QuranApi};
use crate::types::{ChapterMetadata, Verse};
use crate::verses::query::VerseQuery;

/// Backend operations, used to count calls and inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    Chapter,
    Verse,
    WbwLocales,
    TranslationsInfo,
    QuestionCount,
    ChapterAudio,
}

const OPERATIONS: [ApiOperation; 6] = [
    ApiOperation::Chapter,
    ApiOperation::Verse,
    ApiOperation::WbwLocales,
    ApiOperation::TranslationsInfo,
    ApiOperation::QuestionCount,
    ApiOperation::ChapterAudio,
];

/// Mock backend serving fixtures
///
/// Every operation can be switched to fail, and every call is counted.
pub struct MockQuranApi {
    chapters: HashMap<u16, ChapterMetadata>,
    verses: HashMap<String, Verse>,
    wbw_locales: Vec<WbwLocale>,
    translations_info: Vec<TranslationInfo>,
    question_counts: QuestionCounts,
    audio: HashMap<(u32, u16), ChapterAudio>,
    failing: HashMap<ApiOperation, AtomicBool>,
    failing_verses: Vec<String>,
    calls: HashMap<ApiOperation, AtomicU32>,
    last_verse_query: Mutex<Option<VerseQuery>>,
}

impl MockQuranApi {
    pub fn new() -> Self {
        Self {
            chapters: HashMap::new(),
            verses: HashMap::new(),
            wbw_locales: Vec::new(),
            translations_info: Vec::new(),
            question_counts: QuestionCounts::new(),
            audio: HashMap::new(),
            failing: OPERATIONS
                .iter()
                .map(|op| (*op, AtomicBool::new(false)))
                .collect(),
            failing_verses: Vec::new(),
            calls: OPERATIONS
                .iter()
                .map(|op| (*op, AtomicU32::new(0)))
                .collect(),
            last_verse_query: Mutex::new(None),
        }
    }

    pub fn with_chapter(mut self, chapter: ChapterMetadata) -> Self {
        self.chapters.insert(chapter.id, chapter);
        self
    }

    pub fn with_verse(mut self, verse: Verse) -> Self {
        self.verses.insert(verse.verse_key.clone(), verse);
        self
    }

    pub fn with_wbw_locale(mut self, iso_code: impl Into<String>) -> Self {
        self.wbw_locales.push(WbwLocale {
            iso_code: iso_code.into(),
            name: None,
        });
        self
    }

    pub fn with_translation_info(mut self, info: TranslationInfo) -> Self {
        self.translations_info.push(info);
        self
    }

    pub fn with_question_count(mut self, verse_key: impl Into<String>, count: QuestionCount) -> Self {
        self.question_counts.insert(verse_key.into(), count);
        self
    }

    pub fn with_audio(mut self, reciter_id: u32, chapter_number: u16, audio: ChapterAudio) -> Self {
        self.audio.insert((reciter_id, chapter_number), audio);
        self
    }

    /// Make one operation fail with a server error.
    pub fn with_failing(self, operation: ApiOperation) -> Self {
        self.set_failing(operation, true);
        self
    }

    /// Make the fetch of one verse key fail.
    pub fn with_failing_verse(mut self, verse_key: impl Into<String>) -> Self {
        self.failing_verses.push(verse_key.into());
        self
    }

    pub fn set_failing(&self, operation: ApiOperation, failing: bool) {
        if let Some(flag) = self.failing.get(&operation) {
            flag.store(failing, Ordering::SeqCst);
        }
    }

    /// Number of calls made to an operation.
    pub fn call_count(&self, operation: ApiOperation) -> u32 {
        self.calls
            .get(&operation)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Query sent with the most recent verse fetch.
    pub fn last_verse_query(&self) -> Option<VerseQuery> {
        self.last_verse_query
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    fn record(&self, operation: ApiOperation) -> ApiResult<()> {
        if let Some(counter) = self.calls.get(&operation) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        let failing = self
            .failing
            .get(&operation)
            .map(|f| f.load(Ordering::SeqCst))
            .unwrap_or(false);
        if failing {
            return Err(ApiError::Server {
                status: 500,
                message: format!("mock failure: {:?}", operation),
            });
        }
        Ok(())
    }
}

impl Default for MockQuranApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuranApi for MockQuranApi {
    async fn get_chapter(
        &self,
        chapter_number: u16,
        _locale: &str,
    ) -> ApiResult<Option<ChapterMetadata>> {
        self.record(ApiOperation::Chapter)?;
        Ok(self.chapters.get(&chapter_number).cloned())
    }

    async fn get_verse(&self, verse_key: &str, query: &VerseQuery) -> ApiResult<Option<Verse>> {
        self.record(ApiOperation::Verse)?;
        if let Ok(mut last) = self.last_verse_query.lock() {
            *last = Some(query.clone());
        }
        if self.failing_verses.iter().any(|k| k == verse_key) {
            return Err(ApiError::Server {
                status: 503,
                message: format!("mock failure: verse {}", verse_key),
            });
        }
        Ok(self.verses.get(verse_key).cloned())
    }

    async fn list_wbw_locales(&self, _locale: &str) -> ApiResult<Vec<WbwLocale>> {
        self.record(ApiOperation::WbwLocales)?;
        Ok(self.wbw_locales.clone())
    }

    async fn get_translations_info(&self, ids: &[u32]) -> ApiResult<Vec<TranslationInfo>> {
        self.record(ApiOperation::TranslationsInfo)?;
        Ok(self
            .translations_info
            .iter()
            .filter(|info| ids.contains(&info.id))
            .cloned()
            .collect())
    }

    async fn count_questions(
        &self,
        from_key: &str,
        _to_key: &str,
        _language: &str,
    ) -> ApiResult<QuestionCounts> {
        self.record(ApiOperation::QuestionCount)?;
        Ok(self
            .question_counts
            .iter()
            .filter(|(key, _)| key.as_str() == from_key)
            .map(|(key, count)| (key.clone(), count.clone()))
            .collect())
    }

    async fn get_chapter_audio(
        &self,
        reciter_id: u32,
        chapter_number: u16,
    ) -> ApiResult<ChapterAudio> {
        self.record(ApiOperation::ChapterAudio)?;
        self.audio
            .get(&(reciter_id, chapter_number))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("audio {}/{}", reciter_id, chapter_number)))
    }
}
