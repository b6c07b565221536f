//! Wire types of the content and QnA APIs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ChapterMetadata, Verse};

/// `GET /chapters/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterResponse {
    #[serde(default)]
    pub chapter: Option<ChapterMetadata>,
}

/// `GET /verses/by_key/{key}`
#[derive(Debug, Clone, Deserialize)]
pub struct VerseResponse {
    #[serde(default)]
    pub verse: Option<Verse>,
}

/// `GET /resources/word_by_word_translations`
#[derive(Debug, Clone, Deserialize)]
pub struct WbwLocalesResponse {
    #[serde(default)]
    pub word_by_word_translations: Vec<WbwLocale>,
}

/// A language with word-by-word glosses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WbwLocale {
    pub iso_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `GET /resources/translations`
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationsInfoResponse {
    #[serde(default)]
    pub translations: Vec<TranslationInfo>,
}

/// Translation resource metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationInfo {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
}

/// Question count for one verse
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionCount {
    #[serde(default)]
    pub total: u32,
    /// Count per question type, e.g. "CLARIFICATION"
    #[serde(default)]
    pub types: HashMap<String, u32>,
}

/// `GET /questions/count-within-range`, keyed by verse key
pub type QuestionCounts = HashMap<String, QuestionCount>;

/// `GET /audio/reciters/{id}/audio_files`
#[derive(Debug, Clone, Deserialize)]
pub struct AudioFilesResponse {
    #[serde(default)]
    pub audio_files: Vec<ChapterAudio>,
}

/// One chapter recitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterAudio {
    pub audio_url: String,
    #[serde(default)]
    pub verse_timings: Vec<VerseTiming>,
}

impl ChapterAudio {
    pub fn timing(&self, verse_key: &str) -> Option<&VerseTiming> {
        self.verse_timings.iter().find(|t| t.verse_key == verse_key)
    }
}

/// Millisecond offsets of a verse within the chapter recitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseTiming {
    pub verse_key: String,
    pub timestamp_from: u64,
    pub timestamp_to: u64,
}
