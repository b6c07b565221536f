//! Surah name and audio segment bounds for the rendered range.

use serde::{Deserialize, Serialize};

use crate::api::{ApiResult, QuranApi};
use crate::types::{ChapterMetadata, Verse};
use crate::telemetry::ErrorReporter;

/// Surah name plus, when available, the audio clip covering the range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub surah_name: String,
    pub audio_url: Option<String>,
    /// Seconds from the start of the chapter recitation
    pub audio_start: Option<f64>,
    pub audio_end: Option<f64>,
}

/// Surah name for the header: Arabic for Arabic locale, transliterated otherwise
pub fn surah_name(chapter: &ChapterMetadata, locale: &str) -> String {
    if locale == "ar" {
        chapter.name_arabic.clone()
    } else {
        chapter.name_simple.clone()
    }
}

fn ms_to_seconds(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Fetch the chapter recitation and locate the first/last verse timings.
pub async fn fetch_audio_segment(
    api: &dyn QuranApi,
    reciter_id: u32,
    chapter: &ChapterMetadata,
    verses: &[Verse],
    surah_name: String,
) -> ApiResult<AudioSegment> {
    let audio = api.get_chapter_audio(reciter_id, chapter.id).await?;

    let start = verses
        .first()
        .and_then(|v| audio.timing(&v.verse_key))
        .map(|t| ms_to_seconds(t.timestamp_from));
    let end = verses
        .last()
        .and_then(|v| audio.timing(&v.verse_key))
        .map(|t| ms_to_seconds(t.timestamp_to));

    Ok(AudioSegment {
        surah_name,
        audio_url: Some(audio.audio_url),
        audio_start: start,
        audio_end: end,
    })
}

/// Resolve the surah name and audio bounds, never failing.
pub async fn resolve_audio_segment(
    api: &dyn QuranApi,
    reporter: &dyn ErrorReporter,
    enabled: bool,
    reciter_id: u32,
    chapter: &ChapterMetadata,
    verses: &[Verse],
    locale: &str,
) -> AudioSegment {
    let name = surah_name(chapter, locale);
    if !enabled {
        return AudioSegment {
            surah_name: name,
            ..Default::default()
        };
    }

    match fetch_audio_segment(api, reciter_id, chapter, verses, name.clone()).await {
        Ok(segment) => segment,
        Err(e) => {
            reporter.report("Failed to resolve audio segment", &e);
            AudioSegment {
                surah_name: name,
                ..Default::default()
            }
        }
    }
}
