//! End-to-end pipeline scenarios against the mock backend

use std::collections::HashMap;
use std::sync::Arc;

use ayah_widget::api::mock::{ApiOperation, MockQuranApi};
use ayah_widget::api::{ChapterAudio, QuestionCount, TranslationInfo, VerseTiming};
use ayah_widget::telemetry::RecordingErrorReporter;
use ayah_widget::{
    ChapterMetadata, MushafFont, MushafLines, Translation, Verse, WidgetError, WidgetPipeline,
    WidgetRequest, Word,
};

fn chapter(id: u16, verses_count: u16, name_simple: &str, name_arabic: &str) -> ChapterMetadata {
    ChapterMetadata {
        id,
        verses_count,
        name_simple: name_simple.to_string(),
        name_arabic: name_arabic.to_string(),
    }
}

fn verse(chapter: u16, number: u16, translation_ids: &[u32]) -> Verse {
    Verse {
        id: u32::from(chapter) * 1000 + u32::from(number),
        verse_number: number,
        verse_key: format!("{}:{}", chapter, number),
        text_uthmani: "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650}".to_string(),
        text_indopak: None,
        text_uthmani_tajweed: None,
        words: vec![Word {
            id: 1,
            position: 1,
            text_uthmani: "\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650}".to_string(),
            text_indopak: None,
            text_uthmani_tajweed: None,
            code_v1: None,
            char_type_name: Some("word".to_string()),
            translation: None,
            transliteration: None,
        }],
        translations: translation_ids
            .iter()
            .map(|id| Translation {
                resource_id: *id,
                text: format!("Translation {}<sup foot_note=\"9\">1</sup>", number),
                resource_name: None,
                author_name: None,
                language_name: Some("english".to_string()),
            })
            .collect(),
    }
}

fn clear_quran() -> TranslationInfo {
    TranslationInfo {
        id: 131,
        name: Some("Dr. Mustafa Khattab, The Clear Quran".to_string()),
        author_name: Some("Dr. Mustafa Khattab".to_string()),
        language_name: Some("english".to_string()),
    }
}

fn fatiha_api() -> MockQuranApi {
    MockQuranApi::new()
        .with_chapter(chapter(1, 7, "Al-Fatihah", "الفاتحة"))
        .with_verse(verse(1, 1, &[131]))
        .with_translation_info(clear_quran())
        .with_audio(
            7,
            1,
            ChapterAudio {
                audio_url: "https://download.quranicaudio.com/qdc/mishari_al_afasy/murattal/1.mp3"
                    .to_string(),
                verse_timings: vec![VerseTiming {
                    verse_key: "1:1".to_string(),
                    timestamp_from: 0,
                    timestamp_to: 6_493,
                }],
            },
        )
}

fn baqarah_api() -> MockQuranApi {
    MockQuranApi::new()
        .with_chapter(chapter(2, 286, "Al-Baqarah", "البقرة"))
        .with_verse(verse(2, 255, &[131]))
        .with_verse(verse(2, 256, &[131]))
        .with_verse(verse(2, 257, &[131]))
        .with_translation_info(clear_quran())
        .with_audio(
            7,
            2,
            ChapterAudio {
                audio_url: "https://download.quranicaudio.com/qdc/mishari_al_afasy/murattal/2.mp3"
                    .to_string(),
                verse_timings: vec![
                    VerseTiming {
                        verse_key: "2:255".to_string(),
                        timestamp_from: 4_853_010,
                        timestamp_to: 4_920_000,
                    },
                    VerseTiming {
                        verse_key: "2:257".to_string(),
                        timestamp_from: 4_960_500,
                        timestamp_to: 5_031_250,
                    },
                ],
            },
        )
}

fn pipeline(api: &Arc<MockQuranApi>) -> (WidgetPipeline, Arc<RecordingErrorReporter>) {
    let reporter = Arc::new(RecordingErrorReporter::new());
    let pipeline = WidgetPipeline::new(api.clone()).with_reporter(reporter.clone());
    (pipeline, reporter)
}

#[tokio::test]
async fn test_single_verse_with_translation() {
    let api = Arc::new(fatiha_api());
    let (pipeline, reporter) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(
            WidgetRequest::new("1:1")
                .with_translations([131])
                .with_locale("en"),
        )
        .await
        .unwrap();

    assert_eq!(data.verses.len(), 1);
    let verse = &data.verses[0];
    assert!(!verse.text_uthmani.is_empty());
    assert_eq!(verse.translations.len(), 1);
    assert!(data.options.has_any_translations);

    // sanitized and enriched
    assert!(!verse.text_uthmani.contains('\u{0652}'));
    assert_eq!(verse.translations[0].text, "Translation 1");
    assert_eq!(
        verse.translations[0].author_name.as_deref(),
        Some("Dr. Mustafa Khattab")
    );

    assert_eq!(data.options.surah_name, "Al-Fatihah");
    assert_eq!(data.options.audio_start, Some(0.0));
    assert_eq!(data.options.audio_end, Some(6.493));
    assert!(reporter.is_empty());
}

#[tokio::test]
async fn test_range_returns_verses_in_order() {
    let api = Arc::new(baqarah_api());
    let (pipeline, _) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(
            WidgetRequest::new("2:255")
                .with_range_end(257)
                .with_translations([131]),
        )
        .await
        .unwrap();

    let numbers: Vec<u16> = data.verses.iter().map(|v| v.verse_number).collect();
    assert_eq!(numbers, vec![255, 256, 257]);
    assert_eq!(data.options.range_end, Some(257));
    assert_eq!(data.options.range_caption, "2:255-257");
    assert_eq!(data.options.audio_start, Some(4853.01));
    assert_eq!(data.options.audio_end, Some(5031.25));
    assert_eq!(api.call_count(ApiOperation::Verse), 3);
    assert_eq!(api.call_count(ApiOperation::TranslationsInfo), 1);
}

#[tokio::test]
async fn test_range_past_chapter_end_is_rejected() {
    let api = Arc::new(fatiha_api());
    let (pipeline, _) = pipeline(&api);

    let mut request = WidgetRequest::new("1:1").with_translations([131]);
    request.range_end = Some(50.0);
    let err = pipeline.assemble_widget_data(request).await.unwrap_err();

    assert!(matches!(err, WidgetError::InvalidInput(_)));
    assert_eq!(err.status(), 400);
    let message = err.to_string();
    assert!(message.contains("maximum allowed end is 7"), "{message}");
    assert_eq!(api.call_count(ApiOperation::Verse), 0);
}

#[tokio::test]
async fn test_range_end_not_after_start_renders_single_verse() {
    let api = Arc::new(baqarah_api());
    let (pipeline, _) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(WidgetRequest::new("2:255").with_range_end(200))
        .await
        .unwrap();

    assert_eq!(data.verses.len(), 1);
    assert_eq!(data.options.range_end, None);
}

#[tokio::test]
async fn test_answers_disabled_skips_question_service() {
    let api = Arc::new(
        fatiha_api().with_question_count(
            "1:1",
            QuestionCount {
                total: 4,
                types: HashMap::from([("CLARIFICATION".to_string(), 2)]),
            },
        ),
    );
    let (pipeline, _) = pipeline(&api);

    let mut request = WidgetRequest::new("1:1");
    request.show_answers = false;
    let data = pipeline.assemble_widget_data(request).await.unwrap();

    assert!(!data.options.has_answers);
    assert!(!data.options.is_clarification_question);
    assert_eq!(api.call_count(ApiOperation::QuestionCount), 0);
}

#[tokio::test]
async fn test_answers_enabled_sets_badges() {
    let api = Arc::new(
        fatiha_api().with_question_count(
            "1:1",
            QuestionCount {
                total: 4,
                types: HashMap::from([("CLARIFICATION".to_string(), 2)]),
            },
        ),
    );
    let (pipeline, _) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(WidgetRequest::new("1:1"))
        .await
        .unwrap();

    assert!(data.options.has_answers);
    assert!(data.options.is_clarification_question);
    assert_eq!(
        data.options.links.answers_url.as_deref(),
        Some("https://quran.com/1:1/answers")
    );
}

#[tokio::test]
async fn test_audio_failure_keeps_name_and_verses() {
    let api = Arc::new(fatiha_api().with_failing(ApiOperation::ChapterAudio));
    let (pipeline, reporter) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(WidgetRequest::new("1:1").with_translations([131]))
        .await
        .unwrap();

    assert!(data.options.audio_url.is_none());
    assert!(data.options.audio_start.is_none());
    assert!(data.options.audio_end.is_none());
    assert_eq!(data.options.surah_name, "Al-Fatihah");
    assert_eq!(data.verses.len(), 1);
    assert_eq!(reporter.len(), 1);
}

#[tokio::test]
async fn test_every_soft_failure_degrades() {
    let api = Arc::new(
        fatiha_api()
            .with_wbw_locale("ur")
            .with_failing(ApiOperation::WbwLocales)
            .with_failing(ApiOperation::QuestionCount)
            .with_failing(ApiOperation::TranslationsInfo)
            .with_failing(ApiOperation::ChapterAudio),
    );
    let (pipeline, reporter) = pipeline(&api);

    let mut request = WidgetRequest::new("1:1")
        .with_translations([131])
        .with_locale("ur");
    request.enable_wbw = true;
    let data = pipeline.assemble_widget_data(request).await.unwrap();

    assert_eq!(data.options.wbw_locale, "en");
    assert!(!data.options.has_answers);
    assert!(data.verses[0].translations[0].author_name.is_none());
    assert!(data.options.audio_url.is_none());
    assert_eq!(reporter.len(), 4);
}

#[tokio::test]
async fn test_chapter_failure_is_hard() {
    let api = Arc::new(fatiha_api().with_failing(ApiOperation::Chapter));
    let (pipeline, _) = pipeline(&api);

    let err = pipeline
        .assemble_widget_data(WidgetRequest::new("1:1"))
        .await
        .unwrap_err();
    assert!(matches!(err, WidgetError::InvalidChapter));
}

#[tokio::test]
async fn test_no_verses_is_not_found() {
    let api = Arc::new(MockQuranApi::new().with_chapter(chapter(1, 7, "Al-Fatihah", "الفاتحة")));
    let (pipeline, _) = pipeline(&api);

    let err = pipeline
        .assemble_widget_data(WidgetRequest::new("1:2"))
        .await
        .unwrap_err();
    assert!(matches!(err, WidgetError::NotFoundRange));
    assert_eq!(err.status(), 400);
}

#[tokio::test]
async fn test_verse_query_carries_font_and_tracking() {
    let api = Arc::new(fatiha_api().with_wbw_locale("ur"));
    let (pipeline, _) = pipeline(&api);

    let mut request = WidgetRequest::new("1:1")
        .with_translations([131, 20])
        .with_locale("ur");
    request.enable_wbw = true;
    request.font = MushafFont::IndoPak;
    request.mushaf_lines = MushafLines::Fifteen;
    request.tracking.client_id = Some("partner-site".to_string());
    pipeline.assemble_widget_data(request).await.unwrap();

    let query = api.last_verse_query().unwrap();
    assert_eq!(query.translations.as_deref(), Some("131,20"));
    assert_eq!(query.mushaf, Some(7));
    assert_eq!(query.word_translation_language.as_deref(), Some("ur"));
    assert!(query.word_fields.unwrap().contains("text_indopak"));
    assert_eq!(query.tracking.client_id.as_deref(), Some("partner-site"));
    assert_eq!(query.tracking.referrer, None);
    assert_eq!(query.tracking.locale.as_deref(), Some("ur"));
    assert_eq!(query.tracking.embed, Some(true));
}

#[tokio::test]
async fn test_arabic_locale_uses_arabic_labels_and_name() {
    let api = Arc::new(fatiha_api());
    let (pipeline, _) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(WidgetRequest::new("1:1").with_locale("ar"))
        .await
        .unwrap();

    assert_eq!(data.options.surah_name, "الفاتحة");
    assert_eq!(data.options.labels.surah, "سورة");
    assert_eq!(data.options.locale, "ar");
}

#[tokio::test]
async fn test_payload_serializes() {
    let api = Arc::new(fatiha_api());
    let (pipeline, _) = pipeline(&api);

    let data = pipeline
        .assemble_widget_data(WidgetRequest::new("1:1").with_translations([131]))
        .await
        .unwrap();
    let json = serde_json::to_value(&data).unwrap();

    assert_eq!(json["options"]["has_any_translations"], true);
    assert_eq!(json["options"]["font"], "uthmani");
    assert_eq!(json["verses"][0]["verse_key"], "1:1");
}
