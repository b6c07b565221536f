//! The render contract handed to the widget UI.

use serde::{Deserialize, Serialize};

use crate::labels::{BuiltinLabels, WidgetLabels};
use crate::locale::DEFAULT_LOCALE;
use crate::reference::VerseRange;
use crate::request::{MushafFont, MushafLines, WidgetRequest, WidgetTheme};
use crate::resolvers::{AnswersMetadata, AudioSegment};
use crate::types::Verse;

/// Site the CTA links point at
pub const QURAN_COM_URL: &str = "https://quran.com";

/// Everything the renderer consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    pub verses: Vec<Verse>,
    pub options: WidgetOptions,
}

/// Call-to-action links for the rendered range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLinks {
    pub verse_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tafsir_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflections_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers_url: Option<String>,
}

/// Final, fully resolved widget options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Verse key as requested
    pub ayah: String,
    pub chapter_number: u16,
    pub verse_number: u16,
    /// Normalized range end, absent for a single verse
    pub range_end: Option<u16>,
    pub range_caption: String,

    pub locale: String,
    pub wbw_locale: String,
    pub translation_ids: Vec<u32>,
    pub reciter_id: u32,

    pub enable_audio: bool,
    pub enable_wbw: bool,
    pub enable_wbw_transliteration: bool,
    pub show_arabic: bool,
    pub show_tafsirs: bool,
    pub show_reflections: bool,
    pub show_lessons: bool,
    pub show_answers: bool,
    pub merge_verses: bool,
    pub show_translator_names: bool,

    pub has_any_translations: bool,
    pub has_answers: bool,
    pub is_clarification_question: bool,

    pub surah_name: String,
    pub audio_url: Option<String>,
    pub audio_start: Option<f64>,
    pub audio_end: Option<f64>,

    pub custom_width: Option<String>,
    pub custom_height: Option<String>,
    pub font: MushafFont,
    pub mushaf_lines: MushafLines,
    pub theme: WidgetTheme,

    pub labels: WidgetLabels,
    pub links: WidgetLinks,
}

/// Collects resolved pieces and assembles [`WidgetOptions`]
#[derive(Debug, Clone)]
pub struct WidgetOptionsBuilder<'a> {
    request: &'a WidgetRequest,
    range: VerseRange,
    locale: String,
    wbw_locale: String,
    answers: AnswersMetadata,
    audio: AudioSegment,
    labels: Option<WidgetLabels>,
}

impl<'a> WidgetOptionsBuilder<'a> {
    pub fn new(request: &'a WidgetRequest, range: VerseRange) -> Self {
        Self {
            request,
            range,
            locale: DEFAULT_LOCALE.to_string(),
            wbw_locale: DEFAULT_LOCALE.to_string(),
            answers: AnswersMetadata::default(),
            audio: AudioSegment::default(),
            labels: None,
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn wbw_locale(mut self, wbw_locale: impl Into<String>) -> Self {
        self.wbw_locale = wbw_locale.into();
        self
    }

    pub fn answers(mut self, answers: AnswersMetadata) -> Self {
        self.answers = answers;
        self
    }

    pub fn audio(mut self, audio: AudioSegment) -> Self {
        self.audio = audio;
        self
    }

    pub fn labels(mut self, labels: WidgetLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    fn links(&self) -> WidgetLinks {
        let site = if self.locale == DEFAULT_LOCALE {
            QURAN_COM_URL.to_string()
        } else {
            format!("{}/{}", QURAN_COM_URL, self.locale)
        };
        let chapter = self.range.chapter_number;
        let start_key = format!("{}:{}", chapter, self.range.from);
        let verse_url = match self.range.to {
            Some(to) => format!("{}/{}/{}-{}", site, chapter, self.range.from, to),
            None => format!("{}/{}/{}", site, chapter, self.range.from),
        };
        let cta = |enabled: bool, section: &str| {
            enabled.then(|| format!("{}/{}/{}", site, start_key, section))
        };

        WidgetLinks {
            verse_url,
            tafsir_url: cta(self.request.show_tafsirs, "tafsirs"),
            reflections_url: cta(self.request.show_reflections, "reflections"),
            lessons_url: cta(self.request.show_lessons, "lessons"),
            answers_url: cta(
                self.request.show_answers && self.answers.has_answers,
                "answers",
            ),
        }
    }

    /// Assemble the options for the final verse list
    pub fn build(self, verses: &[Verse]) -> WidgetOptions {
        let links = self.links();
        let labels = self
            .labels
            .unwrap_or_else(|| WidgetLabels::load(&BuiltinLabels, &self.locale));
        let request = self.request;
        let AudioSegment {
            surah_name,
            audio_url,
            audio_start,
            audio_end,
        } = self.audio;

        WidgetOptions {
            ayah: request.ayah.clone(),
            chapter_number: self.range.chapter_number,
            verse_number: self.range.from,
            range_end: self.range.to,
            range_caption: self.range.caption(),
            locale: self.locale,
            wbw_locale: self.wbw_locale,
            translation_ids: request.translation_ids.clone(),
            reciter_id: request.reciter(),
            enable_audio: request.enable_audio,
            enable_wbw: request.enable_wbw,
            enable_wbw_transliteration: request.enable_wbw_transliteration,
            show_arabic: request.show_arabic,
            show_tafsirs: request.show_tafsirs,
            show_reflections: request.show_reflections,
            show_lessons: request.show_lessons,
            show_answers: request.show_answers,
            merge_verses: request.merge_verses,
            show_translator_names: request.show_translator_names,
            has_any_translations: verses.iter().any(Verse::has_translations),
            has_answers: self.answers.has_answers,
            is_clarification_question: self.answers.is_clarification_question,
            surah_name,
            audio_url,
            audio_start,
            audio_end,
            custom_width: request.custom_width.clone(),
            custom_height: request.custom_height.clone(),
            font: request.font,
            mushaf_lines: request.mushaf_lines,
            theme: request.theme,
            labels,
            links,
        }
    }
}
