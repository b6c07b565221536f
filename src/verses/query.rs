//! Query parameters for verse fetches.
//!
//! Every parameter is an explicit optional field; serde drops the absent
//! ones, so a missing tracking value is omitted rather than sent empty.

use serde::Serialize;

use crate::request::{MushafFont, MushafLines, TrackingBundle, WidgetRequest};

/// Word fields every font needs
pub const BASE_WORD_FIELDS: &[&str] = &["verse_key", "verse_id", "page_number", "location", "text_uthmani"];

/// Extra word/verse fields per font
pub const FONT_WORD_FIELDS: &[(MushafFont, &[&str])] = &[
    (MushafFont::Uthmani, &[]),
    (MushafFont::IndoPak, &["text_indopak"]),
    (MushafFont::Tajweed, &["text_uthmani_tajweed"]),
    (MushafFont::QpcV1, &["code_v1"]),
];

/// Translation metadata requested alongside each translation
pub const TRANSLATION_FIELDS: &str = "resource_name,language_name";

/// Mushaf ids of the content API, keyed by font and page line count
pub const MUSHAF_IDS: &[(MushafFont, MushafLines, u32)] = &[
    (MushafFont::QpcV1, MushafLines::Fifteen, 2),
    (MushafFont::QpcV1, MushafLines::Sixteen, 2),
    (MushafFont::Uthmani, MushafLines::Fifteen, 5),
    (MushafFont::Uthmani, MushafLines::Sixteen, 5),
    (MushafFont::IndoPak, MushafLines::Fifteen, 6),
    (MushafFont::IndoPak, MushafLines::Sixteen, 7),
    (MushafFont::Tajweed, MushafLines::Fifteen, 19),
    (MushafFont::Tajweed, MushafLines::Sixteen, 19),
];

/// Extra fields for a font
pub fn font_word_fields(font: MushafFont) -> &'static [&'static str] {
    FONT_WORD_FIELDS
        .iter()
        .find(|(f, _)| *f == font)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Comma-joined word field selector for a font
pub fn word_fields(font: MushafFont) -> String {
    BASE_WORD_FIELDS
        .iter()
        .chain(font_word_fields(font))
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

/// Mushaf id for a font and line count.
///
/// IndoPak always uses the 16-line layout; the 15-line mushaf renders the
/// verse-end glyphs with the wrong style.
pub fn mushaf_id(font: MushafFont, lines: MushafLines) -> u32 {
    let lines = match font {
        MushafFont::IndoPak => MushafLines::Sixteen,
        _ => lines,
    };
    MUSHAF_IDS
        .iter()
        .find(|(f, l, _)| *f == font && *l == lines)
        .map(|(_, _, id)| *id)
        .unwrap_or(5)
}

/// Query bag for `GET /verses/by_key/{key}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerseQuery {
    pub page: u32,
    pub per_page: u32,
    pub words: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reciter: Option<u32>,
    /// Verse-level text fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_translation_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mushaf: Option<u32>,
    #[serde(flatten)]
    pub tracking: TrackingParams,
}

/// Tracking bundle flattened into individual query parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_view_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbw_transliteration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_arabic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tafsirs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflections: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_verses: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<String>,
}

impl TrackingParams {
    /// Flatten the tracking bundle and request toggles.
    ///
    /// `range_start`/`range_end` are the bounds as originally requested, not
    /// the normalized range.
    pub fn from_request(request: &WidgetRequest, locale: &str) -> Self {
        let TrackingBundle {
            client_id,
            referrer,
            embed_view_id,
        } = &request.tracking;

        Self {
            client_id: non_empty(client_id),
            referrer: non_empty(referrer),
            embed: Some(true),
            embed_view_id: non_empty(embed_view_id),
            audio: Some(request.enable_audio),
            wbw: Some(request.enable_wbw),
            wbw_transliteration: Some(request.enable_wbw_transliteration),
            show_arabic: Some(request.show_arabic),
            tafsirs: Some(request.show_tafsirs),
            reflections: Some(request.show_reflections),
            lessons: Some(request.show_lessons),
            answers: Some(request.show_answers),
            merge_verses: Some(request.merge_verses),
            translator_name: Some(request.show_translator_names),
            locale: Some(locale.to_string()),
            range_start: Some(request.ayah.clone()).filter(|a| !a.is_empty()),
            range_end: request.range_end.map(|end| end.to_string()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Builds the per-verse query bag from a request
#[derive(Debug, Clone)]
pub struct VerseQueryBuilder {
    query: VerseQuery,
}

impl VerseQueryBuilder {
    pub fn new() -> Self {
        Self {
            query: VerseQuery {
                page: 1,
                per_page: 1,
                words: true,
                translation_fields: Some(TRANSLATION_FIELDS.to_string()),
                ..Default::default()
            },
        }
    }

    /// Comma-joined translation ids, omitted when empty
    pub fn translations(mut self, ids: &[u32]) -> Self {
        self.query.translations = if ids.is_empty() {
            None
        } else {
            Some(
                ids.iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };
        self
    }

    pub fn reciter(mut self, reciter_id: u32) -> Self {
        self.query.reciter = Some(reciter_id);
        self
    }

    /// Word fields, verse fields and mushaf for the requested font
    pub fn font(mut self, font: MushafFont, lines: MushafLines) -> Self {
        let verse_fields: Vec<&str> = std::iter::once("text_uthmani")
            .chain(font_word_fields(font).iter().copied().filter(|f| *f != "code_v1"))
            .collect();
        self.query.fields = Some(verse_fields.join(","));
        self.query.word_fields = Some(word_fields(font));
        self.query.mushaf = Some(mushaf_id(font, lines));
        self
    }

    pub fn word_translation_language(mut self, locale: &str) -> Self {
        self.query.word_translation_language = Some(locale.to_string());
        self
    }

    pub fn tracking(mut self, tracking: TrackingParams) -> Self {
        self.query.tracking = tracking;
        self
    }

    pub fn build(self) -> VerseQuery {
        self.query
    }

    /// Full query for a request, its resolved locale and WBW locale
    pub fn for_request(request: &WidgetRequest, locale: &str, wbw_locale: &str) -> VerseQuery {
        Self::new()
            .translations(&request.translation_ids)
            .reciter(request.reciter())
            .font(request.font, request.mushaf_lines)
            .word_translation_language(wbw_locale)
            .tracking(TrackingParams::from_request(request, locale))
            .build()
    }
}

impl Default for VerseQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
