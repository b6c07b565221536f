//! Untrusted widget request as received from the embedding page.

use serde::{Deserialize, Serialize};

/// Reciter used when the request does not name one (Mishary Rashid Alafasy)
pub const DEFAULT_RECITER_ID: u32 = 7;

/// Arabic font / script variant requested for the verse text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MushafFont {
    /// KFGQPC Uthmani Hafs
    #[default]
    Uthmani,
    /// IndoPak (Nastaleeq)
    IndoPak,
    /// Uthmani with tajweed colouring
    Tajweed,
    /// Legacy King Fahad Complex V1 glyph font
    QpcV1,
}

impl MushafFont {
    /// Parse a font name as used in embed URLs
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "uthmani" | "qpc_uthmani_hafs" => Some(Self::Uthmani),
            "indopak" | "indo_pak" => Some(Self::IndoPak),
            "tajweed" => Some(Self::Tajweed),
            "qpc_v1" | "v1" | "code_v1" => Some(Self::QpcV1),
            _ => None,
        }
    }
}

/// Page layout line count of the selected mushaf
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MushafLines {
    Fifteen,
    #[default]
    Sixteen,
}

impl MushafLines {
    pub fn from_count(lines: u8) -> Option<Self> {
        match lines {
            15 => Some(Self::Fifteen),
            16 => Some(Self::Sixteen),
            _ => None,
        }
    }
}

/// Colour theme of the rendered widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetTheme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl WidgetTheme {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "sepia" => Some(Self::Sepia),
            _ => None,
        }
    }
}

/// Opaque analytics identifiers forwarded verbatim to backend calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingBundle {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub embed_view_id: Option<String>,
}

/// Raw widget request
///
/// Only `ayah` is required; every other field falls back to the default
/// documented on [`WidgetRequest::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetRequest {
    /// Verse key, "chapter:verse"
    pub ayah: String,
    /// Optional last verse of a range (same chapter)
    pub range_end: Option<f64>,
    pub translation_ids: Vec<u32>,
    pub reciter_id: Option<u32>,
    pub locale: Option<String>,

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

    pub custom_width: Option<String>,
    pub custom_height: Option<String>,
    pub font: MushafFont,
    pub mushaf_lines: MushafLines,
    pub theme: WidgetTheme,

    pub tracking: TrackingBundle,
}

impl Default for WidgetRequest {
    fn default() -> Self {
        Self {
            ayah: String::new(),
            range_end: None,
            translation_ids: Vec::new(),
            reciter_id: None,
            locale: None,
            enable_audio: true,
            enable_wbw: false,
            enable_wbw_transliteration: false,
            show_arabic: true,
            show_tafsirs: true,
            show_reflections: true,
            show_lessons: true,
            show_answers: true,
            merge_verses: false,
            show_translator_names: true,
            custom_width: None,
            custom_height: None,
            font: MushafFont::default(),
            mushaf_lines: MushafLines::default(),
            theme: WidgetTheme::default(),
            tracking: TrackingBundle::default(),
        }
    }
}

impl WidgetRequest {
    /// Create a request for a verse key with default options
    pub fn new(ayah: impl Into<String>) -> Self {
        Self {
            ayah: ayah.into(),
            ..Default::default()
        }
    }

    pub fn with_range_end(mut self, end: u16) -> Self {
        self.range_end = Some(f64::from(end));
        self
    }

    pub fn with_translations(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.translation_ids = ids.into_iter().collect();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_reciter(mut self, reciter_id: u32) -> Self {
        self.reciter_id = Some(reciter_id);
        self
    }

    /// Reciter to use for audio, falling back to the default reciter
    pub fn reciter(&self) -> u32 {
        self.reciter_id.unwrap_or(DEFAULT_RECITER_ID)
    }
}
