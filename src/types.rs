//! Domain types shared across the pipeline
//!
//! These mirror the verse payloads of the Quran content API closely enough to
//! deserialize them directly, and serialize unchanged into the render payload.

use serde::{Deserialize, Serialize};

/// Chapter (surah) metadata, fetched once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMetadata {
    /// Chapter number (1-114)
    pub id: u16,
    /// Number of verses in the chapter; authoritative verse bound
    pub verses_count: u16,
    /// Transliterated name, e.g. "Al-Fatihah"
    pub name_simple: String,
    /// Arabic name
    pub name_arabic: String,
}

/// A single verse as rendered by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// API identifier
    #[serde(default)]
    pub id: u32,
    /// Verse number within its chapter
    pub verse_number: u16,
    /// Verse key ("chapter:verse")
    pub verse_key: String,
    /// Uthmani script text
    #[serde(default)]
    pub text_uthmani: String,
    /// IndoPak script text (IndoPak font only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_indopak: Option<String>,
    /// Tajweed-annotated HTML (Tajweed font only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_uthmani_tajweed: Option<String>,
    /// Words in reading order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub words: Vec<Word>,
    /// Requested translations
    #[serde(default, deserialize_with = "null_as_empty")]
    pub translations: Vec<Translation>,
}

impl Verse {
    /// Whether this verse carries at least one translation
    pub fn has_translations(&self) -> bool {
        !self.translations.is_empty()
    }
}

/// A single word of a verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    #[serde(default)]
    pub id: u32,
    /// 1-based position within the verse
    #[serde(default)]
    pub position: u16,
    #[serde(default)]
    pub text_uthmani: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_indopak: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_uthmani_tajweed: Option<String>,
    /// Glyph code for the legacy KFGQPC V1 font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_v1: Option<String>,
    /// "word" or "end" (verse-end marker)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_type_name: Option<String>,
    /// Word-by-word gloss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<WordGloss>,
    /// Word-by-word transliteration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<WordGloss>,
}

/// Gloss or transliteration attached to a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordGloss {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
}

/// A verse translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    /// Translation resource this text belongs to
    pub resource_id: u32,
    /// Translation HTML
    #[serde(default)]
    pub text: String,
    /// Resource name, filled by enrichment when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Translator name, filled by enrichment when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
}

/// The API sends `null` rather than `[]` for some verses.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_missing_lists_become_empty() {
        let verse: Verse = serde_json::from_str(
            r#"{"verse_number": 1, "verse_key": "1:1", "text_uthmani": "x", "words": null}"#,
        )
        .unwrap();

        assert!(verse.words.is_empty());
        assert!(verse.translations.is_empty());
        assert!(!verse.has_translations());
    }

    #[test]
    fn test_translation_optional_names() {
        let translation: Translation =
            serde_json::from_str(r#"{"resource_id": 131, "text": "In the name"}"#).unwrap();

        assert_eq!(translation.resource_id, 131);
        assert!(translation.resource_name.is_none());
        assert!(translation.author_name.is_none());

        let json = serde_json::to_value(&translation).unwrap();
        assert!(json.get("resource_name").is_none());
    }
}
