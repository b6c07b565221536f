//! Localized labels embedded in the widget options.

use serde::{Deserialize, Serialize};

use crate::locale::DEFAULT_LOCALE;

/// Namespace of the widget's labels
pub const WIDGET_NAMESPACE: &str = "widget";

/// Localization lookup
pub trait LabelSource: Send + Sync {
    /// Label for `key`; implementations fall back rather than fail.
    fn label(&self, locale: &str, namespace: &str, key: &str) -> String;
}

/// Built-in catalogue: (locale, namespace, key, text)
const CATALOGUE: &[(&str, &str, &str, &str)] = &[
    ("en", WIDGET_NAMESPACE, "surah", "Surah"),
    ("en", WIDGET_NAMESPACE, "verse", "Verse"),
    ("en", WIDGET_NAMESPACE, "play-audio", "Play audio"),
    ("en", WIDGET_NAMESPACE, "pause-audio", "Pause audio"),
    ("en", WIDGET_NAMESPACE, "tafsirs", "Tafsirs"),
    ("en", WIDGET_NAMESPACE, "reflections", "Reflections"),
    ("en", WIDGET_NAMESPACE, "lessons", "Lessons"),
    ("en", WIDGET_NAMESPACE, "answers", "Answers"),
    ("en", WIDGET_NAMESPACE, "clarification", "Clarification"),
    ("en", WIDGET_NAMESPACE, "read-more", "Read more on Quran.com"),
    ("en", WIDGET_NAMESPACE, "powered-by", "Powered by Quran.com"),
    ("ar", WIDGET_NAMESPACE, "surah", "سورة"),
    ("ar", WIDGET_NAMESPACE, "verse", "آية"),
    ("ar", WIDGET_NAMESPACE, "play-audio", "تشغيل الصوت"),
    ("ar", WIDGET_NAMESPACE, "pause-audio", "إيقاف الصوت"),
    ("ar", WIDGET_NAMESPACE, "tafsirs", "التفاسير"),
    ("ar", WIDGET_NAMESPACE, "reflections", "تدبرات"),
    ("ar", WIDGET_NAMESPACE, "lessons", "دروس"),
    ("ar", WIDGET_NAMESPACE, "answers", "إجابات"),
    ("ar", WIDGET_NAMESPACE, "clarification", "توضيح"),
    ("ar", WIDGET_NAMESPACE, "read-more", "اقرأ المزيد على Quran.com"),
    ("ar", WIDGET_NAMESPACE, "powered-by", "مقدم من Quran.com"),
];

/// Catalogue compiled into the crate, falling back to English, then the key
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLabels;

impl BuiltinLabels {
    fn lookup(locale: &str, namespace: &str, key: &str) -> Option<&'static str> {
        CATALOGUE
            .iter()
            .find(|(l, n, k, _)| *l == locale && *n == namespace && *k == key)
            .map(|(_, _, _, text)| *text)
    }
}

impl LabelSource for BuiltinLabels {
    fn label(&self, locale: &str, namespace: &str, key: &str) -> String {
        Self::lookup(locale, namespace, key)
            .or_else(|| Self::lookup(DEFAULT_LOCALE, namespace, key))
            .unwrap_or(key)
            .to_string()
    }
}

/// Fixed label set the renderer displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLabels {
    pub surah: String,
    pub verse: String,
    pub play_audio: String,
    pub pause_audio: String,
    pub tafsirs: String,
    pub reflections: String,
    pub lessons: String,
    pub answers: String,
    pub clarification: String,
    pub read_more: String,
    pub powered_by: String,
}

impl WidgetLabels {
    /// Assemble the label set for a locale
    pub fn load(source: &dyn LabelSource, locale: &str) -> Self {
        let get = |key: &str| source.label(locale, WIDGET_NAMESPACE, key);
        Self {
            surah: get("surah"),
            verse: get("verse"),
            play_audio: get("play-audio"),
            pause_audio: get("pause-audio"),
            tafsirs: get("tafsirs"),
            reflections: get("reflections"),
            lessons: get("lessons"),
            answers: get("answers"),
            clarification: get("clarification"),
            read_more: get("read-more"),
            powered_by: get("powered-by"),
        }
    }
}
