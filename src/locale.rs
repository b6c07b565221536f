//! Locale validation

use crate::error::{Result, WidgetError};

/// Locale used when the request does not specify one
pub const DEFAULT_LOCALE: &str = "en";

/// Locales the widget ships labels and surah names for
pub const SUPPORTED_LOCALES: &[&str] = &[
    "en", "ar", "bn", "fa", "fr", "id", "it", "nl", "pt", "ru", "sq", "th", "tr", "ur", "zh",
    "ms", "es", "sw", "vi",
];

/// Languages the question-and-answer service serves content in
pub const QNA_LANGUAGES: &[&str] = &["en", "ar", "bn", "fa", "fr", "id", "ur"];

/// Whether `locale` is one of [`SUPPORTED_LOCALES`]
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// Validate the requested locale, defaulting when absent
pub fn resolve_locale(requested: Option<&str>) -> Result<String> {
    match requested {
        None => Ok(DEFAULT_LOCALE.to_string()),
        Some(locale) if is_supported(locale) => Ok(locale.to_string()),
        Some(locale) => Err(WidgetError::invalid_input(format!(
            "Unsupported locale \"{}\". Supported locales: {}",
            locale,
            SUPPORTED_LOCALES.join(", ")
        ))),
    }
}

/// Coerce a locale to one the QnA service understands
pub fn qna_language(locale: &str) -> &str {
    if QNA_LANGUAGES.contains(&locale) {
        locale
    } else {
        DEFAULT_LOCALE
    }
}
