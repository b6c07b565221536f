//! Word-by-word gloss language probe.

use tracing::debug;

use crate::api::{ApiResult, QuranApi};
use crate::locale::DEFAULT_LOCALE;
use crate::telemetry::ErrorReporter;

/// Check whether glosses exist in `locale`, returning the locale to use.
pub async fn fetch_wbw_locale(api: &dyn QuranApi, locale: &str) -> ApiResult<String> {
    let available = api.list_wbw_locales(locale).await?;
    if available.iter().any(|l| l.iso_code == locale) {
        Ok(locale.to_string())
    } else {
        debug!(locale, "No word-by-word glosses for locale, using default");
        Ok(DEFAULT_LOCALE.to_string())
    }
}

/// Resolve the gloss language, never failing.
///
/// No network call is made when glosses are disabled or the locale is the
/// default one.
pub async fn resolve_wbw_locale(
    api: &dyn QuranApi,
    reporter: &dyn ErrorReporter,
    enabled: bool,
    locale: &str,
) -> String {
    if !enabled || locale == DEFAULT_LOCALE {
        return DEFAULT_LOCALE.to_string();
    }

    fetch_wbw_locale(api, locale).await.unwrap_or_else(|e| {
        reporter.report("Failed to fetch word-by-word locales", &e);
        DEFAULT_LOCALE.to_string()
    })
}
