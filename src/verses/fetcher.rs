//! Concurrent verse fetch for the validated range.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::api::QuranApi;
use crate::error::{Result, WidgetError};
use crate::reference::VerseRange;
use crate::telemetry::ErrorReporter;
use crate::types::Verse;
use crate::verses::query::VerseQuery;

/// Fetch every verse of `range` concurrently.
///
/// All fetches run to completion; failed fetches are reported and dropped,
/// as are responses without a verse. Order follows the range. Only an empty
/// result is an error.
pub async fn fetch_verses(
    api: &dyn QuranApi,
    reporter: &dyn ErrorReporter,
    range: &VerseRange,
    query: &VerseQuery,
) -> Result<Vec<Verse>> {
    let keys = range.verse_keys();
    debug!(count = keys.len(), range = %range.caption(), "Fetching verses");

    let results = join_all(keys.iter().map(|key| api.get_verse(key, query))).await;

    let verses: Vec<Verse> = keys
        .iter()
        .zip(results)
        .filter_map(|(key, result)| match result {
            Ok(Some(verse)) => Some(verse),
            Ok(None) => {
                warn!(verse_key = %key, "Verse response carried no verse");
                None
            }
            Err(e) => {
                reporter.report(&format!("Failed to fetch verse {}", key), &e);
                None
            }
        })
        .collect();

    if verses.is_empty() {
        return Err(WidgetError::NotFoundRange);
    }
    Ok(verses)
}
