//! Translation author/resource name enrichment.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::api::{ApiResult, QuranApi, TranslationInfo};
use crate::telemetry::ErrorReporter;
use crate::types::Verse;

/// Distinct translation resource ids referenced by the verses, ascending
pub fn translation_ids(verses: &[Verse]) -> Vec<u32> {
    verses
        .iter()
        .flat_map(|v| v.translations.iter().map(|t| t.resource_id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fill missing names from `infos`. Names already present are kept.
pub fn apply_translation_info(verses: &mut [Verse], infos: &[TranslationInfo]) {
    let by_id: HashMap<u32, &TranslationInfo> = infos.iter().map(|i| (i.id, i)).collect();

    for translation in verses.iter_mut().flat_map(|v| v.translations.iter_mut()) {
        let Some(info) = by_id.get(&translation.resource_id) else {
            continue;
        };
        if is_blank(&translation.resource_name) {
            if let Some(name) = info.name.clone().filter(|n| !n.is_empty()) {
                translation.resource_name = Some(name);
            }
        }
        if is_blank(&translation.author_name) {
            if let Some(author) = info.author_name.clone().filter(|n| !n.is_empty()) {
                translation.author_name = Some(author);
            }
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Fetch metadata for every referenced translation in one call and apply it.
pub async fn fetch_enrichment(api: &dyn QuranApi, verses: &mut [Verse]) -> ApiResult<()> {
    let ids = translation_ids(verses);
    if ids.is_empty() {
        return Ok(());
    }

    debug!(?ids, "Enriching translation metadata");
    let infos = api.get_translations_info(&ids).await?;
    apply_translation_info(verses, &infos);
    Ok(())
}

/// Enrich translations, leaving verses exactly as they were on failure.
pub async fn enrich_translations(
    api: &dyn QuranApi,
    reporter: &dyn ErrorReporter,
    mut verses: Vec<Verse>,
) -> Vec<Verse> {
    // Metadata is applied only after a successful fetch
    if let Err(e) = fetch_enrichment(api, &mut verses).await {
        reporter.report("Failed to fetch translation metadata", &e);
    }
    verses
}
