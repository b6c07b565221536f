//! WidgetPipeline - turns a raw widget request into the render payload.
//!
//! Stages run in dependency order:
//!
//! ```text
//! reference + locale ──► chapter ──► range ──► wbw locale, answers
//!                                                   │
//!                         options ◄── audio ◄── enrich ◄── sanitize ◄── verses
//! ```
//!
//! Reference, locale, chapter, range and verses are hard gates. The other
//! stages degrade to defaults and report through the [`ErrorReporter`].

use std::sync::Arc;

use tracing::{debug, info, Instrument};

use crate::api::QuranApi;
use crate::error::Result;
use crate::labels::{BuiltinLabels, LabelSource, WidgetLabels};
use crate::locale::resolve_locale;
use crate::options::{WidgetData, WidgetOptionsBuilder};
use crate::reference::{normalize_range_end, AyahReference};
use crate::request::WidgetRequest;
use crate::resolvers::{
    enrich_translations, resolve_answers, resolve_audio_segment, resolve_chapter,
    resolve_wbw_locale,
};
use crate::telemetry::{ErrorReporter, TracingErrorReporter};
use crate::verses::{fetch_verses, sanitize_verses, VerseQueryBuilder};

/// Widget data-assembly pipeline
///
/// Holds only shared, immutable collaborators; one pipeline serves any
/// number of concurrent requests.
#[derive(Clone)]
pub struct WidgetPipeline {
    api: Arc<dyn QuranApi>,
    labels: Arc<dyn LabelSource>,
    reporter: Arc<dyn ErrorReporter>,
}

impl WidgetPipeline {
    /// Create a pipeline with the built-in labels and tracing error reporter.
    pub fn new(api: Arc<dyn QuranApi>) -> Self {
        Self {
            api,
            labels: Arc::new(BuiltinLabels),
            reporter: Arc::new(TracingErrorReporter),
        }
    }

    pub fn with_labels(mut self, labels: Arc<dyn LabelSource>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Assemble the verses and options for one widget request.
    pub async fn assemble_widget_data(&self, request: WidgetRequest) -> Result<WidgetData> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "assemble_widget_data",
            request_id = %request_id,
            ayah = %request.ayah
        );
        self.assemble(request).instrument(span).await
    }

    async fn assemble(&self, request: WidgetRequest) -> Result<WidgetData> {
        let api = self.api.as_ref();
        let reporter = self.reporter.as_ref();

        let reference = AyahReference::parse(&request.ayah)?;
        let locale = resolve_locale(request.locale.as_deref())?;

        let chapter = resolve_chapter(api, reference.chapter_number, &locale).await?;
        reference.check_within(&chapter)?;
        let range = normalize_range_end(reference, request.range_end, &chapter)?;
        debug!(range = %range.caption(), verses_count = chapter.verses_count, "Range validated");

        let wbw_locale = resolve_wbw_locale(api, reporter, request.enable_wbw, &locale).await;
        let answers = resolve_answers(
            api,
            reporter,
            request.show_answers,
            &reference.key(),
            &locale,
        )
        .await;

        let query = VerseQueryBuilder::for_request(&request, &locale, &wbw_locale);
        let verses = fetch_verses(api, reporter, &range, &query).await?;
        let verses = sanitize_verses(verses);
        let verses = enrich_translations(api, reporter, verses).await;

        let audio = resolve_audio_segment(
            api,
            reporter,
            request.enable_audio,
            request.reciter(),
            &chapter,
            &verses,
            &locale,
        )
        .await;

        let labels = WidgetLabels::load(self.labels.as_ref(), &locale);
        let options = WidgetOptionsBuilder::new(&request, range)
            .locale(locale)
            .wbw_locale(wbw_locale)
            .answers(answers)
            .audio(audio)
            .labels(labels)
            .build(&verses);

        info!(
            verses = verses.len(),
            has_audio = options.audio_url.is_some(),
            "Widget data assembled"
        );

        Ok(WidgetData { verses, options })
    }
}
