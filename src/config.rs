//! Configuration for the widget data service
//!
//! `ApiConfig` configures the backend client; `Args` is the CLI/environment
//! layer of the `ayah-widget` binary, which also carries one widget request.

use clap::Parser;

use crate::request::{
    MushafFont, MushafLines, TrackingBundle, WidgetRequest, WidgetTheme, DEFAULT_RECITER_ID,
};

/// Default content API
pub const DEFAULT_API_URL: &str = "https://api.qurancdn.com/api/qdc";

/// Default question-and-answer API
pub const DEFAULT_QNA_URL: &str = "https://api.quran.com/api/qna";

/// Backend client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the content API (chapters, verses, resources, audio)
    pub base_url: String,
    /// Base URL of the QnA API (question counts)
    pub qna_base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            qna_base_url: DEFAULT_QNA_URL.to_string(),
            timeout_secs: 10,
            user_agent: concat!("ayah-widget/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Assemble the data for one embeddable verse widget
#[derive(Parser, Debug, Clone)]
#[command(name = "ayah-widget")]
#[command(about = "Resolve the render payload of an embeddable Quran verse widget")]
pub struct Args {
    /// Content API base URL
    #[arg(long, env = "QURAN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// QnA API base URL
    #[arg(long, env = "QURAN_QNA_URL", default_value = DEFAULT_QNA_URL)]
    pub qna_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Pretty-print the payload
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Widget request
    #[command(flatten)]
    pub request: RequestArgs,
}

/// Widget request parameters
#[derive(Parser, Debug, Clone)]
pub struct RequestArgs {
    /// Verse key, e.g. "2:255"
    #[arg(long)]
    pub ayah: String,

    /// Last verse of a range within the same chapter
    #[arg(long)]
    pub range_end: Option<f64>,

    /// Comma-separated translation ids, e.g. "131,20"
    #[arg(long, value_delimiter = ',')]
    pub translations: Vec<u32>,

    #[arg(long, default_value_t = DEFAULT_RECITER_ID)]
    pub reciter: u32,

    #[arg(long)]
    pub locale: Option<String>,

    /// Disable the audio player
    #[arg(long)]
    pub no_audio: bool,

    /// Show word-by-word glosses
    #[arg(long)]
    pub wbw: bool,

    /// Show word-by-word transliteration
    #[arg(long)]
    pub wbw_transliteration: bool,

    /// Hide the Arabic text
    #[arg(long)]
    pub hide_arabic: bool,

    #[arg(long)]
    pub no_tafsirs: bool,

    #[arg(long)]
    pub no_reflections: bool,

    #[arg(long)]
    pub no_lessons: bool,

    #[arg(long)]
    pub no_answers: bool,

    /// Render a range as one block
    #[arg(long)]
    pub merge_verses: bool,

    #[arg(long)]
    pub hide_translator_names: bool,

    /// uthmani, indopak, tajweed or qpc_v1
    #[arg(long, default_value = "uthmani")]
    pub font: String,

    /// 15 or 16
    #[arg(long, default_value = "16")]
    pub mushaf_lines: u8,

    /// light, dark or sepia
    #[arg(long, default_value = "light")]
    pub theme: String,

    #[arg(long)]
    pub width: Option<String>,

    #[arg(long)]
    pub height: Option<String>,

    #[arg(long, env = "WIDGET_CLIENT_ID")]
    pub client_id: Option<String>,

    #[arg(long)]
    pub referrer: Option<String>,

    #[arg(long)]
    pub embed_view_id: Option<String>,
}

impl Args {
    /// Backend configuration from the arguments
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            qna_base_url: self.qna_url.clone(),
            timeout_secs: self.request_timeout_secs,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.trim().is_empty() {
            return Err("QURAN_API_URL must not be empty".to_string());
        }
        if self.qna_url.trim().is_empty() {
            return Err("QURAN_QNA_URL must not be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("REQUEST_TIMEOUT_SECS must be greater than zero".to_string());
        }
        self.request.widget_request().map(|_| ())
    }
}

impl RequestArgs {
    /// Convert to a widget request
    pub fn widget_request(&self) -> Result<WidgetRequest, String> {
        let font = MushafFont::from_name(&self.font)
            .ok_or_else(|| format!("Unknown font \"{}\"", self.font))?;
        let mushaf_lines = MushafLines::from_count(self.mushaf_lines)
            .ok_or_else(|| format!("Mushaf lines must be 15 or 16, got {}", self.mushaf_lines))?;
        let theme = WidgetTheme::from_name(&self.theme)
            .ok_or_else(|| format!("Unknown theme \"{}\"", self.theme))?;

        Ok(WidgetRequest {
            ayah: self.ayah.clone(),
            range_end: self.range_end,
            translation_ids: self.translations.clone(),
            reciter_id: Some(self.reciter),
            locale: self.locale.clone(),
            enable_audio: !self.no_audio,
            enable_wbw: self.wbw,
            enable_wbw_transliteration: self.wbw_transliteration,
            show_arabic: !self.hide_arabic,
            show_tafsirs: !self.no_tafsirs,
            show_reflections: !self.no_reflections,
            show_lessons: !self.no_lessons,
            show_answers: !self.no_answers,
            merge_verses: self.merge_verses,
            show_translator_names: !self.hide_translator_names,
            custom_width: self.width.clone(),
            custom_height: self.height.clone(),
            font,
            mushaf_lines,
            theme,
            tracking: TrackingBundle {
                client_id: self.client_id.clone(),
                referrer: self.referrer.clone(),
                embed_view_id: self.embed_view_id.clone(),
            },
        })
    }
}
