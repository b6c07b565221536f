//! Ayah Widget - data assembly for the embeddable Quran verse widget
//!
//! Takes a raw, untrusted widget request (verse key, range, locale, feature
//! toggles, tracking ids) and produces one render-ready payload: sanitized
//! verses with enriched translations plus the resolved widget options.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            WidgetPipeline               │
//! │   (validation, orchestration, options)  │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┼───────────────┐
//!      ▼           ▼               ▼
//! ┌──────────┐ ┌──────────┐ ┌──────────────┐
//! │ QuranApi │ │ Labels   │ │ ErrorReporter│
//! │ (HTTP /  │ │          │ │ (telemetry)  │
//! │  mock)   │ │          │ │              │
//! └──────────┘ └──────────┘ └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ayah_widget::{ApiConfig, HttpQuranApi, WidgetPipeline, WidgetRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpQuranApi::new(ApiConfig::default())?;
//! let pipeline = WidgetPipeline::new(Arc::new(api));
//!
//! let data = pipeline
//!     .assemble_widget_data(WidgetRequest::new("2:255").with_range_end(257).with_translations([131]))
//!     .await?;
//! println!("{} verses from {}", data.verses.len(), data.options.surah_name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod labels;
pub mod locale;
pub mod options;
pub mod pipeline;
pub mod reference;
pub mod request;
pub mod resolvers;
pub mod telemetry;
pub mod types;
pub mod verses;

// Re-export main types for convenience
pub use api::{ApiError, HttpQuranApi, MockQuranApi, QuranApi};
pub use config::{ApiConfig, Args};
pub use error::{Result, WidgetError};
pub use options::{WidgetData, WidgetOptions};
pub use pipeline::WidgetPipeline;
pub use reference::{AyahReference, VerseRange};
pub use request::{MushafFont, MushafLines, TrackingBundle, WidgetRequest, WidgetTheme};
pub use types::*;
