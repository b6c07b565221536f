//! Backend-backed resolvers.
//!
//! `chapter` is a hard gate. The others are best-effort: each has a
//! `fetch_*` function that returns the backend error, and a `resolve_*`
//! (or `enrich_*`) wrapper that reports the error and returns a default.

pub mod answers;
pub mod audio;
pub mod chapter;
pub mod translations;
pub mod wbw;

pub use answers::{resolve_answers, AnswersMetadata};
pub use audio::{resolve_audio_segment, surah_name, AudioSegment};
pub use chapter::resolve_chapter;
pub use translations::enrich_translations;
pub use wbw::resolve_wbw_locale;
