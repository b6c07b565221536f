//! Verse fetching and text sanitization

pub mod fetcher;
pub mod query;
pub mod sanitizer;

pub use fetcher::fetch_verses;
pub use query::{TrackingParams, VerseQuery, VerseQueryBuilder};
pub use sanitizer::{sanitize_verse, sanitize_verses};
