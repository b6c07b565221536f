//! Verse reference parsing and range normalization

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};
use crate::types::ChapterMetadata;

pub const MAX_CHAPTER: u16 = 114;

/// Longest chapter (Al-Baqarah); a cheap pre-filter before chapter metadata loads
pub const MAX_VERSE: u16 = 286;

/// Maximum number of verses a range may extend past its start
pub const MAX_RANGE_SPAN: u16 = 10;

static AYAH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d+)$").expect("valid ayah pattern"));

/// Parsed "chapter:verse" reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahReference {
    pub chapter_number: u16,
    pub verse_number: u16,
}

impl AyahReference {
    /// Parse and bounds-check a raw verse key.
    ///
    /// Only digits-colon-digits is accepted; whitespace, signs, extra colons
    /// and empty components are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let captures = AYAH_PATTERN.captures(raw).ok_or_else(|| {
            WidgetError::invalid_input(format!(
                "Invalid ayah \"{}\": expected the form chapter:verse",
                raw
            ))
        })?;

        let chapter = parse_bounded(&captures[1], MAX_CHAPTER);
        let verse = parse_bounded(&captures[2], MAX_VERSE);

        match (chapter, verse) {
            (Some(chapter_number), Some(verse_number)) => Ok(Self {
                chapter_number,
                verse_number,
            }),
            (None, _) => Err(WidgetError::invalid_input(format!(
                "Invalid chapter in ayah \"{}\": must be between 1 and {}",
                raw, MAX_CHAPTER
            ))),
            (_, None) => Err(WidgetError::invalid_input(format!(
                "Invalid verse in ayah \"{}\": must be between 1 and {}",
                raw, MAX_VERSE
            ))),
        }
    }

    /// Check the verse number against the chapter's real verse count
    pub fn check_within(&self, chapter: &ChapterMetadata) -> Result<()> {
        if self.verse_number > chapter.verses_count {
            return Err(WidgetError::invalid_input(format!(
                "Verse {} does not exist: chapter {} has {} verses",
                self.verse_number, self.chapter_number, chapter.verses_count
            )));
        }
        Ok(())
    }

    /// Verse key for this reference
    pub fn key(&self) -> String {
        verse_key(self.chapter_number, self.verse_number)
    }
}

impl fmt::Display for AyahReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter_number, self.verse_number)
    }
}

fn parse_bounded(digits: &str, max: u16) -> Option<u16> {
    digits
        .parse::<u16>()
        .ok()
        .filter(|n| (1..=max).contains(n))
}

/// Format a verse key
pub fn verse_key(chapter: u16, verse: u16) -> String {
    format!("{}:{}", chapter, verse)
}

/// Validated verse range within one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRange {
    pub chapter_number: u16,
    pub from: u16,
    /// Last verse, absent for a single-verse render
    pub to: Option<u16>,
}

impl VerseRange {
    pub fn single(reference: AyahReference) -> Self {
        Self {
            chapter_number: reference.chapter_number,
            from: reference.verse_number,
            to: None,
        }
    }

    /// Last rendered verse number
    pub fn last(&self) -> u16 {
        self.to.unwrap_or(self.from)
    }

    /// Ordered verse keys to fetch
    pub fn verse_keys(&self) -> Vec<String> {
        (self.from..=self.last())
            .map(|verse| verse_key(self.chapter_number, verse))
            .collect()
    }

    /// "c:v" or "c:v-w"
    pub fn caption(&self) -> String {
        match self.to {
            Some(to) => format!("{}:{}-{}", self.chapter_number, self.from, to),
            None => verse_key(self.chapter_number, self.from),
        }
    }
}

/// Normalize the requested range end once chapter bounds are known.
///
/// A candidate that is not finite or not strictly greater than the start
/// verse is ignored and the widget renders a single verse. A candidate past
/// `min(start + MAX_RANGE_SPAN, verses_count)` is rejected. An accepted
/// fractional candidate is floored.
pub fn normalize_range_end(
    reference: AyahReference,
    candidate: Option<f64>,
    chapter: &ChapterMetadata,
) -> Result<VerseRange> {
    let mut range = VerseRange::single(reference);

    let Some(end) = candidate else {
        return Ok(range);
    };
    if !end.is_finite() || end <= f64::from(reference.verse_number) {
        return Ok(range);
    }

    let span_limit = reference.verse_number.saturating_add(MAX_RANGE_SPAN);
    let max_end = span_limit.min(chapter.verses_count);

    if end > f64::from(max_end) {
        return Err(WidgetError::invalid_input(format!(
            "Invalid range end {}: maximum allowed end is {} ({} verses past {}, chapter {} has {} verses)",
            end, max_end, MAX_RANGE_SPAN, reference, reference.chapter_number, chapter.verses_count
        )));
    }

    // within (start, max_end] here; a fractional end covers the verses up to its floor
    let last = end.floor() as u16;
    if last > reference.verse_number {
        range.to = Some(last);
    }
    Ok(range)
}
