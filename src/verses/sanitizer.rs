//! Text normalization applied to every fetched verse.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::Verse;

/// Sukun code points some fonts render incorrectly in Uthmani text
pub const INCORRECT_SUKUN: &[char] = &['\u{0652}', '\u{06E0}'];

/// Uthmani sukun (ARABIC SMALL HIGH DOTLESS HEAD OF KHAH)
pub const CORRECT_SUKUN: char = '\u{06E1}';

static FOOTNOTE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<sup\b[^>]*>.*?</sup>").expect("valid footnote pattern"));

/// Replace incorrect sukun code points with the Uthmani sukun
pub fn normalize_sukun(text: &str) -> Cow<'_, str> {
    if text.contains(INCORRECT_SUKUN) {
        Cow::Owned(text.replace(INCORRECT_SUKUN, &CORRECT_SUKUN.to_string()))
    } else {
        Cow::Borrowed(text)
    }
}

/// Remove `<sup>` footnote markers and their content
///
/// Repeats until no marker is left, since a removal can join the
/// surrounding text into a new `<sup>` element.
pub fn strip_footnotes(html: &str) -> Cow<'_, str> {
    let mut stripped = match FOOTNOTE_PATTERN.replace_all(html, "") {
        Cow::Borrowed(_) => return Cow::Borrowed(html),
        Cow::Owned(text) => text,
    };
    loop {
        let next = match FOOTNOTE_PATTERN.replace_all(&stripped, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(text) => text,
        };
        stripped = next;
    }
    Cow::Owned(stripped)
}

/// Normalize Arabic glyphs and strip translation footnotes in place
pub fn sanitize_verse(verse: &mut Verse) {
    if let Cow::Owned(text) = normalize_sukun(&verse.text_uthmani) {
        verse.text_uthmani = text;
    }
    for word in &mut verse.words {
        if let Cow::Owned(text) = normalize_sukun(&word.text_uthmani) {
            word.text_uthmani = text;
        }
    }
    for translation in &mut verse.translations {
        if let Cow::Owned(text) = strip_footnotes(&translation.text) {
            translation.text = text;
        }
    }
}

/// Sanitize every verse
pub fn sanitize_verses(mut verses: Vec<Verse>) -> Vec<Verse> {
    verses.iter_mut().for_each(sanitize_verse);
    verses
}
