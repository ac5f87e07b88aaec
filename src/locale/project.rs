//! Pure projection from raw records to display-ready values.
//!
//! Selection is lenient (per-field fallback to the default-locale text) while
//! public visibility is strict (every tracked translation must be present).
//! The asymmetry is intentional: a partially translated article can still
//! render once opened, but it is kept off the public list.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser};
use regex::Regex;

use crate::models::{NewsRecord, NewsStatus};

use super::Locale;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag-strip pattern"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Locale-specific title, falling back to the default-locale title.
pub fn localized_title(record: &NewsRecord, locale: Locale) -> &str {
    match locale {
        Locale::En => record.title_en.as_deref().unwrap_or(&record.title),
        Locale::Ko => record.title_ko.as_deref().unwrap_or(&record.title),
        Locale::ZhCn => &record.title,
    }
}

/// Locale-specific body, falling back to the default-locale body. An absent
/// localized field means "use fallback", not "no content"; `None` only when
/// the record has no body in any applicable language.
pub fn localized_content(record: &NewsRecord, locale: Locale) -> Option<&str> {
    match locale {
        Locale::En => record
            .translation_en
            .as_deref()
            .or(record.content.as_deref()),
        Locale::Ko => record
            .translation_ko
            .as_deref()
            .or(record.content.as_deref()),
        Locale::ZhCn => record.content.as_deref(),
    }
}

/// Public display gate: published status and every tracked localized title
/// present. Stricter than the selectors above on purpose.
pub fn is_displayable(record: &NewsRecord) -> bool {
    record.status == NewsStatus::Publish
        && record.title_en.is_some()
        && record.title_ko.is_some()
}

/// Display token for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStyle {
    Finance,
    Technology,
    World,
    Sports,
    Uncategorized,
}

/// Map a category string (fixed small set, Chinese or English spelling) to
/// its display token. Unknown or absent categories are uncategorized.
pub fn category_style(category: Option<&str>) -> CategoryStyle {
    match category {
        Some("财经") | Some("Finance") => CategoryStyle::Finance,
        Some("科技") | Some("Technology") => CategoryStyle::Technology,
        Some("国际") | Some("World") => CategoryStyle::World,
        Some("体育") | Some("Sports") => CategoryStyle::Sports,
        _ => CategoryStyle::Uncategorized,
    }
}

/// Strip Markdown/HTML markup down to a single-line preview string.
///
/// Total function: markup is walked as Markdown events with raw HTML chunks
/// regex-stripped, so malformed input (unterminated tags, bare angle
/// brackets) still yields a string. Non-breaking spaces become regular
/// spaces, whitespace runs collapse to one space, and the result is trimmed.
pub fn plain_text_preview(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    for event in Parser::new(markup) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::Html(chunk) | Event::InlineHtml(chunk) => {
                text.push_str(&TAG_RE.replace_all(&chunk, " "));
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule | Event::End(_) => text.push(' '),
            _ => {}
        }
    }
    let text = text.replace('\u{a0}', " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}
