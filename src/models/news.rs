//! News record types returned by the FortuneNews backend.

use serde::{Deserialize, Serialize};

/// Publication status of a news record.
///
/// The backend may introduce new statuses at any time; anything this client
/// does not recognize deserializes to [`NewsStatus::Other`] and is treated
/// as not publicly displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsStatus {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "PUBLISH")]
    Publish,
    #[serde(other, rename = "OTHER")]
    Other,
}

/// One news article as returned by the backend.
///
/// `title` and `content` carry the default-locale (Chinese) text; the
/// `*_en` / `*_ko` fields carry optional per-locale variants. Records are
/// immutable once fetched — the client only ever replaces them via re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_ko: Option<String>,
    /// Markdown/HTML article body in the default locale.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub translation_en: Option<String>,
    #[serde(default)]
    pub translation_ko: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Publication timestamp, ISO-8601.
    pub iso_date: String,
    pub status: NewsStatus,
}
