//! Request bodies and responses for the admin-side API surface.

use serde::{Deserialize, Serialize};

use super::NewsStatus;

/// Partial update for an existing article (`PUT /admin/news/{id}`).
/// Unset fields are omitted from the request body and left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ko: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_ko: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NewsStatus>,
}

/// Third-party ingest body (`POST /upload`). New articles arrive as drafts
/// in the default locale; translations are filled in later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsUpload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_date: Option<String>,
}

/// Dashboard counters from `GET /admin/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total: u64,
    pub published: u64,
    pub draft: u64,
}
