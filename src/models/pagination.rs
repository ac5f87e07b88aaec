//! Pagination metadata supplied by the backend on every list response.

use serde::{Deserialize, Serialize};

/// Server-computed pagination state.
///
/// This is never computed client-side: each successful list fetch wholly
/// replaces the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number, 1-based.
    pub current: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Whether a further page exists.
    pub has_next: bool,
    /// Page size, when the backend reports it.
    #[serde(default)]
    pub limit: Option<u32>,
}
