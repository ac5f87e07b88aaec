//! Category statistics from the public categories endpoint.

use serde::{Deserialize, Serialize};

/// Per-category article count, as returned by `GET /public/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: u64,
}
