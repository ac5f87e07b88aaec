//! Data model for the FortuneNews client.
//!
//! These types mirror the backend's JSON shapes one-to-one (camelCase on the
//! wire). Display-time projection (locale selection, timestamps, previews)
//! lives in [`crate::locale`], never here.

mod admin;
mod category;
mod news;
mod pagination;
mod query;

pub use admin::{NewsUpdate, NewsUpload, SiteStats};
pub use category::CategoryStat;
pub use news::{NewsRecord, NewsStatus};
pub use pagination::PaginationMeta;
pub use query::ListQuery;
