//! REST client for the FortuneNews backend.

mod client;
mod envelope;

pub use client::NewsApiClient;
pub use envelope::{ApiEnvelope, ErrorDetail, NewsListData};
