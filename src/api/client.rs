//! HTTP client for the FortuneNews REST API.
//!
//! One reusable `reqwest::Client` plus an injected base URL. A non-2xx
//! transport status is always a failure, even when the body happens to
//! carry `success: true`; the error message still prefers whatever the
//! body says over the bare status code.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    CategoryStat, ListQuery, NewsRecord, NewsUpdate, NewsUpload, SiteStats,
};

use super::envelope::{ApiEnvelope, NewsListData};

/// Client for the public and admin surfaces of the news API.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl NewsApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    /// Build a client against an explicit base URL (tests point this at a
    /// fixture server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Published news list. `latest` defaults to true when the caller did
    /// not set it — the public surface always has an ordering.
    pub async fn get_published_news(&self, query: &ListQuery) -> Result<NewsListData, ApiError> {
        let mut query = query.clone();
        query.latest = Some(query.latest.unwrap_or(true));
        let envelope: ApiEnvelope<NewsListData> =
            self.get("/public/news", &query.to_pairs()).await?;
        envelope.into_data()
    }

    /// Single published article.
    pub async fn get_news_detail(&self, id: i64) -> Result<NewsRecord, ApiError> {
        let envelope: ApiEnvelope<NewsRecord> = self
            .get(&format!("/public/news/{}", id), &[])
            .await?;
        envelope.into_data()
    }

    /// Popular categories. Absent data degrades to an empty list rather
    /// than an error — the category strip is decoration, not content.
    pub async fn get_popular_categories(&self) -> Result<Vec<CategoryStat>, ApiError> {
        let envelope: ApiEnvelope<Vec<CategoryStat>> =
            self.get("/public/categories", &[]).await?;
        if envelope.success {
            Ok(envelope.data.unwrap_or_default())
        } else {
            Err(ApiError::Application {
                message: envelope.error_message(),
            })
        }
    }

    /// Admin news list (all statuses, no implicit ordering flag).
    pub async fn get_admin_news(&self, query: &ListQuery) -> Result<NewsListData, ApiError> {
        let envelope: ApiEnvelope<NewsListData> =
            self.get("/admin/news", &query.to_pairs()).await?;
        envelope.into_data()
    }

    /// Single article through the admin surface, drafts included.
    pub async fn get_news_by_id(&self, id: i64) -> Result<NewsRecord, ApiError> {
        let envelope: ApiEnvelope<NewsRecord> =
            self.get(&format!("/admin/news/{}", id), &[]).await?;
        envelope.into_data()
    }

    /// Partial update of an article.
    pub async fn update_news(&self, id: i64, update: &NewsUpdate) -> Result<NewsRecord, ApiError> {
        let envelope: ApiEnvelope<NewsRecord> = self
            .send_json(reqwest::Method::PUT, &format!("/admin/news/{}", id), update)
            .await?;
        envelope.into_data()
    }

    /// Delete an article. Returns once the backend confirms.
    pub async fn delete_news(&self, id: i64) -> Result<(), ApiError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .request(reqwest::Method::DELETE, &format!("/admin/news/{}", id))
            .await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Application {
                message: envelope.error_message(),
            })
        }
    }

    /// Dashboard counters.
    pub async fn get_stats(&self) -> Result<SiteStats, ApiError> {
        let envelope: ApiEnvelope<SiteStats> = self.get("/admin/stats", &[]).await?;
        envelope.into_data()
    }

    /// Third-party article ingest.
    pub async fn upload_news(&self, upload: &NewsUpload) -> Result<NewsRecord, ApiError> {
        let envelope: ApiEnvelope<NewsRecord> = self
            .send_json(reqwest::Method::POST, "/upload", upload)
            .await?;
        envelope.into_data()
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, method = %method, "request with body");
        let response = self
            .client
            .request(method, &url)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, method = %method, "request");
        let response = self.client.request(method, &url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "response");
        if !status.is_success() {
            // Surface the body's own message when it has one.
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .map(|envelope| envelope.error_message())
                .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }
        serde_json::from_str(&body).map_err(|err| ApiError::MalformedResponse {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = NewsApiClient::with_base_url("http://localhost:3000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:3000/api/v1");
    }

    #[test]
    fn client_from_config_uses_configured_url() {
        let config = ApiConfig::new().with_base_url("https://news.example.com/api");
        let client = NewsApiClient::new(&config);
        assert_eq!(client.base_url(), "https://news.example.com/api");
    }
}
