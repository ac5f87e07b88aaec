//! Paginated news list state machine.
//!
//! One controller instance owns one list: its items, pagination metadata,
//! stored query, loading flag, and last error. Page-1 loads replace the
//! item sequence wholesale; an explicitly requested `page > 1` appends,
//! de-duplicating by id (first seen wins). Pagination metadata is always
//! wholly replaced.
//!
//! Loads are sequenced by a monotonically increasing request token. A
//! completion is applied only if it belongs to the most recently issued
//! request — stale completions are discarded without touching state, so the
//! final state always reflects the last *issued* query, not whichever fetch
//! happened to finish last. The [`NewsListController::begin_load`] /
//! [`NewsListController::apply`] seam lets an event loop run the fetch on a
//! spawned task and feed the completion back as a message.

use std::collections::HashSet;

use tracing::{debug, error};

use crate::api::{NewsApiClient, NewsListData};
use crate::error::ApiError;
use crate::models::{ListQuery, NewsRecord, PaginationMeta};

/// Which backend surface a controller lists from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// `GET /public/news` — published articles only, `latest` defaulted to
    /// true, incremental append on explicit `page > 1`.
    Public,
    /// `GET /admin/news` — all statuses, every load replaces the sequence.
    Admin,
}

/// An issued-but-not-yet-fetched load. Created by
/// [`NewsListController::begin_load`]; run it (typically on a spawned task)
/// and hand the [`CompletedLoad`] back to [`NewsListController::apply`].
#[derive(Debug)]
pub struct LoadRequest {
    token: u64,
    query: ListQuery,
    explicit: bool,
    source: ListSource,
    client: NewsApiClient,
}

impl LoadRequest {
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Build the completion directly from a result, skipping the fetch.
    #[cfg(test)]
    pub(crate) fn complete_with(self, result: Result<NewsListData, ApiError>) -> CompletedLoad {
        CompletedLoad {
            token: self.token,
            query: self.query,
            explicit: self.explicit,
            result,
        }
    }

    /// Perform the fetch. Never fails itself — the outcome travels inside
    /// the completion so state is updated in exactly one place.
    pub async fn run(self) -> CompletedLoad {
        let result = match self.source {
            ListSource::Public => self.client.get_published_news(&self.query).await,
            ListSource::Admin => self.client.get_admin_news(&self.query).await,
        };
        CompletedLoad {
            token: self.token,
            query: self.query,
            explicit: self.explicit,
            result,
        }
    }
}

/// Outcome of one load, tagged with its request token.
#[derive(Debug)]
pub struct CompletedLoad {
    token: u64,
    query: ListQuery,
    explicit: bool,
    result: Result<NewsListData, ApiError>,
}

/// Owns the paginated list state for one view. Not shared: each view
/// constructs its own controller and discards it when the view goes away.
#[derive(Debug)]
pub struct NewsListController {
    client: NewsApiClient,
    source: ListSource,
    items: Vec<NewsRecord>,
    pagination: Option<PaginationMeta>,
    query: ListQuery,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl NewsListController {
    /// Create a controller with its initial query. The caller is expected
    /// to trigger the first load right away (`load(None)` or the
    /// `begin_load` seam); construction itself performs no I/O.
    pub fn new(client: NewsApiClient, source: ListSource, initial_query: ListQuery) -> Self {
        let mut query = initial_query;
        if source == ListSource::Public {
            query.latest = Some(query.latest.unwrap_or(true));
        }
        Self {
            client,
            source,
            items: Vec::new(),
            pagination: None,
            query,
            loading: false,
            error: None,
            issued: 0,
        }
    }

    pub fn items(&self) -> &[NewsRecord] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.pagination.as_ref()
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the error field, leaving items, pagination, and loading alone.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Issue a load: marks loading, clears the error, and returns the
    /// request to run. Supplying a query makes it the stored query once the
    /// load succeeds; `None` reuses the stored query verbatim.
    pub fn begin_load(&mut self, query: Option<ListQuery>) -> LoadRequest {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        let explicit = query.is_some();
        let query = query.unwrap_or_else(|| self.query.clone());
        LoadRequest {
            token: self.issued,
            query,
            explicit,
            source: self.source,
            client: self.client.clone(),
        }
    }

    /// Apply a completion. Stale completions (an older token than the
    /// latest issued) are discarded outright: they neither touch the items
    /// nor clear the loading flag, which belongs to the newest request.
    ///
    /// On failure the normalized message is stored in `error`, existing
    /// items and pagination are left unchanged, and the error is also
    /// returned for callers that want the imperative failure. State is
    /// fully updated before the error propagates.
    pub fn apply(&mut self, completed: CompletedLoad) -> Result<(), ApiError> {
        if completed.token != self.issued {
            debug!(
                token = completed.token,
                issued = self.issued,
                "discarding stale news list completion"
            );
            return Ok(());
        }
        self.loading = false;
        match completed.result {
            Ok(data) => {
                let append = self.source == ListSource::Public
                    && completed.explicit
                    && completed.query.page.is_some_and(|page| page > 1);
                self.merge_items(data.news, append);
                self.pagination = Some(data.pagination);
                if completed.explicit {
                    self.query = completed.query;
                }
                Ok(())
            }
            Err(err) => {
                let message = err.user_message();
                error!(%err, "failed to load news list");
                self.error = Some(message);
                Err(err)
            }
        }
    }

    /// Load with an optional new query. See [`Self::begin_load`] for the
    /// replace/append and stored-query rules.
    pub async fn load(&mut self, query: Option<ListQuery>) -> Result<(), ApiError> {
        let request = self.begin_load(query);
        let completed = request.run().await;
        self.apply(completed)
    }

    /// Re-fetch the stored query verbatim — same page, not a reset to
    /// page 1.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.load(None).await
    }

    /// Merge a patch over the stored query (shallow, last-write-wins per
    /// field) and load the result.
    pub async fn update_query(&mut self, patch: ListQuery) -> Result<(), ApiError> {
        let merged = self.query.merge(&patch);
        self.load(Some(merged)).await
    }

    fn merge_items(&mut self, incoming: Vec<NewsRecord>, append: bool) {
        if !append {
            self.items = incoming;
            return;
        }
        let mut seen: HashSet<i64> = self.items.iter().map(|item| item.id).collect();
        for item in incoming {
            if seen.insert(item.id) {
                self.items.push(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewsStatus;

    fn record(id: i64) -> NewsRecord {
        NewsRecord {
            id,
            title: format!("标题 {}", id),
            title_en: Some(format!("Title {}", id)),
            title_ko: Some(format!("제목 {}", id)),
            content: None,
            translation_en: None,
            translation_ko: None,
            category: None,
            iso_date: "2026-08-20T09:00:00Z".to_string(),
            status: NewsStatus::Publish,
        }
    }

    fn data(ids: &[i64], current: u32, has_next: bool) -> NewsListData {
        NewsListData {
            news: ids.iter().copied().map(record).collect(),
            pagination: PaginationMeta {
                current,
                total_count: 57,
                has_next,
                limit: Some(20),
            },
        }
    }

    fn controller() -> NewsListController {
        NewsListController::new(
            NewsApiClient::with_base_url("http://localhost:9"),
            ListSource::Public,
            ListQuery::new().with_limit(20),
        )
    }

    fn complete(
        controller: &mut NewsListController,
        query: Option<ListQuery>,
        result: Result<NewsListData, ApiError>,
    ) -> Result<(), ApiError> {
        let request = controller.begin_load(query);
        let completed = CompletedLoad {
            token: request.token,
            query: request.query,
            explicit: request.explicit,
            result,
        };
        controller.apply(completed)
    }

    #[test]
    fn public_controller_defaults_latest_true() {
        let controller = controller();
        assert_eq!(controller.query().latest, Some(true));
        assert_eq!(controller.query().limit, Some(20));
    }

    #[test]
    fn admin_controller_applies_no_default_flags() {
        let controller = NewsListController::new(
            NewsApiClient::with_base_url("http://localhost:9"),
            ListSource::Admin,
            ListQuery::new(),
        );
        assert_eq!(controller.query().latest, None);
    }

    #[test]
    fn page_one_load_replaces_items() {
        let mut controller = controller();
        complete(&mut controller, None, Ok(data(&[1, 2, 3], 1, true))).unwrap();
        complete(&mut controller, None, Ok(data(&[4, 5], 1, false))).unwrap();
        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![4, 5]);
        assert!(!controller.is_loading());
    }

    #[test]
    fn page_two_appends_and_dedups_preserving_order() {
        let mut controller = controller();
        complete(&mut controller, None, Ok(data(&[1, 2, 3], 1, true))).unwrap();
        let page2 = ListQuery::new().with_page(2);
        complete(
            &mut controller,
            Some(page2),
            Ok(data(&[3, 4, 2, 5], 2, false)),
        )
        .unwrap();
        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        // Page-1 order kept, novel page-2 items appended in response order.
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(controller.pagination().unwrap().current, 2);
    }

    #[test]
    fn implicit_reload_of_a_page_two_query_replaces() {
        let mut controller = controller();
        complete(
            &mut controller,
            Some(ListQuery::new().with_page(2)),
            Ok(data(&[1, 2], 2, true)),
        )
        .unwrap();
        // refresh(): no query supplied, so no append even though the stored
        // query still says page 2.
        complete(&mut controller, None, Ok(data(&[7, 8], 2, true))).unwrap();
        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn admin_source_never_appends() {
        let mut controller = NewsListController::new(
            NewsApiClient::with_base_url("http://localhost:9"),
            ListSource::Admin,
            ListQuery::new(),
        );
        complete(&mut controller, None, Ok(data(&[1, 2], 1, true))).unwrap();
        complete(
            &mut controller,
            Some(ListQuery::new().with_page(2)),
            Ok(data(&[3, 4], 2, false)),
        )
        .unwrap();
        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn failure_keeps_items_and_stores_message_verbatim() {
        let mut controller = controller();
        complete(&mut controller, None, Ok(data(&[1, 2], 1, true))).unwrap();
        let before_pagination = controller.pagination().cloned();

        let result = complete(
            &mut controller,
            None,
            Err(ApiError::Application {
                message: "service temporarily unavailable".to_string(),
            }),
        );
        assert!(result.is_err());
        assert_eq!(controller.error(), Some("service temporarily unavailable"));
        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(controller.pagination().cloned(), before_pagination);
        assert!(!controller.is_loading());
    }

    #[test]
    fn begin_load_sets_loading_and_clears_error() {
        let mut controller = controller();
        let _ = complete(
            &mut controller,
            None,
            Err(ApiError::Application {
                message: "boom".to_string(),
            }),
        );
        assert!(controller.error().is_some());

        let request = controller.begin_load(None);
        assert!(controller.is_loading());
        assert!(controller.error().is_none());
        drop(request);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut controller = controller();
        let first = controller.begin_load(Some(ListQuery::new().with_category("科技")));
        let second = controller.begin_load(Some(ListQuery::new().with_category("财经")));

        // The newer request completes first and wins.
        controller
            .apply(CompletedLoad {
                token: second.token,
                query: second.query,
                explicit: second.explicit,
                result: Ok(data(&[10, 11], 1, false)),
            })
            .unwrap();
        // The superseded request completes later; it must not overwrite.
        controller
            .apply(CompletedLoad {
                token: first.token,
                query: first.query,
                explicit: first.explicit,
                result: Ok(data(&[99], 1, false)),
            })
            .unwrap();

        let ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(controller.query().category.as_deref(), Some("财经"));
        assert!(!controller.is_loading());
    }

    #[test]
    fn stale_failure_does_not_clobber_loading_or_error() {
        let mut controller = controller();
        let first = controller.begin_load(None);
        let _second = controller.begin_load(None);

        controller
            .apply(CompletedLoad {
                token: first.token,
                query: first.query,
                explicit: first.explicit,
                result: Err(ApiError::Application {
                    message: "stale failure".to_string(),
                }),
            })
            .unwrap();
        // The newest request is still in flight.
        assert!(controller.is_loading());
        assert!(controller.error().is_none());
    }

    #[test]
    fn explicit_query_becomes_stored_query_on_success() {
        let mut controller = controller();
        let query = ListQuery::new().with_category("体育").with_limit(10);
        complete(&mut controller, Some(query.clone()), Ok(data(&[1], 1, false))).unwrap();
        assert_eq!(controller.query(), &query);
    }

    #[test]
    fn failed_explicit_load_keeps_the_old_stored_query() {
        let mut controller = controller();
        complete(
            &mut controller,
            Some(ListQuery::new().with_category("科技")),
            Ok(data(&[1, 2], 1, true)),
        )
        .unwrap();

        let _ = complete(
            &mut controller,
            Some(ListQuery::new().with_category("体育")),
            Err(ApiError::Application {
                message: "boom".to_string(),
            }),
        );
        // A subsequent refresh retries the last query that succeeded.
        assert_eq!(controller.query().category.as_deref(), Some("科技"));
        let retry = controller.begin_load(None);
        assert_eq!(retry.query.category.as_deref(), Some("科技"));
    }

    #[test]
    fn no_duplicate_ids_at_any_observation_point() {
        let mut controller = controller();
        complete(&mut controller, None, Ok(data(&[1, 2, 3], 1, true))).unwrap();
        for page in 2..5u32 {
            complete(
                &mut controller,
                Some(ListQuery::new().with_page(page)),
                Ok(data(&[2, 3, 4, 5], page, true)),
            )
            .unwrap();
            let mut ids: Vec<i64> = controller.items().iter().map(|item| item.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), controller.items().len());
        }
    }
}
