//! List query parameters for the paginated news endpoints.

/// Filter parameters for a news list fetch. All fields are optional; `None`
/// means "not sent" and the backend applies its own defaults.
///
/// Only one query's results are held at a time — this acts as the conceptual
/// cache key for the list state, not as a multi-key cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub hot: Option<bool>,
    pub latest: Option<bool>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_hot(mut self, hot: bool) -> Self {
        self.hot = Some(hot);
        self
    }

    pub fn with_latest(mut self, latest: bool) -> Self {
        self.latest = Some(latest);
        self
    }

    /// Shallow last-write-wins merge: every field the patch sets overrides
    /// the stored value, every field it leaves unset is kept.
    pub fn merge(&self, patch: &ListQuery) -> ListQuery {
        ListQuery {
            page: patch.page.or(self.page),
            limit: patch.limit.or(self.limit),
            category: patch.category.clone().or_else(|| self.category.clone()),
            hot: patch.hot.or(self.hot),
            latest: patch.latest.or(self.latest),
        }
    }

    /// Query-string pairs, omitting unset fields.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(hot) = self.hot {
            pairs.push(("hot", hot.to_string()));
        }
        if let Some(latest) = self.latest {
            pairs.push(("latest", latest.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overrides_set_fields_and_keeps_unset_ones() {
        let base = ListQuery::new().with_limit(20).with_latest(true);
        let merged = base.merge(&ListQuery::new().with_page(2));
        assert_eq!(merged.page, Some(2));
        assert_eq!(merged.limit, Some(20));
        assert_eq!(merged.latest, Some(true));
        assert_eq!(merged.category, None);
    }

    #[test]
    fn merge_is_last_write_wins_per_field() {
        let base = ListQuery::new().with_category("科技").with_page(3);
        let merged = base.merge(&ListQuery::new().with_category("财经"));
        assert_eq!(merged.category.as_deref(), Some("财经"));
        assert_eq!(merged.page, Some(3));
    }

    #[test]
    fn to_pairs_omits_unset_fields() {
        let query = ListQuery::new().with_page(2).with_latest(true);
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "2".to_string()), ("latest", "true".to_string())]
        );
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert!(ListQuery::new().to_pairs().is_empty());
    }
}
