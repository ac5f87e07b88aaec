//! Per-locale message bundles for all user-facing strings.
//!
//! Templates use `{count}` and `{error}` placeholders, substituted via
//! [`format_with_count`] / [`format_with_error`].

use super::Locale;

#[derive(Debug, Clone, Copy)]
pub struct HomeMessages {
    pub heading: &'static str,
    /// `{count}` = total article count.
    pub total_count: &'static str,
    pub loading: &'static str,
    pub load_more: &'static str,
    pub load_more_loading: &'static str,
    pub no_more: &'static str,
    pub no_data: &'static str,
    /// `{error}` = normalized error message.
    pub load_failed: &'static str,
    pub reload: &'static str,
    pub category_unknown: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DetailMessages {
    pub loading: &'static str,
    pub back: &'static str,
    pub back_to_list: &'static str,
    pub not_found: &'static str,
    pub category_unknown: &'static str,
    pub no_content: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TimeMessages {
    pub just_now: &'static str,
    /// `{count}` = whole elapsed hours.
    pub hours_ago: &'static str,
    /// `{count}` = whole elapsed days.
    pub days_ago: &'static str,
}

/// All strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub language: &'static str,
    pub home: HomeMessages,
    pub detail: DetailMessages,
    pub time: TimeMessages,
}

static EN: Messages = Messages {
    language: "Language",
    home: HomeMessages {
        heading: "Latest News",
        total_count: "Total {count} articles",
        loading: "Loading...",
        load_more: "Load more news",
        load_more_loading: "Loading...",
        no_more: "No more content",
        no_data: "No news available",
        load_failed: "Failed to load: {error}",
        reload: "Reload",
        category_unknown: "Uncategorized",
    },
    detail: DetailMessages {
        loading: "Loading...",
        back: "Back",
        back_to_list: "← Back to news list",
        not_found: "The news item does not exist or has been removed.",
        category_unknown: "Uncategorized",
        no_content: "No content available",
    },
    time: TimeMessages {
        just_now: "Just now",
        hours_ago: "{count} hours ago",
        days_ago: "{count} days ago",
    },
};

static ZH_CN: Messages = Messages {
    language: "语言",
    home: HomeMessages {
        heading: "最新新闻",
        total_count: "共 {count} 条新闻",
        loading: "加载中...",
        load_more: "加载更多新闻",
        load_more_loading: "加载中...",
        no_more: "没有更多内容",
        no_data: "暂无新闻数据",
        load_failed: "加载失败: {error}",
        reload: "重新加载",
        category_unknown: "未分类",
    },
    detail: DetailMessages {
        loading: "加载中...",
        back: "返回",
        back_to_list: "← 返回新闻列表",
        not_found: "新闻不存在或已下线",
        category_unknown: "未分类",
        no_content: "暂无新闻内容",
    },
    time: TimeMessages {
        just_now: "刚刚",
        hours_ago: "{count}小时前",
        days_ago: "{count}天前",
    },
};

static KO: Messages = Messages {
    language: "언어",
    home: HomeMessages {
        heading: "최신 뉴스",
        total_count: "총 {count}건의 기사",
        loading: "불러오는 중...",
        load_more: "더 많은 뉴스 보기",
        load_more_loading: "불러오는 중...",
        no_more: "더 이상 콘텐츠가 없습니다",
        no_data: "표시할 뉴스가 없습니다",
        load_failed: "로드 실패: {error}",
        reload: "새로고침",
        category_unknown: "분류 없음",
    },
    detail: DetailMessages {
        loading: "불러오는 중...",
        back: "뒤로",
        back_to_list: "← 뉴스 목록으로 돌아가기",
        not_found: "존재하지 않거나 삭제된 뉴스입니다.",
        category_unknown: "분류 없음",
        no_content: "표시할 뉴스 내용이 없습니다",
    },
    time: TimeMessages {
        just_now: "방금 전",
        hours_ago: "{count}시간 전",
        days_ago: "{count}일 전",
    },
};

/// Message bundle for a locale.
pub fn messages(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::ZhCn => &ZH_CN,
        Locale::Ko => &KO,
    }
}

/// Substitute `{count}` in a template.
pub fn format_with_count(template: &str, count: i64) -> String {
    template.replace("{count}", &count.to_string())
}

/// Substitute `{error}` in a template.
pub fn format_with_error(template: &str, error: &str) -> String {
    template.replace("{error}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_substitution() {
        assert_eq!(
            format_with_count(EN.home.total_count, 57),
            "Total 57 articles"
        );
        assert_eq!(format_with_count(ZH_CN.time.hours_ago, 3), "3小时前");
    }

    #[test]
    fn error_substitution() {
        assert_eq!(
            format_with_error(KO.home.load_failed, "timeout"),
            "로드 실패: timeout"
        );
    }

    #[test]
    fn every_locale_has_a_bundle() {
        for locale in Locale::ALL {
            assert!(!messages(locale).home.heading.is_empty());
        }
    }
}
