//! Locale-segment path resolution.
//!
//! Every page path is namespaced by a locale segment (`/{locale}/...`).
//! Paths without a recognized locale are redirected to the default locale's
//! equivalent path; asset, API, and framework-internal paths pass through
//! untouched. The binary uses this to resolve deep-link path arguments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::locale::Locale;

/// A dot-suffixed final segment marks a static asset request.
static ASSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/]+$").expect("invalid asset pattern"));

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The news list.
    Home,
    /// One article by id.
    Detail(i64),
}

/// A page together with the locale it is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub locale: Locale,
    pub route: Route,
}

/// Outcome of resolving a raw path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Asset/API/framework-internal path: not ours, leave it alone.
    Pass,
    /// Already carries a recognized locale segment.
    Stay(ResolvedRoute),
    /// No locale segment: redirect to the default locale's path.
    Redirect(String),
}

/// Resolve a path per the locale-routing rules.
pub fn resolve(path: &str) -> Resolution {
    if path.starts_with("/api")
        || path.starts_with("/_next")
        || path.starts_with("/favicon")
        || ASSET_RE.is_match(path)
    {
        return Resolution::Pass;
    }

    for locale in Locale::ALL {
        let prefix = format!("/{}", locale.as_str());
        if path == prefix {
            return Resolution::Stay(ResolvedRoute {
                locale,
                route: Route::Home,
            });
        }
        if let Some(rest) = path.strip_prefix(&prefix) {
            if rest.starts_with('/') {
                return Resolution::Stay(ResolvedRoute {
                    locale,
                    route: parse_route(rest),
                });
            }
        }
    }

    Resolution::Redirect(format!("/{}{}", Locale::default().as_str(), path))
}

/// Resolve a path all the way to a route, following at most one redirect.
/// Anything unresolvable lands on the default-locale home.
pub fn resolve_to_route(path: &str) -> ResolvedRoute {
    match resolve(path) {
        Resolution::Stay(resolved) => resolved,
        Resolution::Redirect(redirected) => match resolve(&redirected) {
            Resolution::Stay(resolved) => resolved,
            _ => ResolvedRoute {
                locale: Locale::default(),
                route: Route::Home,
            },
        },
        Resolution::Pass => ResolvedRoute {
            locale: Locale::default(),
            route: Route::Home,
        },
    }
}

fn parse_route(rest: &str) -> Route {
    let mut segments = rest.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next(), segments.next()) {
        (Some("news"), Some(id), None) => match id.parse::<i64>() {
            Ok(id) => Route::Detail(id),
            Err(_) => Route::Home,
        },
        _ => Route::Home,
    }
}
