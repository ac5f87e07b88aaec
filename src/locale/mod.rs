//! Locales, message bundles, and display projection.
//!
//! The locale set is a closed enumeration; adding a language is a
//! compile-time-checked change (the selectors in [`project`] match on the
//! enum exhaustively). Projection derives a localized, display-ready view of
//! a record without ever mutating it.

mod messages;
mod project;
mod time;

pub use messages::{format_with_count, format_with_error, messages, Messages};
pub use project::{
    category_style, is_displayable, localized_content, localized_title, plain_text_preview,
    CategoryStyle,
};
pub use time::{absolute_time, relative_time};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
    Ko,
}

impl Locale {
    /// Every supported locale, in cycling order for the UI.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::ZhCn, Locale::Ko];

    /// The locale tag as it appears in paths and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
            Locale::Ko => "ko",
        }
    }

    /// Parse a locale tag. Unrecognized tags yield `None`; callers fall back
    /// to the default locale.
    pub fn parse(tag: &str) -> Option<Locale> {
        match tag {
            "en" => Some(Locale::En),
            "zh-CN" => Some(Locale::ZhCn),
            "ko" => Some(Locale::Ko),
            _ => None,
        }
    }

    /// Human-readable name, in the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "简体中文",
            Locale::Ko => "한국어",
        }
    }

    /// Next locale in cycling order (used by the locale toggle key).
    pub fn next(self) -> Locale {
        match self {
            Locale::En => Locale::ZhCn,
            Locale::ZhCn => Locale::Ko,
            Locale::Ko => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_locale() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.as_str()), Some(locale));
        }
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse("zh-cn"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn next_cycles_through_all_locales() {
        assert_eq!(Locale::En.next(), Locale::ZhCn);
        assert_eq!(Locale::ZhCn.next(), Locale::Ko);
        assert_eq!(Locale::Ko.next(), Locale::En);
    }

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
