use std::{fmt, str::FromStr};

use thiserror::Error;

/// Identifier of a piece of displayable text. The string form is the Fluent
/// message id used in every `locales/<code>/main.ftl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    SiteTitle,
    Greeting,
    LanguageName,
    LanguageSwitcher,
    NavHome,
    NavAbout,
    HomeHeading,
    HomeBody,
    AboutHeading,
    AboutBody,
    NotFoundHeading,
    NotFoundBody,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown translation key `{0}`")]
pub struct UnknownKey(pub String);

impl TranslationKey {
    pub const ALL: [TranslationKey; 12] = [
        Self::SiteTitle,
        Self::Greeting,
        Self::LanguageName,
        Self::LanguageSwitcher,
        Self::NavHome,
        Self::NavAbout,
        Self::HomeHeading,
        Self::HomeBody,
        Self::AboutHeading,
        Self::AboutBody,
        Self::NotFoundHeading,
        Self::NotFoundBody,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiteTitle => "site-title",
            Self::Greeting => "greeting",
            Self::LanguageName => "language-name",
            Self::LanguageSwitcher => "language-switcher",
            Self::NavHome => "nav-home",
            Self::NavAbout => "nav-about",
            Self::HomeHeading => "home-heading",
            Self::HomeBody => "home-body",
            Self::AboutHeading => "about-heading",
            Self::AboutBody => "about-body",
            Self::NotFoundHeading => "not-found-heading",
            Self::NotFoundBody => "not-found-body",
        }
    }
}

impl FromStr for TranslationKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
