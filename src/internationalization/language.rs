use std::{fmt, str::FromStr};

use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// A language the site has a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    It,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    pub const DEFAULT: Language = Language::En;

    /// Supported languages, in the order their dictionaries are stored.
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::It];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::It => "it",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Exact match against the supported codes. Case-sensitive.
    pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }

    /// Resolves a BCP-47-like tag such as `es-MX` taken from the request path.
    ///
    /// Only the primary subtag (the text before the first `-`) is considered,
    /// and it is compared as-is: `EN-us` is not recognized and falls back to
    /// [`Language::DEFAULT`] like any other unsupported tag.
    pub fn resolve(raw: &str) -> Self {
        let primary = raw.split_once('-').map_or(raw, |(primary, _)| primary);
        Self::from_code(primary).unwrap_or_else(|error| {
            tracing::debug!(%error, raw, "falling back to default language");
            Self::DEFAULT
        })
    }

    pub fn identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
