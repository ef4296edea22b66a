use fluent::{concurrent::FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use thiserror::Error;

use super::{Language, TranslationKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslationError {
    #[error("no `{key}` translation in the `{language}` dictionary")]
    MissingTranslation {
        language: Language,
        key: TranslationKey,
    },
}

static DICTIONARIES: Lazy<[Dictionary; 3]> = Lazy::new(|| {
    Language::ALL.map(|language| Dictionary::parse(language, source(language).to_string()))
});

fn source(language: Language) -> &'static str {
    match language {
        Language::En => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en/main.ftl")),
        Language::Es => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/es/main.ftl")),
        Language::It => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/it/main.ftl")),
    }
}

/// Read-only key to text mapping for a single language.
pub struct Dictionary {
    language: Language,
    bundle: FluentBundle<FluentResource>,
}

impl Dictionary {
    /// Builds a dictionary from Fluent source. Entries that fail to parse are
    /// logged and skipped; the remaining messages are still served.
    pub fn parse(language: Language, source: String) -> Self {
        let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, errors)| {
            tracing::error!(%language, ?errors, "failed to parse dictionary");
            resource
        });

        let mut bundle = FluentBundle::new_concurrent(vec![language.identifier()]);
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::error!(%language, ?errors, "failed to add dictionary messages");
        }

        Self { language, bundle }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn contains(&self, key: TranslationKey) -> bool {
        self.bundle.has_message(key.as_str())
    }

    pub fn lookup(&self, key: TranslationKey) -> Result<String, TranslationError> {
        let missing = || TranslationError::MissingTranslation {
            language: self.language,
            key,
        };

        let message = self.bundle.get_message(key.as_str()).ok_or_else(missing)?;
        let pattern = message.value().ok_or_else(missing)?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(language = %self.language, %key, ?errors, "failed to format translation");
        }
        Ok(value.into_owned())
    }
}

pub fn dictionary(language: Language) -> &'static Dictionary {
    &DICTIONARIES[language.index()]
}

pub fn lookup(language: Language, key: TranslationKey) -> Result<String, TranslationError> {
    dictionary(language).lookup(key)
}

/// Builds every dictionary up front so parse errors show up at startup.
pub fn preload() {
    for dictionary in DICTIONARIES.iter() {
        let messages = TranslationKey::ALL
            .into_iter()
            .filter(|key| dictionary.contains(*key))
            .count();
        tracing::info!(language = %dictionary.language(), messages, "loaded dictionary");
    }
}
