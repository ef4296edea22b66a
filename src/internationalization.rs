pub mod dictionary;
mod key;
mod language;
pub mod scope;

pub use self::{key::TranslationKey, language::Language};

/// Text for `key` in `language`. A missing translation renders as `t(<key>)`.
pub fn t(language: Language, key: TranslationKey) -> String {
    dictionary::lookup(language, key).unwrap_or_else(|error| {
        tracing::warn!(%error, "rendering placeholder for missing translation");
        placeholder(key.as_str())
    })
}

/// Like [`t`], using the language of the enclosing [`scope`].
pub fn tr(key: TranslationKey) -> String {
    t(scope::current(), key)
}

/// Resolves a message id coming from a template.
pub fn t_id(language: Language, text_id: &str) -> String {
    with_key(text_id, |key| t(language, key))
}

/// Like [`t_id`], using the language of the enclosing [`scope`].
pub fn tr_id(text_id: &str) -> String {
    with_key(text_id, tr)
}

fn with_key(text_id: &str, render: impl FnOnce(TranslationKey) -> String) -> String {
    match text_id.parse() {
        Ok(key) => render(key),
        Err(error) => {
            tracing::warn!(%error, "rendering placeholder for unknown key");
            placeholder(text_id)
        }
    }
}

fn placeholder(text_id: &str) -> String {
    format!("t({})", text_id)
}
