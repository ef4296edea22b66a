//! Per-request language, readable by anything rendered while serving the
//! request without threading it through every template.
//!
//! The value lives in a task-local slot, so it belongs to the future serving a
//! request and is never visible to another request's task.

use std::future::Future;

use super::Language;

tokio::task_local! {
    static LANGUAGE: Language;
}

/// Runs `future` with `language` as the current language.
pub async fn scope<F>(language: Language, future: F) -> F::Output
where
    F: Future,
{
    LANGUAGE.scope(language, future).await
}

/// Runs `f` with `language` as the current language. Nested calls override
/// the language for their own extent only.
pub fn sync_scope<R>(language: Language, f: impl FnOnce() -> R) -> R {
    LANGUAGE.sync_scope(language, f)
}

/// The innermost scope's language, or [`Language::DEFAULT`] outside any scope.
pub fn current() -> Language {
    LANGUAGE.try_with(|language| *language).unwrap_or_else(|_| {
        tracing::debug!("no language scope established, using default");
        Language::DEFAULT
    })
}
