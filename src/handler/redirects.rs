use axum::{response::Redirect, routing, Router};

pub struct RedirectRule {
    pub source: &'static str,
    pub destination: &'static str,
    /// Temporary by default so that changing the default language is not
    /// pinned by client caches.
    pub permanent: bool,
}

pub static REDIRECTS: &[RedirectRule] = &[RedirectRule {
    source: "/",
    destination: "/en-us",
    permanent: false,
}];

impl RedirectRule {
    pub fn redirect(&self) -> Redirect {
        if self.permanent {
            Redirect::permanent(self.destination)
        } else {
            Redirect::temporary(self.destination)
        }
    }
}

/// Adds a route answering every rule's source path with its redirect.
pub fn mount(router: Router) -> Router {
    REDIRECTS.iter().fold(router, |router, rule| {
        router.route(
            rule.source,
            routing::get(move || async move { rule.redirect() }),
        )
    })
}
