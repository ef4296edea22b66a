use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

use crate::{config::CONFIG, internationalization::Language};

mod filters;

/// Link to the same page in one of the supported languages.
pub struct Alternate {
    pub language: Language,
    pub path: String,
    pub href: String,
}

impl Alternate {
    /// One entry per supported language for the page at `page` (`""`, `"/about"`).
    pub fn all(page: &str) -> Vec<Self> {
        Language::ALL
            .into_iter()
            .map(|language| Self {
                language,
                path: format!("/{}{}", language.code(), page),
                href: CONFIG.localized_url(language, page),
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub language: Language,
    pub alternates: Vec<Alternate>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub language: Language,
    pub alternates: Vec<Alternate>,
}

#[derive(Template)]
#[template(path = "not-found.html")]
pub struct NotFoundTemplate {
    pub language: Language,
    pub alternates: Vec<Alternate>,
}

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(error) => {
                tracing::error!(?error, "failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
            }
        }
    }
}
