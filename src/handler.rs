mod extract;
mod redirects;
mod templates;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing, Router,
};
use axum_extra::{headers, TypedHeader};
use http::StatusCode;
use tower_http::trace::TraceLayer;

use crate::internationalization::scope;

use self::{
    extract::Locale,
    templates::{AboutTemplate, Alternate, HtmlTemplate, IndexTemplate, NotFoundTemplate},
};

pub fn create_router() -> Router {
    let pages = Router::new()
        .route("/{locale}", routing::get(get_index))
        .route("/{locale}/about", routing::get(get_about))
        .route("/{locale}/{page}", routing::get(get_not_found))
        .route_layer(middleware::from_fn(establish_language));

    let router = Router::new()
        .route("/index.css", routing::get(get_index_css))
        .route("/healthz", routing::get(get_healthz))
        .merge(pages);

    redirects::mount(router).layer(TraceLayer::new_for_http())
}

/// Serves the rest of the request inside a language scope for the `locale`
/// path segment.
async fn establish_language(Locale(language): Locale, request: Request, next: Next) -> Response {
    tracing::debug!(%language, path = %request.uri().path(), "serving localized page");
    scope::scope(language, next.run(request)).await
}

async fn get_index_css() -> (TypedHeader<headers::ContentType>, &'static [u8]) {
    (
        TypedHeader(headers::ContentType::from(mime::TEXT_CSS)),
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/dist/index.css")),
    )
}

async fn get_healthz() -> &'static str {
    "ok"
}

async fn get_index(Locale(language): Locale) -> HtmlTemplate<IndexTemplate> {
    HtmlTemplate(IndexTemplate {
        language,
        alternates: Alternate::all(""),
    })
}

async fn get_about(Locale(language): Locale) -> HtmlTemplate<AboutTemplate> {
    HtmlTemplate(AboutTemplate {
        language,
        alternates: Alternate::all("/about"),
    })
}

async fn get_not_found(Locale(language): Locale) -> (StatusCode, HtmlTemplate<NotFoundTemplate>) {
    (
        StatusCode::NOT_FOUND,
        HtmlTemplate(NotFoundTemplate {
            language,
            alternates: Alternate::all(""),
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use http::{header, Request};
    use tower::ServiceExt;

    use crate::internationalization::{t, Language, TranslationKey};

    use super::*;

    async fn get(uri: &str) -> Response {
        create_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_redirects_temporarily_to_default_locale() {
        let response = get("/").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en-us");
    }

    #[tokio::test]
    async fn regional_locale_renders_base_language() {
        let response = get("/es-ar/about").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body(response).await;
        assert!(html.contains(r#"<html lang="es">"#));
        assert!(html.contains(&t(Language::Es, TranslationKey::Greeting)));
        assert!(html.contains(&t(Language::Es, TranslationKey::AboutHeading)));
        assert!(!html.contains(&t(Language::En, TranslationKey::Greeting)));
    }

    #[tokio::test]
    async fn unknown_page_is_localized_not_found() {
        let response = get("/es-ar/page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body(response).await;
        assert!(html.contains(&t(Language::Es, TranslationKey::Greeting)));
        assert!(html.contains(&t(Language::Es, TranslationKey::NotFoundHeading)));
    }

    #[tokio::test]
    async fn unsupported_locale_falls_back_to_default() {
        let html = body(get("/fr-fr").await).await;

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(&t(Language::En, TranslationKey::HomeHeading)));
    }

    #[tokio::test]
    async fn language_switcher_names_languages_in_their_own_language() {
        let html = body(get("/it").await).await;

        assert!(html.contains(&t(Language::It, TranslationKey::Greeting)));
        for language in Language::ALL {
            assert!(html.contains(&t(language, TranslationKey::LanguageName)));
            assert!(html.contains(&format!(r#"hreflang="{language}""#)));
        }
    }

    #[tokio::test]
    async fn concurrent_requests_keep_their_own_language() {
        let requests = ["/en-us", "/es", "/it-it", "/es-mx", "/it", "/en"]
            .into_iter()
            .map(|uri| tokio::spawn(async move { (uri, body(get(uri).await).await) }))
            .collect::<Vec<_>>();

        for request in requests {
            let (uri, html) = request.await.unwrap();
            let language = Language::resolve(uri.trim_start_matches('/'));
            assert!(
                html.contains(&t(language, TranslationKey::HomeHeading)),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn static_routes_take_precedence_over_locale() {
        let response = get("/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "ok");

        let response = get("/index.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }
}
