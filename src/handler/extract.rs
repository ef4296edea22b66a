use std::{collections::HashMap, convert::Infallible};

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::internationalization::Language;

/// Language named by the `locale` path segment, or the default when the
/// segment is missing or unsupported.
pub struct Locale(pub Language);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let language = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(params)| params.get("locale").map(|raw| Language::resolve(raw)))
            .unwrap_or_default();
        Ok(Self(language))
    }
}
