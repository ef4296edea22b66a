use crate::internationalization::{self, Language};

/// `{{ language|t("text-id") }}`
pub fn t(language: &Language, _: &dyn askama::Values, text_id: &str) -> askama::Result<String> {
    Ok(internationalization::t_id(*language, text_id))
}

/// `{{ "text-id"|tr }}`, in the language of the request being served.
pub fn tr(text_id: &str, _: &dyn askama::Values) -> askama::Result<String> {
    Ok(internationalization::tr_id(text_id))
}
