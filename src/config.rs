use eyre::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use url::Url;

use crate::internationalization::Language;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::try_from_env().expect("failed to read config from environment variables")
});

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_public_url() -> Url {
    Url::parse("http://localhost:3000/").expect("failed to parse default public URL")
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_public_url")]
    pub public_url: Url,
}

impl Config {
    pub fn try_from_env() -> eyre::Result<Self> {
        envy::from_env().context("failed to read config from environment variables")
    }

    /// Absolute URL of the `language` version of the page at `path`.
    pub fn localized_url(&self, language: Language, path: &str) -> String {
        format!(
            "{}/{}{}",
            self.public_url.as_str().trim_end_matches('/'),
            language.code(),
            path
        )
    }
}
