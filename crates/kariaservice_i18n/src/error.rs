use thiserror::Error;

use crate::catalog::CatalogParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    CatalogParse(#[from] CatalogParseError),

    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to fetch one locale's catalog document.
///
/// Never fatal: the loader logs it and the locale ends up without a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog not readable: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog request returned status {0}")]
    Status(u16),

    #[error("catalog transport error: {0}")]
    Transport(String),

    #[error("no catalog document for locale `{0}`")]
    Missing(String),
}
