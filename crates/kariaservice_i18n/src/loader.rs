//! Catalog sources and startup loading

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogFormat};
use crate::locale::Locale;
use crate::LoadError;

/// Where per-locale catalog documents come from.
pub trait CatalogSource {
    /// Fetch the raw document for one locale.
    fn fetch(&self, locale: &Locale) -> Result<String, LoadError>;

    /// Encoding of the fetched documents.
    fn format(&self) -> CatalogFormat {
        CatalogFormat::Json
    }
}

/// Catalogs on disk as `{root}/{code}.{ext}`.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
    format: CatalogFormat,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: CatalogFormat::Json,
        }
    }

    pub fn with_format(mut self, format: CatalogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path_for(&self, locale: &Locale) -> PathBuf {
        self.root.join(format!("{}.{}", locale, self.format.extension()))
    }
}

impl CatalogSource for DirSource {
    fn fetch(&self, locale: &Locale) -> Result<String, LoadError> {
        Ok(fs::read_to_string(self.path_for(locale))?)
    }

    fn format(&self) -> CatalogFormat {
        self.format
    }
}

/// Catalog documents held in memory, keyed by locale.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: HashMap<Locale, String>,
    format: CatalogFormat,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: impl Into<Locale>, document: impl Into<String>) {
        self.documents.insert(locale.into(), document.into());
    }

    pub fn with(mut self, locale: impl Into<Locale>, document: impl Into<String>) -> Self {
        self.insert(locale, document);
        self
    }

    pub fn with_format(mut self, format: CatalogFormat) -> Self {
        self.format = format;
        self
    }
}

impl CatalogSource for MemorySource {
    fn fetch(&self, locale: &Locale) -> Result<String, LoadError> {
        self.documents
            .get(locale)
            .cloned()
            .ok_or_else(|| LoadError::Missing(locale.to_string()))
    }

    fn format(&self) -> CatalogFormat {
        self.format
    }
}

/// Catalogs served over HTTP as `{base_url}/{code}.json`.
#[cfg(feature = "network")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "network")]
impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn url_for(&self, locale: &Locale) -> String {
        format!("{}/{}.json", self.base_url, locale)
    }
}

#[cfg(feature = "network")]
impl CatalogSource for HttpSource {
    fn fetch(&self, locale: &Locale) -> Result<String, LoadError> {
        let response = self
            .client
            .get(self.url_for(locale))
            .send()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        response
            .text()
            .map_err(|e| LoadError::Transport(e.to_string()))
    }
}

/// Fetch and parse one catalog per locale.
///
/// A locale whose fetch or parse fails is logged and left out of the result;
/// nothing here is fatal and nothing is retried.
pub fn load_catalogs<'a>(
    source: &dyn CatalogSource,
    locales: impl IntoIterator<Item = &'a Locale>,
) -> HashMap<Locale, Catalog> {
    let format = source.format();
    let mut out = HashMap::new();
    for locale in locales {
        let document = match source.fetch(locale) {
            Ok(document) => document,
            Err(e) => {
                warn!("catalog for `{}` unavailable: {}", locale, e);
                continue;
            }
        };
        match Catalog::parse(&document, format) {
            Ok(catalog) => {
                debug!("loaded catalog for `{}`", locale);
                out.insert(locale.clone(), catalog);
            }
            Err(e) => warn!("catalog for `{}` rejected: {}", locale, e),
        }
    }
    out
}
