//! Kariaservice site localization (i18n)
//!
//! Goals:
//! - One owned [`LocaleStore`] that knows the active locale and every loaded catalog
//! - Projection of a catalog onto a fixed table of named page regions
//! - Catalog sources behind a small trait:
//!   - `DirSource`: `{root}/{code}.json` on disk (the site layout)
//!   - `MemorySource`: in-memory documents
//!   - `HttpSource`: `GET {base}/{code}.json` (optional `network` feature)
//! - A persisted locale preference and an explicit change-listener list

mod bindings;
mod catalog;
mod config;
mod document;
mod error;
mod loader;
mod locale;
mod preferences;
mod projector;
mod selector;
mod store;

pub use bindings::{bindings_for_section, RegionBinding, Update, BINDINGS, SECTIONS};
pub use catalog::{Catalog, CatalogFormat, CatalogParseError};
pub use config::{I18nConfig, ShortLabelPolicy};
pub use document::{Document, MemoryDocument, NavMetrics, Node, Viewport, Write};
pub use error::{I18nError, LoadError};
#[cfg(feature = "network")]
pub use loader::HttpSource;
pub use loader::{load_catalogs, CatalogSource, DirSource, MemorySource};
pub use locale::{normalize_locale, Locale, LocaleInfo};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use projector::{prefers_short_labels, ProjectionReport, Projector};
pub use selector::{render_selector, sync_selector};
pub use store::{LanguageChanged, ListenerId, LocaleStore};
