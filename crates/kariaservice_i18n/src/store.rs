use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::bindings::BINDINGS;
use crate::catalog::Catalog;
use crate::config::I18nConfig;
use crate::document::Document;
use crate::loader::{load_catalogs, CatalogSource};
use crate::locale::Locale;
use crate::preferences::PreferenceStore;
use crate::projector::{ProjectionReport, Projector};
use crate::selector::sync_selector;

/// Payload delivered to listeners after a locale switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageChanged {
    pub language: Locale,
}

/// Handle returned by [`LocaleStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&LanguageChanged)>;

/// Owns the active locale, the loaded catalogs, and the page they project onto.
///
/// All mutation goes through `&mut self`, so startup loading and a locale
/// switch can never interleave. The stored preference is resolved as soon as
/// the store is created; a [`set_locale`](Self::set_locale) issued before
/// [`initialize`](Self::initialize) is compared against it, persisted, and
/// `initialize` then resolves to it.
pub struct LocaleStore<D, P> {
    config: I18nConfig,
    active: Locale,
    catalogs: HashMap<Locale, Catalog>,
    document: D,
    preferences: P,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<D, P> fmt::Debug for LocaleStore<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut loaded: Vec<&str> = self.catalogs.keys().map(Locale::as_str).collect();
        loaded.sort_unstable();
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .field("catalogs", &loaded)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<D: Document, P: PreferenceStore> LocaleStore<D, P> {
    /// Create a store on the stored (or default) locale with no catalogs loaded.
    pub fn new(config: I18nConfig, document: D, preferences: P) -> Self {
        let stored = preferences.load(&config.preference_key);
        let active = config.resolve_locale(stored.as_deref());
        Self {
            config,
            active,
            catalogs: HashMap::new(),
            document,
            preferences,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Resolve the active locale from the stored preference, load every
    /// supported catalog, and project (installing the language selector).
    ///
    /// Locales whose catalog fails to load stay usable: every lookup against
    /// them falls back to the key.
    pub fn initialize(&mut self, source: &dyn CatalogSource) -> ProjectionReport {
        let stored = self.preferences.load(&self.config.preference_key);
        self.active = self.config.resolve_locale(stored.as_deref());
        self.catalogs = load_catalogs(source, self.config.supported());
        info!(
            "i18n initialized: locale `{}`, {}/{} catalogs loaded",
            self.active,
            self.catalogs.len(),
            self.config.locales.len()
        );
        self.project()
    }

    /// Switch the active locale.
    ///
    /// Returns `false` (and does nothing) when `code` is already active or is
    /// not supported. Otherwise the choice is persisted, the page re-projected,
    /// and then listeners are notified, so they always see the new content.
    pub fn set_locale(&mut self, code: &str) -> bool {
        let locale = Locale::new(code);
        if locale == self.active {
            return false;
        }
        if !self.config.is_supported(locale.as_str()) {
            warn!("LocaleStore::set_locale: unsupported locale `{}`", code);
            return false;
        }
        debug!("LocaleStore::set_locale: {} -> {}", self.active, locale);
        self.active = locale;
        self.preferences
            .store(&self.config.preference_key, self.active.as_str());
        self.project();

        let event = LanguageChanged {
            language: self.active.clone(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        true
    }

    /// Re-project the active locale (e.g. after a resize changed the viewport).
    pub fn refresh(&mut self) -> ProjectionReport {
        self.project()
    }

    /// Resolve a dotted key against the active locale.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(&self.active, key)
    }

    /// Resolve a dotted key against a specific locale.
    ///
    /// Returns `key` itself when the locale has no catalog, a segment is
    /// missing, or the value is not a string.
    pub fn translate_in<'a>(&'a self, key: &'a str, locale: &str) -> &'a str {
        self.lookup(&Locale::new(locale), key)
    }

    fn lookup<'a>(&'a self, locale: &Locale, key: &'a str) -> &'a str {
        self.catalogs
            .get(locale)
            .and_then(|catalog| catalog.get_str(key))
            .unwrap_or(key)
    }

    /// Register a listener for locale switches.
    pub fn subscribe(&mut self, listener: impl FnMut(&LanguageChanged) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn locale(&self) -> &Locale {
        &self.active
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    pub fn has_catalog(&self, locale: &str) -> bool {
        self.catalogs.contains_key(&Locale::new(locale))
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    fn project(&mut self) -> ProjectionReport {
        sync_selector(&mut self.document, &self.config.locales, &self.active);
        let Some(catalog) = self.catalogs.get(&self.active) else {
            debug!("projection: no catalog for `{}`, page left as is", self.active);
            return ProjectionReport::default();
        };
        let is_default = self.active == self.config.default_locale;
        Projector::new(BINDINGS, self.config.navigation).project(
            catalog,
            is_default,
            &mut self.document,
        )
    }
}
