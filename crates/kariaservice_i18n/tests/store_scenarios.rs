use kariaservice_i18n::{
    bindings_for_section, CatalogSource, DirSource, Document, FilePreferences, I18nConfig,
    LanguageChanged, LoadError, Locale, LocaleStore, MemoryDocument, MemoryPreferences,
    MemorySource, Node, PreferenceStore, Update, Viewport, BINDINGS,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

const FR: &str = include_str!("../../../resource/lang/fr.json");
const EN: &str = include_str!("../../../resource/lang/en.json");
const SITE: &str = include_str!("../../../resource/site.toml");

const HOME: &str = r##"a[href="#accueil"]"##;
const ABOUT: &str = r##"a[href="#apropos"]"##;

fn site_source() -> MemorySource {
    MemorySource::new().with("fr", FR).with("en", EN)
}

fn page(width: f32) -> MemoryDocument {
    MemoryDocument::skeleton(BINDINGS, 4, Viewport::new(width))
}

/// A source whose every fetch fails, like a site served without `lang/`.
struct Offline;

impl CatalogSource for Offline {
    fn fetch(&self, _locale: &Locale) -> Result<String, LoadError> {
        Err(LoadError::Status(404))
    }
}

#[test]
fn initialize_then_switch_to_english() {
    let source = MemorySource::new()
        .with("fr", r#"{"navigation": {"home": "Accueil"}}"#)
        .with("en", r#"{"navigation": {"home": "Home"}}"#);
    let doc = MemoryDocument::new(Viewport::new(1440.0)).with(HOME, Node::text("…"));
    let mut store = LocaleStore::new(I18nConfig::default(), doc, MemoryPreferences::new());

    store.initialize(&source);
    assert_eq!(store.document().text(HOME, 0), Some("Accueil"));

    assert!(store.set_locale("en"));
    assert_eq!(store.document().text(HOME, 0), Some("Home"));
    assert_eq!(store.translate("nav.missing"), "nav.missing");
}

#[test]
fn preference_survives_a_fresh_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("prefs.json");
    let config = I18nConfig::from_toml_str(SITE).unwrap();

    let mut first = LocaleStore::new(
        config.clone(),
        page(1440.0),
        FilePreferences::new(&prefs_path),
    );
    first.initialize(&site_source());
    assert_eq!(first.locale().as_str(), "fr");
    first.set_locale("en");
    assert_eq!(
        first.preferences().load("kariaservice-lang").as_deref(),
        Some("en")
    );

    let mut second = LocaleStore::new(config, page(1440.0), FilePreferences::new(&prefs_path));
    second.initialize(&site_source());
    assert_eq!(second.locale().as_str(), "en");
    assert_eq!(
        second.document().text(".hero__description", 0),
        Some("Integrated solutions in real estate, logistics and natural resources.")
    );
}

#[test]
fn unsupported_stored_preference_falls_back_to_default() {
    let prefs = MemoryPreferences::new().with("kariaservice-lang", "de");
    let mut store = LocaleStore::new(I18nConfig::default(), page(1440.0), prefs);
    store.initialize(&site_source());
    assert_eq!(store.locale().as_str(), "fr");
}

#[test]
fn full_projection_writes_every_slot() {
    let mut store = LocaleStore::new(I18nConfig::default(), page(1440.0), MemoryPreferences::new());
    let report = store.initialize(&site_source());
    assert_eq!(report.skipped_missing_key, 0);
    assert_eq!(report.skipped_missing_node, 0);

    let doc = store.document();
    assert_eq!(doc.text("#services .section__title", 0), Some("Nos services"));
    assert_eq!(doc.text(".stat__label", 2), Some("Clients satisfaits"));
    assert_eq!(doc.text("#service option", 4), Some("Autre"));
    assert_eq!(doc.text(".footer__legal a", 1), Some("Politique de confidentialité"));
    assert_eq!(
        doc.text(".testimonial-card:nth-child(2) .testimonial__quote p", 0),
        Some("\"Des délais tenus et une équipe réactive.\"")
    );
    assert_eq!(
        doc.node(".hero__title", 0).unwrap().markup.as_deref(),
        Some(r#"Bâtir <span class="highlight">l'avenir</span> avec vous"#)
    );
    assert_eq!(
        doc.node(r#"meta[name="description"]"#, 0).unwrap().attributes["content"],
        "Kariaservice accompagne vos projets en immobilier, logistique et exploitation minière et pétrolière."
    );
}

#[test]
fn missing_section_leaves_prior_text() {
    let fr_without_footer = r#"{"navigation": {"home": "Accueil"}}"#;
    let mut store = LocaleStore::new(I18nConfig::default(), page(1440.0), MemoryPreferences::new());
    store.initialize(&site_source());
    let before: Vec<String> = bindings_for_section("footer")
        .map(|b| store.document().text(b.selector, b.index).unwrap().to_string())
        .collect();

    // Same page, reloaded with a French catalog that lacks the footer entirely.
    let source = MemorySource::new().with("fr", fr_without_footer).with("en", EN);
    let doc = store.document().clone();
    let mut store = LocaleStore::new(I18nConfig::default(), doc, MemoryPreferences::new());
    store.initialize(&source);

    let after: Vec<String> = bindings_for_section("footer")
        .map(|b| store.document().text(b.selector, b.index).unwrap().to_string())
        .collect();
    assert_eq!(after, before);
    assert_eq!(store.document().text(HOME, 0), Some("Accueil"));
}

#[test]
fn four_slots_two_items() {
    let selector = ".service-card:nth-child(1) .service-card__features li";
    let source = MemorySource::new().with(
        "fr",
        r#"{"services": {"real_estate": {"features": ["Vente", "Location"]}}}"#,
    );
    let mut doc = MemoryDocument::new(Viewport::new(1440.0));
    for text in ["s0", "s1", "s2", "s3"] {
        doc.insert(selector, Node::text(text));
    }
    let mut store = LocaleStore::new(I18nConfig::default(), doc, MemoryPreferences::new());
    store.initialize(&source);

    let texts: Vec<&str> = (0..4).map(|i| store.document().text(selector, i).unwrap()).collect();
    assert_eq!(texts, vec!["Vente", "Location", "s2", "s3"]);
}

#[test]
fn hidden_region_is_skipped_without_error() {
    let mut doc = page(1440.0);
    doc.remove(".hero__description");
    let mut store = LocaleStore::new(I18nConfig::default(), doc, MemoryPreferences::new());

    let report = store.initialize(&site_source());
    assert_eq!(report.skipped_missing_node, 1);
    assert_eq!(report.skipped_missing_key, 0);
    assert!(store.set_locale("en"));
    assert_eq!(store.document().count(".hero__description"), 0);
}

#[test]
fn offline_site_keeps_its_markup() {
    let mut store = LocaleStore::new(
        I18nConfig::default(),
        MemoryDocument::new(Viewport::new(1440.0)).with(HOME, Node::text("Accueil")),
        MemoryPreferences::new(),
    );
    let report = store.initialize(&Offline);
    assert_eq!(report.written, 0);
    assert_eq!(store.document().text(HOME, 0), Some("Accueil"));
    assert_eq!(store.translate("navigation.home"), "navigation.home");

    assert!(store.set_locale("en"));
    assert_eq!(store.document().text(HOME, 0), Some("Accueil"));
    assert_eq!(store.translate_in("hero.title", "en"), "hero.title");
}

#[test]
fn french_narrow_viewport_uses_short_labels() {
    let mut store = LocaleStore::new(I18nConfig::default(), page(1150.0), MemoryPreferences::new());
    store.initialize(&site_source());
    assert_eq!(store.document().text(ABOUT, 0), Some("Propos"));

    // English at the same width is not compact enough for short labels.
    store.set_locale("en");
    assert_eq!(store.document().text(ABOUT, 0), Some("About us"));

    // Below the compact threshold every locale goes short; refresh re-reads the viewport.
    store.document_mut().set_viewport(Viewport::new(900.0));
    store.refresh();
    assert_eq!(store.document().text(ABOUT, 0), Some("About"));

    // Wide but overflowing menu.
    store
        .document_mut()
        .set_viewport(Viewport::new(1600.0).with_nav(1600.0, 1300.0));
    store.refresh();
    assert_eq!(store.document().text(ABOUT, 0), Some("About"));
}

#[test]
fn listeners_fire_once_per_switch() {
    let mut store = LocaleStore::new(I18nConfig::default(), page(1440.0), MemoryPreferences::new());
    store.initialize(&site_source());

    // Listeners cannot borrow the store; capture what they need up front, as
    // a decorative text-reveal effect would.
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = seen.clone();
    store.subscribe(move |e: &LanguageChanged| sink.borrow_mut().push(e.language.to_string()));

    store.set_locale("en");
    store.set_locale("en");
    store.set_locale("fr");
    assert_eq!(*seen.borrow(), vec!["en".to_string(), "fr".to_string()]);
}

#[test]
fn dir_source_over_shipped_catalogs() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resource/lang");
    let mut store = LocaleStore::new(I18nConfig::default(), page(1440.0), MemoryPreferences::new());
    store.initialize(&DirSource::new(root));
    assert!(store.has_catalog("fr"));
    assert!(store.has_catalog("en"));
    assert_eq!(store.translate("messages.form_sending"), "Envoi en cours...");
    assert_eq!(store.translate_in("messages.form_sending", "en"), "Sending...");
}

#[test]
fn list_bindings_cover_feature_lists_only() {
    for binding in BINDINGS.iter().filter(|b| b.update == Update::List) {
        assert!(binding.key.ends_with(".features"), "{}", binding.key);
    }
}
