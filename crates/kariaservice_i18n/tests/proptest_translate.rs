//! Property-based invariants for key resolution and projection.
//!
//! 1. `translate` returns either a catalog string or the key itself
//! 2. A locale without a catalog resolves every key to itself
//! 3. Switching to the active locale never writes preferences
//! 4. List projection writes exactly the overlapping prefix

use kariaservice_i18n::{
    Catalog, CatalogFormat, I18nConfig, LocaleStore, MemoryDocument, MemoryPreferences,
    MemorySource, Node, Projector, RegionBinding, ShortLabelPolicy, Update, Viewport,
};
use proptest::prelude::*;

const FR: &str = include_str!("../../../resource/lang/fr.json");

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // plausible site keys
        prop::collection::vec(
            prop_oneof![
                Just("navigation".to_string()),
                Just("hero".to_string()),
                Just("services".to_string()),
                Just("real_estate".to_string()),
                Just("features".to_string()),
                Just("title".to_string()),
                Just("home".to_string()),
                Just("0".to_string()),
                Just("7".to_string()),
            ],
            1..5
        )
        .prop_map(|segments| segments.join(".")),
        // anything at all
        ".*",
    ]
}

fn loaded_store() -> LocaleStore<MemoryDocument, MemoryPreferences> {
    let mut store = LocaleStore::new(
        I18nConfig::default(),
        MemoryDocument::default(),
        MemoryPreferences::new(),
    );
    store.initialize(&MemorySource::new().with("fr", FR));
    store
}

proptest! {
    #[test]
    fn translate_is_resolved_or_key(key in key_strategy()) {
        let store = loaded_store();
        let catalog = Catalog::parse(FR, CatalogFormat::Json).unwrap();
        let out = store.translate(&key);
        match catalog.get_str(&key) {
            Some(s) => prop_assert_eq!(out, s),
            None => prop_assert_eq!(out, key.as_str()),
        }
    }
}

proptest! {
    #[test]
    fn missing_catalog_is_identity(key in key_strategy()) {
        let store = loaded_store();
        prop_assert_eq!(store.translate_in(&key, "en"), key.as_str());
        prop_assert_eq!(store.translate_in(&key, "xx"), key.as_str());
    }
}

proptest! {
    #[test]
    fn same_locale_never_persists(code in prop_oneof![Just("fr"), Just("FR"), Just(" fr ")]) {
        let mut store = loaded_store();
        prop_assert!(!store.set_locale(code));
        prop_assert_eq!(store.preferences().writes(), 0);
    }
}

proptest! {
    #[test]
    fn list_projection_writes_overlap(slots in 0usize..8, items in 0usize..8) {
        let bindings = [RegionBinding {
            key: "hero.items",
            selector: "li",
            index: 0,
            update: Update::List,
        }];
        let list: Vec<String> = (0..items).map(|i| format!("item{i}")).collect();
        let src = serde_json::json!({ "hero": { "items": list } });
        let catalog = Catalog::from_value(src).unwrap();

        let mut doc = MemoryDocument::new(Viewport::new(1440.0));
        for i in 0..slots {
            doc.insert("li", Node::text(format!("old{i}")));
        }
        let report = Projector::new(&bindings, ShortLabelPolicy::default())
            .project(&catalog, true, &mut doc);

        let overlap = slots.min(items);
        prop_assert_eq!(report.written, overlap);
        for i in 0..slots {
            let expected = if i < overlap { format!("item{i}") } else { format!("old{i}") };
            prop_assert_eq!(doc.text("li", i), Some(expected.as_str()));
        }
    }
}
