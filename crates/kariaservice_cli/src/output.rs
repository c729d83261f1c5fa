//! Text and JSON rendering of projected regions

use std::fmt::Write as _;

use kariaservice_i18n::{Document, LocaleStore, MemoryDocument, PreferenceStore, Update, BINDINGS};
use serde::Serialize;

/// One projected node, as printed by `kariaservice project`.
#[derive(Debug, Serialize, PartialEq)]
pub struct RegionRow<'a> {
    pub key: String,
    pub selector: &'static str,
    pub index: usize,
    /// `None` when the node is not in the page
    pub content: Option<&'a str>,
}

/// Rows for every bound node, optionally limited to one section.
///
/// List bindings expand to one row per item; markup and attribute bindings
/// show the markup or attribute value rather than plain text.
pub fn region_rows<'a>(doc: &'a MemoryDocument, section: Option<&str>) -> Vec<RegionRow<'a>> {
    let mut rows = Vec::new();
    for binding in BINDINGS {
        if section.is_some_and(|s| s != binding.section()) {
            continue;
        }
        if binding.update == Update::List {
            for index in 0..doc.count(binding.selector) {
                rows.push(RegionRow {
                    key: format!("{}.{}", binding.key, index),
                    selector: binding.selector,
                    index,
                    content: doc.text(binding.selector, index),
                });
            }
            continue;
        }

        let node = doc.node(binding.selector, binding.index);
        let content = match binding.update {
            Update::Markup | Update::IconMarkup(_) => {
                node.map(|n| n.markup.as_deref().unwrap_or(n.text.as_str()))
            }
            Update::Attribute(name) => {
                node.and_then(|n| n.attributes.get(name).map(String::as_str))
            }
            _ => node.map(|n| n.text.as_str()),
        };
        rows.push(RegionRow {
            key: binding.key.to_string(),
            selector: binding.selector,
            index: binding.index,
            content,
        });
    }
    rows
}

pub fn format_rows(rows: &[RegionRow<'_>]) -> String {
    let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            row.key,
            row.content.unwrap_or("<not in page>"),
            width = width
        );
    }
    out
}

/// Supported locales with the active one marked and catalog availability.
pub fn format_locales<D: Document, P: PreferenceStore>(store: &LocaleStore<D, P>) -> String {
    let mut out = String::new();
    for info in &store.config().locales {
        let marker = if &info.code == store.locale() { "*" } else { " " };
        let status = if store.has_catalog(info.code.as_str()) {
            "loaded"
        } else {
            "missing"
        };
        let _ = writeln!(
            out,
            "{} {} {:<6} {:<12} {}",
            marker,
            info.flag(),
            info.code,
            info.name,
            status
        );
    }
    out
}
