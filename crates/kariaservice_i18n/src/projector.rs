//! Region projection: writing a catalog into the bound page regions

use tracing::{debug, trace};

use crate::bindings::{RegionBinding, Update, BINDINGS};
use crate::catalog::Catalog;
use crate::config::ShortLabelPolicy;
use crate::document::{Document, Viewport, Write};

/// Whether navigation links should use their short labels.
///
/// Short labels win when the default locale is active on a narrow viewport,
/// on any compact viewport, or when the measured menu would not fit beside
/// the logo and actions.
pub fn prefers_short_labels(
    policy: &ShortLabelPolicy,
    is_default_locale: bool,
    viewport: &Viewport,
) -> bool {
    if is_default_locale && viewport.width <= policy.default_locale_max_width {
        return true;
    }
    if viewport.width <= policy.compact_max_width {
        return true;
    }
    match viewport.nav {
        Some(nav) => nav.content_width > nav.container_width - policy.reserved_width,
        None => false,
    }
}

/// Outcome counters for one projection pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectionReport {
    /// Nodes written
    pub written: usize,
    /// Bindings (or list items) whose node is not in the page
    pub skipped_missing_node: usize,
    /// Bindings whose catalog key is absent or of the wrong shape
    pub skipped_missing_key: usize,
}

/// Writes catalogs onto a binding table.
#[derive(Clone, Copy, Debug)]
pub struct Projector<'a> {
    bindings: &'a [RegionBinding],
    policy: ShortLabelPolicy,
}

impl Default for Projector<'static> {
    fn default() -> Self {
        Self::new(BINDINGS, ShortLabelPolicy::default())
    }
}

impl<'a> Projector<'a> {
    pub fn new(bindings: &'a [RegionBinding], policy: ShortLabelPolicy) -> Self {
        Self { bindings, policy }
    }

    /// Run every binding once against `doc`.
    ///
    /// Missing nodes and missing keys are skipped; existing content is never
    /// blanked. The short-label policy is evaluated once per call from the
    /// document's current viewport.
    pub fn project(
        &self,
        catalog: &Catalog,
        is_default_locale: bool,
        doc: &mut dyn Document,
    ) -> ProjectionReport {
        let short = prefers_short_labels(&self.policy, is_default_locale, &doc.viewport());
        let mut report = ProjectionReport::default();

        for binding in self.bindings {
            match binding.update {
                Update::List => project_list(binding, catalog, doc, &mut report),
                _ => project_one(binding, catalog, short, doc, &mut report),
            }
        }

        debug!(
            "projection: {} written, {} missing nodes, {} missing keys",
            report.written, report.skipped_missing_node, report.skipped_missing_key
        );
        report
    }
}

fn project_one(
    binding: &RegionBinding,
    catalog: &Catalog,
    short: bool,
    doc: &mut dyn Document,
    report: &mut ProjectionReport,
) {
    let key = match binding.update {
        Update::Navigation { short: Some(short_key) }
            if short && catalog.get_str(short_key).is_some() =>
        {
            short_key
        }
        _ => binding.key,
    };
    let Some(value) = catalog.get_str(key) else {
        trace!("projection: no `{}`, leaving {} as is", key, binding.selector);
        report.skipped_missing_key += 1;
        return;
    };

    let quoted;
    let markup;
    let write = match binding.update {
        Update::Text | Update::Navigation { .. } | Update::List => Write::Text(value),
        Update::QuotedText => {
            quoted = format!("\"{value}\"");
            Write::Text(&quoted)
        }
        Update::Markup => Write::Markup(value),
        Update::IconMarkup(icon) => {
            markup = format!(r#"<i class="{icon}"></i> {value}"#);
            Write::Markup(&markup)
        }
        Update::Attribute(name) => Write::Attribute { name, value },
    };

    if doc.write(binding.selector, binding.index, write) {
        report.written += 1;
    } else {
        trace!("projection: {} #{} not in page", binding.selector, binding.index);
        report.skipped_missing_node += 1;
    }
}

fn project_list(
    binding: &RegionBinding,
    catalog: &Catalog,
    doc: &mut dyn Document,
    report: &mut ProjectionReport,
) {
    let Some(items) = catalog.get_list(binding.key) else {
        trace!("projection: no list `{}`", binding.key);
        report.skipped_missing_key += 1;
        return;
    };
    let slots = doc.count(binding.selector);
    if slots == 0 {
        report.skipped_missing_node += 1;
        return;
    }
    // Only the overlapping prefix is written; extra slots keep their text and
    // extra items are dropped.
    for (index, item) in items.iter().take(slots).enumerate() {
        if doc.write(binding.selector, index, Write::TextAfterIcon(item)) {
            report.written += 1;
        } else {
            report.skipped_missing_node += 1;
        }
    }
}
