//! Language selector chrome in the navigation bar

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::document::{Document, Write};
use crate::locale::{Locale, LocaleInfo};

/// Markup for the selector: a toggle showing the active code, then one option
/// per supported locale. Names and flags come from config and are escaped.
pub fn render_selector(locales: &[LocaleInfo], active: &Locale) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<button class="lang-toggle" id="lang-toggle"><i class="fas fa-globe"></i><span class="lang-current">{}</span><i class="fas fa-chevron-down"></i></button>"#,
        encode_text(&active.as_str().to_uppercase())
    );
    out.push_str(r#"<div class="lang-dropdown">"#);
    for info in locales {
        let class = if &info.code == active {
            "lang-option active"
        } else {
            "lang-option"
        };
        let _ = write!(
            out,
            r#"<button class="{class}" data-lang="{}"><span class="lang-flag">{}</span><span class="lang-name">{}</span></button>"#,
            encode_double_quoted_attribute(info.code.as_str()),
            encode_text(info.flag()),
            encode_text(&info.name)
        );
    }
    out.push_str("</div>");
    out
}

/// Reflect the active locale in the selector and the root element.
///
/// Re-renders `.lang-selector`, then touches `.lang-current`, the `active`
/// class of each `.lang-option[data-lang=..]`, and `html[lang]` for pages that
/// expose those nodes directly. Missing nodes are ignored.
pub fn sync_selector(doc: &mut dyn Document, locales: &[LocaleInfo], active: &Locale) {
    if doc.count(".lang-selector") > 0 {
        let markup = render_selector(locales, active);
        doc.write(".lang-selector", 0, Write::Markup(&markup));
    }
    let label = active.as_str().to_uppercase();
    doc.write(".lang-current", 0, Write::Text(&label));
    for info in locales {
        let selector = format!(r#".lang-option[data-lang="{}"]"#, info.code);
        doc.set_class(&selector, 0, "active", &info.code == active);
    }
    doc.write(
        "html",
        0,
        Write::Attribute {
            name: "lang",
            value: active.as_str(),
        },
    );
}
