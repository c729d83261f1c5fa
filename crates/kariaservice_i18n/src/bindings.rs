//! The fixed region binding table
//!
//! Each entry ties one catalog key to one place in the page and says how to
//! write it. The table does not depend on the locale.

/// How a bound value is written into its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    /// Replace the node's text
    Text,
    /// Replace the text, wrapped in double quotes
    QuotedText,
    /// Replace inner markup (the value may contain tags)
    Markup,
    /// Replace inner markup with the given icon class followed by the value
    IconMarkup(&'static str),
    /// Set an attribute to the value
    Attribute(&'static str),
    /// The key is a list; item `i` goes to the `i`-th match, keeping its icon
    List,
    /// Navigation link with an optional short variant key
    Navigation { short: Option<&'static str> },
}

/// One bound content slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionBinding {
    /// Dotted catalog key
    pub key: &'static str,
    pub selector: &'static str,
    /// Which match of `selector` (ignored by [`Update::List`], which starts at 0)
    pub index: usize,
    pub update: Update,
}

impl RegionBinding {
    /// Top-level catalog section this slot belongs to.
    pub fn section(&self) -> &'static str {
        match self.key.split_once('.') {
            Some((section, _)) => section,
            None => self.key,
        }
    }
}

const fn bind(key: &'static str, selector: &'static str, index: usize, update: Update) -> RegionBinding {
    RegionBinding {
        key,
        selector,
        index,
        update,
    }
}

const fn text(key: &'static str, selector: &'static str) -> RegionBinding {
    bind(key, selector, 0, Update::Text)
}

const fn text_at(key: &'static str, selector: &'static str, index: usize) -> RegionBinding {
    bind(key, selector, index, Update::Text)
}

const fn list(key: &'static str, selector: &'static str) -> RegionBinding {
    bind(key, selector, 0, Update::List)
}

const fn nav(key: &'static str, selector: &'static str) -> RegionBinding {
    bind(key, selector, 0, Update::Navigation { short: None })
}

const fn nav_short(key: &'static str, short: &'static str, selector: &'static str) -> RegionBinding {
    bind(key, selector, 0, Update::Navigation { short: Some(short) })
}

/// Top-level sections, in projection order.
pub const SECTIONS: &[&str] = &[
    "meta",
    "navigation",
    "hero",
    "services",
    "excellence",
    "about",
    "projects",
    "testimonials",
    "contact",
    "quote",
    "footer",
];

/// Every bound slot of the site, in projection order.
pub const BINDINGS: &[RegionBinding] = &[
    // Page metadata
    text("meta.title", "title"),
    bind(
        "meta.description",
        r#"meta[name="description"]"#,
        0,
        Update::Attribute("content"),
    ),
    // Navigation
    nav("navigation.home", r##"a[href="#accueil"]"##),
    nav_short("navigation.about", "navigation.about_short", r##"a[href="#apropos"]"##),
    nav("navigation.services", r##"a[href="#services"]"##),
    nav_short(
        "navigation.excellence",
        "navigation.excellence_short",
        r##"a[href="#excellence"]"##,
    ),
    nav("navigation.real_estate", r##"a[href="#immobilier"]"##),
    nav("navigation.logistics", r##"a[href="#logistique"]"##),
    nav("navigation.mining", r##"a[href="#mine-petrole"]"##),
    nav("navigation.projects", r##"a[href="#realisations"]"##),
    nav_short(
        "navigation.testimonials",
        "navigation.testimonials_short",
        r##"a[href="#testimonials"]"##,
    ),
    nav("navigation.contact", r##"a[href="#contact"]"##),
    nav_short("navigation.quote", "navigation.quote_short", r##"a[href="#devis"]"##),
    // Hero
    bind("hero.title", ".hero__title", 0, Update::Markup),
    text("hero.description", ".hero__description"),
    text("hero.btn_services", ".hero__buttons .btn--primary"),
    text("hero.btn_contact", ".hero__buttons .btn--secondary"),
    text("hero.slide1_title", ".slide__content:nth-child(1) h2"),
    text("hero.slide1_desc", ".slide__content:nth-child(1) p"),
    text("hero.slide2_title", ".slide__content:nth-child(2) h2"),
    text("hero.slide2_desc", ".slide__content:nth-child(2) p"),
    text("hero.slide3_title", ".slide__content:nth-child(3) h2"),
    text("hero.slide3_desc", ".slide__content:nth-child(3) p"),
    // Services
    text("services.subtitle", "#services .section__subtitle"),
    text("services.title", "#services .section__title"),
    text("services.description", "#services .section__description"),
    text("services.real_estate.title", ".service-card:nth-child(1) .service-card__title"),
    text(
        "services.real_estate.description",
        ".service-card:nth-child(1) .service-card__description",
    ),
    text("services.real_estate.btn", ".service-card:nth-child(1) .btn"),
    list(
        "services.real_estate.features",
        ".service-card:nth-child(1) .service-card__features li",
    ),
    text("services.logistics.title", ".service-card:nth-child(2) .service-card__title"),
    text(
        "services.logistics.description",
        ".service-card:nth-child(2) .service-card__description",
    ),
    text("services.logistics.btn", ".service-card:nth-child(2) .btn"),
    list(
        "services.logistics.features",
        ".service-card:nth-child(2) .service-card__features li",
    ),
    text("services.mining.title", ".service-card:nth-child(3) .service-card__title"),
    text(
        "services.mining.description",
        ".service-card:nth-child(3) .service-card__description",
    ),
    text("services.mining.btn", ".service-card:nth-child(3) .btn"),
    list(
        "services.mining.features",
        ".service-card:nth-child(3) .service-card__features li",
    ),
    // Excellence: tabs
    text("excellence.subtitle", "#excellence .section__subtitle"),
    text("excellence.title", "#excellence .section__title"),
    text("excellence.description", "#excellence .section__description"),
    text("excellence.tabs.real_estate.title", ".tab-item:nth-child(1) h3"),
    text("excellence.tabs.real_estate.subtitle", ".tab-item:nth-child(1) p"),
    text("excellence.tabs.logistics.title", ".tab-item:nth-child(2) h3"),
    text("excellence.tabs.logistics.subtitle", ".tab-item:nth-child(2) p"),
    text("excellence.tabs.energy.title", ".tab-item:nth-child(3) h3"),
    text("excellence.tabs.energy.subtitle", ".tab-item:nth-child(3) p"),
    text("excellence.tabs.consulting.title", ".tab-item:nth-child(4) h3"),
    text("excellence.tabs.consulting.subtitle", ".tab-item:nth-child(4) p"),
    // Excellence: gallery panels
    text(
        "excellence.tabs.real_estate.title",
        ".gallery-item:nth-child(1) .gallery-content h4",
    ),
    text(
        "excellence.tabs.real_estate.description",
        ".gallery-item:nth-child(1) .gallery-content p",
    ),
    list(
        "excellence.tabs.real_estate.features",
        ".gallery-item:nth-child(1) .gallery-features li",
    ),
    text(
        "excellence.tabs.logistics.title",
        ".gallery-item:nth-child(2) .gallery-content h4",
    ),
    text(
        "excellence.tabs.logistics.description",
        ".gallery-item:nth-child(2) .gallery-content p",
    ),
    list(
        "excellence.tabs.logistics.features",
        ".gallery-item:nth-child(2) .gallery-features li",
    ),
    text(
        "excellence.tabs.energy.title",
        ".gallery-item:nth-child(3) .gallery-content h4",
    ),
    text(
        "excellence.tabs.energy.description",
        ".gallery-item:nth-child(3) .gallery-content p",
    ),
    list(
        "excellence.tabs.energy.features",
        ".gallery-item:nth-child(3) .gallery-features li",
    ),
    text(
        "excellence.tabs.consulting.title",
        ".gallery-item:nth-child(4) .gallery-content h4",
    ),
    text(
        "excellence.tabs.consulting.description",
        ".gallery-item:nth-child(4) .gallery-content p",
    ),
    list(
        "excellence.tabs.consulting.features",
        ".gallery-item:nth-child(4) .gallery-features li",
    ),
    // About
    text("about.subtitle", "#apropos .section__subtitle"),
    text("about.title", "#apropos .section__title"),
    text("about.description", ".about__description"),
    text_at("about.stats.projects", ".stat__label", 0),
    text_at("about.stats.countries", ".stat__label", 1),
    text_at("about.stats.satisfaction", ".stat__label", 2),
    text("about.btn", "#apropos .btn"),
    // Projects
    text("projects.subtitle", "#realisations .section__subtitle"),
    text("projects.title", "#realisations .section__title"),
    text("projects.description", "#realisations .section__description"),
    text("projects.project1.title", ".project-card:nth-child(1) .project-card__title"),
    text(
        "projects.project1.description",
        ".project-card:nth-child(1) .project-card__description",
    ),
    text(
        "projects.project1.category",
        ".project-card:nth-child(1) .project-card__category",
    ),
    text("projects.project2.title", ".project-card:nth-child(2) .project-card__title"),
    text(
        "projects.project2.description",
        ".project-card:nth-child(2) .project-card__description",
    ),
    text(
        "projects.project2.category",
        ".project-card:nth-child(2) .project-card__category",
    ),
    text("projects.project3.title", ".project-card:nth-child(3) .project-card__title"),
    text(
        "projects.project3.description",
        ".project-card:nth-child(3) .project-card__description",
    ),
    text(
        "projects.project3.category",
        ".project-card:nth-child(3) .project-card__category",
    ),
    // Testimonials
    text("testimonials.subtitle", "#testimonials .section__subtitle"),
    text("testimonials.title", "#testimonials .section__title"),
    text("testimonials.description", "#testimonials .section__description"),
    bind(
        "testimonials.testimonial1.quote",
        ".testimonial-card:nth-child(1) .testimonial__quote p",
        0,
        Update::QuotedText,
    ),
    text("testimonials.testimonial1.name", ".testimonial-card:nth-child(1) .author__name"),
    text(
        "testimonials.testimonial1.position",
        ".testimonial-card:nth-child(1) .author__position",
    ),
    bind(
        "testimonials.testimonial2.quote",
        ".testimonial-card:nth-child(2) .testimonial__quote p",
        0,
        Update::QuotedText,
    ),
    text("testimonials.testimonial2.name", ".testimonial-card:nth-child(2) .author__name"),
    text(
        "testimonials.testimonial2.position",
        ".testimonial-card:nth-child(2) .author__position",
    ),
    bind(
        "testimonials.testimonial3.quote",
        ".testimonial-card:nth-child(3) .testimonial__quote p",
        0,
        Update::QuotedText,
    ),
    text("testimonials.testimonial3.name", ".testimonial-card:nth-child(3) .author__name"),
    text(
        "testimonials.testimonial3.position",
        ".testimonial-card:nth-child(3) .author__position",
    ),
    bind(
        "testimonials.testimonial4.quote",
        ".testimonial-card:nth-child(4) .testimonial__quote p",
        0,
        Update::QuotedText,
    ),
    text("testimonials.testimonial4.name", ".testimonial-card:nth-child(4) .author__name"),
    text(
        "testimonials.testimonial4.position",
        ".testimonial-card:nth-child(4) .author__position",
    ),
    // Contact
    text("contact.subtitle", "#contact .section__subtitle"),
    text("contact.title", "#contact .section__title"),
    text("contact.description", ".contact__description"),
    text_at("contact.address.title", ".contact__item-content h4", 0),
    text_at("contact.phone.title", ".contact__item-content h4", 1),
    text_at("contact.email.title", ".contact__item-content h4", 2),
    text_at("contact.form.name", ".contact__form label", 0),
    text_at("contact.form.email", ".contact__form label", 1),
    text_at("contact.form.service", ".contact__form label", 2),
    text_at("contact.form.message", ".contact__form label", 3),
    text_at("contact.form.service_options.placeholder", "#service option", 0),
    text_at("contact.form.service_options.real_estate", "#service option", 1),
    text_at("contact.form.service_options.logistics", "#service option", 2),
    text_at("contact.form.service_options.mining", "#service option", 3),
    text_at("contact.form.service_options.other", "#service option", 4),
    text("contact.form.submit", r#".contact__form button[type="submit"] span"#),
    // Quote
    text("quote.title", ".quote__title"),
    text("quote.description", ".quote__description"),
    text("quote.btn", "#devis .btn"),
    bind("quote.phone", ".quote__phone", 0, Update::IconMarkup("fas fa-phone")),
    // Footer
    text("footer.description", ".footer__description"),
    text_at("footer.services_title", ".footer__title", 0),
    text_at("footer.company_title", ".footer__title", 1),
    text_at("footer.contact_title", ".footer__title", 2),
    text("footer.copyright", ".footer__copyright"),
    text_at("footer.legal", ".footer__legal a", 0),
    text_at("footer.privacy", ".footer__legal a", 1),
];

/// Bindings belonging to one top-level section.
pub fn bindings_for_section(section: &str) -> impl Iterator<Item = &'static RegionBinding> + '_ {
    BINDINGS.iter().filter(move |b| b.section() == section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_binding_is_in_a_known_section() {
        for binding in BINDINGS {
            assert!(
                SECTIONS.contains(&binding.section()),
                "binding {} has unknown section",
                binding.key
            );
        }
    }

    #[test]
    fn targets_are_unique() {
        let mut seen = HashSet::new();
        for binding in BINDINGS {
            assert!(
                seen.insert((binding.selector, binding.index)),
                "{} #{} bound twice",
                binding.selector,
                binding.index
            );
        }
    }

    #[test]
    fn section_shapes() {
        let count = |s: &str| bindings_for_section(s).count();
        assert_eq!(count("navigation"), 11);
        assert_eq!(count("hero"), 10);
        // header + 3 cards x (title, description, button, features)
        assert_eq!(count("services"), 3 + 3 * 4);
        // header + 4 tabs x (title, subtitle) + 4 panels x (title, description, features)
        assert_eq!(count("excellence"), 3 + 4 * 2 + 4 * 3);
        assert_eq!(count("about"), 7);
        assert_eq!(count("projects"), 3 + 3 * 3);
        assert_eq!(count("testimonials"), 3 + 4 * 3);
        // header, 3 item titles, 4 labels, 5 options, submit
        assert_eq!(count("contact"), 3 + 3 + 4 + 5 + 1);
        assert_eq!(count("quote"), 4);
        assert_eq!(count("footer"), 7);
    }

    #[test]
    fn short_variants_live_in_navigation() {
        let shorts: Vec<&str> = BINDINGS
            .iter()
            .filter_map(|b| match b.update {
                Update::Navigation { short } => short,
                _ => None,
            })
            .collect();
        assert_eq!(
            shorts,
            vec![
                "navigation.about_short",
                "navigation.excellence_short",
                "navigation.testimonials_short",
                "navigation.quote_short",
            ]
        );
    }
}
