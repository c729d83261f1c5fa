//! The page the engine writes into
//!
//! The engine never owns the page structure. It addresses existing nodes by
//! `(selector, index)`, where `index` counts matches of `selector` in document
//! order, and reports a missing node by returning `false` from a write.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::bindings::{RegionBinding, Update};

/// A single content update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Write<'a> {
    /// Replace all text (any leading icon is dropped)
    Text(&'a str),
    /// Replace the text but keep a leading icon element in place
    TextAfterIcon(&'a str),
    /// Replace inner markup
    Markup(&'a str),
    /// Set one attribute
    Attribute { name: &'a str, value: &'a str },
}

/// Measured navigation bar geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavMetrics {
    /// Rendered width of the whole navigation bar
    pub container_width: f32,
    /// Scroll width of the menu (width its content would need)
    pub content_width: f32,
}

/// Read-only layout facts, sampled at projection time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    /// `None` when the navigation bar is not rendered
    pub nav: Option<NavMetrics>,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self { width, nav: None }
    }

    pub fn with_nav(mut self, container_width: f32, content_width: f32) -> Self {
        self.nav = Some(NavMetrics {
            container_width,
            content_width,
        });
        self
    }
}

/// The pre-existing page structure.
pub trait Document {
    /// Number of nodes currently matching `selector`.
    fn count(&self, selector: &str) -> usize;

    /// Apply `write` to the `index`-th match. Returns `false` if there is no such node.
    fn write(&mut self, selector: &str, index: usize, write: Write<'_>) -> bool;

    /// Add or remove a class on the `index`-th match.
    fn set_class(&mut self, selector: &str, index: usize, class: &str, on: bool) -> bool;

    fn viewport(&self) -> Viewport;
}

/// One element of a [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    /// Set by markup writes; `text` then holds the markup with tags stripped
    pub markup: Option<String>,
    /// Leading icon element, e.g. `<i class="fas fa-check"></i>`
    pub icon: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }
}

/// An in-memory page keyed by selector.
///
/// Selectors are matched literally; this is the page model used by the CLI
/// and by tests, not a CSS engine.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    nodes: HashMap<String, Vec<Node>>,
    viewport: Viewport,
}

impl MemoryDocument {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: HashMap::new(),
            viewport,
        }
    }

    /// A page holding every node the given binding table targets, with empty text.
    ///
    /// List bindings get `list_len` items each.
    pub fn skeleton(bindings: &[RegionBinding], list_len: usize, viewport: Viewport) -> Self {
        let mut doc = Self::new(viewport);
        for binding in bindings {
            let needed = match binding.update {
                Update::List => list_len,
                _ => binding.index + 1,
            };
            let nodes = doc.nodes.entry(binding.selector.to_string()).or_default();
            if nodes.len() < needed {
                nodes.resize_with(needed, Node::default);
            }
        }
        doc
    }

    pub fn insert(&mut self, selector: impl Into<String>, node: Node) {
        self.nodes.entry(selector.into()).or_default().push(node);
    }

    pub fn with(mut self, selector: impl Into<String>, node: Node) -> Self {
        self.insert(selector, node);
        self
    }

    /// Drop every node matching `selector` (a responsive layout hiding a region).
    pub fn remove(&mut self, selector: &str) -> Option<Vec<Node>> {
        self.nodes.remove(selector)
    }

    pub fn node(&self, selector: &str, index: usize) -> Option<&Node> {
        self.nodes.get(selector)?.get(index)
    }

    /// Text of the `index`-th match, if present.
    pub fn text(&self, selector: &str, index: usize) -> Option<&str> {
        self.node(selector, index).map(|n| n.text.as_str())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn node_mut(&mut self, selector: &str, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(selector)?.get_mut(index)
    }
}

impl Document for MemoryDocument {
    fn count(&self, selector: &str) -> usize {
        self.nodes.get(selector).map_or(0, Vec::len)
    }

    fn write(&mut self, selector: &str, index: usize, write: Write<'_>) -> bool {
        let Some(node) = self.node_mut(selector, index) else {
            return false;
        };
        match write {
            Write::Text(text) => {
                node.text = text.to_string();
                node.markup = None;
                node.icon = None;
            }
            Write::TextAfterIcon(text) => {
                node.text = text.to_string();
                node.markup = None;
            }
            Write::Markup(markup) => {
                node.text = strip_tags(markup);
                node.markup = Some(markup.to_string());
                node.icon = None;
            }
            Write::Attribute { name, value } => {
                node.attributes.insert(name.to_string(), value.to_string());
            }
        }
        true
    }

    fn set_class(&mut self, selector: &str, index: usize, class: &str, on: bool) -> bool {
        let Some(node) = self.node_mut(selector, index) else {
            return false;
        };
        if on {
            node.classes.insert(class.to_string());
        } else {
            node.classes.remove(class);
        }
        true
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Text content of a markup fragment.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
