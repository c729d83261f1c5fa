use serde_json::Value;
use thiserror::Error;

/// On-disk encoding of a catalog document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogFormat {
    /// The site's `lang/{code}.json` documents
    #[default]
    Json,
    /// Nested YAML mappings
    Yaml,
}

impl CatalogFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("json catalog error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml catalog error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog root must be a mapping")]
    NotAMapping,
}

/// The translation tree for one locale.
///
/// Leaves are strings; inner nodes are mappings, or lists for ordered content
/// such as feature bullets. Only the root shape is checked: one odd value never
/// costs the locale its other keys. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    tree: Value,
}

impl Catalog {
    pub fn parse(src: &str, format: CatalogFormat) -> Result<Self, CatalogParseError> {
        let tree: Value = match format {
            CatalogFormat::Json => serde_json::from_str(src)?,
            CatalogFormat::Yaml => serde_yaml::from_str(src)?,
        };
        Self::from_value(tree)
    }

    pub fn from_value(tree: Value) -> Result<Self, CatalogParseError> {
        if !tree.is_object() {
            return Err(CatalogParseError::NotAMapping);
        }
        Ok(Self { tree })
    }

    /// Walk a dotted key path. Numeric segments index into lists.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut node = &self.tree;
        for segment in key.split('.') {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Resolve a key to a non-empty string leaf.
    ///
    /// An empty string counts as missing, so callers fall back to the key
    /// instead of showing a blank.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        non_empty(self.lookup(key)?)
    }

    /// Resolve a key to an ordered list of strings.
    ///
    /// Non-string or empty items end the list; what precedes them is still returned.
    pub fn get_list(&self, key: &str) -> Option<Vec<&str>> {
        let items = self.lookup(key)?.as_array()?;
        Some(items.iter().map_while(non_empty).collect())
    }
}

fn non_empty(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
