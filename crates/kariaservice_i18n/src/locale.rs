use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize locale identifiers to a canonical form for lookup.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (`en_GB` -> `en-gb`).
/// - Lowercases ASCII, so stored preferences like `FR` still match.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-").to_ascii_lowercase()
}

/// A normalized locale code (`fr`, `en`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(normalize_locale(code.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Locale> for String {
    fn from(l: Locale) -> Self {
        l.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display data for one supported locale, used by the language selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInfo {
    pub code: Locale,
    pub name: String,
    #[serde(default)]
    pub flag: Option<String>,
}

impl LocaleInfo {
    pub fn new(code: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            code: Locale::new(code),
            name: name.into(),
            flag: None,
        }
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Flag emoji for the selector; explicit config wins, then the built-in table.
    pub fn flag(&self) -> &str {
        if let Some(flag) = self.flag.as_deref() {
            return flag;
        }
        match self.code.as_str() {
            "fr" => "🇫🇷",
            "en" => "🇬🇧",
            _ => "🌐",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_codes() {
        assert_eq!(normalize_locale(" FR "), "fr");
        assert_eq!(normalize_locale("en_GB"), "en-gb");
        assert_eq!(Locale::new("EN"), Locale::from("en"));
    }

    #[test]
    fn flags_fall_back_to_globe() {
        assert_eq!(LocaleInfo::new("fr", "Français").flag(), "🇫🇷");
        assert_eq!(LocaleInfo::new("de", "Deutsch").flag(), "🌐");
        assert_eq!(LocaleInfo::new("de", "Deutsch").with_flag("🇩🇪").flag(), "🇩🇪");
    }
}
