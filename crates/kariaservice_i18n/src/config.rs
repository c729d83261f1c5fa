//! Site localization configuration (`site.toml`)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::locale::{Locale, LocaleInfo};
use crate::I18nError;

/// Top-level localization configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale used when no preference is stored (or the stored one is unsupported)
    #[serde(default = "default_locale")]
    pub default_locale: Locale,
    /// Supported locales, in selector order
    #[serde(default = "default_locales")]
    pub locales: Vec<LocaleInfo>,
    /// Preference key the active locale is persisted under
    #[serde(default = "default_preference_key")]
    pub preference_key: String,
    /// Directory holding `{code}.json` catalogs
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    /// Short navigation label policy
    #[serde(default)]
    pub navigation: ShortLabelPolicy,
}

fn default_locale() -> Locale {
    Locale::new("fr")
}

fn default_locales() -> Vec<LocaleInfo> {
    vec![
        LocaleInfo::new("fr", "Français"),
        LocaleInfo::new("en", "English"),
    ]
}

fn default_preference_key() -> String {
    "kariaservice-lang".to_string()
}

fn default_catalog_dir() -> String {
    "lang".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
            preference_key: default_preference_key(),
            catalog_dir: default_catalog_dir(),
            navigation: ShortLabelPolicy::default(),
        }
    }
}

/// Viewport thresholds (in CSS pixels) for the short navigation labels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ShortLabelPolicy {
    /// At or below this width the default locale uses short labels
    #[serde(default = "default_locale_max_width")]
    pub default_locale_max_width: f32,
    /// At or below this width every locale uses short labels
    #[serde(default = "default_compact_max_width")]
    pub compact_max_width: f32,
    /// Width kept free for the logo and actions when checking menu overflow
    #[serde(default = "default_reserved_width")]
    pub reserved_width: f32,
}

fn default_locale_max_width() -> f32 {
    1200.0
}

fn default_compact_max_width() -> f32 {
    1024.0
}

fn default_reserved_width() -> f32 {
    350.0
}

impl Default for ShortLabelPolicy {
    fn default() -> Self {
        Self {
            default_locale_max_width: default_locale_max_width(),
            compact_max_width: default_compact_max_width(),
            reserved_width: default_reserved_width(),
        }
    }
}

impl I18nConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(src: &str) -> Result<Self, I18nError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let src = fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<(), I18nError> {
        if self.locales.is_empty() {
            return Err(I18nError::Config("no supported locales".to_string()));
        }
        let mut seen = HashSet::new();
        for info in &self.locales {
            if info.code.is_empty() {
                return Err(I18nError::Config("empty locale code".to_string()));
            }
            if !seen.insert(info.code.as_str()) {
                return Err(I18nError::Config(format!(
                    "locale `{}` listed twice",
                    info.code
                )));
            }
        }
        if !self.is_supported(self.default_locale.as_str()) {
            return Err(I18nError::Config(format!(
                "default locale `{}` is not in the supported set",
                self.default_locale
            )));
        }
        if self.preference_key.trim().is_empty() {
            return Err(I18nError::Config("empty preference key".to_string()));
        }
        Ok(())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        let code = Locale::new(code);
        self.locales.iter().any(|info| info.code == code)
    }

    pub fn supported(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter().map(|info| &info.code)
    }

    /// Pick the active locale from a stored preference, falling back to the default.
    pub fn resolve_locale(&self, stored: Option<&str>) -> Locale {
        match stored {
            Some(code) if self.is_supported(code) => Locale::new(code),
            _ => self.default_locale.clone(),
        }
    }
}
